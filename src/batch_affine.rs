extern crate ndarray;

use ndarray::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::batch_shape::*;
use crate::params::*;
use crate::sampler_error::*;

///Maps one standard-normal noise vector onto a Gaussian with the given
///Cholesky factor and mean: `L x + mean`.
pub fn affine_row(factor : ArrayView2<f64>, noise : ArrayView1<f64>, mean : ArrayView1<f64>) -> Array1<f64> {
    let mut result = factor.dot(&noise);
    result += &mean;
    result
}

///Applies the affine transform `L[i] noise[i] + means[i]` to every row `i`
///of a batch, returning an `N x M` array with rows in input order.
///
///Rows are addressed by explicit `(batch, feature)` indices, so neither
///`N == 1` nor `M == 1` collapses an axis of the result.
pub fn batch_affine(factors : ArrayView3<f64>, noise : ArrayView2<f64>, means : ArrayView2<f64>) -> Result<Array2<f64>> {
    let shape = BatchShape::from_means(&means)?;
    shape.check_covariances(&factors)?;
    shape.check_rows("noise", &noise)?;

    let rows = transform_rows(&shape, factors, noise, means);

    let mut result = Array::zeros((shape.n, shape.m));
    for (i, row) in rows.into_iter().enumerate() {
        result.row_mut(i).assign(&row);
    }
    Ok(result)
}

#[cfg(not(feature = "parallel"))]
fn transform_rows(shape : &BatchShape, factors : ArrayView3<f64>, noise : ArrayView2<f64>,
                  means : ArrayView2<f64>) -> Vec<Array1<f64>> {
    transform_rows_sequential(shape, factors, noise, means)
}

#[cfg(feature = "parallel")]
fn transform_rows(shape : &BatchShape, factors : ArrayView3<f64>, noise : ArrayView2<f64>,
                  means : ArrayView2<f64>) -> Vec<Array1<f64>> {
    if (shape.n < PARALLEL_BATCH_THRESHOLD) {
        return transform_rows_sequential(shape, factors, noise, means);
    }
    (0..shape.n).into_par_iter()
                .map(|i| affine_row(factors.index_axis(Axis(0), i), noise.row(i), means.row(i)))
                .collect()
}

fn transform_rows_sequential(shape : &BatchShape, factors : ArrayView3<f64>, noise : ArrayView2<f64>,
                             means : ArrayView2<f64>) -> Vec<Array1<f64>> {
    let mut result = Vec::with_capacity(shape.n);
    for i in 0..shape.n {
        result.push(affine_row(factors.index_axis(Axis(0), i), noise.row(i), means.row(i)));
    }
    result
}
