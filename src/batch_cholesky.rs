extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::{Cholesky, UPLO};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::params::*;
use crate::sampler_error::*;

///Computes the lower-triangular Cholesky factor `L` of a single
///symmetric positive-definite matrix, so that `L L^T == covariance`.
///`index` is only used to say which batch element failed.
pub fn cholesky_factor(covariance : ArrayView2<f64>, index : usize) -> Result<Array2<f64>> {
    match covariance.cholesky(UPLO::Lower) {
        Ok(factor) => Ok(factor),
        Err(err) => {
            error!("Covariance matrix {} of the batch failed to factor: {}", index, err);
            Err(SamplerError::NotPositiveDefinite {
                index,
                reason : err.to_string()
            })
        }
    }
}

///Factors every `M x M` slice of an `N x M x M` batch of covariance matrices,
///each one independently. If any of them isn't positive-definite, the whole
///batch fails, naming the first offending index.
pub fn batch_cholesky(covariances : ArrayView3<f64>) -> Result<Array3<f64>> {
    let n = covariances.shape()[0];
    trace!("Factoring {} covariance matrices of shape {:?}", n, &covariances.shape()[1..]);

    let factors = factor_slices(covariances)?;

    let mut result = Array::zeros(covariances.raw_dim());
    for (i, factor) in factors.into_iter().enumerate() {
        result.index_axis_mut(Axis(0), i).assign(&factor);
    }
    Ok(result)
}

#[cfg(not(feature = "parallel"))]
fn factor_slices(covariances : ArrayView3<f64>) -> Result<Vec<Array2<f64>>> {
    factor_slices_sequential(covariances)
}

#[cfg(feature = "parallel")]
fn factor_slices(covariances : ArrayView3<f64>) -> Result<Vec<Array2<f64>>> {
    let n = covariances.shape()[0];
    if (n < PARALLEL_BATCH_THRESHOLD) {
        return factor_slices_sequential(covariances);
    }
    //Collecting into a Result stops at, and reports, the lowest failing index
    (0..n).into_par_iter()
          .map(|i| cholesky_factor(covariances.index_axis(Axis(0), i), i))
          .collect::<Vec<Result<Array2<f64>>>>()
          .into_iter()
          .collect()
}

fn factor_slices_sequential(covariances : ArrayView3<f64>) -> Result<Vec<Array2<f64>>> {
    let mut result = Vec::with_capacity(covariances.shape()[0]);
    for (i, covariance) in covariances.outer_iter().enumerate() {
        result.push(cholesky_factor(covariance, i)?);
    }
    Ok(result)
}
