extern crate ndarray;

use ndarray::*;
use std::fmt;

use crate::sampler_error::*;

///The `(N, M)` dimensions of a batch of Gaussians: `N` independent
///distributions, each over `M`-dimensional vectors. The two are always
///kept apart, so a batch with `N == 1` or `M == 1` never loses an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BatchShape {
    ///Number of distributions in the batch
    pub n : usize,
    ///Dimension of each distribution
    pub m : usize
}

impl BatchShape {
    ///Infers the batch shape from an `N x M` array of means.
    ///An `M` of zero is rejected, but `N` may be zero.
    pub fn from_means(means : &ArrayView2<f64>) -> Result<BatchShape> {
        let n = means.shape()[0];
        let m = means.shape()[1];
        if (m == 0) {
            return Err(SamplerError::shape("means", String::from("(N, M) with M >= 1"),
                                           means.shape()));
        }
        Ok(BatchShape {
            n,
            m
        })
    }

    ///Checks that `covariances` is `N x M x M` for this batch shape.
    pub fn check_covariances(&self, covariances : &ArrayView3<f64>) -> Result<()> {
        if (covariances.shape() != [self.n, self.m, self.m]) {
            let expected = format!("({}, {}, {})", self.n, self.m, self.m);
            return Err(SamplerError::shape("covariances", expected, covariances.shape()));
        }
        Ok(())
    }

    ///Checks that `arr` is an `N x M` array, such as a batch of noise vectors.
    pub fn check_rows(&self, what : &'static str, arr : &ArrayView2<f64>) -> Result<()> {
        if (arr.shape() != [self.n, self.m]) {
            return Err(SamplerError::shape(what, self.to_string(), arr.shape()));
        }
        Ok(())
    }

    ///Infers and validates the shape of a whole `(means, covariances)` pair.
    pub fn of_parameters(means : &ArrayView2<f64>, covariances : &ArrayView3<f64>) -> Result<BatchShape> {
        let shape = BatchShape::from_means(means)?;
        shape.check_covariances(covariances)?;
        Ok(shape)
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    ///Total number of scalar standard-normal draws one sample of this batch takes.
    pub fn num_draws(&self) -> usize {
        self.n * self.m
    }
}

impl fmt::Display for BatchShape {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.n, self.m)
    }
}

///Views dynamically-shaped means and covariances as the rank-2 and rank-3
///arrays the sampler works on, failing with a shape error on the wrong rank.
pub fn as_batch_views<'a>(means : ArrayViewD<'a, f64>, covariances : ArrayViewD<'a, f64>)
                         -> Result<(ArrayView2<'a, f64>, ArrayView3<'a, f64>)> {
    let means_shape = means.shape().to_vec();
    let covariances_shape = covariances.shape().to_vec();

    let means = means.into_dimensionality::<Ix2>()
                     .map_err(|_| SamplerError::shape("means", String::from("a rank-2 array"), &means_shape))?;
    let covariances = covariances.into_dimensionality::<Ix3>()
                     .map_err(|_| SamplerError::shape("covariances", String::from("a rank-3 array"), &covariances_shape))?;
    Ok((means, covariances))
}
