extern crate ndarray;

use ndarray::*;
use serde::{Serialize, Deserialize};

use crate::batch_sampler::*;
use crate::batch_shape::*;
use crate::normal_source::*;
use crate::sampler_error::*;

///Owned parameters of a batch of `N` Gaussians over `M` dimensions:
///an `N x M` array of means and an `N x M x M` array of covariances.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaussianBatch {
    means : Array2<f64>,
    covariances : Array3<f64>
}

impl GaussianBatch {
    pub fn new(means : Array2<f64>, covariances : Array3<f64>) -> Result<GaussianBatch> {
        BatchShape::of_parameters(&means.view(), &covariances.view())?;
        Ok(GaussianBatch {
            means,
            covariances
        })
    }

    ///Gaussians which all have identity covariance.
    pub fn isotropic(means : Array2<f64>) -> Result<GaussianBatch> {
        let shape = BatchShape::from_means(&means.view())?;
        let mut covariances = Array::zeros((shape.n, shape.m, shape.m));
        for mut covariance in covariances.outer_iter_mut() {
            covariance.diag_mut().fill(1.0);
        }
        GaussianBatch::new(means, covariances)
    }

    ///Gaussians with diagonal covariances, taking per-coordinate
    ///variances from the `N x M` array `variances`.
    pub fn diagonal(means : Array2<f64>, variances : ArrayView2<f64>) -> Result<GaussianBatch> {
        let shape = BatchShape::from_means(&means.view())?;
        shape.check_rows("variances", &variances)?;
        let mut covariances = Array::zeros((shape.n, shape.m, shape.m));
        for (mut covariance, row) in covariances.outer_iter_mut().zip(variances.outer_iter()) {
            covariance.diag_mut().assign(&row);
        }
        GaussianBatch::new(means, covariances)
    }

    ///Checks the shapes again, since deserializing skips [`GaussianBatch::new`].
    pub fn shape(&self) -> Result<BatchShape> {
        BatchShape::of_parameters(&self.means.view(), &self.covariances.view())
    }
    pub fn means(&self) -> ArrayView2<'_, f64> {
        self.means.view()
    }
    pub fn covariances(&self) -> ArrayView3<'_, f64> {
        self.covariances.view()
    }

    ///Factors the covariances once, for drawing many batches.
    pub fn sampler(&self) -> Result<BatchSampler> {
        BatchSampler::new(self.means.view(), self.covariances.view())
    }

    ///Draws one sample from each Gaussian; see [`sample`](crate::batch_sampler::sample).
    pub fn sample(&self, rng : Option<&mut dyn StandardNormalSource>) -> Result<Array2<f64>> {
        sample(self.means.view(), self.covariances.view(), rng)
    }

    pub fn into_parts(self) -> (Array2<f64>, Array3<f64>) {
        (self.means, self.covariances)
    }
}
