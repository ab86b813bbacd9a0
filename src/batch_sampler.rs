extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;

use crate::batch_affine::*;
use crate::batch_cholesky::*;
use crate::batch_shape::*;
use crate::normal_source::*;
use crate::sampler_error::*;

///Draws from `N` independent `M`-dimensional Gaussians at once.
///
///The covariance matrices are Cholesky-factored when the sampler is built,
///so every call to [`BatchSampler::sample`] only costs one batch of
///standard-normal draws and one batched affine transform. If `x ~ N(0, I)`,
///then `L x + mean ~ N(mean, L L^T)`, which is what each row of a sample is.
pub struct BatchSampler {
    shape : BatchShape,
    means : Array2<f64>,
    ///`cholesky_factors[i]` is lower-triangular with
    ///`cholesky_factors[i] . cholesky_factors[i]^T == covariances[i]`
    cholesky_factors : Array3<f64>
}

impl BatchSampler {
    ///Builds a sampler for the Gaussians with the given `N x M` means and
    ///`N x M x M` covariances. Fails on inconsistent shapes, or if any
    ///covariance matrix isn't symmetric positive-definite.
    pub fn new(means : ArrayView2<f64>, covariances : ArrayView3<f64>) -> Result<BatchSampler> {
        let shape = BatchShape::of_parameters(&means, &covariances)?;

        let cholesky_factors = if (shape.is_empty()) {
            Array::zeros((0, shape.m, shape.m))
        } else {
            batch_cholesky(covariances)?
        };
        debug!("Built a batch sampler for {} Gaussians of dimension {}", shape.n, shape.m);

        Ok(BatchSampler {
            shape,
            means : means.to_owned(),
            cholesky_factors
        })
    }

    ///Draws one sample from each Gaussian, as an `N x M` array whose
    ///row `i` comes from the `i`th distribution. Consumes exactly `N * M`
    ///standard normals from `rng`, and none at all for an empty batch.
    pub fn sample(&self, rng : &mut dyn StandardNormalSource) -> Result<Array2<f64>> {
        if (self.shape.is_empty()) {
            return Ok(Array::zeros((0, self.shape.m)));
        }
        trace!("Drawing {} standard normals for a batch of shape {}", self.shape.num_draws(), self.shape);
        let noise = draw_standard_normal(rng, self.shape.n, self.shape.m)?;
        batch_affine(self.cholesky_factors.view(), noise.view(), self.means.view())
    }

    ///Draws `count` independent batches, as a `count x N x M` array. Slice `k`
    ///is exactly what the `k`th of `count` successive calls to
    ///[`BatchSampler::sample`] with the same generator would return.
    pub fn sample_many(&self, rng : &mut dyn StandardNormalSource, count : usize) -> Result<Array3<f64>> {
        let mut result = Array::zeros((count, self.shape.n, self.shape.m));
        for k in 0..count {
            let batch = self.sample(rng)?;
            result.index_axis_mut(Axis(0), k).assign(&batch);
        }
        Ok(result)
    }

    pub fn shape(&self) -> BatchShape {
        self.shape
    }
    pub fn num_distributions(&self) -> usize {
        self.shape.n
    }
    pub fn dims(&self) -> usize {
        self.shape.m
    }
    pub fn means(&self) -> ArrayView2<'_, f64> {
        self.means.view()
    }
    pub fn cholesky_factors(&self) -> ArrayView3<'_, f64> {
        self.cholesky_factors.view()
    }
}

///Draws one sample from each of `N` independent `M`-dimensional Gaussians,
///given their `N x M` means and `N x M x M` covariance matrices, and returns
///them as the rows of an `N x M` array, in input order.
///
///When `rng` is `None`, a generator seeded with
///[`DEFAULT_SEED`](crate::params::DEFAULT_SEED) is built for this call
///alone, so the output is reproducible. Pass a generator of your own for
///fresh randomness.
///
///The call is all-or-nothing: a shape mismatch, a covariance matrix that isn't
///positive-definite, or a failing generator yields an error and no samples.
pub fn sample(means : ArrayView2<f64>, covariances : ArrayView3<f64>,
              rng : Option<&mut dyn StandardNormalSource>) -> Result<Array2<f64>> {
    let sampler = BatchSampler::new(means, covariances)?;
    match rng {
        Some(rng) => sampler.sample(rng),
        None => {
            let mut default_rng = default_normal_source();
            sampler.sample(&mut default_rng)
        }
    }
}

///Like [`sample`], for means and covariances whose rank is only known at
///runtime. Anything other than rank 2 means and rank 3 covariances is a
///shape error.
pub fn sample_dyn<'a>(means : ArrayViewD<'a, f64>, covariances : ArrayViewD<'a, f64>,
                      rng : Option<&mut dyn StandardNormalSource>) -> Result<Array2<f64>> {
    let (means, covariances) = as_batch_views(means, covariances)?;
    sample(means, covariances, rng)
}
