//! Batched sampling from many multivariate Gaussians at once.
//!
//! Given `N` mean vectors and `N` covariance matrices, all of dimension `M`,
//! [`batch_sampler::sample`] draws one sample from each of the `N` Gaussians
//! and returns them as the rows of an `N x M` array. It Cholesky-factors every
//! covariance matrix `Σ = L L^T`, draws standard-normal noise `x`, and
//! returns `L x + μ` row by row.
//!
//! For drawing many batches from the same parameters, build a
//! [`batch_sampler::BatchSampler`] once and call `sample` on it repeatedly.
//! Random draws go through [`normal_source::StandardNormalSource`], which every
//! `rand` generator implements.
//!
//! Compiling with the `parallel` feature factors and transforms large
//! batches on the rayon thread pool.

#![allow(dead_code)]
#![allow(non_snake_case)]
#![allow(unused_imports)]
#![allow(unused_parens)]

#[macro_use] extern crate log;
extern crate lapack_src;

pub mod params;
pub mod sampler_error;
pub mod batch_shape;
pub mod normal_source;
pub mod linalg_utils;
pub mod batch_cholesky;
pub mod batch_affine;
pub mod batch_sampler;
pub mod sample_statistics;
pub mod gaussian_batch;

#[cfg(test)]
pub mod test_utils;
