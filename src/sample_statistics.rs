extern crate ndarray;

use ndarray::*;

use crate::linalg_utils::*;

///Mean of the rows of a `K x M` array of samples.
pub fn empirical_mean(samples : ArrayView2<f64>) -> Array1<f64> {
    let num_samples = samples.shape()[0];
    let mut result = Array::zeros((samples.shape()[1],));
    for row in samples.outer_iter() {
        result += &row;
    }
    if (num_samples > 0) {
        result /= num_samples as f64;
    }
    result
}

///Unbiased (`K - 1` normalized) covariance of the rows of a `K x M`
///array of samples. Fewer than two samples give a zero matrix.
pub fn empirical_covariance(samples : ArrayView2<f64>) -> Array2<f64> {
    let num_samples = samples.shape()[0];
    let dims = samples.shape()[1];
    let mean = empirical_mean(samples);

    let mut result = Array::zeros((dims, dims));
    if (num_samples < 2) {
        return result;
    }
    for row in samples.outer_iter() {
        let diff = &row - &mean;
        result += &outer(diff.view(), diff.view());
    }
    result /= (num_samples - 1) as f64;
    result
}
