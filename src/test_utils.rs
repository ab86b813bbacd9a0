extern crate ndarray;

use ndarray::*;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;
use rand::prelude::*;

use crate::normal_source::*;
use crate::sampler_error::*;

pub fn init_logging() {
    let _ = pretty_env_logger::try_init();
}

pub fn test_rng() -> StdRng {
    seeded_normal_source(1234)
}

pub fn assert_eps_equals_to_within(one : f64, two : f64, epsilon : f64) {
    let diff = (one - two).abs();
    if (diff > epsilon) {
        panic!("{} and {} differ by {}, more than {}", one, two, diff, epsilon);
    }
}

pub fn assert_equal_vectors_to_within(one : &ArrayView1<f64>, two : &ArrayView1<f64>, epsilon : f64) {
    assert_eq!(one.shape(), two.shape());
    for i in 0..one.len() {
        assert_eps_equals_to_within(one[[i,]], two[[i,]], epsilon);
    }
}

pub fn assert_equal_matrices_to_within(one : &ArrayView2<f64>, two : &ArrayView2<f64>, epsilon : f64) {
    assert_eq!(one.shape(), two.shape());
    for ((i, j), elem) in one.indexed_iter() {
        let other = two[[i, j]];
        if ((elem - other).abs() > epsilon) {
            panic!("Matrices differ at ({}, {}): {} vs {}\n{}\n{}", i, j, elem, other, one, two);
        }
    }
}

pub fn random_matrix<R : Rng>(rng : &mut R, t : usize, s : usize) -> Array2<f64> {
    Array::random_using((t, s), StandardNormal, rng)
}

///A well-conditioned symmetric positive-definite matrix, `A A^T + dim I`.
pub fn random_psd_matrix<R : Rng>(rng : &mut R, dim : usize) -> Array2<f64> {
    let a = random_matrix(rng, dim, dim);
    let mut result = a.dot(&a.t());
    for i in 0..dim {
        result[[i, i]] += dim as f64;
    }
    result
}

pub fn random_covariance_batch<R : Rng>(rng : &mut R, n : usize, m : usize) -> Array3<f64> {
    let mut result = Array::zeros((n, m, m));
    for i in 0..n {
        let psd = random_psd_matrix(rng, m);
        result.index_axis_mut(Axis(0), i).assign(&psd);
    }
    result
}

pub fn identity_covariance_batch(n : usize, m : usize) -> Array3<f64> {
    let mut result = Array::zeros((n, m, m));
    for i in 0..n {
        result.index_axis_mut(Axis(0), i).assign(&Array2::<f64>::eye(m));
    }
    result
}

///Replays a fixed list of "standard normal" values, and fails once
///asked for more than it has left.
pub struct ScriptedNormalSource {
    values : Vec<f64>,
    position : usize
}

impl ScriptedNormalSource {
    pub fn new(values : Vec<f64>) -> ScriptedNormalSource {
        ScriptedNormalSource {
            values,
            position : 0
        }
    }
    pub fn num_drawn(&self) -> usize {
        self.position
    }
}

impl StandardNormalSource for ScriptedNormalSource {
    fn fill_standard_normal(&mut self, mut out : ArrayViewMut2<f64>) -> Result<()> {
        let remaining = self.values.len() - self.position;
        if (out.len() > remaining) {
            return Err(SamplerError::RandomSource(format!("asked for {} values with only {} left",
                                                          out.len(), remaining)));
        }
        for elem in out.iter_mut() {
            *elem = self.values[self.position];
            self.position += 1;
        }
        Ok(())
    }
}
