extern crate ndarray;

use ndarray::*;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

use crate::params::*;
use crate::sampler_error::*;

///A source of independent standard-normal variates (mean 0, variance 1).
///
///Every [`rand::RngCore`] is one, drawing through [`StandardNormal`].
///Implement this directly for sources that can run dry or that
///replay scripted values, and report their failures as
///[`SamplerError::RandomSource`].
pub trait StandardNormalSource {
    ///Overwrites every entry of `out` with a fresh standard-normal draw,
    ///walking it in row-major order.
    fn fill_standard_normal(&mut self, out : ArrayViewMut2<f64>) -> Result<()>;
}

impl<R : RngCore + ?Sized> StandardNormalSource for R {
    fn fill_standard_normal(&mut self, mut out : ArrayViewMut2<f64>) -> Result<()> {
        for elem in out.iter_mut() {
            *elem = StandardNormal.sample(self);
        }
        Ok(())
    }
}

///Draws an `n x m` array of standard normals from `source`, so that
///row `i` is the noise vector for the `i`th distribution of a batch.
pub fn draw_standard_normal(source : &mut dyn StandardNormalSource, n : usize, m : usize) -> Result<Array2<f64>> {
    let mut result = Array::zeros((n, m));
    source.fill_standard_normal(result.view_mut())?;
    Ok(result)
}

///The generator used when the caller doesn't provide one. Built fresh
///on every call from [`DEFAULT_SEED`], so it never carries state between calls.
pub fn default_normal_source() -> StdRng {
    seeded_normal_source(DEFAULT_SEED)
}

///A generator of the same kind as [`default_normal_source`], from any seed.
pub fn seeded_normal_source(seed : u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn default_source_is_reproducible() {
        let one = draw_standard_normal(&mut default_normal_source(), 4, 3).unwrap();
        let two = draw_standard_normal(&mut default_normal_source(), 4, 3).unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn different_seeds_differ() {
        let one = draw_standard_normal(&mut seeded_normal_source(1), 4, 3).unwrap();
        let two = draw_standard_normal(&mut seeded_normal_source(2), 4, 3).unwrap();
        assert_ne!(one, two);
    }

    #[test]
    fn draws_fill_row_major() {
        let mut source = ScriptedNormalSource::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let noise = draw_standard_normal(&mut source, 2, 3).unwrap();
        assert_eq!(noise, arr2(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));
        assert_eq!(source.num_drawn(), 6);
    }

    #[test]
    fn draws_advance_the_generator() {
        let mut rng = seeded_normal_source(7);
        let first = draw_standard_normal(&mut rng, 2, 2).unwrap();
        let second = draw_standard_normal(&mut rng, 2, 2).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn draws_look_standard_normal() {
        let num_samps = 20000;
        let samples = draw_standard_normal(&mut seeded_normal_source(3), num_samps, 1).unwrap();
        let mean = samples.sum() / (num_samps as f64);
        let variance = samples.mapv(|x| (x - mean) * (x - mean)).sum() / ((num_samps - 1) as f64);
        assert_eps_equals_to_within(mean, 0.0, 0.05);
        assert_eps_equals_to_within(variance, 1.0, 0.05);
    }

    #[test]
    fn exhausted_source_error_propagates() {
        let mut source = ScriptedNormalSource::new(vec![1.0, 2.0]);
        let result = draw_standard_normal(&mut source, 1, 3);
        match result {
            Err(SamplerError::RandomSource(_)) => {},
            other => panic!("unexpected {:?}", other)
        }
    }
}
