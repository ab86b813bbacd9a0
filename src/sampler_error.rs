use thiserror::Error;

///Everything that can go wrong while drawing a batch of Gaussian samples.
///All of these are deterministic functions of the inputs (or of the
///supplied generator), so none of them are worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    ///Means and covariances don't agree on `(N, M)`, an array has the
    ///wrong rank, or the feature dimension `M` is zero.
    #[error("{what} has shape {found:?}, expected {expected}")]
    Shape {
        what : &'static str,
        expected : String,
        found : Vec<usize>
    },

    ///The covariance matrix at `index` could not be Cholesky-factored,
    ///so it isn't symmetric positive-definite.
    #[error("covariance matrix {index} is not positive-definite: {reason}")]
    NotPositiveDefinite {
        index : usize,
        reason : String
    },

    ///Failure reported by a caller-supplied standard-normal source.
    #[error("random source error: {0}")]
    RandomSource(String),
}

pub type Result<T> = std::result::Result<T, SamplerError>;

impl SamplerError {
    pub fn shape(what : &'static str, expected : String, found : &[usize]) -> SamplerError {
        SamplerError::Shape {
            what,
            expected,
            found : found.to_vec()
        }
    }
}
