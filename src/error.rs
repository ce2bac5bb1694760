use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::{NormalError, uniform::Error as UniformError};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The crate's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum MlErr {
    /// `predict` or `evaluate` was called on a model that was never fitted.
    Untrained,
    /// A model was asked to fit a dataset without samples.
    EmptyDataset,
    /// Two arrays that meet in a linear-algebra operation disagree on a dimension.
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    /// A random distribution was built with invalid parameters.
    Distribution(String),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::Untrained => write!(f, "model must be trained before making predictions"),
            MlErr::EmptyDataset => write!(f, "cannot fit a model on an empty dataset"),
            MlErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            MlErr::Distribution(msg) => write!(f, "invalid distribution: {msg}"),
        }
    }
}

impl Error for MlErr {}

impl From<NormalError> for MlErr {
    fn from(value: NormalError) -> Self {
        Self::Distribution(value.to_string())
    }
}

impl From<UniformError> for MlErr {
    fn from(value: UniformError) -> Self {
        Self::Distribution(value.to_string())
    }
}

/// Checks that `got` equals `expected`, naming the two operands on failure.
pub(crate) fn ensure_size(
    a: &'static str,
    b: &'static str,
    got: usize,
    expected: usize,
) -> Result<()> {
    if got != expected {
        return Err(MlErr::SizeMismatch {
            a,
            b,
            got,
            expected,
        });
    }

    Ok(())
}
