use thiserror::Error;

/// Failures at the safe boundary of the crate.
///
/// Lanewise arithmetic never fails; these only come from building vectors and
/// masks out of caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimdError {
    #[error("slice holds {actual} lanes but {expected} are required")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("mask lane {lane} is neither all-ones nor all-zeros")]
    InvalidMaskSlot { lane: usize },
    #[error("unknown instruction-set tier: {0}")]
    UnknownIsa(String),
}

pub type SimdResult<T> = Result<T, SimdError>;
