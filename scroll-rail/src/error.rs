use alloc::string::String;

/// Rejected configuration values reported by [`crate::RailOptions::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("page factor must be a finite number greater than zero, got {0}")]
    InvalidPageFactor(f64),
    #[error("edge tolerance must be a finite, non-negative number, got {0}")]
    InvalidEdgeTolerance(f64),
    #[error("region id must not be empty")]
    EmptyRegionId,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown controls mode `{0}` (expected `auto`, `always` or `never`)")]
pub struct ParseControlsModeError(pub String);
