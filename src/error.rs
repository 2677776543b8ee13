use thiserror::Error;

/// Reasons a payload can fail structural normalization.
///
/// None of these variants ever reach a caller: the normalizer collapses all
/// of them to the canonical empty order. They exist so the failure kind can
/// still be logged before it is flattened.
#[derive(Error, Debug)]
pub enum NormalizeFailure {
    #[error("payload absent or empty")]
    EmptyInput,
    #[error("payload failed to decode: {0}")]
    DecodeFailure(#[from] serde_json::Error),
    #[error("decoded payload is not a sequence (got {0})")]
    ShapeFailure(&'static str),
}

pub type Result<T> = std::result::Result<T, NormalizeFailure>;
