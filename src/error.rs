use thiserror::Error;

/// Errors raised at the crate's fallible edges.
///
/// The editing core itself never fails; these cover decoding snapshots and
/// registries handed to it from outside.
#[derive(Debug, Error)]
pub enum VareditError {
    #[error("invalid document snapshot: {0}")]
    Snapshot(#[source] serde_json::Error),
    #[error("invalid variable registry: {0}")]
    Registry(#[source] serde_json::Error),
    #[error("duplicate variable id `{0}`")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, VareditError>;
