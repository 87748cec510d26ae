use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// Empty leaf set or a leaf index outside of the tree.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("invalid hash {0:?}, expected 64 hex characters")]
    InvalidHash(String),
}
