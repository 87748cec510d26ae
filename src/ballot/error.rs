use crate::merkle_tree::MerkleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoteError {
    #[error("please enter your note and select a vote")]
    IncompleteSubmission,
    #[error("please load the notes file from the admin first")]
    BatchNotLoaded,
    #[error("note not found in merkle leaves, are you using the correct note?")]
    NoteNotFound,
    #[error("the merkle proof doesn't match the published root {0}")]
    ProofRejected(String),
    #[error(transparent)]
    Merkle(#[from] MerkleError),
}
