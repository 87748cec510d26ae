use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{NoteBatch, TransactionHistory, VoteError};
use crate::merkle_tree::utils::verify_proof;
use crate::merkle_tree::MerkleProof;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Yes,
    No,
}

impl Vote {
    pub const ALL: [Vote; 2] = [Vote::Yes, Vote::No];
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vote::Yes => write!(f, "YES"),
            Vote::No => write!(f, "NO"),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct VoteReceipt {
    pub vote: Vote,
    pub index: usize,
    pub proof: MerkleProof,
    pub tx_hash: String,
}

/// A voter's ballot: the secret note handed out by the admin and the chosen option.
#[derive(Clone, Copy, Debug)]
pub struct VoteSubmission<'a> {
    pub note: &'a str,
    pub vote: Option<Vote>,
}

impl<'a> VoteSubmission<'a> {
    pub fn new(note: &'a str, vote: Vote) -> Self {
        VoteSubmission {
            note,
            vote: Some(vote),
        }
    }

    /// Proves that the note belongs to `batch` and records the vote.
    ///
    /// Consuming the note on chain is simulated: the returned transaction hash is random.
    pub fn submit<R: Rng>(
        &self,
        batch: &NoteBatch,
        history: &mut TransactionHistory,
        rng: &mut R,
    ) -> Result<VoteReceipt, VoteError> {
        let vote = match self.vote {
            Some(vote) if !self.note.is_empty() => vote,
            _ => return Err(VoteError::IncompleteSubmission),
        };

        if batch.is_empty() {
            return Err(VoteError::BatchNotLoaded);
        }

        let tree = batch.tree()?;
        let index = tree.index_of(self.note).ok_or(VoteError::NoteNotFound)?;
        let proof = tree.generate_proof(index)?;

        if proof.root != batch.merkle_root || !verify_proof(&proof) {
            return Err(VoteError::ProofRejected(batch.merkle_root.to_hex()));
        }

        let tx_hash = format!("0x{}", hex::encode(rng.gen::<[u8; 4]>()));
        history.add_tx_hash(tx_hash.clone());

        Ok(VoteReceipt {
            vote,
            index,
            proof,
            tx_hash,
        })
    }
}
