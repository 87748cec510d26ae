use std::error::Error;
use std::path::Path;

use ark_std::{end_timer, start_timer};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::merkle_tree::utils::{build_leaves_level, parse_csv_to_notes};
use crate::merkle_tree::{MerkleError, MerkleTree, Node};
use crate::{load_from_file, save_to_file};

pub const DEFAULT_NOTES_FILE: &str = "voting_notes.json";

/// Bytes of randomness in a generated note identifier, the width of a client account id.
const NOTE_ID_BYTES: usize = 15;

/// The artifact the admin distributes to voters: note identifiers, their hashes and the root over them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteBatch {
    #[serde(default)]
    pub notes: Vec<String>,
    pub note_hashes: Vec<Node>,
    pub merkle_root: Node,
}

impl NoteBatch {
    pub fn from_notes(notes: Vec<String>) -> Result<Self, MerkleError> {
        let note_hashes = build_leaves_level(&notes);
        let tree = MerkleTree::new(&note_hashes)?;

        Ok(NoteBatch {
            notes,
            merkle_root: *tree.root(),
            note_hashes,
        })
    }

    /// Issues `count` fresh random note identifiers and commits to them.
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Result<Self, MerkleError> {
        let pf_time = start_timer!(|| format!("generate batch of {} notes", count));

        let notes = (0..count)
            .map(|_| format!("0x{}", hex::encode(rng.gen::<[u8; NOTE_ID_BYTES]>())))
            .collect::<Vec<_>>();
        let batch = Self::from_notes(notes);

        end_timer!(pf_time);
        batch
    }

    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let notes = parse_csv_to_notes(path)?;
        Ok(Self::from_notes(notes)?)
    }

    pub fn tree(&self) -> Result<MerkleTree, MerkleError> {
        MerkleTree::new(&self.note_hashes)
    }

    /// Whether the published hashes reproduce the published root, and the notes (when present) their hashes.
    pub fn check_root(&self) -> bool {
        if !self.notes.is_empty()
            && (self.notes.len() != self.note_hashes.len()
                || self
                    .notes
                    .iter()
                    .zip(&self.note_hashes)
                    .any(|(note, hash)| Node::leaf(note) != *hash))
        {
            return false;
        }

        self.tree()
            .map(|tree| *tree.root() == self.merkle_root)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.note_hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.note_hashes.is_empty()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        save_to_file(path, self)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        load_from_file(path)
    }
}
