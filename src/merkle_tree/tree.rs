use crate::merkle_tree::utils::{
    build_leaves_level, build_merkle_tree_from_leaves, create_proof, index_of,
    parse_csv_to_notes, verify_proof,
};
use crate::merkle_tree::{MerkleError, MerkleProof, Node};
use std::error::Error;
use std::path::Path;

pub struct MerkleTree {
    root: Node,
    nodes: Vec<Vec<Node>>,
    depth: usize,
}

impl MerkleTree {
    pub fn new(leaves: &[Node]) -> Result<Self, MerkleError> {
        let nodes = build_merkle_tree_from_leaves(leaves)?;
        let depth = nodes.len() - 1;
        let root = nodes[depth][0];

        Ok(MerkleTree { root, nodes, depth })
    }

    /// Hashes every note into a leaf and builds the tree over them, in order.
    pub fn from_notes<S: AsRef<str> + Sync>(notes: &[S]) -> Result<Self, MerkleError> {
        Self::new(&build_leaves_level(notes))
    }

    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let notes = parse_csv_to_notes(path)?;
        Ok(Self::from_notes(&notes)?)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn depth(&self) -> &usize {
        &self.depth
    }

    pub fn leaves(&self) -> &[Node] {
        &self.nodes[0]
    }

    pub fn nodes(&self) -> &[Vec<Node>] {
        &self.nodes
    }

    /// Position of the leaf derived from `note`, if the note belongs to the tree.
    pub fn index_of(&self, note: &str) -> Option<usize> {
        index_of(note, &self.nodes)
    }

    pub fn generate_proof(&self, index: usize) -> Result<MerkleProof, MerkleError> {
        create_proof(index, &self.nodes)
    }

    /// Verifies `proof` and checks that it commits to this tree's root.
    pub fn verify_proof(&self, proof: &MerkleProof) -> bool {
        proof.root == self.root && verify_proof(proof)
    }
}
