mod error;
mod node;
mod tree;
pub mod utils;

use serde::{Deserialize, Serialize};

/// Inclusion proof of a single leaf.
///
/// `sibling_hashes[i]` is the node paired with the authentication path at level `i`,
/// and `path_indices[i]` is 0 when the path node is the left child of that pair, 1 when it is the right one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    pub leaf: Node,
    pub root: Node,
    pub sibling_hashes: Vec<Node>,
    pub path_indices: Vec<u8>,
}

pub use error::MerkleError;
pub use node::Node;
pub use tree::MerkleTree;
pub use utils::{merkle_proof, merkle_root, verify_inclusion};
