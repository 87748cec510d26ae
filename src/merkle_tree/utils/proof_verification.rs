use crate::merkle_tree::{MerkleProof, Node};

pub fn verify_proof(proof: &MerkleProof) -> bool {
    if proof.sibling_hashes.len() != proof.path_indices.len() {
        return false;
    }

    let mut node = proof.leaf;

    for (sibling, position) in proof.sibling_hashes.iter().zip(&proof.path_indices) {
        node = match position {
            0 => Node::middle(&node, sibling),
            1 => Node::middle(sibling, &node),
            _ => return false,
        };
    }

    proof.root == node
}

/// Checks a bare list of sibling hashes, taking the left/right order from the bits of `index`.
pub fn verify_inclusion(leaf: &Node, index: usize, sibling_hashes: &[Node], root: &Node) -> bool {
    // the index must address a leaf of a tree this deep
    if index.checked_shr(sibling_hashes.len() as u32).unwrap_or(0) != 0 {
        return false;
    }

    let mut node = *leaf;
    let mut current_index = index;

    for sibling in sibling_hashes {
        node = if current_index % 2 == 0 {
            Node::middle(&node, sibling)
        } else {
            Node::middle(sibling, &node)
        };
        current_index /= 2;
    }

    node == *root
}
