use super::build_merkle_tree_from_leaves;
use crate::merkle_tree::{MerkleError, MerkleProof, Node};

/// Walks the authentication path of the leaf at `index` through the already built `nodes`.
pub fn create_proof(index: usize, nodes: &[Vec<Node>]) -> Result<MerkleProof, MerkleError> {
    let leaves = nodes
        .first()
        .ok_or(MerkleError::InvalidInput("the tree has no leaves"))?;

    // every level must halve the one below it, down to a single root
    let reduced = nodes
        .windows(2)
        .all(|pair| pair[1].len() == (pair[0].len() + 1) / 2)
        && nodes[nodes.len() - 1].len() == 1;
    if !reduced {
        return Err(MerkleError::InvalidInput(
            "the levels don't form a reduced merkle tree",
        ));
    }

    if index >= leaves.len() {
        return Err(MerkleError::InvalidInput(
            "the leaf does not exist in this tree",
        ));
    }

    let depth = nodes.len() - 1;
    let mut sibling_hashes = Vec::with_capacity(depth);
    let mut path_indices = Vec::with_capacity(depth);
    let mut current_index = index;

    for level in &nodes[..depth] {
        let position = current_index % 2;

        // a trailing odd node was hashed with itself
        let sibling = if position == 0 {
            level.get(current_index + 1).unwrap_or(&level[current_index])
        } else {
            &level[current_index - 1]
        };

        sibling_hashes.push(*sibling);
        path_indices.push(position as u8);
        current_index /= 2;
    }

    Ok(MerkleProof {
        leaf: leaves[index],
        root: nodes[depth][0],
        sibling_hashes,
        path_indices,
    })
}

/// Builds the tree over `leaves` and returns the proof for the leaf at `index`.
pub fn merkle_proof(leaves: &[Node], index: usize) -> Result<MerkleProof, MerkleError> {
    let nodes = build_merkle_tree_from_leaves(leaves)?;
    create_proof(index, &nodes)
}
