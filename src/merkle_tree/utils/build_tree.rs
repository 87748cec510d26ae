use crate::merkle_tree::{MerkleError, Node};
use ark_std::{end_timer, start_timer};
use rayon::prelude::*;

/// Builds every level of the tree, from the leaves (level 0) up to the single root.
///
/// An odd node at the end of a level is paired with itself.
pub fn build_merkle_tree_from_leaves(leaves: &[Node]) -> Result<Vec<Vec<Node>>, MerkleError> {
    if leaves.is_empty() {
        return Err(MerkleError::InvalidInput(
            "can't build a merkle tree without leaves",
        ));
    }

    let mut tree: Vec<Vec<Node>> = vec![leaves.to_vec()];

    while let Some(previous_level) = tree.last().filter(|level| level.len() > 1) {
        let level = tree.len();
        let pf_time = start_timer!(|| format!("compute level {}", level));
        let next_level = build_middle_level(previous_level);
        end_timer!(pf_time);

        tree.push(next_level);
    }

    Ok(tree)
}

/// Hashes note identifiers into leaves, keeping their order.
pub fn build_leaves_level<S: AsRef<str> + Sync>(notes: &[S]) -> Vec<Node> {
    let pf_time = start_timer!(|| "compute leaves");

    let leaves = notes
        .par_iter()
        .map(|note| Node::leaf(note.as_ref()))
        .collect::<Vec<_>>();

    end_timer!(pf_time);
    leaves
}

pub fn merkle_root(leaves: &[Node]) -> Result<Node, MerkleError> {
    let tree = build_merkle_tree_from_leaves(leaves)?;
    Ok(tree[tree.len() - 1][0])
}

fn build_middle_level(previous_level: &[Node]) -> Vec<Node> {
    previous_level
        .par_chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            Node::middle(left, right)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_leaves_level, build_merkle_tree_from_leaves, merkle_root};
    use crate::merkle_tree::{MerkleError, Node};

    #[test]
    fn test_level_sizes() {
        let leaves = build_leaves_level(&(0..7).map(|i| i.to_string()).collect::<Vec<_>>());
        let tree = build_merkle_tree_from_leaves(&leaves).unwrap();

        let sizes = tree.iter().map(|level| level.len()).collect::<Vec<_>>();
        assert_eq!(sizes, vec![7, 4, 2, 1]);
        assert_eq!(tree[0], leaves);
    }

    #[test]
    fn test_odd_node_is_paired_with_itself() {
        let leaves = build_leaves_level(&["alice", "bob", "carol"]);
        let tree = build_merkle_tree_from_leaves(&leaves).unwrap();

        let left = Node::middle(&leaves[0], &leaves[1]);
        let right = Node::middle(&leaves[2], &leaves[2]);
        assert_eq!(tree[1], vec![left, right]);
        assert_eq!(tree[2], vec![Node::middle(&left, &right)]);
    }

    #[test]
    fn test_single_leaf_is_root() {
        let leaf = Node::leaf("alice");
        let tree = build_merkle_tree_from_leaves(&[leaf]).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(merkle_root(&[leaf]).unwrap(), leaf);
    }

    #[test]
    fn test_empty_leaves() {
        assert!(matches!(
            build_merkle_tree_from_leaves(&[]),
            Err(MerkleError::InvalidInput(_))
        ));
        assert!(merkle_root(&[]).is_err());
    }
}
