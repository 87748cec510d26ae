use crate::merkle_tree::Node;

pub fn index_of(note: &str, nodes: &[Vec<Node>]) -> Option<usize> {
    let leaf = Node::leaf(note);

    nodes.first()?.iter().position(|node| *node == leaf)
}
