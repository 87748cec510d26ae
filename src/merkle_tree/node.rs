use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::utils::{hash_pair, sha256};
use super::MerkleError;

/// A SHA-256 digest sitting at any level of the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    pub hash: [u8; 32],
}

impl Node {
    /// Builds a leaf-level node from a note identifier
    pub fn leaf(note: &str) -> Node {
        Node {
            hash: sha256(note.as_bytes()),
        }
    }

    /// Builds a "middle" (non-leaf-level) node of the tree
    pub fn middle(child_l: &Node, child_r: &Node) -> Node {
        Node {
            hash: hash_pair(&child_l.hash, &child_r.hash),
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }
}

impl From<[u8; 32]> for Node {
    fn from(hash: [u8; 32]) -> Self {
        Node { hash }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Node {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut hash = [0u8; 32];
        hex::decode_to_slice(s, &mut hash).map_err(|_| MerkleError::InvalidHash(s.to_string()))?;
        Ok(Node { hash })
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::Node;
    use crate::merkle_tree::MerkleError;

    #[test]
    fn test_leaf_is_sha256_of_note() {
        let leaf = Node::leaf("alice");
        assert_eq!(
            leaf.to_hex(),
            "2bd806c97f0e00af1a1fc3328fa763a9269723c8db8fac4f93af71db186d6e90"
        );
    }

    #[test]
    fn test_parse_hex() {
        let hex = "81b637d8fcd2c6da6359e6963113a1170de795e4b725b84d1e0b4cfd9ec58ce9";
        let node: Node = hex.parse().unwrap();
        assert_eq!(node, Node::leaf("bob"));
        assert_eq!(node.to_string(), hex);

        // wrong length
        assert_eq!(
            "abcd".parse::<Node>(),
            Err(MerkleError::InvalidHash("abcd".to_string()))
        );
        // not hex
        assert!("zz".repeat(32).parse::<Node>().is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let node = Node::leaf("carol");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, format!("\"{}\"", node.to_hex()));

        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);

        assert!(serde_json::from_str::<Node>("\"0x12\"").is_err());
    }
}
