mod build_tree;
mod create_proof;
mod csv_parser;
mod hash;
mod index_of;
mod proof_verification;

pub use build_tree::{build_leaves_level, build_merkle_tree_from_leaves, merkle_root};
pub use create_proof::{create_proof, merkle_proof};
pub use csv_parser::parse_csv_to_notes;
pub use hash::{hash_pair, sha256};
pub use index_of::index_of;
pub use proof_verification::{verify_inclusion, verify_proof};
