mod batch;
mod config;
mod error;
mod history;
mod vote;

pub use batch::{NoteBatch, DEFAULT_NOTES_FILE};
pub use config::{BallotConfig, NodeEndpoint, LOCAL_NODE, MAX_BATCH_SIZE, PUBLIC_NODE};
pub use error::VoteError;
pub use history::{TransactionHistory, HISTORY_LIMIT};
pub use vote::{Vote, VoteReceipt, VoteSubmission};
