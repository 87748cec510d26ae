use std::collections::VecDeque;

pub const HISTORY_LIMIT: usize = 10;

/// Most recent transaction hashes, newest first.
#[derive(Clone, Debug, Default)]
pub struct TransactionHistory {
    tx_hashes: VecDeque<String>,
}

impl TransactionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tx_hash(&mut self, tx_hash: impl Into<String>) {
        self.tx_hashes.push_front(tx_hash.into());
        self.tx_hashes.truncate(HISTORY_LIMIT);
    }

    pub fn tx_hashes(&self) -> impl Iterator<Item = &str> {
        self.tx_hashes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tx_hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx_hashes.is_empty()
    }
}
