// libsuica/src/card/snapshot.rs

use crate::history::TransactionRecord;
use crate::types::{Idm, SystemCode};

/// Everything read from one card tap.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSnapshot {
    /// IDm rendered last byte first, space separated
    pub card_id: String,
    /// PMm bytes as reported by the tag, space separated
    pub manufacturer: String,
    /// System code as reported by the tag, e.g. `"03 00"`
    pub system_code: String,
    /// Balance of the newest record, `None` without history
    pub balance: Option<u16>,
    /// Newest first, in the order the card returned them
    pub transaction_history: Vec<TransactionRecord>,
}

impl CardSnapshot {
    /// Assemble a snapshot. The balance comes from the newest record.
    pub fn new(
        idm: &Idm,
        manufacturer: &[u8],
        system_code: SystemCode,
        transaction_history: Vec<TransactionRecord>,
    ) -> Self {
        Self {
            card_id: idm.to_reversed_hex(),
            manufacturer: crate::utils::bytes_to_hex_spaced(manufacturer),
            system_code: system_code.to_hex(),
            balance: transaction_history.first().map(|r| r.balance),
            transaction_history,
        }
    }

    /// Newest record.
    pub fn latest(&self) -> Option<&TransactionRecord> {
        self.transaction_history.first()
    }

    /// True when at least one record was read.
    pub fn has_history(&self) -> bool {
        !self.transaction_history.is_empty()
    }
}
