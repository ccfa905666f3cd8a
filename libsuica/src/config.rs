// libsuica/src/config.rs

//! Session configuration.

use crate::constants::HISTORY_BLOCK_LIMIT;
use crate::types::ServiceCode;

/// Tunables for a history read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Service to read blocks from
    pub service_code: ServiceCode,
    /// Number of block indices to try, starting at 0
    max_blocks: u8,
}

impl SessionConfig {
    /// `max_blocks` is clamped to [`HISTORY_BLOCK_LIMIT`].
    pub fn new(service_code: ServiceCode, max_blocks: u8) -> Self {
        Self {
            service_code,
            max_blocks: max_blocks.min(HISTORY_BLOCK_LIMIT),
        }
    }

    /// Never more than [`HISTORY_BLOCK_LIMIT`].
    pub fn max_blocks(&self) -> u8 {
        self.max_blocks
    }

    /// Same service, another (clamped) block count.
    pub fn with_max_blocks(self, max_blocks: u8) -> Self {
        Self::new(self.service_code, max_blocks)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(ServiceCode::HISTORY, HISTORY_BLOCK_LIMIT)
    }
}
