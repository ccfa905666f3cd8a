// libsuica/src/protocol/commands/mod.rs

//! Commands sent to the card.

pub mod read;

pub use read::encode_read;

use crate::Result;
use crate::protocol::Frame;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    /// Read blocks that need no authentication (0x06).
    ReadWithoutEncryption {
        /// Target card
        idm: crate::types::Idm,
        /// Services the block elements index into
        services: Vec<crate::types::ServiceCode>,
        /// Blocks to read
        blocks: Vec<crate::types::BlockElement>,
    },
}

impl Command {
    /// FeliCa command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::ReadWithoutEncryption { .. } => crate::constants::CMD_READ_WITHOUT_ENCRYPTION,
        }
    }

    /// Encode the command into the raw payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::ReadWithoutEncryption {
                idm,
                services,
                blocks,
            } => encode_read(*idm, &services[..], &blocks[..]),
        }
    }

    /// Encode into the length-prefixed packet handed to `transceive`.
    pub fn to_packet(&self) -> Result<Vec<u8>> {
        Frame::encode(&self.encode())
    }

    /// Single-block history read used by the card session.
    pub fn read_block(
        idm: crate::types::Idm,
        service: crate::types::ServiceCode,
        block_number: u8,
    ) -> Self {
        Self::ReadWithoutEncryption {
            idm,
            services: vec![service],
            blocks: vec![crate::types::BlockElement::new(0, block_number)],
        }
    }
}
