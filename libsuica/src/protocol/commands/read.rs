// libsuica/src/protocol/commands/read.rs

//! ReadWithoutEncryption (0x06).

use crate::types::{BlockElement, Idm, ServiceCode};

/// Encode ReadWithoutEncryption command payload (FeliCa command code 0x06)
pub fn encode_read(idm: Idm, services: &[ServiceCode], blocks: &[BlockElement]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 8 + 1 + services.len() * 2 + 1 + blocks.len() * 2);
    buf.push(crate::constants::CMD_READ_WITHOUT_ENCRYPTION);
    buf.extend_from_slice(idm.as_bytes());
    buf.push(services.len() as u8);

    for svc in services {
        buf.extend_from_slice(&svc.to_le_bytes());
    }

    buf.push(blocks.len() as u8);
    for blk in blocks {
        buf.extend_from_slice(&blk.encode());
    }

    buf
}
