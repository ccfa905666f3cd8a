// libsuica/src/protocol/frame.rs

//! Length-prefixed packets as the tag handle expects them.

use crate::constants::MAX_PACKET_LEN;
use crate::{Error, Result};

/// Length-prefixed FeliCa packet as exchanged through a host NFC-F handle.
/// Format: [Len(1)] [Payload(n)] where Len counts itself, so Len = n + 1.
pub struct Frame;

impl Frame {
    /// Prepend the length byte to a command payload.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        let total = payload.len() + 1;
        if total > MAX_PACKET_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_PACKET_LEN,
                actual: total,
            });
        }

        let mut out = Vec::with_capacity(total);
        out.push(total as u8);
        out.extend_from_slice(payload);
        Ok(out)
    }
}
