// libsuica/src/protocol/responses/read.rs

//! ReadWithoutEncryption reply (0x07).

use crate::constants::{
    BLOCK_LEN, READ_BLOCK_OFFSET, READ_MIN_RESPONSE_LEN, READ_STATUS1_OFFSET, READ_STATUS2_OFFSET,
};
use crate::protocol::parser;
use crate::types::BlockData;
use crate::{Error, Result};

/// Decode a single-block ReadWithoutEncryption reply as returned by the
/// tag handle, i.e. still carrying its length byte.
///
/// Layout: len(1) + response_code(1) + idm(8) + status1(1) + status2(1)
/// + block_count(1) + block(16)
///
/// Success requires status flag 1 to be zero; the first block is returned.
pub fn decode_history_read(data: &[u8]) -> Result<BlockData> {
    parser::ensure_len(data, READ_MIN_RESPONSE_LEN)?;

    let status1 = parser::byte_at(data, READ_STATUS1_OFFSET)?;
    if status1 != 0 {
        let status2 = parser::byte_at(data, READ_STATUS2_OFFSET)?;
        return Err(Error::FelicaStatus { status1, status2 });
    }

    let slice = parser::slice_at(data, READ_BLOCK_OFFSET, BLOCK_LEN)?;
    BlockData::try_from(slice)
}
