// libsuica/src/constants.rs
//! Common protocol constants used across the crate

/// Technology name suffix that marks a FeliCa (NFC-F) target in a tag's
/// technology list, e.g. `android.nfc.tech.NfcF`.
pub const NFCF_TECH_SUFFIX: &str = "NfcF";

/// Transit IC system code (Suica, PASMO, ICOCA, ...)
pub const SUICA_SYSTEM_CODE: u16 = 0x0300;

/// Spaced hex form of [`SUICA_SYSTEM_CODE`] as compared by the card filter.
pub const SUICA_SYSTEM_CODE_HEX: &str = "03 00";

/// 乗車履歴サービス (history-of-travel service, read-only)
pub const HISTORY_SERVICE_CODE: u16 = 0x090f;

/// The card keeps its travel history in a 20 slot ring buffer; the history
/// loop never issues more read commands than this.
pub const HISTORY_BLOCK_LIMIT: u8 = 20;

/// FeliCa ReadWithoutEncryption command code
pub const CMD_READ_WITHOUT_ENCRYPTION: u8 = 0x06;

/// First byte of a 2-byte block list element (length flag set, service
/// list index 0, plain access mode).
pub const BLOCK_ELEMENT_2BYTE: u8 = 0x80;

/// Size of a single FeliCa data block in bytes
pub const BLOCK_LEN: usize = 16;

/// Offset of status flag 1 in a length-prefixed ReadWithoutEncryption reply:
/// len(1) + code(1) + idm(8)
pub const READ_STATUS1_OFFSET: usize = 10;

/// Offset of status flag 2 in a length-prefixed ReadWithoutEncryption reply
pub const READ_STATUS2_OFFSET: usize = 11;

/// Offset of the first block byte: status2 is followed by the block count
pub const READ_BLOCK_OFFSET: usize = 13;

/// A reply shorter than this cannot carry a status flag and block count.
pub const READ_MIN_RESPONSE_LEN: usize = 13;

/// Maximum length of a length-prefixed command packet
pub const MAX_PACKET_LEN: usize = 255;
