// libsuica/src/types.rs

//! FeliCa newtypes shared by the protocol and card layers.

use crate::Error;
use std::convert::TryFrom;

/// IDm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idm([u8; 8]);

impl Idm {
    /// Wrap raw IDm bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw bytes in wire order.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Spaced lowercase hex in wire order, e.g. `"01 2e 44 ..."`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Spaced lowercase hex with the last byte first. This is the form a
    /// snapshot uses as its card id.
    pub fn to_reversed_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced_reversed(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// SystemCode (u16)
///
/// Held in the byte order the tag reports it, so `[0x03, 0x00]` is
/// `0x0300`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemCode(u16);

impl SystemCode {
    /// 交通系 IC カード
    pub const SUICA: Self = Self(crate::constants::SUICA_SYSTEM_CODE);

    /// Wrap a system code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Numeric value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// From the two bytes the tag reports.
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    /// Bytes in the order the tag reports them.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// `"03 00"` style rendering used for display and filter comparison.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(&self.to_be_bytes())
    }
}

impl TryFrom<&[u8]> for SystemCode {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes {
            [hi, lo] => Ok(Self::from_be_bytes([*hi, *lo])),
            _ => Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            }),
        }
    }
}

/// ServiceCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceCode(u16);

impl ServiceCode {
    /// 履歴サービス
    pub const HISTORY: Self = Self(crate::constants::HISTORY_SERVICE_CODE);

    /// Wrap a service code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Numeric value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// サービスコードはリトルエンディアンで送る
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl Default for ServiceCode {
    fn default() -> Self {
        Self::HISTORY
    }
}

/// BlockData (16 バイト)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    /// Wrap a raw block.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Raw block bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// All-zero blocks are unused ring-buffer slots.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Spaced lowercase hex, for logs.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != crate::constants::BLOCK_LEN {
            return Err(Error::InvalidLength {
                expected: crate::constants::BLOCK_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// BlockElement (2 バイト形式)
///
/// Byte 0 carries the length flag (0x80) and the service list index in the
/// low nibble; byte 1 is the block number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockElement {
    /// Index into the command's service list
    pub service_index: u8,
    /// Block number within the service
    pub block_number: u8,
}

impl BlockElement {
    /// Element for block `block_number` of service `service_index`.
    pub fn new(service_index: u8, block_number: u8) -> Self {
        Self {
            service_index,
            block_number,
        }
    }

    /// FeliCa のブロック要素を 2 バイトにエンコードする
    pub fn encode(&self) -> [u8; 2] {
        [
            crate::constants::BLOCK_ELEMENT_2BYTE | (self.service_index & 0x0f),
            self.block_number,
        ]
    }
}
