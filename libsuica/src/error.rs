// libsuica/src/error.rs

//! Crate error type.

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The tag is not a transit IC card (no NfcF, or another system code).
    #[error("unsupported card: {reason}")]
    UnsupportedCard {
        /// What the check saw
        reason: String,
    },

    /// Connect, transceive, close or metadata read failed on the tag handle.
    #[error("transport error: {0}")]
    Transport(String),

    /// A command was sent on a closed tag handle.
    #[error("tag is not connected")]
    NotConnected,

    /// The tag stopped answering.
    #[error("operation timed out")]
    Timeout,

    /// A reply or buffer had the wrong size.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// The card rejected a read (status flag 1 is nonzero).
    #[error("felica error: status=({status1:#04x}, {status2:#04x})")]
    FelicaStatus {
        /// Status flag 1
        status1: u8,
        /// Status flag 2
        status2: u8,
    },

    /// The station table at a path could not be opened or read.
    #[error("station table error: {0}")]
    DirectoryLoad(String),

    /// I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// True for failures of the physical link (connect, transceive, close).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::NotConnected | Error::Timeout)
    }

    /// True for malformed or rejected card replies. These end the history
    /// loop without failing the surrounding extraction.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Error::InvalidLength { .. } | Error::FelicaStatus { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
