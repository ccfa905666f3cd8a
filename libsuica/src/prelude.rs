// libsuica/src/prelude.rs

//! Commonly used types and functions.

pub use crate::card::{CardSession, CardSessionBuilder, CardSnapshot, check_supported, is_supported_card};
pub use crate::config::SessionConfig;
pub use crate::history::{
    ConsoleType, PackedDate, ProcessType, StationCode, TransactionKind, TransactionRecord,
};
pub use crate::protocol::Command;
pub use crate::station::{SharedDirectory, StationDirectory};
pub use crate::transport::Transport;
pub use crate::{BlockData, BlockElement, Error, Idm, Result, ServiceCode, SystemCode};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_spaced, format_yen, format_yen_delta};
