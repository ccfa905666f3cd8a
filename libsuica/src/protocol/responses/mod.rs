// libsuica/src/protocol/responses/mod.rs

//! Replies received from the card.

pub mod read;

pub use read::decode_history_read;
