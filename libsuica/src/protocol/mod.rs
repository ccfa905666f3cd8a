// libsuica/src/protocol/mod.rs

//! FeliCa command encoding and reply decoding.

pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use commands::*;
pub use frame::Frame;
pub use responses::*;
