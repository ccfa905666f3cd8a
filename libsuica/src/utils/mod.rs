//! Utilities for libsuica: small, reusable helpers used across the crate.
//!
//! Hex rendering for identifiers and codes, and yen formatting for balances.

pub mod hex;
pub mod yen;

pub use hex::*;
pub use yen::*;
