// libsuica/src/lib.rs

//! libsuica
//!
//! Pure Rust reader for Suica-family FeliCa transit cards: card filtering,
//! travel history extraction over a host-provided NFC-F handle, and
//! decoding of history blocks into transaction records.
//!
//! ```no_run
//! use std::sync::Arc;
//! use libsuica::prelude::*;
//!
//! fn on_tag(tag: &mut dyn Transport, stations: Arc<StationDirectory>) {
//!     if !is_supported_card(tag) {
//!         return;
//!     }
//!     let session = CardSession::builder().stations(stations).build();
//!     if let Some(snapshot) = session.extract(tag) {
//!         for record in &snapshot.transaction_history {
//!             println!("{} {} {}", record.date, record.summary(), record.balance);
//!         }
//!     }
//! }
//! ```
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod error;
pub mod history;
pub mod prelude;
pub mod protocol;
pub mod station;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
