// libsuica/src/card/mod.rs

//! Card-level operations: support check, history extraction and the
//! resulting snapshot.

pub mod builder;
pub mod filter;
pub mod session;
mod snapshot;

pub use builder::CardSessionBuilder;
pub use filter::{check_supported, is_supported_card};
pub use session::CardSession;
pub use snapshot::CardSnapshot;
