// libsuica/src/transport/mod.rs

//! Host tag handle abstraction.

pub mod connection;
pub mod mock;
pub mod traits;

pub use connection::Connection;
pub use mock::MockTransport;
pub use traits::Transport;
