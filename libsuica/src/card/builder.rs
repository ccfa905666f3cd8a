// libsuica/src/card/builder.rs

//! Builder for [`CardSession`].

use std::sync::Arc;

use crate::card::CardSession;
use crate::config::SessionConfig;
use crate::station::StationDirectory;
use crate::types::ServiceCode;

/// Helper to construct a CardSession with optional configuration.
#[derive(Debug, Default)]
pub struct CardSessionBuilder {
    config: SessionConfig,
    stations: Option<Arc<StationDirectory>>,
}

impl CardSessionBuilder {
    /// Default config and an empty station table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole config.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Service to read history from.
    pub fn service_code(mut self, service_code: ServiceCode) -> Self {
        self.config = SessionConfig::new(service_code, self.config.max_blocks());
        self
    }

    /// Clamped to the ring buffer size.
    pub fn max_blocks(mut self, max_blocks: u8) -> Self {
        self.config = self.config.with_max_blocks(max_blocks);
        self
    }

    /// Station table used to resolve names. Without one, names stay `None`.
    pub fn stations(mut self, stations: Arc<StationDirectory>) -> Self {
        self.stations = Some(stations);
        self
    }

    /// Finish the session.
    pub fn build(self) -> CardSession {
        let stations = self
            .stations
            .unwrap_or_else(|| Arc::new(StationDirectory::empty()));
        CardSession::with_config(self.config, stations)
    }
}
