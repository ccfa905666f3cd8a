// libsuica/src/card/session.rs

//! History extraction over a connected tag.

use std::sync::Arc;

use log::{debug, error, warn};

use crate::card::CardSnapshot;
use crate::config::SessionConfig;
use crate::history::{self, TransactionRecord};
use crate::protocol::{Command, decode_history_read};
use crate::station::StationDirectory;
use crate::transport::{Connection, Transport};
use crate::types::{BlockData, Idm, SystemCode};
use crate::Result;

/// Reads identity, metadata and travel history from a connected card.
///
/// One session value can serve any number of taps; it holds no per-card
/// state. Each extraction owns the tag exclusively for its duration.
#[derive(Debug, Clone)]
pub struct CardSession {
    config: SessionConfig,
    stations: Arc<StationDirectory>,
}

impl CardSession {
    /// Session with the default config.
    pub fn new(stations: Arc<StationDirectory>) -> Self {
        Self::with_config(SessionConfig::default(), stations)
    }

    /// Session with an explicit config.
    pub fn with_config(config: SessionConfig, stations: Arc<StationDirectory>) -> Self {
        Self { config, stations }
    }

    /// Start a [`CardSessionBuilder`](crate::card::CardSessionBuilder).
    pub fn builder() -> crate::card::builder::CardSessionBuilder {
        crate::card::builder::CardSessionBuilder::new()
    }

    /// Config in use.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Table used to name stations.
    pub fn stations(&self) -> &StationDirectory {
        &self.stations
    }

    /// Read a snapshot, or `None` when the card could not be read. The
    /// failure is logged.
    pub fn extract<T: Transport + ?Sized>(&self, tag: &mut T) -> Option<CardSnapshot> {
        match self.try_extract(tag) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                error!("FeliCa extraction error: {}", e);
                None
            }
        }
    }

    /// Connect, read PMm / system code / IDm, walk the history blocks and
    /// close. Failures before the history loop abort the extraction; a
    /// failing block read only ends the loop.
    pub fn try_extract<T: Transport + ?Sized>(&self, tag: &mut T) -> Result<CardSnapshot> {
        let mut conn = Connection::open(tag)?;

        let manufacturer = conn.manufacturer()?;
        let system_code = SystemCode::try_from(&conn.system_code()?[..])?;
        let idm = Idm::try_from(&conn.identifier()[..])?;

        let history = self.read_history(&mut *conn, &idm);

        if let Err(e) = conn.close() {
            warn!("error closing FeliCa connection: {}", e);
        }

        Ok(CardSnapshot::new(&idm, &manufacturer, system_code, history))
    }

    /// Walk block indices `0..max_blocks` on an already connected tag.
    ///
    /// Empty (all-zero) blocks are skipped and the walk continues; the first
    /// failed read (bad status, short reply, transport error) ends it and
    /// keeps what was collected so far.
    pub fn read_history<T: Transport + ?Sized>(
        &self,
        tag: &mut T,
        idm: &Idm,
    ) -> Vec<TransactionRecord> {
        let mut records = Vec::new();

        for index in 0..self.config.max_blocks() {
            match self.read_block(tag, idm, index) {
                Ok(block) if block.is_empty() => {
                    debug!("history block {} is empty, skipping", index);
                }
                Ok(block) => records.push(history::decode(&block, &self.stations)),
                Err(e) if e.is_transport() => {
                    warn!("error reading Suica history at block {}: {}", index, e);
                    break;
                }
                Err(e) => {
                    debug!("end of history at block {}: {}", index, e);
                    break;
                }
            }
        }

        history::apply_transaction_costs(&mut records);
        records
    }

    /// Issue one ReadWithoutEncryption for `index` and return the raw block.
    pub fn read_block<T: Transport + ?Sized>(
        &self,
        tag: &mut T,
        idm: &Idm,
        index: u8,
    ) -> Result<BlockData> {
        let packet = Command::read_block(*idm, self.config.service_code, index).to_packet()?;
        let resp = tag.transceive(&packet)?;
        decode_history_read(&resp)
    }
}

impl Default for CardSession {
    fn default() -> Self {
        Self::new(Arc::new(StationDirectory::empty()))
    }
}
