// libsuica/src/station/mod.rs

//! Station code table (駅コード表).
//!
//! The table is a CSV file with a header row; column 0 holds the station
//! code as produced by [`StationCode`](crate::history::StationCode) and
//! column 3 the display name. Other columns are ignored.

mod shared;

pub use shared::SharedDirectory;

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::{Error, Result};

/// Immutable code -> name map. Keys are stored lowercase and lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationDirectory {
    entries: HashMap<String, String>,
}

impl StationDirectory {
    /// A directory that resolves nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from CSV text. Each line is split on commas as-is: quotes
    /// carry no meaning and undecodable bytes are replaced, so a bad row
    /// only affects itself. Rows with fewer than four columns or with an
    /// empty code or name are skipped; a repeated code keeps the last name.
    pub fn load<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = HashMap::new();
        // byte records without quoting only fail on I/O
        for rec in rdr.byte_records() {
            let rec = rec?;
            if rec.len() < 4 {
                continue;
            }
            let code = String::from_utf8_lossy(&rec[0]);
            let name = String::from_utf8_lossy(&rec[3]);
            let (code, name) = (code.trim(), name.trim());
            if code.is_empty() || name.is_empty() {
                continue;
            }
            entries.insert(code.to_lowercase(), name.to_string());
        }

        debug!("station map loaded with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Open and load a table file. Any failure is reported as
    /// [`Error::DirectoryLoad`] naming the path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        File::open(path)
            .map_err(Error::from)
            .and_then(Self::load)
            .map_err(|e| Error::DirectoryLoad(format!("{}: {}", path.display(), e)))
    }

    /// Name for `code`, ignoring case.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.entries.get(&code.to_lowercase()).map(String::as_str)
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no station resolves.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for StationDirectory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        Self { entries }
    }
}
