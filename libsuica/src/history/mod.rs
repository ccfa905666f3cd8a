// libsuica/src/history/mod.rs

//! Decoding of 16-byte travel history blocks (service 0x090F).
//!
//! Block layout (byte offsets):
//!
//! | offset | meaning |
//! |---|---|
//! | 0 | console type |
//! | 1 | process type |
//! | 4-5 | packed date, big endian: `yyyyyyym mmmddddd` |
//! | 6-7 | entry line code, entry station number (movement records only) |
//! | 8-9 | exit line code, exit station number (movement records only) |
//! | 10-11 | balance, little endian (byte 11 is the high byte) |
//! | 15 | region: entry area in bits 6-7, exit area in bits 4-5 |
//!
//! Bytes 2-3 and 12-14 are not interpreted.

mod console;
mod process;

pub use console::ConsoleType;
pub use process::ProcessType;

use log::debug;

use crate::station::StationDirectory;
use crate::types::BlockData;

/// Date packed into a 16-bit field: 7 bits of year since 2000, 4 bits of
/// month, 5 bits of day. Values are kept as stored; a blank or corrupt
/// record can yield month 0.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display(fmt = "{}-{}-{}", year, month, day)]
pub struct PackedDate {
    /// Full year
    pub year: u16,
    /// 1-12 on a valid record
    pub month: u8,
    /// 1-31 on a valid record
    pub day: u8,
}

impl PackedDate {
    /// Unpack the big-endian field at bytes 4-5.
    pub fn from_packed(value: u16) -> Self {
        Self {
            year: (value >> 9) + 2000,
            month: ((value >> 5) & 0x0f) as u8,
            day: (value & 0x1f) as u8,
        }
    }
}

/// Station code as used by the station table: area (decimal, 2 digits),
/// line code and station number (lowercase hex, 2 digits each).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "{:02}{:02x}{:02x}", area, line, station)]
pub struct StationCode {
    /// Area code, 0-3
    pub area: u8,
    /// 線区コード
    pub line: u8,
    /// 駅順コード
    pub station: u8,
}

impl StationCode {
    /// Code from its three parts.
    pub fn new(area: u8, line: u8, station: u8) -> Self {
        Self {
            area,
            line,
            station,
        }
    }
}

/// What a record means to a person reading a statement.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Top-up
    Charge,
    /// Local bus fare
    Bus,
    /// Shop or vending machine
    Purchase,
    /// Anything else, normally a rail trip
    Train,
}

/// One decoded history block.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Byte 0
    pub console_type: ConsoleType,
    /// Byte 1
    pub process_type: ProcessType,
    /// Bytes 4-5
    pub date: PackedDate,
    /// Balance after the transaction, in yen
    pub balance: u16,
    /// Movement records only
    pub entry_station_code: Option<StationCode>,
    /// Movement records only
    pub exit_station_code: Option<StationCode>,
    /// Set when the station table knows the code
    pub entry_station_name: Option<String>,
    /// Set when the station table knows the code
    pub exit_station_name: Option<String>,
    /// Movement records only
    pub entry_area_code: Option<u8>,
    /// Movement records only
    pub exit_area_code: Option<u8>,
    /// Balance change against the next older record. Filled in by the
    /// card session; `None` for the oldest record and for lone blocks.
    pub transaction_cost: Option<i32>,
    /// Undecoded block
    #[cfg(feature = "diagnostics")]
    pub raw: BlockData,
}

impl TransactionRecord {
    /// A shop terminal wins over the process byte; otherwise charges and
    /// buses are told apart by process type and everything else is a train
    /// ride.
    pub fn kind(&self) -> TransactionKind {
        if self.console_type.is_retail() {
            TransactionKind::Purchase
        } else if self.process_type.is_charge() {
            TransactionKind::Charge
        } else if self.process_type.is_bus() {
            TransactionKind::Bus
        } else {
            TransactionKind::Train
        }
    }

    /// One-line description: `"Charge"`, `"Local Bus"`, `"Purchase"` or
    /// `"<entry> → <exit>"` with `Station` standing in for unknown names.
    pub fn summary(&self) -> String {
        match self.kind() {
            TransactionKind::Purchase => "Purchase".to_string(),
            TransactionKind::Charge => self.process_type.to_string(),
            TransactionKind::Bus => "Local Bus".to_string(),
            TransactionKind::Train => format!(
                "{} → {}",
                self.entry_station_name.as_deref().unwrap_or("Station"),
                self.exit_station_name.as_deref().unwrap_or("Station")
            ),
        }
    }
}

/// Decode one history block. Pure apart from a debug log line; station names
/// are resolved against `stations` and stay `None` on a miss.
pub fn decode(block: &BlockData, stations: &StationDirectory) -> TransactionRecord {
    let b = block.as_bytes();

    let console_type = ConsoleType::from_code(b[0]);
    let process_type = ProcessType::from_code(b[1]);
    let date = PackedDate::from_packed(u16::from_be_bytes([b[4], b[5]]));
    let balance = u16::from_le_bytes([b[10], b[11]]);

    let (entry, exit) = if process_type.is_movement() {
        let region = b[15];
        (
            Some(StationCode::new((region >> 6) & 0x03, b[6], b[7])),
            Some(StationCode::new((region >> 4) & 0x03, b[8], b[9])),
        )
    } else {
        (None, None)
    };

    let lookup = |code: Option<StationCode>| {
        code.and_then(|c| stations.lookup(&c.to_string()).map(str::to_owned))
    };

    let record = TransactionRecord {
        console_type,
        process_type,
        date,
        balance,
        entry_station_code: entry,
        exit_station_code: exit,
        entry_station_name: lookup(entry),
        exit_station_name: lookup(exit),
        entry_area_code: entry.map(|c| c.area),
        exit_area_code: exit.map(|c| c.area),
        transaction_cost: None,
        #[cfg(feature = "diagnostics")]
        raw: *block,
    };

    debug!(
        "decoded history block: console={} process={} date={} balance=¥{} entry={:?}/{} exit={:?}/{}",
        record.console_type,
        record.process_type,
        record.date,
        record.balance,
        record.entry_station_code.map(|c| c.to_string()),
        record.entry_station_name.as_deref().unwrap_or("Not found"),
        record.exit_station_code.map(|c| c.to_string()),
        record.exit_station_name.as_deref().unwrap_or("Not found"),
    );

    record
}

/// Fill in `transaction_cost` for a newest-first list: each record gets
/// `balance - older.balance`, the last one stays `None`.
pub fn apply_transaction_costs(records: &mut [TransactionRecord]) {
    for i in 0..records.len() {
        let cost = records
            .get(i + 1)
            .map(|older| i32::from(records[i].balance) - i32::from(older.balance));
        records[i].transaction_cost = cost;
    }
}
