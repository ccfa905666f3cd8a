// Shared fixtures for integration tests. Each test crate pulls this in via
// `#[path = "../common/mod.rs"]`, so not every helper is used everywhere.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use libsuica::station::StationDirectory;
use libsuica::test_support;
use libsuica::transport::MockTransport;
use libsuica::types::Idm;

pub use libsuica::test_support::{history_block, read_error_reply, read_reply, trip_block};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sample_idm_bytes() -> [u8; 8] {
    [0x01, 0x01, 0x12, 0x12, 0xe4, 0x0d, 0x5a, 0x2c]
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes(sample_idm_bytes())
}

/// 2021-03-14
pub const MARCH_14_2021: u16 = (21 << 9) | (3 << 5) | 14;

pub fn station_table_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("StationCode.csv")
}

pub fn stations() -> Arc<StationDirectory> {
    Arc::new(StationDirectory::from_path(station_table_path()).expect("station table"))
}

/// Tokyo -> Shinjuku, area 0 on both ends
pub fn tokyo_to_shinjuku(balance: u16) -> [u8; 16] {
    trip_block(0x16, 0x01, MARCH_14_2021, balance, (0x01, 0x0b), (0x25, 0x0a), 0x00)
}

/// Yodoyabashi -> Kyobashi, area 1 on both ends
pub fn yodoyabashi_to_kyobashi(balance: u16) -> [u8; 16] {
    trip_block(0x16, 0x05, MARCH_14_2021, balance, (0xe3, 0x0c), (0xe3, 0x14), 0x50)
}

pub fn charge(balance: u16) -> [u8; 16] {
    history_block(0x08, 0x02, MARCH_14_2021, balance)
}

pub fn shop_purchase(balance: u16) -> [u8; 16] {
    history_block(0xC7, 0x46, MARCH_14_2021, balance)
}

pub fn card_with_history(blocks: &[[u8; 16]]) -> MockTransport {
    test_support::suica_with_history(sample_idm_bytes(), blocks)
}
