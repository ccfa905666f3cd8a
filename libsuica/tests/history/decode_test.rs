#[path = "../common/mod.rs"]
mod common;

use libsuica::history::{self, ConsoleType, ProcessType, StationCode};
use libsuica::station::StationDirectory;
use libsuica::types::BlockData;

fn decode(bytes: [u8; 16]) -> history::TransactionRecord {
    history::decode(&BlockData::from_bytes(bytes), &StationDirectory::empty())
}

#[test]
fn reference_block_decodes_bit_exact() {
    let raw = hex::decode("16010000 2a21 10203040 6400 000000 d0".replace(' ', "")).unwrap();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&raw);

    let r = decode(bytes);
    assert_eq!(r.console_type.to_string(), "Ticket gate");
    assert_eq!(r.process_type.to_string(), "Exit gate");
    assert_eq!(r.date.to_string(), "2021-1-1");
    assert_eq!(r.balance, 100);
    assert_eq!(r.entry_area_code, Some(3));
    assert_eq!(r.exit_area_code, Some(1));
    assert_eq!(r.entry_station_code, Some(StationCode::new(3, 0x10, 0x20)));
    assert_eq!(r.entry_station_code.unwrap().to_string(), "031020");
    assert_eq!(r.exit_station_code.unwrap().to_string(), "013040");
}

#[test]
fn every_movement_process_type_carries_stations() {
    for process in [0x01, 0x05, 0x06, 0x0D, 0x0F] {
        let block = common::trip_block(0x05, process, 0, 0, (1, 2), (3, 4), 0x90);
        let r = decode(block);
        assert!(r.entry_station_code.is_some(), "process {:#04x}", process);
        assert_eq!(r.entry_area_code, Some(2));
        assert_eq!(r.exit_area_code, Some(1));
    }
}

#[test]
fn non_movement_ignores_station_bytes() {
    for process in [0x02, 0x03, 0x04, 0x07, 0x08, 0x11, 0x13, 0x14, 0x35, 0x46] {
        let block = common::trip_block(0x16, process, 0, 0, (1, 2), (3, 4), 0xFF);
        let r = decode(block);
        assert_eq!(r.entry_station_code, None);
        assert_eq!(r.exit_station_code, None);
        assert_eq!(r.entry_area_code, None);
        assert_eq!(r.exit_area_code, None);
    }
}

// With `diagnostics` the raw bytes are kept on the record.
#[cfg(not(feature = "diagnostics"))]
#[test]
fn unused_bytes_do_not_change_the_record() {
    let base = common::tokyo_to_shinjuku(1234);
    let mut noisy = base;
    for i in [2, 3, 12, 13, 14] {
        noisy[i] = 0xAB;
    }
    assert_eq!(decode(base), decode(noisy));
}

#[test]
fn taxonomies_match_labels() {
    let cases = [
        (0x03, "Fare adjustment machine"),
        (0x05, "On-board terminal"),
        (0x12, "Ticket vending machine"),
        (0x1D, "Connecting gate"),
        (0x48, "VIEW ALTTE"),
        (0xC8, "Vending machine"),
        (0x00, "Unknown (0)"),
    ];
    for (code, label) in cases {
        assert_eq!(ConsoleType::from_code(code).to_string(), label);
    }

    let cases = [
        (0x04, "Fare adjustment"),
        (0x06, "Exit at window"),
        (0x0D, "Bus (PiTaPa?)"),
        (0x0F, "Bus (IruCa?)"),
        (0x35, "Purchase"),
        (0xFF, "Unknown (255)"),
    ];
    for (code, label) in cases {
        assert_eq!(ProcessType::from_code(code).to_string(), label);
    }
}

#[test]
fn names_resolve_through_loaded_table() {
    let stations = common::stations();
    let r = history::decode(
        &BlockData::from_bytes(common::yodoyabashi_to_kyobashi(900)),
        &stations,
    );
    // table key is uppercase "01E30C"; decoded code is lowercase
    assert_eq!(r.entry_station_code.unwrap().to_string(), "01e30c");
    assert_eq!(r.entry_station_name.as_deref(), Some("Yodoyabashi"));
}
