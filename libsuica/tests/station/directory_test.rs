#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use libsuica::station::{SharedDirectory, StationDirectory};

#[test]
fn packaged_table_loads() {
    let dir = StationDirectory::from_path(common::station_table_path()).unwrap();
    // two rows lack a name or code, one has only two columns
    assert_eq!(dir.len(), 5);
    assert_eq!(dir.lookup("00010B"), Some("Tokyo"));
    assert_eq!(dir.lookup("01e30c"), Some("Yodoyabashi"));
    assert_eq!(dir.lookup("02a101"), None);
    assert_eq!(dir.lookup("030101"), None);
    assert_eq!(dir.lookup("ffffff"), None);
}

#[test]
fn case_insensitive_both_ways() {
    let dir = StationDirectory::load("code,a,b,name\nA1B2,x,y,Ikebukuro\n".as_bytes()).unwrap();
    assert_eq!(dir.lookup("a1b2"), dir.lookup("A1B2"));
    assert_eq!(dir.lookup("a1b2"), Some("Ikebukuro"));
}

#[test]
fn shared_directory_loads_packaged_table_once() {
    let shared = SharedDirectory::new();
    let first = shared.get_or_load(common::station_table_path());
    let second = shared.get_or_load("/does/not/matter.csv");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.lookup("00250a"), Some("Shinjuku"));
}

#[test]
fn missing_table_degrades_to_empty() {
    common::init_logger();
    let shared = SharedDirectory::new();
    let dir = shared.get_or_load("/nonexistent/StationCode.csv");
    assert!(dir.is_empty());
}

#[test]
fn bad_rows_do_not_empty_the_shared_directory() {
    let mut table = b"code,line,no,name\n00010b,Yamanote,0b,Tokyo\n000111,Yamanote,11,\"Kanda\n".to_vec();
    table.extend_from_slice(b"00250a,Yamanote,0a,");
    // "新宿" in Shift_JIS
    table.extend_from_slice(&[0x90, 0x56, 0x8f, 0x68]);
    table.extend_from_slice(b"\n01e30c,Keihan,0c,Yodoyabashi\n");

    let shared = SharedDirectory::new();
    let dir = shared.get_or_init_with(|| StationDirectory::load(&table[..]));
    assert_eq!(dir.len(), 4);
    assert_eq!(dir.lookup("00010b"), Some("Tokyo"));
    assert_eq!(dir.lookup("000111"), Some("\"Kanda"));
    assert!(dir.lookup("00250a").is_some());
    assert_eq!(dir.lookup("01e30c"), Some("Yodoyabashi"));
}

#[test]
fn missing_table_names_the_path() {
    let err = StationDirectory::from_path("/nonexistent/StationCode.csv").unwrap_err();
    assert!(matches!(err, libsuica::Error::DirectoryLoad(_)));
    assert!(err.to_string().contains("StationCode.csv"));
}
