#[path = "../common/mod.rs"]
mod common;

use libsuica::card::{check_supported, is_supported_card};
use libsuica::transport::{MockTransport, Transport};
use libsuica::Error;

#[test]
fn transit_card_passes_filter() {
    common::init_logger();
    let mut tag = MockTransport::suica(common::sample_idm_bytes());
    assert!(is_supported_card(&mut tag));
    assert!(!tag.is_connected());
}

#[test]
fn any_other_system_code_fails() {
    for code in [[0x00, 0x03], [0x88, 0xb4], [0xfe, 0x00], [0x03, 0x01]] {
        let mut tag = MockTransport::suica(common::sample_idm_bytes()).with_system_code(code);
        assert!(!is_supported_card(&mut tag), "{:02x?} accepted", code);
        assert!(!tag.is_connected());
    }
}

#[test]
fn unsupported_reason_names_system_code() {
    let mut tag = MockTransport::suica(common::sample_idm_bytes()).with_system_code([0x88, 0xb4]);
    match check_supported(&mut tag) {
        Err(Error::UnsupportedCard { reason }) => assert!(reason.contains("88 b4")),
        other => panic!("expected UnsupportedCard, got {:?}", other),
    }
}

#[test]
fn non_felica_tag_is_rejected_without_connecting() {
    let mut tag = MockTransport::suica(common::sample_idm_bytes())
        .with_tech_list(&["android.nfc.tech.NfcA", "android.nfc.tech.MifareClassic"]);
    assert!(!is_supported_card(&mut tag));
    assert_eq!(tag.connect_calls, 0);
}

#[test]
fn filter_then_extract_on_same_tag() {
    let mut tag = common::card_with_history(&[common::charge(2000)]);
    assert!(is_supported_card(&mut tag));
    let snapshot = libsuica::CardSession::default().extract(&mut tag).unwrap();
    assert_eq!(snapshot.balance, Some(2000));
    assert_eq!(tag.connect_calls, 2);
    assert_eq!(tag.close_calls, 2);
}
