#[path = "../common/mod.rs"]
mod common;

use libsuica::history::TransactionKind;
use libsuica::transport::{MockTransport, Transport};
use libsuica::{CardSession, Error};

#[test]
fn full_extraction_resolves_station_names() -> anyhow::Result<()> {
    common::init_logger();
    let mut tag = common::card_with_history(&[
        common::yodoyabashi_to_kyobashi(1630),
        common::charge(1800),
        common::tokyo_to_shinjuku(800),
    ]);

    let session = CardSession::builder().stations(common::stations()).build();
    let snapshot = session.try_extract(&mut tag)?;

    assert_eq!(snapshot.card_id, "2c 5a 0d e4 12 12 01 01");
    assert_eq!(snapshot.system_code, "03 00");
    assert_eq!(snapshot.balance, Some(1630));

    let h = &snapshot.transaction_history;
    assert_eq!(h.len(), 3);

    assert_eq!(h[0].entry_station_name.as_deref(), Some("Yodoyabashi"));
    assert_eq!(h[0].exit_station_name.as_deref(), Some("Kyobashi"));
    assert_eq!(h[0].entry_area_code, Some(1));
    assert_eq!(h[0].transaction_cost, Some(-170));
    assert_eq!(h[0].summary(), "Yodoyabashi → Kyobashi");

    assert_eq!(h[1].kind(), TransactionKind::Charge);
    assert_eq!(h[1].transaction_cost, Some(1000));
    assert!(h[1].entry_station_code.is_none());

    assert_eq!(h[2].entry_station_name.as_deref(), Some("Tokyo"));
    assert_eq!(h[2].exit_station_name.as_deref(), Some("Shinjuku"));
    assert_eq!(h[2].date.to_string(), "2021-3-14");
    assert_eq!(h[2].transaction_cost, None);

    assert!(!tag.is_connected());
    Ok(())
}

#[test]
fn empty_history_still_reports_identity() {
    let mut tag = common::card_with_history(&[]);
    let snapshot = CardSession::default().extract(&mut tag).unwrap();
    assert!(snapshot.transaction_history.is_empty());
    assert_eq!(snapshot.balance, None);
    assert_eq!(snapshot.card_id, "2c 5a 0d e4 12 12 01 01");
    assert!(!snapshot.manufacturer.is_empty());
    assert_eq!(snapshot.system_code, "03 00");
    assert_eq!(tag.sent.len(), 1);
}

#[test]
fn zero_blocks_between_records_are_skipped() {
    let mut tag = common::card_with_history(&[
        common::charge(500),
        [0u8; 16],
        [0u8; 16],
        common::shop_purchase(650),
    ]);
    let snapshot = CardSession::default().extract(&mut tag).unwrap();
    assert_eq!(snapshot.transaction_history.len(), 2);
    assert_eq!(snapshot.transaction_history[1].kind(), TransactionKind::Purchase);
    // four blocks plus the failed read that ended the walk
    assert_eq!(tag.sent.len(), 5);
}

#[test]
fn commands_walk_block_numbers_in_order() {
    let blocks: Vec<[u8; 16]> = (0..5).map(|i| common::charge(100 * i)).collect();
    let mut tag = common::card_with_history(&blocks);
    CardSession::default().extract(&mut tag).unwrap();

    let idm = common::sample_idm_bytes();
    for (i, packet) in tag.sent.iter().enumerate() {
        assert_eq!(packet[0] as usize, packet.len());
        assert_eq!(packet[1], 0x06);
        assert_eq!(&packet[2..10], &idm);
        assert_eq!(&packet[10..14], &[0x01, 0x0f, 0x09, 0x01]);
        assert_eq!(&packet[14..16], &[0x80, i as u8]);
    }
}

#[test]
fn a_card_that_never_fails_gets_twenty_reads() {
    let mut tag = MockTransport::suica(common::sample_idm_bytes());
    for _ in 0..40 {
        tag.push_response(common::read_reply(
            &common::sample_idm_bytes(),
            &common::charge(10),
        ));
    }
    let snapshot = CardSession::default().extract(&mut tag).unwrap();
    assert_eq!(tag.sent.len(), 20);
    assert_eq!(snapshot.transaction_history.len(), 20);
}

#[test]
fn lost_tag_before_history_yields_none() {
    let mut tag = common::card_with_history(&[common::charge(100)]);
    tag.fail_metadata = true;
    assert!(CardSession::default().extract(&mut tag).is_none());
    assert!(!tag.is_connected());
}

#[test]
fn try_extract_reports_connect_failure() {
    let mut tag = common::card_with_history(&[]);
    tag.fail_connect = true;
    let err = CardSession::default().try_extract(&mut tag).unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn boxed_transport_works() {
    let mut tag: Box<dyn Transport> = Box::new(common::card_with_history(&[common::charge(300)]));
    let snapshot = CardSession::default().extract(tag.as_mut()).unwrap();
    assert_eq!(snapshot.balance, Some(300));
}
