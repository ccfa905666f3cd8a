//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the construction of card replies and history
//! blocks so tests across the crate and the tests/ directory share one
//! definition of the wire layout.
#![allow(dead_code)]

use crate::transport::MockTransport;

/// Build a successful single-block ReadWithoutEncryption reply, length
/// byte included, as a tag handle would return it.
#[doc(hidden)]
pub fn read_reply(idm: &[u8; 8], block: &[u8; 16]) -> Vec<u8> {
    let mut resp = vec![0x00, 0x07];
    resp.extend_from_slice(idm);
    resp.push(0); // status1
    resp.push(0); // status2
    resp.push(1); // block count
    resp.extend_from_slice(block);
    resp[0] = resp.len() as u8;
    resp
}

/// Build a failed ReadWithoutEncryption reply (no block data).
#[doc(hidden)]
pub fn read_error_reply(idm: &[u8; 8], status1: u8, status2: u8) -> Vec<u8> {
    let mut resp = vec![0x00, 0x07];
    resp.extend_from_slice(idm);
    resp.push(status1);
    resp.push(status2);
    resp.push(0);
    resp[0] = resp.len() as u8;
    resp
}

/// A history block with the given console/process codes, packed date and
/// balance; station bytes are zero.
#[doc(hidden)]
pub fn history_block(console: u8, process: u8, packed_date: u16, balance: u16) -> [u8; 16] {
    let mut b = [0u8; 16];
    b[0] = console;
    b[1] = process;
    b[4..6].copy_from_slice(&packed_date.to_be_bytes());
    b[10..12].copy_from_slice(&balance.to_le_bytes());
    b
}

/// A movement block (process type must be in the movement set) with
/// entry/exit line and station bytes and the region byte set.
#[doc(hidden)]
pub fn trip_block(
    console: u8,
    process: u8,
    packed_date: u16,
    balance: u16,
    entry: (u8, u8),
    exit: (u8, u8),
    region: u8,
) -> [u8; 16] {
    let mut b = history_block(console, process, packed_date, balance);
    b[6] = entry.0;
    b[7] = entry.1;
    b[8] = exit.0;
    b[9] = exit.1;
    b[15] = region;
    b
}

/// MockTransport for a transit card pre-seeded with a successful reply for
/// each block, followed by a failed read that ends the history.
#[doc(hidden)]
pub fn suica_with_history(idm: [u8; 8], blocks: &[[u8; 16]]) -> MockTransport {
    let mut mock = MockTransport::suica(idm);
    for block in blocks {
        mock.push_response(read_reply(&idm, block));
    }
    mock.push_response(read_error_reply(&idm, 0x01, 0xA8));
    mock
}
