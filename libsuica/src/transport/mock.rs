// libsuica/src/transport/mock.rs

//! Scripted tag for tests.

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock tag for unit tests. It records sent commands and returns queued
/// replies in order; an empty queue behaves like a tag that stopped
/// answering (Timeout).
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every packet passed to transceive
    pub sent: Vec<Vec<u8>>,
    /// Queued transceive results, front first
    pub responses: Vec<Result<Vec<u8>>>,
    /// Advertised technologies
    pub tech_list: Vec<String>,
    /// IDm
    pub identifier: Vec<u8>,
    /// PMm
    pub manufacturer: Vec<u8>,
    /// Raw system code bytes
    pub system_code: Vec<u8>,
    /// RF session state
    pub connected: bool,
    /// Testing hook: connect() fails with a transport error
    pub fail_connect: bool,
    /// Testing hook: a failed connect leaves the tag connected
    pub half_open_on_fail: bool,
    /// Testing hook: close() fails (the session still ends)
    pub fail_close: bool,
    /// Testing hook: system_code()/manufacturer() fail
    pub fail_metadata: bool,
    /// Number of connect() calls
    pub connect_calls: usize,
    /// Number of close() calls
    pub close_calls: usize,
}

impl MockTransport {
    /// Bare tag with only an identifier.
    pub fn new(identifier: Vec<u8>) -> Self {
        Self {
            identifier,
            ..Self::default()
        }
    }

    /// A transit card: NfcF technology, system code `03 00` and a fixed PMm.
    pub fn suica(idm: [u8; 8]) -> Self {
        Self::new(idm.to_vec())
            .with_tech_list(&["android.nfc.tech.NfcF"])
            .with_system_code([0x03, 0x00])
            .with_manufacturer(vec![0x01, 0x20, 0x22, 0x04, 0x27, 0x67, 0x4e, 0xff])
    }

    /// Replace the advertised technologies.
    pub fn with_tech_list(mut self, techs: &[&str]) -> Self {
        self.tech_list = techs.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Report `code` as the system code.
    pub fn with_system_code(mut self, code: [u8; 2]) -> Self {
        self.system_code = code.to_vec();
        self
    }

    /// Report `pmm` as the manufacturer parameter.
    pub fn with_manufacturer(mut self, pmm: Vec<u8>) -> Self {
        self.manufacturer = pmm;
        self
    }

    /// Queue a successful reply.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(Ok(resp));
    }

    /// Queue a transceive failure at the current position.
    pub fn push_error(&mut self, err: Error) {
        self.responses.push(Err(err));
    }
}

impl Transport for MockTransport {
    fn tech_list(&self) -> Vec<String> {
        self.tech_list.clone()
    }

    fn connect(&mut self) -> Result<()> {
        self.connect_calls += 1;
        if self.fail_connect {
            self.connected = self.half_open_on_fail;
            return Err(Error::Transport("connect failed".into()));
        }
        self.connected = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.close_calls += 1;
        self.connected = false;
        if self.fail_close {
            return Err(Error::Transport("close failed".into()));
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        self.sent.push(data.to_vec());
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            self.responses.remove(0)
        }
    }

    fn system_code(&self) -> Result<Vec<u8>> {
        if self.fail_metadata {
            return Err(Error::Transport("tag lost".into()));
        }
        Ok(self.system_code.clone())
    }

    fn manufacturer(&self) -> Result<Vec<u8>> {
        if self.fail_metadata {
            return Err(Error::Transport("tag lost".into()));
        }
        Ok(self.manufacturer.clone())
    }

    fn identifier(&self) -> Vec<u8> {
        self.identifier.clone()
    }
}
