// libsuica/src/transport/traits.rs

//! The [`Transport`] trait.

use crate::Result;

/// Transport trait abstracts the host's contactless tag handle away from
/// protocol and decoding logic.
///
/// The host platform owns discovery; an implementation wraps one detected
/// NFC-F target. Exchanges are strictly request/response and a handle must
/// not be shared between concurrent reads.
pub trait Transport {
    /// Technology names the target advertises (e.g. `android.nfc.tech.NfcF`)
    fn tech_list(&self) -> Vec<String>;

    /// Open the RF session with the target
    fn connect(&mut self) -> Result<()>;

    /// Close the RF session
    fn close(&mut self) -> Result<()>;

    /// Whether an RF session is currently open
    fn is_connected(&self) -> bool;

    /// Send a length-prefixed FeliCa command and return the raw reply
    fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>>;

    /// The 2-byte system code reported for the target
    fn system_code(&self) -> Result<Vec<u8>>;

    /// Manufacturer parameter (PMm) bytes reported for the target
    fn manufacturer(&self) -> Result<Vec<u8>>;

    /// Tag identifier (IDm) from discovery metadata, not from a command
    fn identifier(&self) -> Vec<u8>;

    /// Whether any advertised technology ends with `suffix`.
    fn supports_technology(&self, suffix: &str) -> bool {
        self.tech_list().iter().any(|t| t.ends_with(suffix))
    }
}
