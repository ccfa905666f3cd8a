// libsuica/src/card/filter.rs

//! Support check run before extraction.

use log::warn;

use crate::constants::{NFCF_TECH_SUFFIX, SUICA_SYSTEM_CODE_HEX};
use crate::transport::{Connection, Transport};
use crate::types::SystemCode;
use crate::{Error, Result};

/// Check that `tag` is a transit IC card: it must advertise NfcF and report
/// system code `03 00`. The tag is connected only for the duration of the
/// check and is always closed again.
pub fn check_supported<T: Transport + ?Sized>(tag: &mut T) -> Result<()> {
    if !tag.supports_technology(NFCF_TECH_SUFFIX) {
        return Err(Error::UnsupportedCard {
            reason: "no NfcF technology".into(),
        });
    }

    let conn = Connection::open(tag)?;
    let system_code = SystemCode::try_from(&conn.system_code()?[..])?.to_hex();
    conn.close()?;

    if system_code != SUICA_SYSTEM_CODE_HEX {
        return Err(Error::UnsupportedCard {
            reason: format!("system code {}", system_code),
        });
    }
    Ok(())
}

/// Boolean form of [`check_supported`]. Transport failures count as
/// "not supported" and are logged.
pub fn is_supported_card<T: Transport + ?Sized>(tag: &mut T) -> bool {
    match check_supported(tag) {
        Ok(()) => true,
        Err(Error::UnsupportedCard { .. }) => false,
        Err(e) => {
            warn!("could not connect to FeliCa card to check system code: {}", e);
            false
        }
    }
}
