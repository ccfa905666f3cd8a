// libsuica/src/transport/connection.rs

//! Scoped RF session.

use std::ops::{Deref, DerefMut};

use log::warn;

use crate::Result;
use crate::transport::Transport;

/// Scoped RF session. Opening connects the tag; the session is closed when
/// the guard is closed explicitly or dropped, whichever comes first.
pub struct Connection<'a, T: Transport + ?Sized> {
    tag: &'a mut T,
}

impl<'a, T: Transport + ?Sized> Connection<'a, T> {
    /// Connect the tag. A tag left half-open by a failed connect is closed
    /// before the error is returned.
    pub fn open(tag: &'a mut T) -> Result<Self> {
        if let Err(e) = tag.connect() {
            if tag.is_connected() {
                if let Err(close_err) = tag.close() {
                    warn!("error closing half-open FeliCa connection: {}", close_err);
                }
            }
            return Err(e);
        }
        Ok(Self { tag })
    }

    /// Close now and report a close failure to the caller.
    pub fn close(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        if self.tag.is_connected() {
            self.tag.close()
        } else {
            Ok(())
        }
    }
}

impl<T: Transport + ?Sized> Deref for Connection<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.tag
    }
}

impl<T: Transport + ?Sized> DerefMut for Connection<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.tag
    }
}

impl<T: Transport + ?Sized> Drop for Connection<'_, T> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("error closing FeliCa connection: {}", e);
        }
    }
}
