//! Strong type definitions for rangesync.
//!
//! Identifiers are newtypes over fixed-width byte arrays so a truncated or
//! oversized id cannot reach the sorted vector.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, StorageError};

/// Width of an item identifier in bytes.
pub const ID_SIZE: usize = 32;

/// Width of a range fingerprint in bytes.
pub const FINGERPRINT_SIZE: usize = 16;

/// A 32-byte opaque item identifier.
///
/// Ids compare as unsigned byte strings, which is the secondary key of the
/// item order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub [u8; ID_SIZE]);

impl ItemId {
    /// Create a new ItemId from raw bytes.
    pub const fn from_bytes(bytes: [u8; ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, rejecting any length other than [`ID_SIZE`].
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let arr: [u8; ID_SIZE] = slice.try_into().map_err(|_| StorageError::BadIdSize {
            expected: ID_SIZE,
            actual: slice.len(),
        })?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; ID_SIZE] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> std::result::Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != ID_SIZE {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; ID_SIZE];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The all-zero id.
    pub const ZERO: Self = Self([0u8; ID_SIZE]);
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for ItemId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ID_SIZE]> for ItemId {
    fn from(bytes: [u8; ID_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for ItemId {
    type Error = StorageError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}
