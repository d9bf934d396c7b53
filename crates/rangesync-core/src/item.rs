//! Items and bounds: the ordered elements of a storage vector and the keys
//! used to search it.
//!
//! Items are ordered by timestamp, then by id compared as unsigned bytes.
//! The derived `Ord` follows field order, so the field order below is
//! load-bearing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, StorageError};
use crate::types::{ItemId, ID_SIZE};

/// Size of [`Item::encode`] output: big-endian timestamp then id.
pub const ITEM_ENCODED_SIZE: usize = 8 + ID_SIZE;

/// A fixed-identity record: a timestamp and a 32-byte id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Primary sort key.
    pub timestamp: u64,
    /// Secondary sort key.
    pub id: ItemId,
}

impl Item {
    /// Create a new item.
    pub const fn new(timestamp: u64, id: ItemId) -> Self {
        Self { timestamp, id }
    }

    /// Create an item from an id slice, rejecting lengths other than [`ID_SIZE`].
    pub fn from_slice(timestamp: u64, id: &[u8]) -> Result<Self> {
        Ok(Self::new(timestamp, ItemId::from_slice(id)?))
    }

    /// True if `self` precedes `other` in (timestamp, id) order.
    pub fn less_than(&self, other: &Item) -> bool {
        self < other
    }

    /// True if both timestamp and id match.
    pub fn equals(&self, other: &Item) -> bool {
        self == other
    }

    /// Canonical encoding: 8-byte big-endian timestamp followed by the id.
    ///
    /// Big-endian keeps the byte order of encodings consistent with item order.
    pub fn encode(&self) -> [u8; ITEM_ENCODED_SIZE] {
        let mut out = [0u8; ITEM_ENCODED_SIZE];
        out[..8].copy_from_slice(&self.timestamp.to_be_bytes());
        out[8..].copy_from_slice(self.id.as_bytes());
        out
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item({}, {})", self.timestamp, self.id)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.timestamp, self.id)
    }
}

/// A search key with the shape of an [`Item`].
///
/// A bound locates the first item that is not less than it. Bounds are never
/// stored in a vector.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bound {
    /// The comparison operand.
    pub item: Item,
}

impl Bound {
    /// Create a bound from a timestamp and a full id.
    pub const fn new(timestamp: u64, id: ItemId) -> Self {
        Self {
            item: Item::new(timestamp, id),
        }
    }

    /// A bound that sits exactly at `item`.
    pub const fn from_item(item: &Item) -> Self {
        Self { item: *item }
    }

    /// Create a bound from an id prefix, zero-padding it to a full id.
    ///
    /// Reconciliation messages carry the shortest prefix that separates two
    /// neighbouring items; padding with zeros yields the smallest id with
    /// that prefix.
    pub fn with_id_prefix(timestamp: u64, prefix: &[u8]) -> Result<Self> {
        if prefix.len() > ID_SIZE {
            return Err(StorageError::BadIdSize {
                expected: ID_SIZE,
                actual: prefix.len(),
            });
        }
        let mut id = [0u8; ID_SIZE];
        id[..prefix.len()].copy_from_slice(prefix);
        Ok(Self::new(timestamp, ItemId(id)))
    }

    /// The bound past every item whose timestamp is below `u64::MAX`.
    ///
    /// Timestamp `u64::MAX` is reserved for this bound. Vectors still accept
    /// such items, but they sort at or above infinity, so a range ending at
    /// infinity does not cover them.
    pub const fn infinity() -> Self {
        Self::new(u64::MAX, ItemId::ZERO)
    }

    /// True if this is [`Bound::infinity`].
    pub fn is_infinity(&self) -> bool {
        *self == Self::infinity()
    }

    /// True if `item` sorts strictly before this bound.
    pub fn is_above(&self, item: &Item) -> bool {
        item.less_than(&self.item)
    }
}

impl From<Item> for Bound {
    fn from(item: Item) -> Self {
        Self { item }
    }
}

impl fmt::Debug for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinity() {
            write!(f, "Bound(inf)")
        } else {
            write!(f, "Bound({}, {})", self.item.timestamp, self.item.id)
        }
    }
}
