//! A sorted item vector with a runtime seal flag.
//!
//! Items are appended while the vector is open. [`Vector::seal`] sorts them
//! and rejects duplicates; only then do queries succeed. [`Vector::unseal`]
//! reopens the vector for inserts without touching its contents, and the
//! next seal validates everything again.
//!
//! For a compile-time version of the same lifecycle see
//! [`VectorBuilder`](crate::VectorBuilder) and
//! [`SealedVector`](crate::SealedVector).

use crate::config::VectorConfig;
use crate::error::{Result, StorageError};
use crate::item::{Bound, Item};
use crate::sealed::{SealedVector, VectorBuilder};
use crate::storage::{self, find_duplicate, sort_items, RangeIter, Storage};
use crate::types::ItemId;

/// Sorted, duplicate-free item storage with an explicit seal step.
#[derive(Debug, Clone, Default)]
pub struct Vector {
    items: Vec<Item>,
    sealed: bool,
}

impl Vector {
    /// Create an empty, open vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty, open vector using `config`.
    pub fn with_config(config: &VectorConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.initial_capacity),
            sealed: false,
        }
    }

    /// Append an item built from `timestamp` and `id`.
    ///
    /// Fails with [`StorageError::AlreadySealed`] once sealed, and with
    /// [`StorageError::BadIdSize`] if `id` is not exactly
    /// [`ID_SIZE`](crate::ID_SIZE) bytes.
    pub fn insert(&mut self, timestamp: u64, id: &[u8]) -> Result<()> {
        if self.sealed {
            return Err(StorageError::AlreadySealed);
        }
        let id = ItemId::from_slice(id)?;
        self.items.push(Item::new(timestamp, id));
        Ok(())
    }

    /// Append an existing item.
    pub fn insert_item(&mut self, item: Item) -> Result<()> {
        self.insert(item.timestamp, item.id.as_bytes())
    }

    /// Sort the items and validate that none repeat.
    ///
    /// On [`StorageError::DuplicateItem`] the vector stays open but its items
    /// are left in sorted order.
    pub fn seal(&mut self) -> Result<()> {
        if self.sealed {
            return Err(StorageError::AlreadySealed);
        }

        sort_items(&mut self.items);
        if let Some(pos) = find_duplicate(&self.items) {
            let dup = self.items[pos];
            tracing::warn!(item = %dup, "duplicate item, vector left unsealed");
            return Err(StorageError::DuplicateItem(dup));
        }

        self.sealed = true;
        tracing::debug!(size = self.items.len(), "vector sealed");
        Ok(())
    }

    /// Reopen the vector for inserts. Contents are kept as they are.
    pub fn unseal(&mut self) {
        self.sealed = false;
        tracing::debug!(size = self.items.len(), "vector unsealed");
    }

    /// Whether queries are currently allowed.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// All items, whatever the seal state.
    ///
    /// After a failed seal this is the sorted sequence, so duplicates sit
    /// next to each other.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Lazy iterator over `[begin, end)`.
    pub fn range(&self, begin: usize, end: usize) -> Result<RangeIter<'_>> {
        self.check_sealed()?;
        storage::range(&self.items, begin, end)
    }

    fn check_sealed(&self) -> Result<()> {
        if !self.sealed {
            return Err(StorageError::NotSealed);
        }
        Ok(())
    }
}

impl Storage for Vector {
    /// Number of items if sealed, otherwise `0`.
    fn size(&self) -> usize {
        if self.check_sealed().is_err() {
            return 0;
        }
        self.items.len()
    }

    fn get_item(&self, index: usize) -> Result<Item> {
        self.check_sealed()?;
        storage::get_item(&self.items, index)
    }

    fn iterate<F>(&self, begin: usize, end: usize, visit: F) -> Result<()>
    where
        F: FnMut(&Item, usize) -> bool,
    {
        self.check_sealed()?;
        storage::iterate(&self.items, begin, end, visit)
    }

    fn find_lower_bound(&self, begin: usize, end: usize, bound: &Bound) -> Result<usize> {
        self.check_sealed()?;
        storage::lower_bound(&self.items, begin, end, bound)
    }
}

impl From<VectorBuilder> for Vector {
    fn from(builder: VectorBuilder) -> Self {
        Self {
            items: builder.into_items(),
            sealed: false,
        }
    }
}

impl From<SealedVector> for Vector {
    fn from(sealed: SealedVector) -> Self {
        Self {
            items: sealed.into_items(),
            sealed: true,
        }
    }
}
