//! Typestate form of the seal lifecycle.
//!
//! [`VectorBuilder`] only accepts inserts and [`SealedVector`] only answers
//! queries, so the `NotSealed` and `AlreadySealed` cases cannot occur.
//! Ownership moves between the two on [`VectorBuilder::seal`] and
//! [`SealedVector::unseal`]; the item buffer is never copied.

use thiserror::Error;

use crate::config::VectorConfig;
use crate::error::{Result, StorageError};
use crate::item::{Bound, Item};
use crate::storage::{self, find_duplicate, sort_items, RangeIter, Storage};
use crate::types::ItemId;

/// An open vector accepting inserts.
#[derive(Debug, Clone, Default)]
pub struct VectorBuilder {
    items: Vec<Item>,
}

/// A failed seal. Carries the builder back with its items sorted.
#[derive(Debug, Error)]
#[error("seal failed: {error}")]
pub struct SealFailure {
    /// Why sealing failed.
    #[source]
    pub error: StorageError,
    /// The builder, items sorted, duplicates adjacent.
    pub builder: VectorBuilder,
}

impl VectorBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder using `config`.
    pub fn with_config(config: &VectorConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.initial_capacity),
        }
    }

    /// Append an item built from `timestamp` and `id`.
    pub fn insert(&mut self, timestamp: u64, id: &[u8]) -> Result<()> {
        let id = ItemId::from_slice(id)?;
        self.items.push(Item::new(timestamp, id));
        Ok(())
    }

    /// Append an existing item.
    pub fn insert_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Number of items inserted so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in their current order.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Sort and drop repeated items so the next seal succeeds.
    ///
    /// Returns how many items were removed.
    pub fn dedup(&mut self) -> usize {
        let before = self.items.len();
        sort_items(&mut self.items);
        self.items.dedup();
        before - self.items.len()
    }

    /// Sort, validate, and hand the items over to a [`SealedVector`].
    pub fn seal(mut self) -> std::result::Result<SealedVector, SealFailure> {
        sort_items(&mut self.items);
        if let Some(pos) = find_duplicate(&self.items) {
            let dup = self.items[pos];
            tracing::warn!(item = %dup, "duplicate item, builder returned unsealed");
            return Err(SealFailure {
                error: StorageError::DuplicateItem(dup),
                builder: self,
            });
        }

        tracing::debug!(size = self.items.len(), "vector sealed");
        Ok(SealedVector { items: self.items })
    }

    pub(crate) fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl Extend<Item> for VectorBuilder {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<Item> for VectorBuilder {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// A sealed vector: strictly ascending, no duplicates, read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedVector {
    items: Vec<Item>,
}

impl SealedVector {
    /// Reopen for inserts. Items keep their sorted order.
    pub fn unseal(self) -> VectorBuilder {
        tracing::debug!(size = self.items.len(), "vector unsealed");
        VectorBuilder { items: self.items }
    }

    /// The sorted items.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Lazy iterator over `[begin, end)`.
    pub fn range(&self, begin: usize, end: usize) -> Result<RangeIter<'_>> {
        storage::range(&self.items, begin, end)
    }

    pub(crate) fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl Storage for SealedVector {
    fn size(&self) -> usize {
        self.items.len()
    }

    fn get_item(&self, index: usize) -> Result<Item> {
        storage::get_item(&self.items, index)
    }

    fn iterate<F>(&self, begin: usize, end: usize, visit: F) -> Result<()>
    where
        F: FnMut(&Item, usize) -> bool,
    {
        storage::iterate(&self.items, begin, end, visit)
    }

    fn find_lower_bound(&self, begin: usize, end: usize, bound: &Bound) -> Result<usize> {
        storage::lower_bound(&self.items, begin, end, bound)
    }
}

impl<'a> IntoIterator for &'a SealedVector {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ID_SIZE;
    use crate::Vector;

    fn item(timestamp: u64, fill: u8) -> Item {
        Item::new(timestamp, ItemId([fill; ID_SIZE]))
    }

    #[test]
    fn test_seal_and_query() {
        let builder: VectorBuilder = vec![item(3, 3), item(1, 1), item(2, 2)].into_iter().collect();
        let sealed = builder.seal().unwrap();

        assert_eq!(sealed.size(), 3);
        assert_eq!(sealed.get_item(0).unwrap(), item(1, 1));
        assert_eq!(sealed.find_lower_bound(0, 3, &Bound::from_item(&item(2, 2))), Ok(1));
    }

    #[test]
    fn test_seal_failure_returns_sorted_builder() {
        let mut builder = VectorBuilder::new();
        builder.extend([item(5, 5), item(1, 1), item(5, 5)]);

        let failure = builder.seal().unwrap_err();
        assert_eq!(failure.error, StorageError::DuplicateItem(item(5, 5)));
        assert_eq!(failure.builder.as_slice(), &[item(1, 1), item(5, 5), item(5, 5)]);

        let mut builder = failure.builder;
        assert_eq!(builder.dedup(), 1);
        let sealed = builder.seal().unwrap();
        assert_eq!(sealed.size(), 2);
    }

    #[test]
    fn test_unseal_round_trip_keeps_items() {
        let mut builder = VectorBuilder::with_config(&VectorConfig::with_capacity(4));
        builder.insert(2, &[2u8; ID_SIZE]).unwrap();
        builder.insert_item(item(1, 1));

        let sealed = builder.seal().unwrap();
        let mut reopened = sealed.unseal();
        assert_eq!(reopened.len(), 2);

        reopened.insert_item(item(0, 0));
        let sealed = reopened.seal().unwrap();
        assert_eq!(sealed.get_item(0).unwrap(), item(0, 0));
    }

    #[test]
    fn test_builder_rejects_bad_id() {
        let mut builder = VectorBuilder::new();
        assert!(matches!(
            builder.insert(1, &[0u8; 3]),
            Err(StorageError::BadIdSize { actual: 3, .. })
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_sealed_matches_runtime_vector() {
        let items = [item(9, 1), item(4, 2), item(7, 3), item(4, 1)];

        let sealed: SealedVector = items.iter().copied().collect::<VectorBuilder>().seal().unwrap();

        let mut runtime = Vector::new();
        for it in items {
            runtime.insert_item(it).unwrap();
        }
        runtime.seal().unwrap();

        assert_eq!(sealed.as_slice(), runtime.as_slice());
        assert_eq!(sealed.fingerprint(0, 4).unwrap(), runtime.fingerprint(0, 4).unwrap());
        assert_eq!(sealed.fingerprint(1, 3).unwrap(), runtime.fingerprint(1, 3).unwrap());
    }

    #[test]
    fn test_conversions_into_vector() {
        let builder: VectorBuilder = [item(2, 2), item(1, 1)].into_iter().collect();
        let open = Vector::from(builder.clone());
        assert!(!open.is_sealed());

        let sealed = Vector::from(builder.seal().unwrap());
        assert!(sealed.is_sealed());
        assert_eq!(sealed.size(), 2);
    }

    #[test]
    fn test_sealed_bad_range() {
        let sealed = VectorBuilder::new().seal().unwrap();
        assert_eq!(sealed.size(), 0);
        assert!(sealed.iterate(1, 0, |_, _| true).is_err());
        assert!(sealed.fingerprint(0, 0).is_ok());
        assert!(sealed.range(0, 1).is_err());
    }

    #[test]
    fn test_into_iter_borrowed() {
        let sealed: SealedVector = [item(2, 2), item(1, 1)]
            .into_iter()
            .collect::<VectorBuilder>()
            .seal()
            .unwrap();
        let stamps: Vec<u64> = (&sealed).into_iter().map(|i| i.timestamp).collect();
        assert_eq!(stamps, vec![1, 2]);
    }
}
