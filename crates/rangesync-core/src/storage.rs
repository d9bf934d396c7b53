//! The read-side storage interface used by reconciliation.
//!
//! A reconciliation session only needs positional access, bounded
//! iteration, lower-bound search and range fingerprints over a sorted,
//! duplicate-free item sequence. [`Storage`] captures exactly that, so the
//! session can be written once and run over any backing store.
//!
//! The free functions here are the slice-level building blocks shared by
//! [`Vector`](crate::Vector) and [`SealedVector`](crate::SealedVector).

use std::iter::FusedIterator;

use crate::accumulator::{Accumulator, Fingerprint};
use crate::error::{Result, StorageError};
use crate::item::{Bound, Item};

/// Read access to a sorted, duplicate-free sequence of items.
///
/// All ranges are half-open `[begin, end)` over positions in sorted order.
pub trait Storage {
    /// Number of items available for queries.
    fn size(&self) -> usize;

    /// The item at sorted position `index`.
    fn get_item(&self, index: usize) -> Result<Item>;

    /// Visit each item in `[begin, end)` in ascending order.
    ///
    /// `visit` receives the item and its position and returns `false` to
    /// stop early.
    fn iterate<F>(&self, begin: usize, end: usize, visit: F) -> Result<()>
    where
        F: FnMut(&Item, usize) -> bool;

    /// Smallest position `i` in `[begin, end]` whose item is not less than
    /// `bound`, or `end` if every item in range is less.
    fn find_lower_bound(&self, begin: usize, end: usize, bound: &Bound) -> Result<usize>;

    /// Fingerprint of the items in `[begin, end)`.
    fn fingerprint(&self, begin: usize, end: usize) -> Result<Fingerprint> {
        let mut acc = Accumulator::new();
        self.iterate(begin, end, |item, _| {
            acc.add_item(item);
            true
        })?;
        tracing::trace!(begin, end, "range fingerprint");
        Ok(acc.fingerprint((end - begin) as u64))
    }
}

/// Sort items into canonical (timestamp, id) order.
pub fn sort_items(items: &mut [Item]) {
    // Equal items are indistinguishable, so stability buys nothing.
    items.sort_unstable();
}

/// Position of the first item that equals its predecessor.
///
/// Only meaningful on sorted input, where duplicates are adjacent.
pub fn find_duplicate(items: &[Item]) -> Option<usize> {
    items
        .windows(2)
        .position(|pair| pair[0].equals(&pair[1]))
        .map(|i| i + 1)
}

/// Reject `begin > end` and `end > size`.
pub fn check_bounds(size: usize, begin: usize, end: usize) -> Result<()> {
    if begin > end || end > size {
        return Err(StorageError::BadRange { begin, end, size });
    }
    Ok(())
}

pub(crate) fn get_item(items: &[Item], index: usize) -> Result<Item> {
    items
        .get(index)
        .copied()
        .ok_or(StorageError::IndexOutOfBounds {
            index,
            size: items.len(),
        })
}

pub(crate) fn iterate<F>(items: &[Item], begin: usize, end: usize, mut visit: F) -> Result<()>
where
    F: FnMut(&Item, usize) -> bool,
{
    check_bounds(items.len(), begin, end)?;
    for (offset, item) in items[begin..end].iter().enumerate() {
        if !visit(item, begin + offset) {
            break;
        }
    }
    Ok(())
}

pub(crate) fn lower_bound(items: &[Item], begin: usize, end: usize, bound: &Bound) -> Result<usize> {
    check_bounds(items.len(), begin, end)?;
    let pos = begin + items[begin..end].partition_point(|item| bound.is_above(item));
    tracing::trace!(begin, end, ?bound, pos, "lower bound");
    Ok(pos)
}

pub(crate) fn range(items: &[Item], begin: usize, end: usize) -> Result<RangeIter<'_>> {
    check_bounds(items.len(), begin, end)?;
    Ok(RangeIter {
        inner: items[begin..end].iter().enumerate(),
        offset: begin,
    })
}

/// Lazy iterator over a sealed range, yielding `(position, item)`.
///
/// Clone an unconsumed iterator to walk the same range more than once.
#[derive(Debug, Clone)]
pub struct RangeIter<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Item>>,
    offset: usize,
}

impl<'a> Iterator for RangeIter<'a> {
    type Item = (usize, &'a Item);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(i, item)| (self.offset + i, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for RangeIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(i, item)| (self.offset + i, item))
    }
}

impl ExactSizeIterator for RangeIter<'_> {}

impl FusedIterator for RangeIter<'_> {}
