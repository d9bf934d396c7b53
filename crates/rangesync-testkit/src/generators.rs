//! Proptest generators for property-based testing.

use proptest::prelude::*;

use rangesync_core::{Bound, Item, ItemId, ID_SIZE};

/// Generate a random ItemId.
pub fn item_id() -> impl Strategy<Value = ItemId> {
    any::<[u8; ID_SIZE]>().prop_map(ItemId::from_bytes)
}

/// Generate a timestamp below `u64::MAX`, which is reserved for
/// [`Bound::infinity`].
pub fn timestamp() -> impl Strategy<Value = u64> {
    0u64..u64::MAX
}

/// Generate an arbitrary item.
pub fn item() -> impl Strategy<Value = Item> {
    (timestamp(), item_id()).prop_map(|(ts, id)| Item::new(ts, id))
}

/// Generate an item from a small space so collisions and shared timestamps
/// are common.
pub fn dense_item() -> impl Strategy<Value = Item> {
    (0u64..16, 0u8..8).prop_map(|(ts, b)| Item::new(ts, ItemId([b; ID_SIZE])))
}

/// Generate a set of distinct items, in arbitrary order.
pub fn unique_items(max_len: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::btree_set(item(), 0..=max_len)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Generate a bound, occasionally infinity.
pub fn bound() -> impl Strategy<Value = Bound> {
    prop_oneof![
        9 => item().prop_map(Bound::from),
        1 => Just(Bound::infinity()),
    ]
}

/// Generate a half-open range `[begin, end)` inside `0..=size`.
pub fn range_within(size: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..=size, 0..=size).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangesync_core::{Storage, Vector};

    proptest! {
        #[test]
        fn test_unique_items_seal(items in unique_items(64)) {
            let mut v = Vector::new();
            for it in &items {
                v.insert_item(*it).unwrap();
            }
            prop_assert!(v.seal().is_ok());
            prop_assert_eq!(v.size(), items.len());
        }

        #[test]
        fn test_range_within_is_ordered((begin, end) in range_within(10)) {
            prop_assert!(begin <= end);
            prop_assert!(end <= 10);
        }

        #[test]
        fn test_timestamp_below_infinity(it in item()) {
            prop_assert!(Bound::infinity().is_above(&it));
        }
    }
}
