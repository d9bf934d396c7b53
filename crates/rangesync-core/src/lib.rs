//! # rangesync core
//!
//! Sorted item storage and range fingerprints for range-based set
//! reconciliation.
//!
//! This crate contains no I/O, no persistence, no networking. Two parties
//! each build a vector over the same item space, seal it, and compare
//! fingerprints of matching ranges to find where their sets differ.
//!
//! ## Key Types
//!
//! - [`Item`] - A timestamp and a 32-byte [`ItemId`], ordered by both
//! - [`Bound`] - A search key locating the first item not less than it
//! - [`Accumulator`] - Order-independent sum of item digests
//! - [`Fingerprint`] - 16-byte summary of a range, derived from the sum and count
//! - [`Vector`] - Sorted storage with a runtime seal flag
//! - [`VectorBuilder`] / [`SealedVector`] - The same lifecycle as two types
//! - [`Storage`] - The read-side trait reconciliation is written against
//!
//! Timestamp `u64::MAX` is reserved for [`Bound::infinity`], the open
//! upper end of the item space. Items carrying it sort at or past that
//! bound and are left out of any range that ends there.
//!
//! ## Lifecycle
//!
//! ```rust
//! use rangesync_core::{Bound, Storage, Vector, ID_SIZE};
//!
//! let mut vector = Vector::new();
//! vector.insert(100, &[1u8; ID_SIZE]).unwrap();
//! vector.insert(50, &[2u8; ID_SIZE]).unwrap();
//! vector.seal().unwrap();
//!
//! assert_eq!(vector.size(), 2);
//! assert_eq!(vector.get_item(0).unwrap().timestamp, 50);
//! assert_eq!(vector.find_lower_bound(0, 2, &Bound::infinity()).unwrap(), 2);
//! let whole = vector.fingerprint(0, vector.size()).unwrap();
//! println!("{whole}");
//! ```

pub mod accumulator;
pub mod config;
pub mod error;
pub mod item;
pub mod sealed;
pub mod storage;
pub mod types;
pub mod varint;
pub mod vector;

pub use accumulator::{Accumulator, Fingerprint};
pub use config::VectorConfig;
pub use error::{Result, StorageError};
pub use item::{Bound, Item, ITEM_ENCODED_SIZE};
pub use sealed::{SealFailure, SealedVector, VectorBuilder};
pub use storage::{check_bounds, find_duplicate, sort_items, RangeIter, Storage};
pub use types::{ItemId, FINGERPRINT_SIZE, ID_SIZE};
pub use varint::{decode_varint, encode_varint};
pub use vector::Vector;
