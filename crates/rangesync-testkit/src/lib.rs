//! # rangesync testkit
//!
//! Testing utilities for rangesync.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known item sets and ranges whose fingerprints must agree across implementations
//! - **Generators**: Proptest strategies for items, bounds and ranges
//! - **Fixtures**: Deterministic item sets, seeded shuffles and pre-sealed vectors
//!
//! ## Golden Vectors
//!
//! ```rust
//! use rangesync_testkit::vectors::{all_vectors, compute_fingerprint};
//!
//! for vector in all_vectors() {
//!     let fp = compute_fingerprint(&vector).unwrap();
//!     println!("{}: {}", vector.name, fp);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use rangesync_core::Storage;
//! use rangesync_testkit::{fixtures::sealed_vector, generators::unique_items};
//!
//! proptest! {
//!     #[test]
//!     fn whole_range_fingerprint_is_stable(items in unique_items(32)) {
//!         let v = sealed_vector(&items);
//!         prop_assert_eq!(v.fingerprint(0, v.size())?, v.fingerprint(0, v.size())?);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use rangesync_core::Storage;
//! use rangesync_testkit::fixtures::{random_items, sealed_vector};
//!
//! let vector = sealed_vector(&random_items(100, 7));
//! assert_eq!(vector.size(), 100);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{random_items, sealed, sealed_vector, shuffled, PartyPair};
pub use generators::{bound, item, item_id, unique_items};
pub use vectors::{all_vectors, compute_fingerprint, verify_all_vectors, GoldenVector};
