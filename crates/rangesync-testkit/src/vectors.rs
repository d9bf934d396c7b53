//! Golden fingerprint vectors for cross-implementation verification.
//!
//! Every implementation must derive the same fingerprint for the same item
//! set, regardless of insertion order or platform.

use rangesync_core::{Fingerprint, Item, Storage, StorageError};

use crate::fixtures::{item, item_with_first_byte, sealed_vector};

/// A golden fingerprint vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Items, in insertion order.
    pub items: Vec<Item>,
    /// Start of the fingerprinted range.
    pub begin: usize,
    /// End of the fingerprinted range (exclusive).
    pub end: usize,
    /// Expected fingerprint (hex). Empty means "report only".
    pub expected_fingerprint: &'static str,
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty range of empty vector",
            items: vec![],
            begin: 0,
            end: 0,
            expected_fingerprint: "",
        },
        GoldenVector {
            name: "single item",
            items: vec![item(1736870400, 0x42)],
            begin: 0,
            end: 1,
            expected_fingerprint: "",
        },
        GoldenVector {
            name: "three items sharing timestamps",
            items: vec![
                item_with_first_byte(100, 0x01),
                item_with_first_byte(50, 0x02),
                item_with_first_byte(50, 0x01),
            ],
            begin: 0,
            end: 3,
            expected_fingerprint: "",
        },
        GoldenVector {
            name: "middle sub-range",
            items: (0..8).map(|i| item(1000 + i, i as u8)).collect(),
            begin: 2,
            end: 6,
            expected_fingerprint: "",
        },
        GoldenVector {
            name: "extreme timestamps",
            items: vec![item(0, 0x00), item(u64::MAX - 1, 0xff)],
            begin: 0,
            end: 2,
            expected_fingerprint: "",
        },
    ]
}

/// Compute the fingerprint a vector describes.
pub fn compute_fingerprint(vector: &GoldenVector) -> Result<Fingerprint, StorageError> {
    sealed_vector(&vector.items).fingerprint(vector.begin, vector.end)
}

/// Check every golden vector.
///
/// Returns `(name, matches, actual_hex)` per vector. Vectors without an
/// expected value always match and report what was computed.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let hex = match compute_fingerprint(v) {
                Ok(fp) => fp.to_hex(),
                Err(e) => format!("error: {e}"),
            };
            let matches = v.expected_fingerprint.is_empty() || hex == v.expected_fingerprint;
            (v.name.to_string(), matches, hex)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::shuffled;

    #[test]
    fn test_vectors_are_deterministic() {
        for vector in all_vectors() {
            let fp1 = compute_fingerprint(&vector).unwrap();
            let fp2 = compute_fingerprint(&vector).unwrap();
            assert_eq!(fp1, fp2, "Vector '{}' produced different fingerprints", vector.name);
        }
    }

    #[test]
    fn test_vectors_ignore_insertion_order() {
        for vector in all_vectors() {
            let mut permuted = vector.clone();
            permuted.items = shuffled(&vector.items, 42);
            assert_eq!(
                compute_fingerprint(&vector).unwrap(),
                compute_fingerprint(&permuted).unwrap(),
                "Vector '{}' depends on insertion order",
                vector.name
            );
        }
    }

    #[test]
    fn test_all_vectors_verify() {
        for (name, matches, hex) in verify_all_vectors() {
            assert!(matches, "{name}: got {hex}");
            assert_eq!(hex.len(), 32, "{name}: fingerprint is 16 bytes");
        }
    }

    #[test]
    fn test_vectors_are_distinct() {
        let prints: Vec<String> = verify_all_vectors().into_iter().map(|(_, _, h)| h).collect();
        for i in 0..prints.len() {
            for j in (i + 1)..prints.len() {
                assert_ne!(prints[i], prints[j]);
            }
        }
    }
}
