//! Order-independent range digests.
//!
//! Each item is hashed with Blake3 and the 32-byte digest is treated as a
//! little-endian 256-bit integer. The accumulator is the sum of these
//! integers modulo 2^256, so absorption order never matters. A fingerprint
//! is Blake3 over the sum and the varint-encoded item count, truncated to
//! [`FINGERPRINT_SIZE`] bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::item::Item;
use crate::types::FINGERPRINT_SIZE;
use crate::varint::encode_varint;

/// Domain separator for per-item digests.
pub const ITEM_DOMAIN: &[u8] = b"rangesync-item-v0:";

/// Domain separator for fingerprint finalization.
pub const FINGERPRINT_DOMAIN: &[u8] = b"rangesync-fingerprint-v0:";

const LIMBS: usize = 4;

/// A 16-byte range fingerprint.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub [u8; FINGERPRINT_SIZE]);

impl Fingerprint {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; FINGERPRINT_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_SIZE] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != FINGERPRINT_SIZE {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; FINGERPRINT_SIZE];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; FINGERPRINT_SIZE]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_SIZE]) -> Self {
        Self(bytes)
    }
}

/// Running sum of item digests modulo 2^256.
///
/// Limbs are little-endian: `limbs[0]` holds the least significant 64 bits.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Accumulator {
    limbs: [u64; LIMBS],
}

impl Accumulator {
    /// Create an accumulator at the identity (zero).
    pub const fn new() -> Self {
        Self { limbs: [0; LIMBS] }
    }

    /// Reset to the identity.
    pub fn reset(&mut self) {
        self.limbs = [0; LIMBS];
    }

    /// True if the accumulator is at the identity.
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// The digest an item contributes to the sum.
    pub fn item_digest(item: &Item) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(ITEM_DOMAIN);
        hasher.update(&item.encode());
        *hasher.finalize().as_bytes()
    }

    /// Absorb one item.
    pub fn add_item(&mut self, item: &Item) {
        self.add_limbs(&limbs_from_le(&Self::item_digest(item)));
    }

    /// Remove one previously absorbed item.
    pub fn sub_item(&mut self, item: &Item) {
        let mut other = Self {
            limbs: limbs_from_le(&Self::item_digest(item)),
        };
        other.negate();
        self.add_limbs(&other.limbs);
    }

    /// Add another accumulator's sum into this one.
    pub fn add_accumulator(&mut self, other: &Accumulator) {
        self.add_limbs(&other.limbs);
    }

    /// Subtract another accumulator's sum from this one.
    pub fn sub_accumulator(&mut self, other: &Accumulator) {
        let mut neg = *other;
        neg.negate();
        self.add_limbs(&neg.limbs);
    }

    /// Replace the sum with its additive inverse modulo 2^256.
    pub fn negate(&mut self) {
        for limb in &mut self.limbs {
            *limb = !*limb;
        }
        self.add_limbs(&[1, 0, 0, 0]);
    }

    /// The running sum as 32 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.limbs.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Finalize the sum together with the number of absorbed items.
    ///
    /// The count is part of the hash input, so two ranges whose sums collide
    /// but whose sizes differ still get different fingerprints.
    pub fn fingerprint(&self, count: u64) -> Fingerprint {
        let mut hasher = blake3::Hasher::new();
        hasher.update(FINGERPRINT_DOMAIN);
        hasher.update(&self.to_bytes());
        hasher.update(&encode_varint(count));

        let mut out = [0u8; FINGERPRINT_SIZE];
        out.copy_from_slice(&hasher.finalize().as_bytes()[..FINGERPRINT_SIZE]);
        Fingerprint(out)
    }

    fn add_limbs(&mut self, rhs: &[u64; LIMBS]) {
        let mut carry = false;
        for (limb, &r) in self.limbs.iter_mut().zip(rhs.iter()) {
            let (sum, c1) = limb.overflowing_add(r);
            let (sum, c2) = sum.overflowing_add(u64::from(carry));
            *limb = sum;
            carry = c1 || c2;
        }
    }
}

impl fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accumulator({})", &hex::encode(self.to_bytes())[..16])
    }
}

fn limbs_from_le(bytes: &[u8; 32]) -> [u64; LIMBS] {
    let mut limbs = [0u64; LIMBS];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(word);
    }
    limbs
}
