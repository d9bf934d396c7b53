//! Variable-length integer encoding.
//!
//! Base-128, most significant group first. Every byte except the last has
//! the high bit set. Zero encodes as a single `0x00` byte. This is the
//! canonical encoding of the item count mixed into a fingerprint.

/// Maximum encoded length of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

/// Encode `n` as a varint.
pub fn encode_varint(mut n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }

    let mut out = Vec::with_capacity(MAX_VARINT_LEN);
    while n != 0 {
        out.push((n & 0x7f) as u8);
        n >>= 7;
    }
    out.reverse();

    let last = out.len() - 1;
    for byte in &mut out[..last] {
        *byte |= 0x80;
    }
    out
}

/// Decode a varint from the front of `buf`.
///
/// Returns the value and the number of bytes consumed, or `None` if the
/// input ends mid-varint or the value does not fit in a `u64`.
pub fn decode_varint(buf: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in buf.iter().enumerate() {
        if value > (u64::MAX >> 7) {
            return None;
        }
        value = (value << 7) | u64::from(byte & 0x7f);
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encodings() {
        assert_eq!(encode_varint(0), vec![0x00]);
        assert_eq!(encode_varint(1), vec![0x01]);
        assert_eq!(encode_varint(127), vec![0x7f]);
        assert_eq!(encode_varint(128), vec![0x81, 0x00]);
        assert_eq!(encode_varint(300), vec![0x82, 0x2c]);
        assert_eq!(encode_varint(16384), vec![0x81, 0x80, 0x00]);
    }

    #[test]
    fn test_max_value_fits() {
        let enc = encode_varint(u64::MAX);
        assert_eq!(enc.len(), MAX_VARINT_LEN);
        assert_eq!(decode_varint(&enc), Some((u64::MAX, MAX_VARINT_LEN)));
    }

    #[test]
    fn test_decode_stops_at_terminator() {
        let buf = [0x82, 0x2c, 0xff, 0xff];
        assert_eq!(decode_varint(&buf), Some((300, 2)));
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(decode_varint(&[]), None);
        assert_eq!(decode_varint(&[0x81]), None);
    }

    #[test]
    fn test_decode_overflow() {
        let too_long = [0xff; 11];
        assert_eq!(decode_varint(&too_long), None);
    }
}
