//! Legacy password checksum
//!
//! Obscures stored passwords in the demo store; provides no security
//! guarantee. The output must stay bit-compatible with hashes already
//! persisted by older installs, so the algorithm is fixed: a rolling
//! `h = h * 31 + code_unit` over UTF-16 code units with wrapping 32-bit
//! signed arithmetic, rendered in base-36 with a leading `-` for negative
//! values.

/// Non-cryptographic rolling checksum of a password string.
///
/// Pure and deterministic: equal inputs always produce equal output.
pub fn weak_hash(input: &str) -> String {
    let mut hash: i32 = 0;
    for unit in input.encode_utf16() {
        // (h << 5) - h == h * 31 under wrapping arithmetic
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    to_base36(hash)
}

fn to_base36(value: i32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    // widen before abs: i32::MIN has no i32 absolute value
    let mut magnitude = i64::from(value).unsigned_abs();
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % 36) as usize]);
        magnitude /= 36;
    }

    let mut out = String::with_capacity(digits.len() + 1);
    if value < 0 {
        out.push('-');
    }
    for &d in digits.iter().rev() {
        out.push(d as char);
    }
    out
}
