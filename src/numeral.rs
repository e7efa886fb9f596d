//! Numeral conversion between texts and ring values.
//!
//! A text of length L corresponds to a vector of 3L ternary digits and hence
//! to an element of Z/3^(3L)Z. The digit-significance convention is fixed
//! and load-bearing for every downstream transform:
//!
//! - the FIRST character of a text is the LEAST significant,
//! - within one character the first tree-walk digit is the most significant
//!   of its triple,
//!
//! so a single character's value is its alphabet index under the balanced
//! tree, and `as_integer(text) = Σ value(char_j) · 27^j`. The polynomial
//! ring reads the same little-endian digit sequence as coefficients, digit k
//! as the coefficient of x^k, which makes invertibility in both rings depend
//! on the same digit.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::codebook::Codebook;
use crate::error::CipherResult;

/// Little-endian ring digits of a text: digit k is the coefficient of 3^k.
pub fn ring_digits(book: &Codebook, text: &str) -> Vec<u8> {
    let path_digits = book.encode(text);
    let mut digits = Vec::with_capacity(path_digits.len());
    for triple in path_digits.chunks(3) {
        // Reverse within the character: the walk's first digit is the most
        // significant of the triple.
        digits.extend(triple.iter().rev());
    }
    digits
}

/// Rebuild a text from little-endian ring digits. The digit count must be a
/// multiple of 3.
pub fn text_from_ring_digits(book: &Codebook, digits: &[u8]) -> CipherResult<String> {
    let mut path_digits = Vec::with_capacity(digits.len());
    for triple in digits.chunks(3) {
        path_digits.extend(triple.iter().rev());
    }
    book.decode(&path_digits)
}

/// Ring value of a text: fold its ternary digits into one unsigned integer.
pub fn as_integer(book: &Codebook, text: &str) -> BigUint {
    let mut z = BigUint::zero();
    for &digit in ring_digits(book, text).iter().rev() {
        z = z * 3u32 + digit as u32;
    }
    z
}

/// Inverse of [`as_integer`]: emit `3 * length` digits least-significant
/// first by repeated division and re-encode. Bits of `z` beyond the target
/// length are reduced away, so the result always represents
/// `z mod 3^(3*length)`.
pub fn as_text(book: &Codebook, z: &BigUint, length: usize) -> CipherResult<String> {
    let mut digits = Vec::with_capacity(3 * length);
    let mut z = z.clone();
    for _ in 0..3 * length {
        let digit = (&z % 3u32).to_u8().unwrap_or(0);
        digits.push(digit);
        z /= 3u32;
    }
    text_from_ring_digits(book, &digits)
}
