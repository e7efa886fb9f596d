//! Heisenberg twist: a character-local, non-abelian add/subtract.
//!
//! Each character is its digit triple (p0, p1, p2); the key repeats
//! cyclically. Addition is componentwise mod 3 plus a multiplicative cross
//! term feeding the middle digit:
//!
//! ```text
//! c0 = p0 + k0
//! c1 = p1 + k1 + p0·k2
//! c2 = p2 + k2          (all mod 3)
//! ```
//!
//! The cross term makes the operation a shear rather than a translation, so
//! the inverse is not a naive negation: `subtract` forms the inverse key
//! triple (-k0, k0·k2 - k1, -k2) and reapplies the same addition. The group
//! law is that of the Heisenberg group over GF(3); no carry ever crosses a
//! character boundary.

use crate::codebook::Codebook;
use crate::error::{CipherError, CipherResult};

fn twist(p: &[u8], k: &[u8]) -> [u8; 3] {
    [
        (p[0] + k[0]) % 3,
        (p[1] + k[1] + p[0] * k[2]) % 3,
        (p[2] + k[2]) % 3,
    ]
}

fn apply(book: &Codebook, key: &str, text: &str, invert_key: bool) -> CipherResult<String> {
    let key_digits = book.encode(key);
    if key_digits.is_empty() {
        return Err(CipherError::MissingKey(if invert_key {
            "subtract"
        } else {
            "add"
        }));
    }
    let key_triples: Vec<&[u8]> = key_digits.chunks(3).collect();
    let text_digits = book.encode(text);
    let mut out = Vec::with_capacity(text_digits.len());
    for (i, p) in text_digits.chunks(3).enumerate() {
        let k = key_triples[i % key_triples.len()];
        if invert_key {
            let inverse = [
                (3 - k[0]) % 3,
                (k[0] * k[2] + 6 - k[1]) % 3,
                (3 - k[2]) % 3,
            ];
            out.extend(twist(p, &inverse));
        } else {
            out.extend(twist(p, k));
        }
    }
    book.decode(&out)
}

/// Twist-add a key onto a text, character by character.
pub fn add(book: &Codebook, key: &str, text: &str) -> CipherResult<String> {
    apply(book, key, text, false)
}

/// Invert [`add`]: recover the plaintext from ciphertext and key.
pub fn subtract(book: &Codebook, key: &str, text: &str) -> CipherResult<String> {
    apply(book, key, text, true)
}
