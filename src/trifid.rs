//! Trifid permutation: a stride-3 shuffle of the ternary digit vector.
//!
//! `mix` pulls every third digit starting at offsets 0, 1, 2 into three runs
//! and concatenates them; `unmix` cuts the vector into contiguous thirds and
//! interleaves them back. Classical trifid fractionation, keyless and exactly
//! self-inverse as a pair.

use crate::codebook::Codebook;
use crate::error::CipherResult;

/// Permute a text by stride-3 digit selection.
pub fn mix(book: &Codebook, text: &str) -> CipherResult<String> {
    let digits = book.encode(text);
    let mut mixed = Vec::with_capacity(digits.len());
    for offset in 0..3 {
        mixed.extend(digits.iter().skip(offset).step_by(3));
    }
    book.decode(&mixed)
}

/// Invert [`mix`]: split into contiguous thirds and re-interleave.
pub fn unmix(book: &Codebook, text: &str) -> CipherResult<String> {
    let digits = book.encode(text);
    let n = digits.len() / 3;
    let mut unmixed = vec![0u8; digits.len()];
    for offset in 0..3 {
        for (k, &digit) in digits[offset * n..(offset + 1) * n].iter().enumerate() {
            unmixed[3 * k + offset] = digit;
        }
    }
    book.decode(&unmixed)
}
