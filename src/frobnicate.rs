//! Frobnicate: a keyless involution through bijective numeration.
//!
//! The text is folded most-significant-first into an integer using zero-free
//! (bijective) base 27, where each symbol contributes its alphabet index
//! plus one. That integer is rewritten in bijective base 2, the digit
//! string's significance order is reversed, and the result is mapped back
//! through bijective base 27 to symbols. Reversing a bijective-base digit
//! string is itself a bijection, and reversing twice is the identity, so the
//! transform is exactly self-inverse (after case folding and alphabet
//! coercion). Bijective numeration has no zero digit, which is what makes
//! the reversal well-defined: no leading-zero ambiguity exists.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::codebook::{symbol_at, symbol_index};

/// Digits of `z` in bijective base `radix`, least significant first, each in
/// `1..=radix`.
fn bijective_digits(z: &BigUint, radix: u32) -> Vec<u32> {
    let mut digits = Vec::new();
    let mut z = z.clone();
    while !z.is_zero() {
        let rem = (&z % radix).to_u32().unwrap_or(0);
        if rem == 0 {
            digits.push(radix);
            z = &z / radix - 1u32;
        } else {
            digits.push(rem);
            z /= radix;
        }
    }
    digits
}

/// Frobnicate with an explicit intermediate radix.
pub fn frobnicate_radix(text: &str, radix: u32) -> String {
    let mut z = BigUint::zero();
    for c in text.chars() {
        z = z * 27u32 + (symbol_index(c) as u32 + 1);
    }

    // Rewrite in bijective base `radix`, then reinterpret the digit string
    // with its significance order reversed.
    let mut flipped = BigUint::zero();
    for digit in bijective_digits(&z, radix) {
        flipped = flipped * radix + digit;
    }

    let out_digits = bijective_digits(&flipped, 27);
    out_digits
        .iter()
        .rev()
        .map(|&d| symbol_at(d as usize - 1))
        .collect()
}

/// Frobnicate with the default intermediate radix of 2.
pub fn frobnicate(text: &str) -> String {
    frobnicate_radix(text, 2)
}
