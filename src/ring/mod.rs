//! Ring arithmetic over the ternary digit representation.
//!
//! A text of length n is an element of one of two rings over the same digit
//! alphabet:
//!
//! - the integer residue ring Z/3^(3n)Z, where digit k weighs 3^k and
//!   multiplication carries between digit positions, or
//! - the polynomial ring GF(3)[x]/(x^(3n)), where digit k is the coefficient
//!   of x^k and multiplication is carry-free convolution.
//!
//! Both expose the same operation set — `sum`, `difference`, `product`,
//! `quotient`, `inverse` — and the composite double-key schedules are
//! written once against the [`ResidueRing`] capability trait so their logic
//! cannot drift between the two variants. The working modulus of a binary
//! operation is always set by the longer operand; `inverse` takes an
//! explicit target length.
//!
//! Invertibility is decided by ring digit 0 in both rings: a value is a unit
//! iff it is not divisible by the ring's only prime (3, respectively x),
//! which both reduce to "the least significant digit is nonzero".

pub mod integer;
pub mod poly;

pub use integer::IntegerRing;
pub use poly::PolyRing;

use std::str::FromStr;

use crate::codebook::Codebook;
use crate::error::{CipherError, CipherResult};
use crate::numeral::{ring_digits, text_from_ring_digits};

/// Capability set a residue ring must provide: digit conversion, the three
/// ring operations, and the extended-Euclidean inverse.
pub trait ResidueRing {
    /// Ring element representation.
    type Elem: Clone;

    /// Build an element from little-endian ring digits.
    fn from_digits(&self, digits: &[u8]) -> Self::Elem;

    /// Emit exactly `3 * length` little-endian ring digits, reducing the
    /// element into the length-`length` ring first.
    fn to_digits(&self, value: &Self::Elem, length: usize) -> Vec<u8>;

    /// Addition modulo the length-`length` ring.
    fn add(&self, a: &Self::Elem, b: &Self::Elem, length: usize) -> Self::Elem;

    /// Subtraction modulo the length-`length` ring.
    fn sub(&self, a: &Self::Elem, b: &Self::Elem, length: usize) -> Self::Elem;

    /// Multiplication modulo the length-`length` ring.
    fn mul(&self, a: &Self::Elem, b: &Self::Elem, length: usize) -> Self::Elem;

    /// Multiplicative inverse in the length-`length` ring, by the ring's
    /// extended Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// [`CipherError::NotInvertible`] if the value is a zero-divisor.
    fn inverse(&self, value: &Self::Elem, length: usize) -> CipherResult<Self::Elem>;
}

/// Strategy for deriving two half-keys from one key for the two-stage
/// composite product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeySchedule {
    /// Split the doubled-length inverse key into two contiguous halves.
    Sequential,
    /// Split the doubled-length inverse key by even/odd symbol stride.
    Interleaved,
    /// Derive both half-keys from the same inverse key, offset by a fixed
    /// one-character increment (`C` for one half, `F` for the other).
    #[default]
    NilpotentShift,
}

impl FromStr for KeySchedule {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(KeySchedule::Sequential),
            "interleaved" => Ok(KeySchedule::Interleaved),
            "nilpotent-shift" | "nilpotent_shift" => Ok(KeySchedule::NilpotentShift),
            other => Err(CipherError::MalformedInput(format!(
                "unknown key schedule '{}'",
                other
            ))),
        }
    }
}

/// Reverse a text symbol-by-symbol (not digit-by-digit).
pub(crate) fn reverse_symbols(text: &str) -> String {
    text.chars().rev().collect()
}

/// Text-level ring operations over one ring variant and one codebook.
///
/// All methods are pure: they decode operands through the codebook, operate
/// in the ring, and re-encode at the working length.
pub struct RingOps<'a, R: ResidueRing> {
    ring: R,
    codebook: &'a Codebook,
}

/// Ring operations over Z/3^(3n)Z.
pub type IntegerOps<'a> = RingOps<'a, IntegerRing>;

/// Ring operations over GF(3)[x]/(x^(3n)).
pub type PolyOps<'a> = RingOps<'a, PolyRing>;

impl<'a, R: ResidueRing> RingOps<'a, R> {
    pub fn new(ring: R, codebook: &'a Codebook) -> Self {
        RingOps { ring, codebook }
    }

    fn elem(&self, text: &str) -> R::Elem {
        self.ring.from_digits(&ring_digits(self.codebook, text))
    }

    fn text(&self, value: &R::Elem, length: usize) -> CipherResult<String> {
        text_from_ring_digits(self.codebook, &self.ring.to_digits(value, length))
    }

    fn working_length(a: &str, b: &str) -> usize {
        a.chars().count().max(b.chars().count())
    }

    /// `a + b` in the ring of the longer operand.
    pub fn sum(&self, a: &str, b: &str) -> CipherResult<String> {
        let n = Self::working_length(a, b);
        self.text(&self.ring.add(&self.elem(a), &self.elem(b), n), n)
    }

    /// `a - b` in the ring of the longer operand (wraps modularly).
    pub fn difference(&self, a: &str, b: &str) -> CipherResult<String> {
        let n = Self::working_length(a, b);
        self.text(&self.ring.sub(&self.elem(a), &self.elem(b), n), n)
    }

    /// `text · key` in the ring of the longer operand.
    pub fn product(&self, text: &str, key: &str) -> CipherResult<String> {
        let n = Self::working_length(text, key);
        self.text(&self.ring.mul(&self.elem(text), &self.elem(key), n), n)
    }

    /// Multiplicative inverse of `key` in the length-`length` ring.
    pub fn inverse(&self, key: &str, length: usize) -> CipherResult<String> {
        let inv = self.ring.inverse(&self.elem(key), length)?;
        self.text(&inv, length)
    }

    /// `text / key`, i.e. `product(text, inverse(key))`.
    pub fn quotient(&self, text: &str, key: &str) -> CipherResult<String> {
        let n = Self::working_length(text, key);
        self.product(text, &self.inverse(key, n)?)
    }

    /// Two-stage product with an intermediate symbol-order reversal, the
    /// half-keys derived from `inverse(key)` by the chosen schedule.
    pub fn double_product(
        &self,
        text: &str,
        key: &str,
        schedule: KeySchedule,
    ) -> CipherResult<String> {
        let n = Self::working_length(text, key);
        let (h1, h2) = self.half_keys(key, n, schedule)?;
        let k1 = self.inverse(&h1, n)?;
        let k2 = self.inverse(&h2, n)?;
        let mid = self.product(text, &k1)?;
        self.product(&reverse_symbols(&mid), &k2)
    }

    /// Exact algebraic inverse of [`double_product`]: the quotient-side
    /// half-keys (not re-inverted) applied in reverse order around the same
    /// intermediate reversal.
    pub fn double_quotient(
        &self,
        text: &str,
        key: &str,
        schedule: KeySchedule,
    ) -> CipherResult<String> {
        let n = Self::working_length(text, key);
        let (h1, h2) = self.half_keys(key, n, schedule)?;
        let mid = self.product(text, &h2)?;
        self.product(&reverse_symbols(&mid), &h1)
    }

    /// Derive the quotient-side half-key pair for a schedule.
    ///
    /// For `sequential`/`interleaved` the doubled-length inverse key is
    /// split into two length-n halves; the low half always carries the
    /// inverse's nonzero constant digit, and a high half whose leading digit
    /// is zero (non-invertible) is replaced by the sum of the two halves,
    /// which restores a nonzero constant digit. The derivation is
    /// deterministic, so encrypt and decrypt agree on the fix-up.
    fn half_keys(
        &self,
        key: &str,
        n: usize,
        schedule: KeySchedule,
    ) -> CipherResult<(String, String)> {
        match schedule {
            KeySchedule::NilpotentShift => {
                let inv = self.inverse(key, n)?;
                Ok((self.sum(&inv, "C")?, self.sum(&inv, "F")?))
            }
            KeySchedule::Sequential | KeySchedule::Interleaved => {
                let inv = self.inverse(key, 2 * n)?;
                let chars: Vec<char> = inv.chars().collect();
                let (h1, mut h2): (String, String) = match schedule {
                    KeySchedule::Sequential => (
                        chars[..n].iter().collect(),
                        chars[n..].iter().collect(),
                    ),
                    _ => (
                        chars.iter().step_by(2).collect(),
                        chars.iter().skip(1).step_by(2).collect(),
                    ),
                };
                let lead = ring_digits(self.codebook, &h2);
                if lead.first().map_or(true, |&d| d == 0) {
                    h2 = self.sum(&h1, &h2)?;
                }
                Ok((h1, h2))
            }
        }
    }
}
