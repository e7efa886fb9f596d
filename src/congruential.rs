//! Affine-recurrence cipher: an LCG with jump-ahead.
//!
//! The generator `step(x) = (a·x + b) mod 3^(3n)` is a bijection on the ring
//! whenever a ≡ 1 (mod 3) and b is not divisible by 3. Those are exactly the
//! Hull–Dobell conditions for a power-of-3 modulus (the 4 | m clause is
//! vacuous for odd m), so the orbit of every state has length exactly m and
//! stepping backward by k is the same as stepping forward by m − k.
//!
//! Encryption advances the plaintext's ring value by `as_integer(key)` steps
//! without iterating: `advance` composes affine maps by
//! square-and-multiply, consuming the step count's bits from most
//! significant to least. Squaring the map x ↦ ux + v gives
//! x ↦ u²x + (u + 1)v, and a set bit folds in one more generator step.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::codebook::Codebook;
use crate::error::{CipherError, CipherResult};
use crate::numeral::{as_integer, as_text};
use crate::ring::integer::modulus;

/// A linear congruential generator over an arbitrary modulus.
#[derive(Debug, Clone)]
pub struct Lcg {
    multiplier: BigUint,
    offset: BigUint,
    modulus: BigUint,
}

impl Lcg {
    pub fn new(multiplier: BigUint, offset: BigUint, modulus: BigUint) -> Self {
        Lcg {
            multiplier,
            offset,
            modulus,
        }
    }

    /// One generator step.
    pub fn step(&self, x: &BigUint) -> BigUint {
        (&self.multiplier * x + &self.offset) % &self.modulus
    }

    /// The state after exactly `steps` applications of [`step`], by binary
    /// exponentiation over the monoid of affine maps under composition.
    pub fn advance(&self, start: &BigUint, steps: &BigUint) -> BigUint {
        let mut multiplier = BigUint::one();
        let mut offset = BigUint::zero();
        for index in (0..steps.bits()).rev() {
            // Square the composed map, then fold in a step on a set bit.
            offset = ((&multiplier + 1u32) * &offset) % &self.modulus;
            multiplier = (&multiplier * &multiplier) % &self.modulus;
            if steps.bit(index) {
                offset = (&self.multiplier * &offset + &self.offset) % &self.modulus;
                multiplier = (&self.multiplier * &multiplier) % &self.modulus;
            }
        }
        (&multiplier * start + &offset) % &self.modulus
    }
}

/// The affine-recurrence cipher over the ternary text representation.
///
/// The multiplier and offset are themselves texts, decoded through the same
/// codec as the messages. Construction validates the full-period
/// constraints.
pub struct TernaryScheme<'a> {
    codebook: &'a Codebook,
    multiplier: BigUint,
    offset: BigUint,
}

impl<'a> TernaryScheme<'a> {
    /// Build a scheme from multiplier and offset texts.
    ///
    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] if the multiplier is not congruent to
    /// 1 modulo 3 or the offset is divisible by 3 — either breaks the
    /// full-period guarantee the decrypt direction relies on.
    pub fn new(
        codebook: &'a Codebook,
        multiplier_text: &str,
        offset_text: &str,
    ) -> CipherResult<Self> {
        let multiplier = as_integer(codebook, multiplier_text);
        let offset = as_integer(codebook, offset_text);
        if (&multiplier % 3u32) != BigUint::one() {
            return Err(CipherError::MalformedInput(
                "multiplier must be congruent to 1 modulo 3".into(),
            ));
        }
        if (&offset % 3u32).is_zero() {
            return Err(CipherError::MalformedInput(
                "offset must not be divisible by 3".into(),
            ));
        }
        Ok(TernaryScheme {
            codebook,
            multiplier,
            offset,
        })
    }

    fn lcg(&self, length: usize) -> Lcg {
        let m = modulus(length);
        Lcg::new(&self.multiplier % &m, &self.offset % &m, m)
    }

    /// Advance the plaintext's ring value by `as_integer(key)` steps.
    pub fn encrypt(&self, plaintext: &str, key: &str) -> CipherResult<String> {
        let length = plaintext.chars().count();
        let lcg = self.lcg(length);
        let steps = as_integer(self.codebook, key) % &lcg.modulus;
        let result = lcg.advance(&as_integer(self.codebook, plaintext), &steps);
        as_text(self.codebook, &result, length)
    }

    /// Step backward by advancing the remaining m − k steps of the orbit.
    pub fn decrypt(&self, ciphertext: &str, key: &str) -> CipherResult<String> {
        let length = ciphertext.chars().count();
        let lcg = self.lcg(length);
        let steps = as_integer(self.codebook, key) % &lcg.modulus;
        let back = (&lcg.modulus - &steps) % &lcg.modulus;
        let result = lcg.advance(&as_integer(self.codebook, ciphertext), &back);
        as_text(self.codebook, &result, length)
    }

    /// Two advances with an intermediate symbol-order reversal.
    pub fn encrypt_double(&self, plaintext: &str, key1: &str, key2: &str) -> CipherResult<String> {
        let stage1 = self.encrypt(plaintext, key1)?;
        let reversed: String = stage1.chars().rev().collect();
        self.encrypt(&reversed, key2)
    }

    /// Exact inverse of [`encrypt_double`].
    pub fn decrypt_double(&self, ciphertext: &str, key1: &str, key2: &str) -> CipherResult<String> {
        let stage1 = self.decrypt(ciphertext, key2)?;
        let reversed: String = stage1.chars().rev().collect();
        self.decrypt(&reversed, key1)
    }
}
