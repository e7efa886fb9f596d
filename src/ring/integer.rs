//! The integer residue ring Z/3^(3n)Z.
//!
//! Ring elements are arbitrary-precision unsigned integers reduced modulo a
//! power of 3 set by the working length. The inverse is computed with a
//! hand-rolled extended Euclidean algorithm over `BigInt`; because 3 is
//! prime and the modulus is a power of 3, any value not divisible by 3 is a
//! unit, so the gcd check after the precondition is a formality.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{CipherError, CipherResult};
use crate::ring::ResidueRing;

/// Marker for the integer ring variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerRing;

/// The modulus 3^(3 * length).
pub(crate) fn modulus(length: usize) -> BigUint {
    BigUint::from(3u32).pow(3 * length as u32)
}

/// Iterative extended Euclidean algorithm.
///
/// Returns `(gcd, s)` with `s · a ≡ gcd (mod b)`.
pub(crate) fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        let next_s = &old_s - &q * &s;
        old_r = std::mem::replace(&mut r, next_r);
        old_s = std::mem::replace(&mut s, next_s);
    }
    (old_r, old_s)
}

impl ResidueRing for IntegerRing {
    type Elem = BigUint;

    fn from_digits(&self, digits: &[u8]) -> BigUint {
        let mut z = BigUint::zero();
        for &digit in digits.iter().rev() {
            z = z * 3u32 + digit as u32;
        }
        z
    }

    fn to_digits(&self, value: &BigUint, length: usize) -> Vec<u8> {
        let mut digits = Vec::with_capacity(3 * length);
        let mut z = value.clone();
        for _ in 0..3 * length {
            digits.push((&z % 3u32).to_u8().unwrap_or(0));
            z /= 3u32;
        }
        digits
    }

    fn add(&self, a: &BigUint, b: &BigUint, length: usize) -> BigUint {
        (a + b) % modulus(length)
    }

    fn sub(&self, a: &BigUint, b: &BigUint, length: usize) -> BigUint {
        let m = modulus(length);
        ((a % &m) + &m - (b % &m)) % &m
    }

    fn mul(&self, a: &BigUint, b: &BigUint, length: usize) -> BigUint {
        (a * b) % modulus(length)
    }

    fn inverse(&self, value: &BigUint, length: usize) -> CipherResult<BigUint> {
        let m = modulus(length);
        let reduced = value % &m;
        if (&reduced % 3u32).is_zero() {
            return Err(CipherError::NotInvertible);
        }
        let m_signed = BigInt::from_biguint(Sign::Plus, m.clone());
        let a_signed = BigInt::from_biguint(Sign::Plus, reduced);
        let (gcd, coeff) = extended_gcd(&a_signed, &m_signed);
        if !gcd.is_one() {
            return Err(CipherError::NotInvertible);
        }
        let mut inv = coeff % &m_signed;
        if inv.sign() == Sign::Minus {
            inv += &m_signed;
        }
        // inv is reduced into [0, m), so the conversion cannot fail.
        inv.to_biguint().ok_or(CipherError::NotInvertible)
    }
}
