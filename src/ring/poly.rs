//! The polynomial ring GF(3)[x]/(x^(3n)).
//!
//! Elements are little-endian coefficient vectors over GF(3): index k holds
//! the coefficient of x^k, mirroring the integer ring's digit weights but
//! with carry-free arithmetic between positions. Multiplication is
//! schoolbook convolution truncated at degree 3n; the inverse runs the
//! polynomial extended Euclidean algorithm against the modulus x^(3n), which
//! exists exactly when the constant coefficient is nonzero (x is the ring's
//! only prime up to units).

use crate::error::{CipherError, CipherResult};
use crate::ring::ResidueRing;

/// Marker for the polynomial ring variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyRing;

#[inline]
fn add3(a: u8, b: u8) -> u8 {
    (a + b) % 3
}

#[inline]
fn sub3(a: u8, b: u8) -> u8 {
    (a + 3 - b) % 3
}

#[inline]
fn mul3(a: u8, b: u8) -> u8 {
    (a * b) % 3
}

/// Inverse of a nonzero GF(3) scalar: 1⁻¹ = 1, 2⁻¹ = 2.
#[inline]
fn inv3(a: u8) -> u8 {
    a
}

fn trim(p: &mut Vec<u8>) {
    while p.last() == Some(&0) {
        p.pop();
    }
}

fn is_zero(p: &[u8]) -> bool {
    p.iter().all(|&c| c == 0)
}

/// Degree of a trimmed nonzero polynomial.
fn degree(p: &[u8]) -> usize {
    p.len() - 1
}

/// Full-width product, no modulus.
fn mul_full(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u8; a.len() + b.len() - 1];
    for (i, &ca) in a.iter().enumerate() {
        if ca == 0 {
            continue;
        }
        for (j, &cb) in b.iter().enumerate() {
            out[i + j] = add3(out[i + j], mul3(ca, cb));
        }
    }
    out
}

/// Coefficient-wise difference `a - b`, sized to the longer operand.
fn sub_full(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut out = vec![0u8; len];
    for (k, slot) in out.iter_mut().enumerate() {
        let ca = a.get(k).copied().unwrap_or(0);
        let cb = b.get(k).copied().unwrap_or(0);
        *slot = sub3(ca, cb);
    }
    out
}

/// Polynomial division with remainder over GF(3). `b` must be nonzero and
/// trimmed.
fn div_rem(a: &[u8], b: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut r = a.to_vec();
    trim(&mut r);
    let db = degree(b);
    if r.is_empty() || degree(&r) < db {
        return (Vec::new(), r);
    }
    let dr = degree(&r);
    let mut q = vec![0u8; dr - db + 1];
    let lead_inv = inv3(b[db]);
    for i in (db..=dr).rev() {
        if r[i] == 0 {
            continue;
        }
        let coeff = mul3(r[i], lead_inv);
        q[i - db] = coeff;
        for (j, &cb) in b.iter().enumerate() {
            r[i - db + j] = sub3(r[i - db + j], mul3(coeff, cb));
        }
    }
    r.truncate(db);
    trim(&mut r);
    (q, r)
}

/// x^(3 * length), the reduction modulus.
fn modulus_poly(length: usize) -> Vec<u8> {
    let mut m = vec![0u8; 3 * length + 1];
    m[3 * length] = 1;
    m
}

impl ResidueRing for PolyRing {
    type Elem = Vec<u8>;

    fn from_digits(&self, digits: &[u8]) -> Vec<u8> {
        let mut p = digits.to_vec();
        trim(&mut p);
        p
    }

    fn to_digits(&self, value: &Vec<u8>, length: usize) -> Vec<u8> {
        let mut digits = value.clone();
        digits.resize(3 * length, 0);
        digits
    }

    fn add(&self, a: &Vec<u8>, b: &Vec<u8>, length: usize) -> Vec<u8> {
        let mut out = vec![0u8; a.len().max(b.len()).min(3 * length)];
        for (k, slot) in out.iter_mut().enumerate() {
            let ca = a.get(k).copied().unwrap_or(0);
            let cb = b.get(k).copied().unwrap_or(0);
            *slot = add3(ca, cb);
        }
        trim(&mut out);
        out
    }

    fn sub(&self, a: &Vec<u8>, b: &Vec<u8>, length: usize) -> Vec<u8> {
        let mut out = sub_full(a, b);
        out.truncate(3 * length);
        trim(&mut out);
        out
    }

    fn mul(&self, a: &Vec<u8>, b: &Vec<u8>, length: usize) -> Vec<u8> {
        let cap = 3 * length;
        let mut acc = vec![0u8; cap];
        for (i, &ca) in a.iter().take(cap).enumerate() {
            if ca == 0 {
                continue;
            }
            for (j, &cb) in b.iter().take(cap - i).enumerate() {
                acc[i + j] = add3(acc[i + j], mul3(ca, cb));
            }
        }
        trim(&mut acc);
        acc
    }

    fn inverse(&self, value: &Vec<u8>, length: usize) -> CipherResult<Vec<u8>> {
        let mut p = value.clone();
        p.truncate(3 * length);
        trim(&mut p);
        if p.first().copied().unwrap_or(0) == 0 {
            return Err(CipherError::NotInvertible);
        }

        // Extended Euclid against x^(3n), tracking only the cofactor of the
        // input polynomial.
        let mut old_r = p;
        let mut r = modulus_poly(length);
        let mut old_s: Vec<u8> = vec![1];
        let mut s: Vec<u8> = Vec::new();
        while !is_zero(&r) {
            let (q, rem) = div_rem(&old_r, &r);
            old_r = std::mem::replace(&mut r, rem);
            let next_s = sub_full(&old_s, &mul_full(&q, &s));
            old_s = std::mem::replace(&mut s, next_s);
        }
        trim(&mut old_r);
        if old_r.len() != 1 {
            return Err(CipherError::NotInvertible);
        }

        let scale = inv3(old_r[0]);
        let mut inv: Vec<u8> = old_s.iter().map(|&c| mul3(c, scale)).collect();
        inv.truncate(3 * length);
        trim(&mut inv);
        Ok(inv)
    }
}
