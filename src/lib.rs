//! Invertible algebraic text-transform ciphers over a 27-symbol alphabet.
//!
//! Every symbol of the working alphabet (A–Z plus `+` for anything else)
//! maps to a triple of base-3 digits, so a message of length L is a vector
//! of 3L ternary digits — equivalently an element of Z/3^(3L)Z, or of
//! GF(3)[x]/(x^(3L)) in the carry-free variant. Every transform in this
//! crate is a bijection on that ring, so pipelines compose by function
//! composition and any prefix can be undone by applying inverses in reverse
//! order.
//!
//! # Architecture
//!
//! ```text
//! text ──codebook──▶ ternary digits ──numeral──▶ ring element
//!                                                    │
//!                       ring / poly arithmetic,      │ keyed transforms
//!                       schedules, LCG jump-ahead ◀──┘
//!                                                    │
//! text ◀──codebook── ternary digits ◀──numeral── ring element
//! ```
//!
//! - [`codebook`]: the two injected prefix trees (balanced depth-3 and
//!   variable-depth compression) compiled into immutable arenas.
//! - [`codec`]: the compressing encode/decode pair.
//! - [`numeral`]: text ↔ big-integer conversion with the fixed
//!   first-character-least-significant digit order.
//! - [`ring`]: sum/difference/product/quotient/inverse over both ring
//!   variants, plus the three composite double-key schedules.
//! - [`trifid`], [`heisenberg`]: the digit-permutation and non-abelian
//!   twist layers.
//! - [`congruential`]: the affine-recurrence (LCG) cipher with jump-ahead.
//! - [`frobnicate`]: the keyless bijective-numeration involution.
//! - [`pipeline`]: fixed-order sequencing of all of the above.
//!
//! All operations are pure, deterministic functions over immutable inputs;
//! the only shared state is the read-only [`CipherContext`]. This is a study
//! in invertible transforms, not a production cryptosystem: there is no
//! authentication, no randomness and no side-channel hardening.
//!
//! # Example
//!
//! ```
//! use ternary_engine::{CipherContext, IntegerRing, RingOps};
//!
//! let ctx = CipherContext::builtin();
//! let ops = RingOps::new(IntegerRing, &ctx.standard);
//!
//! let cipher = ops.product("HELLO", "KEY").unwrap();
//! assert_eq!(ops.quotient(&cipher, "KEY").unwrap(), "HELLO");
//! ```

pub mod codebook;
pub mod codec;
pub mod congruential;
pub mod error;
pub mod frobnicate;
pub mod heisenberg;
pub mod numeral;
pub mod pipeline;
pub mod ring;
pub mod trifid;

pub use codebook::{CipherContext, Codebook, TreeSpec, ALPHABET};
pub use congruential::{Lcg, TernaryScheme};
pub use error::{CipherError, CipherResult};
pub use pipeline::{Pipeline, RingChoice};
pub use ring::{IntegerOps, IntegerRing, KeySchedule, PolyOps, PolyRing, ResidueRing, RingOps};
