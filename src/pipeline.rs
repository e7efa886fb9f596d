//! Fixed-order transform pipeline.
//!
//! Callers select which stages run; the order they run in is fixed
//! regardless of how the selection was expressed:
//!
//! ```text
//! compress → add → heisenberg-add → product → double-product → mix →
//! frobnicate → unmix → double-quotient → quotient → heisenberg-subtract →
//! subtract → decompress
//! ```
//!
//! Because every transform is a bijection on the ring, a pipeline prefix is
//! undone by running the matching inverse stages in the mirrored tail
//! positions. Key-requiring stages fail with `MissingKey` when no key is
//! set; the CLI strips those stages up front instead and reports them.

use std::str::FromStr;

use crate::codebook::CipherContext;
use crate::codec;
use crate::error::{CipherError, CipherResult};
use crate::frobnicate::frobnicate;
use crate::heisenberg;
use crate::ring::{IntegerOps, IntegerRing, KeySchedule, PolyOps, PolyRing, RingOps};
use crate::trifid;

/// Which ring variant the arithmetic stages operate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingChoice {
    /// Z/3^(3n)Z, with carries between digit positions.
    #[default]
    Integer,
    /// GF(3)[x]/(x^(3n)), carry-free.
    Polynomial,
}

impl FromStr for RingChoice {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(RingChoice::Integer),
            "poly" | "polynomial" => Ok(RingChoice::Polynomial),
            other => Err(CipherError::MalformedInput(format!(
                "unknown ring '{}'",
                other
            ))),
        }
    }
}

/// Ring operations dispatched over the selected variant.
enum AnyOps<'a> {
    Int(IntegerOps<'a>),
    Poly(PolyOps<'a>),
}

impl<'a> AnyOps<'a> {
    fn new(choice: RingChoice, ctx: &'a CipherContext) -> Self {
        match choice {
            RingChoice::Integer => AnyOps::Int(RingOps::new(IntegerRing, &ctx.standard)),
            RingChoice::Polynomial => AnyOps::Poly(RingOps::new(PolyRing, &ctx.standard)),
        }
    }

    fn sum(&self, a: &str, b: &str) -> CipherResult<String> {
        match self {
            AnyOps::Int(ops) => ops.sum(a, b),
            AnyOps::Poly(ops) => ops.sum(a, b),
        }
    }

    fn difference(&self, a: &str, b: &str) -> CipherResult<String> {
        match self {
            AnyOps::Int(ops) => ops.difference(a, b),
            AnyOps::Poly(ops) => ops.difference(a, b),
        }
    }

    fn product(&self, text: &str, key: &str) -> CipherResult<String> {
        match self {
            AnyOps::Int(ops) => ops.product(text, key),
            AnyOps::Poly(ops) => ops.product(text, key),
        }
    }

    fn quotient(&self, text: &str, key: &str) -> CipherResult<String> {
        match self {
            AnyOps::Int(ops) => ops.quotient(text, key),
            AnyOps::Poly(ops) => ops.quotient(text, key),
        }
    }

    fn double_product(&self, text: &str, key: &str, s: KeySchedule) -> CipherResult<String> {
        match self {
            AnyOps::Int(ops) => ops.double_product(text, key, s),
            AnyOps::Poly(ops) => ops.double_product(text, key, s),
        }
    }

    fn double_quotient(&self, text: &str, key: &str, s: KeySchedule) -> CipherResult<String> {
        match self {
            AnyOps::Int(ops) => ops.double_quotient(text, key, s),
            AnyOps::Poly(ops) => ops.double_quotient(text, key, s),
        }
    }
}

/// Stage selection plus the shared key, schedule and ring choice.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    pub compress: bool,
    pub add: bool,
    pub heisenberg_add: bool,
    pub product: bool,
    pub double_product: bool,
    pub mix: bool,
    pub frobnicate: bool,
    pub unmix: bool,
    pub double_quotient: bool,
    pub quotient: bool,
    pub heisenberg_subtract: bool,
    pub subtract: bool,
    pub decompress: bool,
    pub key: Option<String>,
    pub schedule: KeySchedule,
    pub ring: RingChoice,
}

impl Pipeline {
    /// Names of the requested stages that need a key.
    pub fn keyed_stages(&self) -> Vec<&'static str> {
        let mut stages = Vec::new();
        if self.add {
            stages.push("add");
        }
        if self.heisenberg_add {
            stages.push("twist-add");
        }
        if self.product {
            stages.push("multiply");
        }
        if self.double_product {
            stages.push("double-multiply");
        }
        if self.double_quotient {
            stages.push("double-divide");
        }
        if self.quotient {
            stages.push("divide");
        }
        if self.heisenberg_subtract {
            stages.push("twist-subtract");
        }
        if self.subtract {
            stages.push("subtract");
        }
        stages
    }

    /// Disable every key-requiring stage (used by the CLI after reporting
    /// them when no key was given).
    pub fn drop_keyed_stages(&mut self) {
        self.add = false;
        self.heisenberg_add = false;
        self.product = false;
        self.double_product = false;
        self.double_quotient = false;
        self.quotient = false;
        self.heisenberg_subtract = false;
        self.subtract = false;
    }

    fn key_for(&self, op: &'static str) -> CipherResult<&str> {
        self.key.as_deref().ok_or(CipherError::MissingKey(op))
    }

    /// Run the selected stages over `text` in the fixed pipeline order.
    pub fn run(&self, ctx: &CipherContext, text: &str) -> CipherResult<String> {
        let ops = AnyOps::new(self.ring, ctx);
        let book = &ctx.standard;
        let mut t = text.to_string();
        if self.compress {
            t = codec::compress(ctx, &t)?;
        }
        if self.add {
            t = ops.sum(&t, self.key_for("add")?)?;
        }
        if self.heisenberg_add {
            t = heisenberg::add(book, self.key_for("twist-add")?, &t)?;
        }
        if self.product {
            t = ops.product(&t, self.key_for("multiply")?)?;
        }
        if self.double_product {
            t = ops.double_product(&t, self.key_for("double-multiply")?, self.schedule)?;
        }
        if self.mix {
            t = trifid::mix(book, &t)?;
        }
        if self.frobnicate {
            t = frobnicate(&t);
        }
        if self.unmix {
            t = trifid::unmix(book, &t)?;
        }
        if self.double_quotient {
            t = ops.double_quotient(&t, self.key_for("double-divide")?, self.schedule)?;
        }
        if self.quotient {
            t = ops.quotient(&t, self.key_for("divide")?)?;
        }
        if self.heisenberg_subtract {
            t = heisenberg::subtract(book, self.key_for("twist-subtract")?, &t)?;
        }
        if self.subtract {
            t = ops.difference(&t, self.key_for("subtract")?)?;
        }
        if self.decompress {
            t = codec::decompress(ctx, &t)?;
        }
        Ok(t)
    }
}
