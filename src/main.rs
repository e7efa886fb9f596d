//! Command-line driver for the ternary cipher engine.
//!
//! Flags select pipeline stages; the stages always run in the fixed order
//! documented in [`ternary_engine::pipeline`], regardless of argument order.
//! A missing key downgrades the key-requiring stages to a one-line report on
//! stderr; invalid cryptographic preconditions (a non-invertible key, a
//! malformed digit stream) are hard errors.

use clap::Parser;

use ternary_engine::pipeline::{Pipeline, RingChoice};
use ternary_engine::ring::KeySchedule;
use ternary_engine::CipherContext;

#[derive(Parser, Debug)]
#[command(
    name = "ternary_engine",
    about = "Invertible algebraic text transforms over the 27-symbol ternary alphabet"
)]
struct Args {
    /// Text to transform
    text: String,

    /// Re-encode through the variable-depth compression tree
    #[arg(short, long)]
    compress: bool,

    /// Invert --compress
    #[arg(short, long)]
    decompress: bool,

    /// Stride-3 digit permutation
    #[arg(short, long)]
    mix: bool,

    /// Invert --mix
    #[arg(short, long)]
    unmix: bool,

    /// Bijective-numeration involution
    #[arg(short, long)]
    frobnicate: bool,

    /// Ring addition of the key
    #[arg(short, long)]
    add: bool,

    /// Invert --add
    #[arg(short, long)]
    subtract: bool,

    /// Character-local non-abelian twist by the key
    #[arg(long)]
    heisenberg_add: bool,

    /// Invert --heisenberg-add
    #[arg(long)]
    heisenberg_subtract: bool,

    /// Ring multiplication by the key
    #[arg(short, long)]
    product: bool,

    /// Invert --product
    #[arg(short, long)]
    quotient: bool,

    /// Two-stage product with schedule-derived half-keys
    #[arg(long)]
    double_product: bool,

    /// Invert --double-product
    #[arg(long)]
    double_quotient: bool,

    /// Key text for the keyed stages
    #[arg(short, long)]
    key: Option<String>,

    /// Half-key schedule: sequential, interleaved or nilpotent-shift
    #[arg(long, default_value = "nilpotent-shift")]
    schedule: String,

    /// Ring variant: integer or polynomial
    #[arg(long, default_value = "integer")]
    ring: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let ctx = CipherContext::builtin();

    let mut pipeline = Pipeline {
        compress: args.compress,
        add: args.add,
        heisenberg_add: args.heisenberg_add,
        product: args.product,
        double_product: args.double_product,
        mix: args.mix,
        frobnicate: args.frobnicate,
        unmix: args.unmix,
        double_quotient: args.double_quotient,
        quotient: args.quotient,
        heisenberg_subtract: args.heisenberg_subtract,
        subtract: args.subtract,
        decompress: args.decompress,
        key: args.key,
        schedule: args.schedule.parse::<KeySchedule>()?,
        ring: args.ring.parse::<RingChoice>()?,
    };

    if pipeline.key.is_none() {
        for stage in pipeline.keyed_stages() {
            eprintln!("can't {} without a key", stage);
        }
        pipeline.drop_keyed_stages();
    }

    println!("{}", pipeline.run(&ctx, &args.text)?);
    Ok(())
}
