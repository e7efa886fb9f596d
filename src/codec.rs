//! Compressing codec: variable-depth encoding re-expressed in fixed symbols.
//!
//! `compress` walks each character through the variable-depth tree, pads the
//! concatenated digit stream with trailing zeros to a multiple of 3, and
//! re-encodes the stream as symbols through the balanced tree. `decompress`
//! inverts the steps, dropping the zero pad. The compressed text usually has
//! fewer symbols than the input because the common symbols carry 2-digit
//! codes, but the pair is a lossless round trip for arbitrary text (after
//! case folding and alphabet coercion).

use crate::codebook::CipherContext;
use crate::error::CipherResult;

/// Zero digits needed to pad a stream of `len` digits to a multiple of 3.
pub(crate) fn pad_len(len: usize) -> usize {
    match len % 3 {
        0 => 0,
        1 => 2,
        _ => 1,
    }
}

/// Compress a text through the variable-depth codebook.
pub fn compress(ctx: &CipherContext, text: &str) -> CipherResult<String> {
    let mut digits = ctx.compression.encode(text);
    digits.resize(digits.len() + pad_len(digits.len()), 0);
    ctx.standard.decode(&digits)
}

/// Decompress a text produced by [`compress`].
///
/// # Errors
///
/// [`crate::CipherError::MalformedInput`] if the digit stream leaves a
/// dangling descent that is not pure zero padding.
pub fn decompress(ctx: &CipherContext, text: &str) -> CipherResult<String> {
    let digits = ctx.standard.encode(text);
    ctx.compression.decode_stream(&digits, true)
}
