//! Big-endian byte encoding of limb vectors.
//!
//! Parsing is constant-time with respect to the decoded value. The *length* of the input is
//! treated as public: it decides how many limbs are written and whether the input is rejected.

use crate::{Error, Limb, Limbs, Result};

pub use crate::ct::verify_slices_are_equal;

/// Whether zero is an acceptable result when parsing a value in a range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AllowZero {
    /// Zero is rejected with [`Error::OutOfRange`].
    No,

    /// Zero is accepted.
    Yes,
}

/// Parse `input` as a big-endian integer into `result`, zero-padding the high limbs.
///
/// Fails with [`Error::InvalidEncoding`] if `input` is empty or needs more limbs than `result`
/// provides. Leading zero bytes are accepted. `result` is left unchanged on failure.
pub fn parse_be_and_pad(input: &[u8], result: &mut [Limb]) -> Result<()> {
    if input.is_empty() || input.len().div_ceil(Limb::BYTES) > result.len() {
        return Err(Error::InvalidEncoding);
    }

    result.fill(Limb::ZERO);
    for (limb, chunk) in result.iter_mut().zip(input.rchunks(Limb::BYTES)) {
        let mut buf = [0u8; Limb::BYTES];
        buf[Limb::BYTES - chunk.len()..].copy_from_slice(chunk);
        *limb = Limb::from_be_bytes(buf);
    }
    Ok(())
}

/// Parse `input` as a big-endian integer into `result` and require it to be below
/// `max_exclusive`, and nonzero unless `allow_zero` is [`AllowZero::Yes`].
///
/// # Panics
/// If `result` and `max_exclusive` do not share the same nonzero length.
pub fn parse_be_in_range_and_pad(
    input: &[u8],
    allow_zero: AllowZero,
    max_exclusive: &[Limb],
    result: &mut [Limb],
) -> Result<()> {
    parse_be_and_pad(input, result)?;
    let result = Limbs::new(result);
    if !result.ct_lt(Limbs::new(max_exclusive)).is_true_vartime() {
        return Err(Error::OutOfRange);
    }
    check_zero(result, allow_zero)
}

/// Parse `input` as a big-endian integer into `result` and reduce it once modulo `m`.
///
/// The encoded value must be below `2*m`; this is the usual way of accepting values such as
/// signature components that are allowed to be "partially reduced". After reduction the result
/// must be nonzero unless `allow_zero` is [`AllowZero::Yes`].
///
/// # Panics
/// If `result` and `m` do not share the same nonzero length.
pub fn parse_be_in_range_partially_reduced_and_pad(
    input: &[u8],
    allow_zero: AllowZero,
    m: &[Limb],
    result: &mut [Limb],
) -> Result<()> {
    parse_be_and_pad(input, result)?;
    let result = Limbs::new_mut(result);
    result.reduce_once(Limbs::new(m));
    check_zero(result, allow_zero)
}

fn check_zero(result: &Limbs, allow_zero: AllowZero) -> Result<()> {
    if allow_zero == AllowZero::No && result.is_zero().is_true_vartime() {
        return Err(Error::OutOfRange);
    }
    Ok(())
}

/// Serialize `limbs` as a big-endian integer filling all of `out`, with leading zero padding.
///
/// Fails with [`Error::InvalidEncoding`] if `out` is shorter than `limbs.len() * Limb::BYTES`.
pub fn be_bytes_from_limbs_padded(limbs: &[Limb], out: &mut [u8]) -> Result<()> {
    let body_len = limbs
        .len()
        .checked_mul(Limb::BYTES)
        .filter(|&len| len <= out.len())
        .ok_or(Error::InvalidEncoding)?;

    let (padding, body) = out.split_at_mut(out.len() - body_len);
    padding.fill(0);
    for (chunk, limb) in body.rchunks_exact_mut(Limb::BYTES).zip(limbs) {
        chunk.copy_from_slice(&limb.to_be_bytes());
    }
    Ok(())
}
