//! Constant-time primitives on [`Word`]s.
//!
//! Every predicate here returns a *mask*: `Word::MAX` when the predicate holds and `0` otherwise.
//! None of them branch on, or index memory with, their inputs. Higher layers use [`select`]
//! wherever a conditional assignment on secret data is needed instead of an `if`.
//!
//! Rust offers no guarantee that the optimizer will not turn a masked select back into a branch.
//! Masks derived from carries pass through [`value_barrier`], which hides the value from the
//! optimizer via [`core::hint::black_box`]. This is best effort.

use crate::{Error, Word};
use subtle::ConstantTimeEq;

/// Returns the given value with its most significant bit copied to all the other bits.
#[inline]
#[must_use]
pub const fn msb(a: Word) -> Word {
    (a >> (Word::BITS - 1)).wrapping_neg()
}

/// Returns `Word::MAX` if `a == 0` and `0` otherwise.
#[inline]
#[must_use]
pub const fn is_zero(a: Word) -> Word {
    // The top bit of `!a & (a - 1)` is set only when `a` is zero.
    msb(!a & a.wrapping_sub(1))
}

/// Returns `Word::MAX` if `a != 0` and `0` otherwise.
#[inline]
#[must_use]
pub const fn is_nonzero(a: Word) -> Word {
    !is_zero(a)
}

/// Returns `Word::MAX` if `a == b` and `0` otherwise.
#[inline]
#[must_use]
pub const fn eq(a: Word, b: Word) -> Word {
    is_zero(a ^ b)
}

/// Returns `(mask & a) | (!mask & b)`.
///
/// When `mask` is `Word::MAX` this is `a`, when it is `0` this is `b`. Any other mask value
/// mixes the bits of both and must not be relied upon.
#[inline]
#[must_use]
pub const fn select(mask: Word, a: Word, b: Word) -> Word {
    (mask & a) | (!mask & b)
}

/// Hides `value` from the optimizer so that code consuming it cannot be specialized on it.
#[inline(always)]
#[must_use]
pub fn value_barrier(value: Word) -> Word {
    core::hint::black_box(value)
}

/// Returns `Ok(())` if `a == b` and [`Error::Mismatch`] otherwise.
///
/// The comparison is constant-time with respect to the contents of `a` and `b`, but NOT with
/// respect to their lengths.
pub fn verify_slices_are_equal(a: &[u8], b: &[u8]) -> Result<(), Error> {
    if a.len() != b.len() {
        return Err(Error::Mismatch);
    }
    if bool::from(a.ct_eq(b)) {
        Ok(())
    } else {
        Err(Error::Mismatch)
    }
}
