//! Carry-chain backends.
//!
//! Every multi-limb addition and subtraction in this crate bottoms out in [`CarryChain::adc`]
//! and [`CarryChain::sbb`]. Two implementations exist:
//!
//! - [`Portable`]: double-width arithmetic, available everywhere.
//! - [`X86Intrinsics`]: the `_addcarry`/`_subborrow` intrinsics, which lower directly to
//!   `adc`/`sbb` on x86 and x86-64.
//!
//! [`Selected`] names the implementation used by [`Limb`][`crate::Limb`]. The choice is made
//! once, at compile time, from the target architecture and the `portable` feature.

use crate::{Word, primitives};

/// Word-level add-with-carry and subtract-with-borrow.
///
/// Carries and borrows are single bits: the `carry`/`borrow` inputs must be 0 or 1 and the
/// returned carry/borrow is always 0 or 1.
pub trait CarryChain {
    /// Computes `lhs + rhs + carry`, returning `(sum, carry_out)`.
    fn adc(lhs: Word, rhs: Word, carry: Word) -> (Word, Word);

    /// Computes `lhs - rhs - borrow`, returning `(difference, borrow_out)`.
    fn sbb(lhs: Word, rhs: Word, borrow: Word) -> (Word, Word);
}

/// Portable carry chain built on double-width words.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

impl CarryChain for Portable {
    #[inline(always)]
    fn adc(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
        primitives::carrying_add(lhs, rhs, carry)
    }

    #[inline(always)]
    fn sbb(lhs: Word, rhs: Word, borrow: Word) -> (Word, Word) {
        primitives::borrowing_sub(lhs, rhs, borrow)
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use self::x86::X86Intrinsics;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86 {
    use super::CarryChain;
    use crate::Word;

    #[cfg(target_arch = "x86")]
    use core::arch::x86 as arch;
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64 as arch;

    #[cfg(target_pointer_width = "32")]
    use arch::{_addcarry_u32 as addcarry, _subborrow_u32 as subborrow};
    #[cfg(target_pointer_width = "64")]
    use arch::{_addcarry_u64 as addcarry, _subborrow_u64 as subborrow};

    /// Carry chain using the x86 `adc`/`sbb` intrinsics.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct X86Intrinsics;

    impl CarryChain for X86Intrinsics {
        #[inline(always)]
        fn adc(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
            debug_assert!(carry <= 1);
            let mut out = 0;
            // SAFETY: `adc` is part of the baseline instruction set on every x86 target, and
            // `out` is a valid exclusive reference.
            #[allow(unsafe_code, unused_unsafe)]
            let carry = unsafe { addcarry(carry as u8, lhs, rhs, &mut out) };
            (out, Word::from(carry))
        }

        #[inline(always)]
        fn sbb(lhs: Word, rhs: Word, borrow: Word) -> (Word, Word) {
            debug_assert!(borrow <= 1);
            let mut out = 0;
            // SAFETY: `sbb` is part of the baseline instruction set on every x86 target, and
            // `out` is a valid exclusive reference.
            #[allow(unsafe_code, unused_unsafe)]
            let borrow = unsafe { subborrow(borrow as u8, lhs, rhs, &mut out) };
            (out, Word::from(borrow))
        }
    }
}

/// The carry chain used by this build.
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), not(feature = "portable")))]
pub type Selected = X86Intrinsics;

/// The carry chain used by this build.
#[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), not(feature = "portable"))))]
pub type Selected = Portable;

/// Is [`Selected`] an accelerated (non-[`Portable`]) carry chain?
pub const ACCELERATED: bool = cfg!(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    not(feature = "portable")
));
