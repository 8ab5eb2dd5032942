//! Fixed-length limb vectors.
//!
//! [`Limbs`] is an unsized view over a `[Limb]` slice, ordered least significant limb first,
//! representing the non-negative integer `sum(limbs[i] * 2^(Limb::BITS * i))`. It can be borrowed
//! from any limb storage: a stack array, a [`BigNum`][`crate::BigNum`], or a caller buffer.
//!
//! All arithmetic here is constant-time with respect to limb *values*. Limb *counts* are public:
//! length checks panic on mismatch and loops run for exactly the number of limbs supplied.
//! Operations that take two or more operands require them to have the same, nonzero length
//! unless documented otherwise.
//!
//! Rust's borrowing rules forbid passing the output as one of the inputs, so each out-of-place
//! operation has an in-place `*_assign` counterpart covering the aliased case.

mod add;
mod add_mod;
mod cmp;
mod reduce;
mod shl_mod;
mod sub;
mod sub_mod;

#[cfg(feature = "rand_core")]
mod rand;

use crate::{ConstChoice, Limb, Word};
use core::{
    fmt,
    ops::{Index, IndexMut},
};

/// A fixed-length vector of limbs.
#[repr(transparent)]
pub struct Limbs(pub(crate) [Limb]);

impl Limbs {
    /// Create a [`Limbs`] reference type from a [`Limb`] slice.
    #[inline]
    pub const fn new(limbs: &[Limb]) -> &Self {
        // SAFETY: `Limbs` is a `repr(transparent)` newtype for `[Limb]`.
        #[allow(trivial_casts, unsafe_code)]
        unsafe {
            &*(limbs as *const [Limb] as *const Limbs)
        }
    }

    /// Create a mutable [`Limbs`] reference type from a [`Limb`] slice.
    #[inline]
    pub const fn new_mut(limbs: &mut [Limb]) -> &mut Self {
        // SAFETY: `Limbs` is a `repr(transparent)` newtype for `[Limb]`.
        #[allow(trivial_casts, unsafe_code)]
        unsafe {
            &mut *(limbs as *mut [Limb] as *mut Limbs)
        }
    }

    /// Borrow the inner `&[Limb]` slice.
    #[inline]
    pub const fn as_slice(&self) -> &[Limb] {
        &self.0
    }

    /// Mutably borrow the inner `&mut [Limb]` slice.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [Limb] {
        &mut self.0
    }

    /// Borrow the inner limbs as a slice of [`Word`]s.
    #[inline]
    pub const fn as_words(&self) -> &[Word] {
        Limb::slice_as_words(&self.0)
    }

    /// Get an iterator over the inner limbs.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Limb> {
        self.0.iter()
    }

    /// Access the number of limbs.
    #[inline]
    pub const fn nlimbs(&self) -> usize {
        self.0.len()
    }

    /// Overwrite `self` with the limbs of `src`.
    ///
    /// # Panics
    /// If `self` and `src` have different lengths.
    #[inline]
    #[track_caller]
    pub fn copy_from(&mut self, src: &Self) {
        self.0.copy_from_slice(&src.0);
    }

    /// Assign all of the limbs to zero.
    #[inline]
    pub fn set_zero(&mut self) {
        self.0.fill(Limb::ZERO);
    }

    /// Conditionally assign all of the limbs to zero.
    #[inline]
    pub fn conditional_set_zero(&mut self, choice: ConstChoice) {
        for limb in &mut self.0 {
            *limb = limb.and_choice(choice.not());
        }
    }

    /// Panics unless `self` and `rhs` have the same nonzero length.
    #[inline]
    #[track_caller]
    pub(crate) fn assert_same_len(&self, rhs: &Self) {
        assert!(!self.0.is_empty(), "limb vectors must not be empty");
        assert_eq!(self.nlimbs(), rhs.nlimbs(), "limb vector length mismatch");
    }
}

impl AsRef<[Limb]> for Limbs {
    #[inline]
    fn as_ref(&self) -> &[Limb] {
        self.as_slice()
    }
}

impl AsMut<[Limb]> for Limbs {
    #[inline]
    fn as_mut(&mut self) -> &mut [Limb] {
        self.as_mut_slice()
    }
}

impl Index<usize> for Limbs {
    type Output = Limb;

    #[inline]
    fn index(&self, index: usize) -> &Limb {
        self.0.index(index)
    }
}

impl IndexMut<usize> for Limbs {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Limb {
        self.0.index_mut(index)
    }
}

impl fmt::Debug for Limbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limbs(0x{self:X})")
    }
}

impl fmt::Display for Limbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Limbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for limb in self.iter().rev() {
            write!(f, "{:0width$x}", &limb.0, width = Limb::BYTES * 2)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Limbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for limb in self.iter().rev() {
            write!(f, "{:0width$X}", &limb.0, width = Limb::BYTES * 2)?;
        }
        Ok(())
    }
}
