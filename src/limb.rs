//! Big integers are represented as an array of smaller CPU word-size integers
//! called "limbs".

mod add;
mod cmp;
mod encoding;
mod shl;
mod sub;

#[cfg(feature = "rand_core")]
mod rand;

use crate::{ConstChoice, Word, ct};
use core::{fmt, slice};

/// Calculate the number of limbs required to represent the given number of bits.
#[inline(always)]
#[must_use]
pub const fn nlimbs(bits: usize) -> usize {
    bits.div_ceil(Limb::BITS as usize)
}

/// Big integers are represented as an array/vector of smaller CPU word-size integers called
/// "limbs".
///
/// The [`Limb`] type uses a 32-bit or 64-bit saturated representation, depending on the target.
/// All bits of an inner [`Word`] are used to represent larger big integer types.
// Our PartialEq impl only differs from the default one by being constant-time, so this is safe
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Default, Hash)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Limb(Word::MAX);

    /// Highest bit in a [`Limb`].
    pub const HI_BIT: u32 = Limb::BITS - 1;

    /// Size of the inner integer in bits.
    pub const BITS: u32 = Word::BITS;

    /// Size of the inner integer in bytes.
    pub const BYTES: usize = (Word::BITS / 8) as usize;

    /// Is this limb equal to [`Limb::ZERO`]?
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> ConstChoice {
        ConstChoice::from_word_zero(self.0)
    }

    /// Is this limb not equal to [`Limb::ZERO`]?
    #[inline]
    #[must_use]
    pub const fn is_nonzero(&self) -> ConstChoice {
        ConstChoice::from_word_nonzero(self.0)
    }

    /// Return `b` if `c` is truthy, otherwise return `a`.
    #[inline]
    #[must_use]
    pub const fn select(a: Self, b: Self, c: ConstChoice) -> Self {
        Self(c.select_word(a.0, b.0))
    }

    /// Returns `self` if `c` is truthy, otherwise [`Limb::ZERO`].
    #[inline]
    #[must_use]
    pub const fn and_choice(self, c: ConstChoice) -> Self {
        Self(c.if_true_word(self.0))
    }

    /// Broadcast the most significant bit of this limb to a [`ConstChoice`].
    #[inline]
    #[must_use]
    pub const fn msb_to_choice(self) -> ConstChoice {
        ConstChoice::from_word_mask(ct::msb(self.0))
    }

    /// Convert a carry or borrow bit (0 or 1) into a [`ConstChoice`] mask.
    ///
    /// The mask passes through a value barrier so that a masked select consuming it is not
    /// rewritten into a branch on the carry.
    #[inline]
    #[must_use]
    pub fn carry_to_choice(self) -> ConstChoice {
        ConstChoice::from_word_nonzero(ct::value_barrier(self.0))
    }

    /// Convert a shared slice of [`Limb`]s into a shared slice of their inner [`Word`]s.
    #[inline]
    #[must_use]
    pub const fn slice_as_words(slice: &[Self]) -> &[Word] {
        // SAFETY: `Limb` is a `repr(transparent)` newtype for `Word`
        #[allow(trivial_casts, unsafe_code)]
        unsafe {
            &*(slice as *const [Limb] as *const [Word])
        }
    }

    /// Convert a mutable slice of [`Limb`]s into a mutable slice of their inner [`Word`]s.
    #[inline]
    pub const fn slice_as_mut_words(slice: &mut [Self]) -> &mut [Word] {
        // SAFETY: `Limb` is a `repr(transparent)` newtype for `Word`
        #[allow(trivial_casts, unsafe_code)]
        unsafe {
            &mut *(slice as *mut [Limb] as *mut [Word])
        }
    }
}

impl AsRef<[Limb]> for Limb {
    #[inline(always)]
    fn as_ref(&self) -> &[Limb] {
        slice::from_ref(self)
    }
}

impl AsMut<[Limb]> for Limb {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [Limb] {
        slice::from_mut(self)
    }
}

impl From<Word> for Limb {
    #[inline]
    fn from(word: Word) -> Self {
        Limb(word)
    }
}

impl From<Limb> for Word {
    #[inline]
    fn from(limb: Limb) -> Self {
        limb.0
    }
}

impl num_traits::Zero for Limb {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.is_zero().into()
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::Display for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$x}", &self.0, width = Self::BYTES * 2)
    }
}

impl fmt::UpperHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$X}", &self.0, width = Self::BYTES * 2)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Limb {}

#[cfg(test)]
mod tests {
    use super::Limb;
    use crate::ConstChoice;

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn nlimbs_for_bits() {
        assert_eq!(super::nlimbs(0), 0);
        assert_eq!(super::nlimbs(64), 2);
        assert_eq!(super::nlimbs(65), 3);
        assert_eq!(super::nlimbs(2048), 64);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn nlimbs_for_bits() {
        assert_eq!(super::nlimbs(0), 0);
        assert_eq!(super::nlimbs(64), 1);
        assert_eq!(super::nlimbs(65), 2);
        assert_eq!(super::nlimbs(2048), 32);
    }

    #[test]
    fn select() {
        let (a, b) = (Limb(1), Limb(2));
        assert_eq!(Limb::select(a, b, ConstChoice::FALSE), a);
        assert_eq!(Limb::select(a, b, ConstChoice::TRUE), b);
        assert_eq!(b.and_choice(ConstChoice::FALSE), Limb::ZERO);
        assert_eq!(b.and_choice(ConstChoice::TRUE), b);
    }

    #[test]
    fn msb_to_choice() {
        assert_eq!(Limb::ONE.msb_to_choice(), ConstChoice::FALSE);
        assert_eq!(Limb::MAX.msb_to_choice(), ConstChoice::TRUE);
    }

    #[test]
    fn carry_to_choice() {
        assert_eq!(Limb::ZERO.carry_to_choice(), ConstChoice::FALSE);
        assert_eq!(Limb::ONE.carry_to_choice(), ConstChoice::TRUE);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn debug() {
        use alloc::format;

        #[cfg(target_pointer_width = "32")]
        assert_eq!(format!("{:?}", Limb(42)), "Limb(0x0000002A)");

        #[cfg(target_pointer_width = "64")]
        assert_eq!(format!("{:?}", Limb(42)), "Limb(0x000000000000002A)");
    }
}
