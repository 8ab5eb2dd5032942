use subtle::Choice;

use crate::{Word, ct};

/// A constant-time boolean stored as a [`Word`]-sized mask.
///
/// The truthy value is `Word::MAX` and the falsy value is `0`, which is the representation the
/// limb arithmetic consumes directly: a mask can be ANDed with a limb to conditionally zero it.
/// Unlike [`subtle::Choice`] it is usable from `const fn`.
#[derive(Debug, Copy, Clone)]
pub struct ConstChoice(Word);

impl ConstChoice {
    /// The falsy value.
    pub const FALSE: Self = Self(0);

    /// The truthy value.
    pub const TRUE: Self = Self(Word::MAX);

    /// Returns the truthy value if `value == Word::MAX`, and the falsy value if `value == 0`.
    /// Panics in debug builds for other values.
    #[inline]
    pub const fn from_word_mask(value: Word) -> Self {
        debug_assert!(value == Self::FALSE.0 || value == Self::TRUE.0);
        Self(value)
    }

    /// Returns the truthy value if `value == 1`, and the falsy value if `value == 0`.
    /// Panics in debug builds for other values.
    #[inline]
    pub const fn from_word_lsb(value: Word) -> Self {
        debug_assert!(value == 0 || value == 1);
        Self(value.wrapping_neg())
    }

    /// Returns the truthy value if the most significant bit of `value` is `1`,
    /// and the falsy value if it equals `0`.
    #[inline]
    pub const fn from_word_msb(value: Word) -> Self {
        Self(ct::msb(value))
    }

    /// Returns the truthy value if `value == 0`, and the falsy value otherwise.
    #[inline]
    pub const fn from_word_zero(value: Word) -> Self {
        Self(ct::is_zero(value))
    }

    /// Returns the truthy value if `value != 0`, and the falsy value otherwise.
    #[inline]
    pub const fn from_word_nonzero(value: Word) -> Self {
        Self(ct::is_nonzero(value))
    }

    /// Returns the truthy value if `x == y`, and the falsy value otherwise.
    #[inline]
    pub const fn from_word_eq(x: Word, y: Word) -> Self {
        Self(ct::eq(x, y))
    }

    /// Returns the truthy value if `x < y`, and the falsy value otherwise.
    #[inline]
    pub const fn from_word_lt(x: Word, y: Word) -> Self {
        // See "Hacker's Delight" 2nd ed, section 2-12 (Comparison predicates)
        let bit = (((!x) & y) | (((!x) | y) & (x.wrapping_sub(y)))) >> (Word::BITS - 1);
        Self::from_word_lsb(bit)
    }

    /// Returns the truthy value if `x > y`, and the falsy value otherwise.
    #[inline]
    pub const fn from_word_gt(x: Word, y: Word) -> Self {
        Self::from_word_lt(y, x)
    }

    /// Logical negation.
    #[inline]
    #[must_use]
    pub const fn not(&self) -> Self {
        Self(!self.0)
    }

    /// Logical OR.
    #[inline]
    #[must_use]
    pub const fn or(&self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Logical AND.
    #[inline]
    #[must_use]
    pub const fn and(&self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Logical XOR.
    #[inline]
    #[must_use]
    pub const fn xor(&self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Return `b` if `self` is truthy, otherwise return `a`.
    #[inline]
    pub const fn select_word(&self, a: Word, b: Word) -> Word {
        ct::select(self.0, b, a)
    }

    /// Return `x` if `self` is truthy, otherwise return 0.
    #[inline]
    pub const fn if_true_word(&self, x: Word) -> Word {
        x & self.0
    }

    /// The underlying mask: `Word::MAX` or `0`.
    #[inline]
    pub const fn to_word_mask(self) -> Word {
        self.0
    }

    /// Pass the mask through [`ct::value_barrier`].
    #[inline(always)]
    #[must_use]
    pub fn barrier(self) -> Self {
        Self(ct::value_barrier(self.0))
    }

    #[inline]
    pub(crate) const fn to_u8(self) -> u8 {
        (self.0 as u8) & 1
    }

    /// WARNING: this method should only be used in contexts that aren't constant-time critical!
    #[inline]
    pub const fn is_true_vartime(&self) -> bool {
        self.0 == ConstChoice::TRUE.0
    }
}

impl From<ConstChoice> for Choice {
    #[inline]
    fn from(choice: ConstChoice) -> Self {
        Choice::from(choice.to_u8())
    }
}

impl From<Choice> for ConstChoice {
    #[inline]
    fn from(choice: Choice) -> Self {
        ConstChoice::from_word_lsb(choice.unwrap_u8() as Word)
    }
}

impl From<ConstChoice> for bool {
    fn from(choice: ConstChoice) -> Self {
        choice.is_true_vartime()
    }
}

impl PartialEq for ConstChoice {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for ConstChoice {}
