//! [`Limbs`] comparisons.

use super::Limbs;
use crate::{ConstChoice, Limb};
use subtle::{Choice, ConstantTimeEq};

impl Limbs {
    /// Returns the truthy value if `self < rhs`, and the falsy value otherwise.
    ///
    /// Computed as a full-length subtraction whose final borrow is the result, so every limb of
    /// both operands is always read.
    ///
    /// # Panics
    /// If `self` and `rhs` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn ct_lt(&self, rhs: &Self) -> ConstChoice {
        self.assert_same_len(rhs);
        let mut borrow = Limb::ZERO;
        for (a, b) in self.iter().zip(rhs.iter()) {
            (_, borrow) = a.borrowing_sub(*b, borrow);
        }
        borrow.carry_to_choice()
    }

    /// Returns the truthy value if `self == rhs`, and the falsy value otherwise.
    ///
    /// # Panics
    /// If `self` and `rhs` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn ct_eq(&self, rhs: &Self) -> ConstChoice {
        self.assert_same_len(rhs);
        self.iter()
            .zip(rhs.iter())
            .fold(ConstChoice::TRUE, |acc, (a, b)| acc.and(a.ct_eq_const(b)))
    }

    /// Returns the truthy value if every limb is zero, and the falsy value otherwise.
    ///
    /// An empty vector is zero.
    #[inline]
    pub fn is_zero(&self) -> ConstChoice {
        let acc = self.iter().fold(0, |acc, limb| acc | limb.0);
        ConstChoice::from_word_zero(acc)
    }
}

impl ConstantTimeEq for Limbs {
    /// Vectors of different lengths compare unequal. Only the limb values are protected.
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.nlimbs() != other.nlimbs() {
            return Choice::from(0);
        }
        if self.nlimbs() == 0 {
            return Choice::from(1);
        }
        Limbs::ct_eq(self, other).into()
    }
}

impl PartialEq for Limbs {
    fn eq(&self, other: &Self) -> bool {
        ConstantTimeEq::ct_eq(self, other).into()
    }
}

impl Eq for Limbs {}
