//! [`Limbs`] subtraction operations.

use super::Limbs;
use crate::{ConstChoice, Limb};

impl Limbs {
    /// Computes `out = self - rhs`, returning the borrow out of the top limb.
    ///
    /// # Panics
    /// If the three vectors do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn sub(&self, rhs: &Self, out: &mut Self) -> Limb {
        out.copy_from(self);
        out.sub_assign(rhs)
    }

    /// Computes `self -= rhs`, returning the borrow out of the top limb.
    ///
    /// An unhandled borrow is a legitimate outcome: the result is then `self - rhs + 2^bits`.
    ///
    /// # Panics
    /// If `self` and `rhs` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn sub_assign(&mut self, rhs: &Self) -> Limb {
        self.borrowing_sub_assign(rhs, Limb::ZERO)
    }

    /// Computes `self -= rhs + borrow`, returning the borrow out of the top limb.
    ///
    /// # Panics
    /// If `self` and `rhs` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn borrowing_sub_assign(&mut self, rhs: &Self, mut borrow: Limb) -> Limb {
        self.assert_same_len(rhs);
        for (a, b) in self.0.iter_mut().zip(rhs.iter()) {
            (*a, borrow) = a.borrowing_sub(*b, borrow);
        }
        borrow
    }

    /// Computes `self -= rhs` if `choice` is truthy, and `self -= 0` otherwise, returning the
    /// borrow. The same instructions execute in both cases.
    ///
    /// # Panics
    /// If `self` and `rhs` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn conditional_sub_assign(&mut self, rhs: &Self, choice: ConstChoice) -> Limb {
        self.assert_same_len(rhs);
        let mut borrow = Limb::ZERO;
        for (a, b) in self.0.iter_mut().zip(rhs.iter()) {
            (*a, borrow) = a.borrowing_sub(b.and_choice(choice), borrow);
        }
        borrow
    }

    /// Computes `self -= rhs` where `rhs` may be shorter than `self`, in which case it is
    /// zero-extended. Returns the borrow out of the top limb of `self`.
    ///
    /// Runtime depends on both lengths, which must be public.
    ///
    /// # Panics
    /// If `rhs` is longer than `self`.
    #[track_caller]
    pub fn sub_assign_ex(&mut self, rhs: &Self) -> Limb {
        assert!(rhs.nlimbs() <= self.nlimbs(), "subtrahend is longer than the accumulator");
        let (lo, hi) = self.0.split_at_mut(rhs.nlimbs());
        let mut borrow = Limb::ZERO;
        for (a, b) in lo.iter_mut().zip(rhs.iter()) {
            (*a, borrow) = a.borrowing_sub(*b, borrow);
        }
        for a in hi {
            (*a, borrow) = a.borrowing_sub(Limb::ZERO, borrow);
        }
        borrow
    }
}
