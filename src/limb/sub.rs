//! Limb subtraction

use crate::{
    Limb,
    backend::{CarryChain, Selected},
};
use core::ops::{Sub, SubAssign};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    ///
    /// `borrow` must be [`Limb::ZERO`] or [`Limb::ONE`]; the returned borrow is one of the two.
    #[inline(always)]
    #[must_use]
    pub fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = Selected::sbb(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }
}

impl Sub for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (res, borrow) = self.borrowing_sub(rhs, Limb::ZERO);
        assert!(borrow.0 == 0, "attempted to subtract with underflow");
        res
    }
}

impl Sub<&Self> for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: &Self) -> Self {
        self - *rhs
    }
}

impl SubAssign for Limb {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}
