//! Limb addition

use crate::{
    Limb,
    backend::{CarryChain, Selected},
};
use core::ops::{Add, AddAssign};

impl Limb {
    /// Computes `self + rhs + carry`, returning the result along with the new carry.
    ///
    /// `carry` must be [`Limb::ZERO`] or [`Limb::ONE`]; the returned carry is one of the two.
    #[inline(always)]
    #[must_use]
    pub fn carrying_add(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = Selected::adc(self.0, rhs.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Computes `self + rhs`, returning the result along with the carry.
    #[inline(always)]
    #[must_use]
    pub fn overflowing_add(self, rhs: Limb) -> (Limb, Limb) {
        self.carrying_add(rhs, Limb::ZERO)
    }

    /// Perform wrapping addition, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_add(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_add(rhs.0))
    }
}

impl Add for Limb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (res, carry) = self.overflowing_add(rhs);
        assert!(carry.0 == 0, "attempted to add with overflow");
        res
    }
}

impl Add<&Self> for Limb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: &Self) -> Self {
        self + *rhs
    }
}

impl AddAssign for Limb {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
