//! Limb left bitshift

use crate::Limb;

impl Limb {
    /// Computes `(self << 1) | carry`, returning the result along with the bit shifted out of the
    /// top of the limb.
    ///
    /// `carry` must be [`Limb::ZERO`] or [`Limb::ONE`].
    #[inline(always)]
    #[must_use]
    pub const fn shl1_with_carry(self, carry: Limb) -> (Limb, Limb) {
        debug_assert!(carry.0 <= 1);
        (Limb((self.0 << 1) | carry.0), Limb(self.0 >> Limb::HI_BIT))
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;

    #[test]
    fn shl1_no_carry() {
        assert_eq!(Limb(3).shl1_with_carry(Limb::ZERO), (Limb(6), Limb::ZERO));
        assert_eq!(Limb(3).shl1_with_carry(Limb::ONE), (Limb(7), Limb::ZERO));
    }

    #[test]
    fn shl1_carry_out() {
        assert_eq!(Limb::MAX.shl1_with_carry(Limb::ZERO), (Limb(!1), Limb::ONE));
        assert_eq!(Limb::MAX.shl1_with_carry(Limb::ONE), (Limb::MAX, Limb::ONE));
    }
}
