//! Modular doubling.

use super::Limbs;
use crate::Limb;

impl Limbs {
    /// Computes `self <<= 1` in place, returning the bit shifted out of the top limb.
    #[inline]
    pub fn shl1_assign(&mut self) -> Limb {
        let mut carry = Limb::ZERO;
        for limb in &mut self.0 {
            (*limb, carry) = limb.shl1_with_carry(carry);
        }
        carry
    }

    /// Computes `out = (self << 1) mod m`.
    ///
    /// Assumes `self < m`.
    ///
    /// # Panics
    /// If the three vectors do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn shl_mod(&self, m: &Self, out: &mut Self) {
        out.copy_from(self);
        out.shl_mod_assign(m);
    }

    /// Computes `self = (self << 1) mod m`.
    ///
    /// Assumes `self < m`. Like [`Limbs::add_mod_assign`], `m` is subtracted whenever a bit is
    /// shifted out of the top limb or the shifted value is not below `m`.
    ///
    /// # Panics
    /// If `self` and `m` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn shl_mod_assign(&mut self, m: &Self) {
        self.assert_same_len(m);
        let carry = self.shl1_assign();
        let overflow = carry.carry_to_choice().or(self.ct_lt(m).not());
        let _ = self.conditional_sub_assign(m, overflow);
    }
}
