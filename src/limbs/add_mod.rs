//! Modular addition.

use super::Limbs;

impl Limbs {
    /// Computes `out = (self + rhs) mod m`.
    ///
    /// Assumes `self < m` and `rhs < m`.
    ///
    /// # Panics
    /// If the four vectors do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn add_mod(&self, rhs: &Self, m: &Self, out: &mut Self) {
        out.copy_from(self);
        out.add_mod_assign(rhs, m);
    }

    /// Computes `self = (self + rhs) mod m`.
    ///
    /// Assumes `self < m` and `rhs < m`. A carry out of the top limb means the true sum is at
    /// least `2^bits > m`, so `m` is subtracted whenever the carry is set or the truncated sum
    /// is not below `m`. When the carry is set, the borrow out of that subtraction cancels it.
    ///
    /// # Panics
    /// If `self`, `rhs` and `m` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn add_mod_assign(&mut self, rhs: &Self, m: &Self) {
        self.assert_same_len(m);
        let carry = self.add_assign(rhs);
        let overflow = carry.carry_to_choice().or(self.ct_lt(m).not());
        let _ = self.conditional_sub_assign(m, overflow);
    }
}
