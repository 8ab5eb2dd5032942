//! Modular subtraction.

use super::Limbs;

impl Limbs {
    /// Computes `out = (self - rhs) mod m`.
    ///
    /// Assumes `self < m` and `rhs < m`.
    ///
    /// # Panics
    /// If the four vectors do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn sub_mod(&self, rhs: &Self, m: &Self, out: &mut Self) {
        out.copy_from(self);
        out.sub_mod_assign(rhs, m);
    }

    /// Computes `self = (self - rhs) mod m`.
    ///
    /// Assumes `self < m` and `rhs < m`. `m` is added back, by mask, when the subtraction
    /// borrows.
    ///
    /// # Panics
    /// If `self`, `rhs` and `m` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn sub_mod_assign(&mut self, rhs: &Self, m: &Self) {
        self.assert_same_len(m);
        let borrow = self.sub_assign(rhs);
        let _ = self.conditional_add_assign(m, borrow.carry_to_choice());
    }

    /// Computes `self = (self - a) mod m` where `a` may be shorter than `self` and `m`.
    ///
    /// Assumes `self < m` and `a < m`. `a` is zero-extended and the borrow is propagated through
    /// the upper limbs of `self`. Runtime depends on the length of `a`, which must be public.
    ///
    /// # Panics
    /// If `self` and `m` do not share the same nonzero length, or `a` is longer than `self`.
    #[inline]
    #[track_caller]
    pub fn sub_mod_ex_assign(&mut self, a: &Self, m: &Self) {
        self.assert_same_len(m);
        let borrow = self.sub_assign_ex(a);
        let _ = self.conditional_add_assign(m, borrow.carry_to_choice());
    }
}
