//! [`Limbs`] addition operations.

use super::Limbs;
use crate::{ConstChoice, Limb};

impl Limbs {
    /// Computes `out = self + rhs`, returning the carry out of the top limb.
    ///
    /// # Panics
    /// If the three vectors do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn add(&self, rhs: &Self, out: &mut Self) -> Limb {
        out.copy_from(self);
        out.add_assign(rhs)
    }

    /// Computes `self += rhs`, returning the carry out of the top limb.
    ///
    /// # Panics
    /// If `self` and `rhs` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn add_assign(&mut self, rhs: &Self) -> Limb {
        self.carrying_add_assign(rhs, Limb::ZERO)
    }

    /// Computes `self += rhs + carry`, returning the carry out of the top limb.
    ///
    /// # Panics
    /// If `self` and `rhs` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn carrying_add_assign(&mut self, rhs: &Self, mut carry: Limb) -> Limb {
        self.assert_same_len(rhs);
        for (a, b) in self.0.iter_mut().zip(rhs.iter()) {
            (*a, carry) = a.carrying_add(*b, carry);
        }
        carry
    }

    /// Computes `self += rhs` if `choice` is truthy, and `self += 0` otherwise, returning the
    /// carry. The same instructions execute in both cases.
    ///
    /// # Panics
    /// If `self` and `rhs` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn conditional_add_assign(&mut self, rhs: &Self, choice: ConstChoice) -> Limb {
        self.assert_same_len(rhs);
        let mut carry = Limb::ZERO;
        for (a, b) in self.0.iter_mut().zip(rhs.iter()) {
            (*a, carry) = a.carrying_add(b.and_choice(choice), carry);
        }
        carry
    }

    /// Computes `self += rhs` where `rhs` may be shorter than `self`, in which case it is
    /// zero-extended. Returns the carry out of the top limb of `self`.
    ///
    /// Runtime depends on both lengths, which must be public.
    ///
    /// # Panics
    /// If `rhs` is longer than `self`.
    #[track_caller]
    pub fn add_assign_ex(&mut self, rhs: &Self) -> Limb {
        assert!(rhs.nlimbs() <= self.nlimbs(), "addend is longer than the accumulator");
        let (lo, hi) = self.0.split_at_mut(rhs.nlimbs());
        let mut carry = Limb::ZERO;
        for (a, b) in lo.iter_mut().zip(rhs.iter()) {
            (*a, carry) = a.carrying_add(*b, carry);
        }
        for a in hi {
            (*a, carry) = a.carrying_add(Limb::ZERO, carry);
        }
        carry
    }
}
