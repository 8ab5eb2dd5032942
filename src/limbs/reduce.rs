//! Single-step modular reduction.

use super::Limbs;
use crate::Limb;

impl Limbs {
    /// Reduces `self` modulo `m` in place, assuming `self < 2*m`.
    ///
    /// Subtracts `m` exactly when `self >= m`, selecting the subtrahend by mask so that both
    /// outcomes execute the same instructions.
    ///
    /// # Panics
    /// If `self` and `m` do not share the same nonzero length.
    #[inline]
    #[track_caller]
    pub fn reduce_once(&mut self, m: &Self) {
        let overflow = self.ct_lt(m).not();
        let borrow = self.conditional_sub_assign(m, overflow);
        debug_assert_eq!(borrow, Limb::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, Limbs, Word};

    #[test]
    fn reduce_below_modulus_is_identity() {
        let m = [Limb(5), Limb(1)];
        let mut r = [Limb(7), Limb(0)];
        Limbs::new_mut(&mut r).reduce_once(Limbs::new(&m));
        assert_eq!(r, [Limb(7), Limb(0)]);
    }

    #[test]
    fn reduce_modulus_to_zero() {
        let m = [Limb(5), Limb(1)];
        let mut r = m;
        Limbs::new_mut(&mut r).reduce_once(Limbs::new(&m));
        assert_eq!(r, [Limb::ZERO; 2]);
    }

    #[test]
    fn reduce_across_limbs() {
        let m = [Limb::MAX, Limb(1)];
        let mut r = [Limb(2), Limb(2)];
        Limbs::new_mut(&mut r).reduce_once(Limbs::new(&m));
        assert_eq!(r, [Limb(3), Limb::ZERO]);
    }

    #[test]
    fn reduce_just_below_twice_modulus() {
        let m = [Limb(Word::MAX / 2 + 1)];
        let mut r = [Limb::MAX];
        Limbs::new_mut(&mut r).reduce_once(Limbs::new(&m));
        assert_eq!(r, [Limb(Word::MAX / 2)]);
    }
}
