//! Random number generator support

use super::Limb;
use rand_core::RngCore;

impl Limb {
    /// Generate a random limb.
    #[cfg(target_pointer_width = "32")]
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self(rng.next_u32())
    }

    /// Generate a random limb.
    #[cfg(target_pointer_width = "64")]
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self(rng.next_u64())
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn random_is_deterministic_for_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(1);
        let mut b = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(Limb::random(&mut a), Limb::random(&mut b));
    }
}
