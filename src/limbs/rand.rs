//! Random number generator support

use super::Limbs;
use crate::Limb;
use rand_core::RngCore;

impl Limbs {
    /// Overwrite every limb with output from `rng`.
    pub fn fill_random<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        for limb in &mut self.0 {
            *limb = Limb::random(rng);
        }
    }
}
