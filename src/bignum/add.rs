//! [`BigNum`] addition.

use super::BigNum;
use crate::{Limb, Result};

impl BigNum<'_> {
    /// Computes `self += rhs`, growing `self` by one limb beyond the wider operand so that the
    /// sum cannot overflow, then normalizing.
    ///
    /// On failure to grow, `self` is unchanged.
    pub fn add_assign(&mut self, rhs: &BigNum<'_>) -> Result<()> {
        let nlimbs = self.nlimbs().max(rhs.nlimbs()) + 1;
        let carry = self.expand_to(nlimbs)?.add_assign_ex(rhs.as_limbs());
        debug_assert_eq!(carry, Limb::ZERO);
        self.normalize();
        Ok(())
    }
}
