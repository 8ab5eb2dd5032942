//! [`BigNum`] comparisons.

use super::BigNum;
use subtle::{Choice, ConstantTimeEq};

impl ConstantTimeEq for BigNum<'_> {
    /// Containers with different significant lengths compare unequal; normalize both sides
    /// first to compare values.
    fn ct_eq(&self, other: &Self) -> Choice {
        ConstantTimeEq::ct_eq(self.as_limbs(), other.as_limbs())
    }
}

impl<'b> PartialEq<BigNum<'b>> for BigNum<'_> {
    fn eq(&self, other: &BigNum<'b>) -> bool {
        ConstantTimeEq::ct_eq(self.as_limbs(), other.as_limbs()).into()
    }
}

impl Eq for BigNum<'_> {}
