//! Big-endian encoding for [`BigNum`].

use super::BigNum;
use crate::{Limb, Result, encoding};
use alloc::{boxed::Box, vec};

impl BigNum<'_> {
    /// Decode a big-endian byte string into a new owned container.
    ///
    /// Leading zero bytes are accepted and the result is normalized. Fails with
    /// [`Error::InvalidEncoding`][`crate::Error::InvalidEncoding`] on empty input.
    pub fn from_be_slice(bytes: &[u8]) -> Result<BigNum<'static>> {
        let mut ret = BigNum::new();
        let limbs = ret.expand_to(bytes.len().div_ceil(Limb::BYTES))?;
        encoding::parse_be_and_pad(bytes, limbs.as_mut_slice())?;
        ret.normalize();
        Ok(ret)
    }

    /// Serialize the significant limbs as big-endian bytes.
    ///
    /// The output is `self.nlimbs() * Limb::BYTES` bytes long, so zero serializes as an empty
    /// string.
    pub fn to_be_bytes(&self) -> Box<[u8]> {
        let limbs = self.as_limbs().as_slice();
        let mut out = vec![0u8; limbs.len() * Limb::BYTES];
        for (src, dst) in limbs.iter().rev().zip(out.chunks_exact_mut(Limb::BYTES)) {
            dst.copy_from_slice(&src.to_be_bytes());
        }
        out.into()
    }
}
