//! Growable big-integer container.
//!
//! A [`BigNum`] owns (or borrows) a limb buffer of some capacity `C` and tracks how many of those
//! limbs, `T <= C`, are significant. After [`BigNum::normalize`] the top significant limb is
//! nonzero, so zero is represented by `T == 0`.
//!
//! The limb *values* are treated as secret; `T` and `C` are treated as public metadata, as they
//! follow from the public widths of cryptographic parameters. Limbs at or above `T` are
//! unspecified and must not be read as part of the value.

mod add;
mod cmp;
mod encoding;

use crate::{ConstChoice, Error, Limb, Limbs, Result};
use alloc::{boxed::Box, vec::Vec};
use core::fmt;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Backing storage of a [`BigNum`].
enum Storage<'a> {
    /// Buffer allocated and released by the container.
    Owned(Box<[Limb]>),

    /// Buffer supplied by the caller. Never grown and never released by the container.
    Borrowed(&'a mut [Limb]),
}

impl Storage<'_> {
    fn as_slice(&self) -> &[Limb] {
        match self {
            Self::Owned(buf) => &buf[..],
            Self::Borrowed(buf) => &buf[..],
        }
    }

    fn as_mut_slice(&mut self) -> &mut [Limb] {
        match self {
            Self::Owned(buf) => &mut buf[..],
            Self::Borrowed(buf) => &mut buf[..],
        }
    }
}

/// Variable-width big unsigned integer built on a growable limb buffer.
///
/// The lifetime `'a` is that of a caller-supplied buffer (see [`BigNum::from_borrowed`]); containers
/// owning their storage are `BigNum<'static>`.
pub struct BigNum<'a> {
    storage: Storage<'a>,
    top: usize,
}

impl<'a> BigNum<'a> {
    /// Largest capacity, in limbs, a [`BigNum`] may be grown to.
    ///
    /// Keeps the size of the buffer in bits, times four, within `i32::MAX`, so that size
    /// computations on any supported target cannot overflow.
    pub const MAX_LIMBS: usize = i32::MAX as usize / (4 * Limb::BITS as usize);

    /// Create an empty container: value zero, no buffer.
    pub fn new() -> Self {
        Self {
            storage: Storage::Owned(Box::new([])),
            top: 0,
        }
    }

    /// Create an empty container with an owned buffer of at least `nlimbs` limbs.
    pub fn with_capacity(nlimbs: usize) -> Result<Self> {
        let mut ret = Self::new();
        ret.ensure_capacity(nlimbs)?;
        Ok(ret)
    }

    /// Wrap a caller-supplied buffer holding a little-endian limb value.
    ///
    /// The whole buffer is significant until normalization, which happens here. The container
    /// will never grow or release `buf`; operations needing more than `buf.len()` limbs fail
    /// with [`Error::BorrowedStorage`].
    pub fn from_borrowed(buf: &'a mut [Limb]) -> Self {
        let top = buf.len();
        let mut ret = Self {
            storage: Storage::Borrowed(buf),
            top,
        };
        ret.normalize();
        ret
    }

    /// Create a normalized container owning a copy of `limbs`.
    pub fn from_limbs(limbs: &[Limb]) -> Result<Self> {
        let mut ret = Self::new();
        ret.set_limbs(limbs)?;
        Ok(ret)
    }

    /// Clone the significant limbs into a new owned container.
    pub fn try_clone(&self) -> Result<BigNum<'static>> {
        BigNum::from_limbs(self.as_limbs().as_slice())
    }

    /// Number of limbs the buffer can hold without growing.
    pub fn capacity(&self) -> usize {
        self.storage.as_slice().len()
    }

    /// Number of significant limbs.
    pub fn nlimbs(&self) -> usize {
        self.top
    }

    /// Is the buffer owned by the caller?
    pub fn is_borrowed(&self) -> bool {
        matches!(self.storage, Storage::Borrowed(_))
    }

    /// Is the value zero?
    ///
    /// Inspects every significant limb, so this is correct for unnormalized containers too.
    pub fn is_zero(&self) -> ConstChoice {
        self.as_limbs().is_zero()
    }

    /// Borrow the significant limbs.
    pub fn as_limbs(&self) -> &Limbs {
        Limbs::new(&self.storage.as_slice()[..self.top])
    }

    /// Overwrite `self` with the value of `src`.
    ///
    /// Grows `self` as needed; exactly `src.nlimbs()` limbs are copied. On failure `self` is
    /// unchanged. Copying a container into itself cannot be expressed, since `self` is borrowed
    /// exclusively.
    pub fn copy_from(&mut self, src: &BigNum<'_>) -> Result<()> {
        self.set_limbs(src.as_limbs().as_slice())?;
        self.top = src.top;
        Ok(())
    }

    /// Overwrite `self` with a copy of `limbs`, then normalize.
    pub fn set_limbs(&mut self, limbs: &[Limb]) -> Result<()> {
        self.ensure_capacity(limbs.len())?;
        self.storage.as_mut_slice()[..limbs.len()].copy_from_slice(limbs);
        self.top = limbs.len();
        self.normalize();
        Ok(())
    }

    /// Set the value to zero.
    ///
    /// Only the significant length changes; the buffer keeps its contents and capacity.
    pub fn set_zero(&mut self) {
        self.top = 0;
    }

    /// Ensure the buffer holds at least `nlimbs` limbs.
    ///
    /// Does nothing if the capacity suffices. Otherwise a new owned buffer is allocated, the
    /// significant limbs are moved into it, and the remainder is zeroed. Fails with:
    ///
    /// - [`Error::CapacityOverflow`] if `nlimbs` exceeds [`BigNum::MAX_LIMBS`],
    /// - [`Error::BorrowedStorage`] if the buffer is borrowed,
    /// - [`Error::AllocationFailed`] if the allocator refuses.
    ///
    /// The container is unchanged on failure.
    pub fn ensure_capacity(&mut self, nlimbs: usize) -> Result<()> {
        if nlimbs <= self.capacity() {
            return Ok(());
        }
        if nlimbs > Self::MAX_LIMBS {
            return Err(Error::CapacityOverflow);
        }

        let Storage::Owned(old) = &mut self.storage else {
            return Err(Error::BorrowedStorage);
        };

        let mut buf = Vec::new();
        buf.try_reserve_exact(nlimbs)
            .map_err(|_| Error::AllocationFailed)?;
        buf.extend_from_slice(&old[..self.top]);
        buf.resize(nlimbs, Limb::ZERO);

        #[cfg(feature = "zeroize")]
        old.zeroize();

        *old = buf.into_boxed_slice();
        Ok(())
    }

    /// Drop leading zero limbs from the significant length.
    ///
    /// This scan exits at the first nonzero limb, so its running time reveals the position of
    /// the top nonzero limb. That position is the significant length, which is public; do not
    /// use this on values whose length must stay secret.
    pub fn normalize(&mut self) {
        let limbs = &self.storage.as_slice()[..self.top];
        self.top = limbs
            .iter()
            .rposition(|limb| limb.0 != 0)
            .map_or(0, |i| i + 1);
    }

    /// Set the significant length to `nlimbs` and return those limbs for writing.
    ///
    /// Limbs between the old and the new significant length are zeroed, so the value is
    /// unchanged when growing. The caller must [`BigNum::normalize`] after writing.
    pub fn expand_to(&mut self, nlimbs: usize) -> Result<&mut Limbs> {
        self.ensure_capacity(nlimbs)?;
        let buf = self.storage.as_mut_slice();
        if nlimbs > self.top {
            buf[self.top..nlimbs].fill(Limb::ZERO);
        }
        self.top = nlimbs;
        Ok(Limbs::new_mut(&mut buf[..nlimbs]))
    }

    /// Write the value into `out`, zero-extending it to `out.len()` limbs.
    ///
    /// Fails with [`Error::OutOfRange`] if there are more significant limbs than `out` holds.
    pub fn to_padded_limbs(&self, out: &mut [Limb]) -> Result<()> {
        let limbs = self.as_limbs().as_slice();
        if limbs.len() > out.len() {
            return Err(Error::OutOfRange);
        }
        let (lo, hi) = out.split_at_mut(limbs.len());
        lo.copy_from_slice(limbs);
        hi.fill(Limb::ZERO);
        Ok(())
    }
}

impl Default for BigNum<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for BigNum<'_> {
    fn drop(&mut self) {
        if let Storage::Owned(buf) = &mut self.storage {
            buf.zeroize();
        }
    }
}

impl AsRef<[Limb]> for BigNum<'_> {
    fn as_ref(&self) -> &[Limb] {
        self.as_limbs().as_slice()
    }
}

impl fmt::Debug for BigNum<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNum(0x{self:X})")
    }
}

impl fmt::Display for BigNum<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for BigNum<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top == 0 {
            return fmt::LowerHex::fmt(&Limb::ZERO, f);
        }
        fmt::LowerHex::fmt(self.as_limbs(), f)
    }
}

impl fmt::UpperHex for BigNum<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top == 0 {
            return fmt::UpperHex::fmt(&Limb::ZERO, f);
        }
        fmt::UpperHex::fmt(self.as_limbs(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::BigNum;
    use crate::{ConstChoice, Error, Limb};

    #[test]
    fn new_is_empty_zero() {
        let n = BigNum::new();
        assert_eq!(n.nlimbs(), 0);
        assert_eq!(n.capacity(), 0);
        assert_eq!(n.is_zero(), ConstChoice::TRUE);
        assert!(!n.is_borrowed());
    }

    #[test]
    fn copy_scenario() {
        let src = BigNum::from_limbs(&[Limb(7), Limb(0), Limb(2)]).unwrap();
        let mut dest = BigNum::from_limbs(&[Limb(9); 5]).unwrap();
        dest.copy_from(&src).unwrap();
        assert_eq!(dest.nlimbs(), 3);
        assert_eq!(dest.as_limbs().as_slice(), &[Limb(7), Limb(0), Limb(2)]);

        let mut empty = BigNum::new();
        empty.copy_from(&src).unwrap();
        assert_eq!(empty.as_limbs().as_slice(), &[Limb(7), Limb(0), Limb(2)]);
    }

    #[test]
    fn copy_into_small_borrowed_fails_unchanged() {
        let src = BigNum::from_limbs(&[Limb(7), Limb(0), Limb(2)]).unwrap();
        let mut buf = [Limb(1), Limb(0)];
        let mut dest = BigNum::from_borrowed(&mut buf);
        assert_eq!(dest.copy_from(&src), Err(Error::BorrowedStorage));
        assert_eq!(dest.nlimbs(), 1);
        assert_eq!(dest.as_limbs().as_slice(), &[Limb(1)]);
    }

    #[test]
    fn copy_into_large_enough_borrowed() {
        let src = BigNum::from_limbs(&[Limb(7), Limb(0), Limb(2)]).unwrap();
        let mut buf = [Limb::MAX; 4];
        {
            let mut dest = BigNum::from_borrowed(&mut buf);
            dest.copy_from(&src).unwrap();
            assert!(dest.is_borrowed());
            assert_eq!(dest.nlimbs(), 3);
        }
        assert_eq!(buf, [Limb(7), Limb(0), Limb(2), Limb::MAX]);
    }

    #[test]
    fn set_zero_keeps_capacity() {
        let mut n = BigNum::from_limbs(&[Limb(1), Limb(2)]).unwrap();
        n.set_zero();
        assert_eq!(n.nlimbs(), 0);
        assert_eq!(n.capacity(), 2);
        assert_eq!(n.is_zero(), ConstChoice::TRUE);
    }

    #[test]
    fn ensure_capacity_preserves_value() {
        let mut n = BigNum::from_limbs(&[Limb(3), Limb(4)]).unwrap();
        n.ensure_capacity(10).unwrap();
        assert!(n.capacity() >= 10);
        assert_eq!(n.as_limbs().as_slice(), &[Limb(3), Limb(4)]);

        n.ensure_capacity(1).unwrap();
        assert!(n.capacity() >= 10);
    }

    #[test]
    fn ensure_capacity_overflow() {
        let mut n = BigNum::from_limbs(&[Limb(3)]).unwrap();
        assert_eq!(
            n.ensure_capacity(BigNum::MAX_LIMBS + 1),
            Err(Error::CapacityOverflow)
        );
        assert_eq!(n.ensure_capacity(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(n.as_limbs().as_slice(), &[Limb(3)]);
    }

    #[test]
    fn normalize() {
        let mut buf = [Limb(5), Limb(0), Limb(0)];
        let mut n = BigNum::from_borrowed(&mut buf);
        assert_eq!(n.nlimbs(), 1);

        let limbs = n.expand_to(3).unwrap();
        assert_eq!(limbs.as_slice(), &[Limb(5), Limb(0), Limb(0)]);
        n.normalize();
        assert_eq!(n.nlimbs(), 1);
        n.normalize();
        assert_eq!(n.nlimbs(), 1);

        n.expand_to(2).unwrap()[0] = Limb::ZERO;
        n.normalize();
        assert_eq!(n.nlimbs(), 0);
    }

    #[test]
    fn expand_to_zeroes_new_limbs() {
        let mut n = BigNum::from_limbs(&[Limb(1), Limb(2), Limb(3)]).unwrap();
        n.expand_to(1).unwrap();
        assert_eq!(n.expand_to(3).unwrap().as_slice(), &[Limb(1), Limb(0), Limb(0)]);
    }

    #[test]
    fn to_padded_limbs() {
        let n = BigNum::from_limbs(&[Limb(1), Limb(2)]).unwrap();
        let mut out = [Limb::MAX; 3];
        n.to_padded_limbs(&mut out).unwrap();
        assert_eq!(out, [Limb(1), Limb(2), Limb(0)]);

        let mut short = [Limb::ZERO; 1];
        assert_eq!(n.to_padded_limbs(&mut short), Err(Error::OutOfRange));
    }

    #[test]
    fn try_clone_is_owned() {
        let mut buf = [Limb(4), Limb(8)];
        let n = BigNum::from_borrowed(&mut buf);
        let cloned = n.try_clone().unwrap();
        assert!(!cloned.is_borrowed());
        assert_eq!(cloned, n);
    }

    #[test]
    fn hex_formatting() {
        use alloc::format;

        assert_eq!(format!("{:x}", BigNum::new()), format!("{:x}", Limb::ZERO));
        let n = BigNum::from_limbs(&[Limb(0xab), Limb(1)]).unwrap();
        assert_eq!(
            format!("{n:?}"),
            format!("BigNum(0x{:X}{:X})", Limb(1), Limb(0xab))
        );
    }
}
