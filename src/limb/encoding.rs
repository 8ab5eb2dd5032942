//! Limb encoding

use super::{Limb, Word};

impl Limb {
    /// Decode a limb from its big endian byte representation.
    #[inline]
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; Limb::BYTES]) -> Self {
        Limb(Word::from_be_bytes(bytes))
    }

    /// Decode a limb from its little endian byte representation.
    #[inline]
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; Limb::BYTES]) -> Self {
        Limb(Word::from_le_bytes(bytes))
    }

    /// Encode this limb as big endian bytes.
    #[inline]
    #[must_use]
    pub const fn to_be_bytes(&self) -> [u8; Limb::BYTES] {
        self.0.to_be_bytes()
    }

    /// Encode this limb as little endian bytes.
    #[inline]
    #[must_use]
    pub const fn to_le_bytes(&self) -> [u8; Limb::BYTES] {
        self.0.to_le_bytes()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn limb()(inner in any::<Word>()) -> Limb {
            Limb(inner)
        }
    }

    proptest! {
        #[test]
        fn reverse(a in limb()) {
            let mut bytes = a.to_be_bytes();
            bytes.reverse();
            assert_eq!(a, Limb::from_le_bytes(bytes));

            let mut bytes = a.to_le_bytes();
            bytes.reverse();
            assert_eq!(a, Limb::from_be_bytes(bytes));
        }
    }

    #[test]
    fn be_bytes_most_significant_first() {
        let bytes = Limb::ONE.to_be_bytes();
        assert_eq!(bytes[Limb::BYTES - 1], 1);
        assert!(bytes[..Limb::BYTES - 1].iter().all(|&b| b == 0));
    }
}
