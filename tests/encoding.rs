//! Equivalence tests between `crypto_limbs::encoding` and `num_bigint::BigUint`.

mod common;

use common::{modulus, radix_pow, to_biguint, to_limbs};
use crypto_limbs::{
    Error, Limb,
    encoding::{self, AllowZero},
};
use num_bigint::BigUint;
use num_traits::Zero;
use proptest::prelude::*;

proptest! {
    #[test]
    fn parse_be_and_pad(bytes in proptest::collection::vec(any::<u8>(), 1..48), extra in 0usize..=2) {
        let nlimbs = bytes.len().div_ceil(Limb::BYTES) + extra;
        let mut result = vec![Limb::MAX; nlimbs];
        encoding::parse_be_and_pad(&bytes, &mut result).unwrap();
        prop_assert_eq!(to_biguint(&result), BigUint::from_bytes_be(&bytes));

        let mut out = vec![0xffu8; nlimbs * Limb::BYTES];
        encoding::be_bytes_from_limbs_padded(&result, &mut out).unwrap();
        prop_assert_eq!(BigUint::from_bytes_be(&out), BigUint::from_bytes_be(&bytes));
    }

    #[test]
    fn parse_be_too_long(nlimbs in 1usize..=4, extra in 1usize..=8) {
        let bytes = vec![0u8; nlimbs * Limb::BYTES + extra];
        let mut result = vec![Limb::ZERO; nlimbs];
        prop_assert_eq!(
            encoding::parse_be_and_pad(&bytes, &mut result),
            Err(Error::InvalidEncoding)
        );
    }

    #[test]
    fn parse_be_in_range(m in modulus(3), bytes in proptest::collection::vec(any::<u8>(), 1..=3 * Limb::BYTES)) {
        let value = BigUint::from_bytes_be(&bytes);
        let m_bi = to_biguint(&m);
        let mut result = vec![Limb::ZERO; 3];

        let expected = if value >= m_bi || value.is_zero() {
            Err(Error::OutOfRange)
        } else {
            Ok(())
        };
        prop_assert_eq!(
            encoding::parse_be_in_range_and_pad(&bytes, AllowZero::No, &m, &mut result),
            expected
        );
    }

    #[test]
    fn parse_be_partially_reduced(m in modulus(2), x in any::<u128>()) {
        let m_bi = to_biguint(&m);
        let value = (BigUint::from(x) % radix_pow(2)) % (&m_bi << 1usize);
        let bytes = to_be_padded(&value, 2 * Limb::BYTES);

        let mut result = vec![Limb::ZERO; 2];
        let outcome = encoding::parse_be_in_range_partially_reduced_and_pad(
            &bytes,
            AllowZero::Yes,
            &m,
            &mut result,
        );
        prop_assert_eq!(outcome, Ok(()));
        prop_assert_eq!(to_biguint(&result), &value % &m_bi);
        prop_assert_eq!(result, to_limbs(&(value % m_bi), 2));
    }

    #[test]
    fn verify_slices_are_equal(a in any::<Vec<u8>>(), b in any::<Vec<u8>>()) {
        prop_assert_eq!(encoding::verify_slices_are_equal(&a, &a), Ok(()));
        let expected = if a == b { Ok(()) } else { Err(Error::Mismatch) };
        prop_assert_eq!(encoding::verify_slices_are_equal(&a, &b), expected);
    }
}

fn to_be_padded(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}
