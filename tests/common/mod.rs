//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use crypto_limbs::{Limb, Word};
use num_bigint::BigUint;
use proptest::prelude::*;

/// Limb slice to `num_bigint::BigUint`
pub fn to_biguint<T>(limbs: &T) -> BigUint
where
    T: AsRef<[Limb]> + ?Sized,
{
    let mut bytes = Vec::with_capacity(limbs.as_ref().len() * Limb::BYTES);

    for limb in limbs.as_ref() {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }

    BigUint::from_bytes_le(&bytes)
}

/// `num_bigint::BigUint` to exactly `nlimbs` limbs. Panics if the value does not fit.
pub fn to_limbs(big_uint: &BigUint, nlimbs: usize) -> Vec<Limb> {
    let mut bytes = big_uint.to_bytes_le();
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    assert!(bytes.len() <= nlimbs * Limb::BYTES, "value does not fit");
    bytes.resize(nlimbs * Limb::BYTES, 0);

    bytes
        .chunks_exact(Limb::BYTES)
        .map(|chunk| Limb::from_le_bytes(chunk.try_into().unwrap()))
        .collect()
}

/// `2^(Limb::BITS * nlimbs)`
pub fn radix_pow(nlimbs: usize) -> BigUint {
    BigUint::from(1u8) << (Limb::BITS as usize * nlimbs)
}

prop_compose! {
    pub fn limbs(nlimbs: usize)(words in proptest::collection::vec(any::<Word>(), nlimbs)) -> Vec<Limb> {
        words.into_iter().map(Limb).collect()
    }
}

prop_compose! {
    /// A nonzero modulus.
    pub fn modulus(nlimbs: usize)(mut m in limbs(nlimbs)) -> Vec<Limb> {
        m[0] = Limb(m[0].0 | 1);
        m
    }
}

prop_compose! {
    /// A random modulus together with two operands reduced below it.
    pub fn mod_operands()(nlimbs in 1usize..=6)(
        m in modulus(nlimbs),
        a in limbs(nlimbs),
        b in limbs(nlimbs),
    ) -> (Vec<Limb>, Vec<Limb>, Vec<Limb>) {
        let n = m.len();
        let m_bi = to_biguint(&m);
        let a = to_limbs(&(to_biguint(&a) % &m_bi), n);
        let b = to_limbs(&(to_biguint(&b) % &m_bi), n);
        (m, a, b)
    }
}
