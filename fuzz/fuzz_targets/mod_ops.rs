#![no_main]
use arbitrary::Arbitrary;
use crypto_limbs::{Limb, Limbs, Word};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

const N: usize = 4;

#[derive(Arbitrary, Debug)]
pub enum Operation {
    AddMod,
    SubMod,
    SubModEx,
    ShlMod,
}

fn to_biguint(limbs: &[Limb]) -> BigUint {
    let bytes: Vec<u8> = limbs.iter().flat_map(|l| l.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

fn to_limbs(value: &BigUint) -> [Limb; N] {
    let mut out = [Limb::ZERO; N];
    for (limb, digit) in out.iter_mut().zip(value.iter_u64_digits().flat_map(split_digit)) {
        *limb = Limb(digit);
    }
    out
}

#[cfg(target_pointer_width = "64")]
fn split_digit(digit: u64) -> impl Iterator<Item = Word> {
    core::iter::once(digit)
}

#[cfg(target_pointer_width = "32")]
fn split_digit(digit: u64) -> impl Iterator<Item = Word> {
    [digit as u32, (digit >> 32) as u32].into_iter()
}

fuzz_target!(|input: ([Word; N], Vec<([Word; N], Operation)>)| {
    let (modulus, operations) = input;
    let mut m = modulus.map(Limb);
    m[0] = Limb(m[0].0 | 1);
    let m_bi = to_biguint(&m);

    let mut acc = [Limb::ZERO; N];
    for (operand, op) in operations {
        let operand = to_limbs(&(to_biguint(&operand.map(Limb)) % &m_bi));
        let (a, b) = (to_biguint(&acc), to_biguint(&operand));

        let expected = match op {
            Operation::AddMod => {
                Limbs::new_mut(&mut acc).add_mod_assign(Limbs::new(&operand), Limbs::new(&m));
                (a + b) % &m_bi
            }
            Operation::SubMod => {
                Limbs::new_mut(&mut acc).sub_mod_assign(Limbs::new(&operand), Limbs::new(&m));
                (a + &m_bi - b) % &m_bi
            }
            Operation::SubModEx => {
                let short = &operand[..N / 2];
                let b = to_biguint(short);
                Limbs::new_mut(&mut acc).sub_mod_ex_assign(Limbs::new(short), Limbs::new(&m));
                (a + &m_bi - b) % &m_bi
            }
            Operation::ShlMod => {
                Limbs::new_mut(&mut acc).shl_mod_assign(Limbs::new(&m));
                (a << 1usize) % &m_bi
            }
        };

        assert_eq!(to_biguint(&acc), expected);
    }
});
