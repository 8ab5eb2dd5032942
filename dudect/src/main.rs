//! Constant-time checks for `crypto-limbs`.
//!
//! These use the `dudect_bencher` crate to compare timings of modular operations on two
//! classes of inputs: ones where the masked correction is taken and ones where it is not.

use crypto_limbs::{Limb, Limbs, Word};
use dudect_bencher::{BenchRng, Class, CtRunner, ctbench_main};

const N: usize = 4;
const ITERATIONS_OUTER: usize = 10_000;
const ITERATIONS_INNER: usize = 1_000;

/// Modulus with the top bit set: `2^(N * BITS - 1) + 0x1234`.
fn modulus() -> [Limb; N] {
    let mut m = [Limb::ZERO; N];
    m[0] = Limb(0x1234);
    m[N - 1] = Limb(1 << Limb::HI_BIT);
    m
}

/// `m - 1`: every addition of it overflows and triggers the subtraction of `m`.
fn large_operand() -> [Limb; N] {
    let mut a = modulus();
    a[0] = Limb(a[0].0 - 1);
    a
}

/// A small operand for which no correction is needed.
fn small_operand() -> [Limb; N] {
    let mut a = [Limb::ZERO; N];
    a[0] = Limb(3 as Word);
    a
}

fn run<F>(runner: &mut CtRunner, op: F)
where
    F: Fn(&mut [Limb; N], &[Limb; N], &[Limb; N]),
{
    let m = modulus();
    let mut inputs = vec![];

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((Class::Left, large_operand()));
    }

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((Class::Right, small_operand()));
    }

    for (class, input) in inputs {
        runner.run_one(class, || {
            let mut acc = input;
            for _ in 0..ITERATIONS_INNER {
                op(&mut acc, &input, &m);
            }
            core::hint::black_box(acc);
        })
    }
}

/// Check `Limbs::add_mod_assign` for constant-time operation.
fn add_mod(runner: &mut CtRunner, _rng: &mut BenchRng) {
    run(runner, |acc, a, m| {
        acc.copy_from_slice(a);
        Limbs::new_mut(acc).add_mod_assign(Limbs::new(a), Limbs::new(m));
    });
}

/// Check `Limbs::sub_mod_assign` for constant-time operation.
fn sub_mod(runner: &mut CtRunner, _rng: &mut BenchRng) {
    run(runner, |acc, a, m| {
        acc.copy_from_slice(&small_operand());
        Limbs::new_mut(acc).sub_mod_assign(Limbs::new(a), Limbs::new(m));
    });
}

/// Check `Limbs::reduce_once` for constant-time operation.
///
/// Reduces modulo `m - 1`, so the large operand reduces to zero and the small one is unchanged.
fn reduce_once(runner: &mut CtRunner, _rng: &mut BenchRng) {
    run(runner, |acc, a, _m| {
        let m = large_operand();
        acc.copy_from_slice(a);
        Limbs::new_mut(acc).reduce_once(Limbs::new(&m));
    });
}

/// Check `Limbs::ct_lt` for constant-time operation.
fn ct_lt(runner: &mut CtRunner, _rng: &mut BenchRng) {
    run(runner, |acc, a, m| {
        acc[0] = Limb(Limbs::new(a).ct_lt(Limbs::new(m)).to_word_mask());
    });
}

ctbench_main!(add_mod, sub_mod, reduce_once, ct_lt);
