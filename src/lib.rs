//! Constant-time limb arithmetic for cryptographic big integers.
//!
//! # About
//! Big integers are stored as little-endian vectors of machine words called *limbs*. This crate
//! provides the arithmetic layer that public-key primitives build on, in three tiers:
//!
//! - [`ct`] and [`ConstChoice`]: branch-free word primitives (zero test, equality, selection)
//!   producing all-ones/all-zeros masks.
//! - [`Limb`] and [`Limbs`]: fixed-width limb-vector arithmetic with carry propagation,
//!   comparison, and modular add, subtract, reduce and double.
//! - [`BigNum`]: a growable container with a normalized significant length, backed by owned or
//!   caller-supplied storage (requires the `alloc` feature).
//!
//! # Constant-time guarantees
//! Every operation on limb *values* executes the same instruction sequence and memory access
//! pattern regardless of those values. Limb *counts* are public. The one deliberate exception is
//! [`BigNum::normalize`], whose running time depends on the position of the top nonzero limb,
//! i.e. on the significant length.
//!
//! Masks derived from carries pass through [`ct::value_barrier`] to discourage the optimizer from
//! turning masked selection back into branches. This is best effort: no Rust compiler guarantees
//! constant-time code generation, so high-assurance users should verify the generated assembly.
//!
//! # Carry chains
//! Multi-limb addition and subtraction go through [`backend::Selected`], which is the x86
//! `adc`/`sbb` intrinsic chain on x86 targets and a portable double-width implementation
//! elsewhere (or whenever the `portable` feature is enabled).
//!
//! # Usage
//! ```
//! use crypto_limbs::{Limb, Limbs};
//!
//! let m = [Limb(5), Limb::ZERO];
//! let a = [Limb(3), Limb::ZERO];
//! let b = [Limb(4), Limb::ZERO];
//! let mut r = [Limb::ZERO; 2];
//!
//! Limbs::new(&a).add_mod(Limbs::new(&b), Limbs::new(&m), Limbs::new_mut(&mut r));
//! assert_eq!(r, [Limb(2), Limb::ZERO]);
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod backend;
pub mod ct;
pub mod encoding;

#[cfg(feature = "alloc")]
mod bignum;
mod const_choice;
mod error;
mod limb;
mod limbs;
mod primitives;
mod word;

pub use crate::{
    const_choice::ConstChoice,
    error::{Error, Result},
    limb::{Limb, nlimbs},
    limbs::Limbs,
    word::{WideWord, Word},
};
pub use subtle;

#[cfg(feature = "alloc")]
pub use crate::bignum::BigNum;

#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
