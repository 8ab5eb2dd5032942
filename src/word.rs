//! `Word` is the machine integer that a [`Limb`][`crate::Limb`] wraps, and is the same size as a
//! pointer on the target CPU.

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("this crate builds on 32-bit and 64-bit platforms only");

/// 32-bit definitions
#[cfg(target_pointer_width = "32")]
mod word32 {
    /// Inner integer type that the [`Limb`][`crate::Limb`] newtype wraps.
    pub type Word = u32;

    /// Unsigned wide integer type: double the width of [`Word`].
    pub type WideWord = u64;
}

/// 64-bit definitions
#[cfg(target_pointer_width = "64")]
mod word64 {
    /// Inner integer type that the [`Limb`][`crate::Limb`] newtype wraps.
    pub type Word = u64;

    /// Wide integer type: double the width of [`Word`].
    pub type WideWord = u128;
}

#[cfg(target_pointer_width = "32")]
pub use word32::*;
#[cfg(target_pointer_width = "64")]
pub use word64::*;

#[cfg(test)]
mod tests {
    use super::{WideWord, Word};

    #[test]
    fn wide_word_is_double_width() {
        assert_eq!(WideWord::BITS, 2 * Word::BITS);
        assert_eq!(Word::BITS as usize, usize::BITS as usize);
    }
}
