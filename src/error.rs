//! Error types.

use core::fmt;

/// Result type with the `crypto-limbs` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The allocator refused to provide the requested storage.
    ///
    /// The container the request was made on is left unchanged.
    AllocationFailed,

    /// The requested number of limbs exceeds [`BigNum::MAX_LIMBS`][`crate::BigNum::MAX_LIMBS`].
    CapacityOverflow,

    /// Attempted to grow storage owned by the caller.
    BorrowedStorage,

    /// Encoded input was empty or too long for the output.
    InvalidEncoding,

    /// Decoded value was not below the requested bound, or was zero where zero is disallowed.
    OutOfRange,

    /// Compared values differ.
    Mismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed => write!(f, "memory allocation failed"),
            Self::CapacityOverflow => write!(f, "requested limb count exceeds maximum"),
            Self::BorrowedStorage => write!(f, "cannot grow borrowed limb storage"),
            Self::InvalidEncoding => write!(f, "invalid big-endian encoding length"),
            Self::OutOfRange => write!(f, "value out of range"),
            Self::Mismatch => write!(f, "values differ"),
        }
    }
}

impl core::error::Error for Error {}
