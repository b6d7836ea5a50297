use core::fmt;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `sortid` can emit.
///
/// Decoding never fails with an error: malformed input to
/// [`decode_timestamp`] or [`parse`] yields `None`. The only hard failure in
/// the codec is handing [`encode_timestamp`] something that is not a
/// non-negative, integer-valued time.
///
/// [`decode_timestamp`]: crate::decode_timestamp
/// [`parse`]: crate::parse
/// [`encode_timestamp`]: crate::encode_timestamp
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Error {
    /// The value cannot be interpreted as a timestamp.
    InvalidInput(InvalidInput),

    /// The operation failed because the lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do **not** poison, so this
    /// variant is not available.
    #[cfg_attr(docsrs, doc(cfg(all(feature = "lock", not(feature = "parking-lot")))))]
    #[cfg(all(feature = "lock", not(feature = "parking-lot")))]
    LockPoisoned,
}

/// The reason a value was rejected as a timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum InvalidInput {
    /// The value is below zero.
    Negative,
    /// The value is NaN or infinite.
    NotFinite,
    /// The value has a fractional millisecond part.
    Fractional,
    /// The text is not a number.
    NotNumeric,
    /// The time lies before the Unix epoch.
    BeforeEpoch,
    /// The text is not exactly one encoded timestamp.
    NotDecodable,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "timestamp is negative"),
            Self::NotFinite => write!(f, "timestamp is not finite"),
            Self::Fractional => write!(f, "timestamp is not a whole number of milliseconds"),
            Self::NotNumeric => write!(f, "timestamp is not numeric"),
            Self::BeforeEpoch => write!(f, "time is before the unix epoch"),
            Self::NotDecodable => write!(f, "not an encoded timestamp"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
            #[cfg(all(feature = "lock", not(feature = "parking-lot")))]
            Self::LockPoisoned => write!(f, "lock poisoned"),
        }
    }
}

impl core::error::Error for Error {}

impl From<InvalidInput> for Error {
    fn from(reason: InvalidInput) -> Self {
        Self::InvalidInput(reason)
    }
}

#[cfg(all(feature = "lock", not(feature = "parking-lot")))]
use crate::generator::{MutexGuard, PoisonError};
#[cfg(all(feature = "lock", not(feature = "parking-lot")))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_reason() {
        let err = Error::from(InvalidInput::Negative);
        assert_eq!(err.to_string(), "invalid input: timestamp is negative");
        assert_eq!(
            Error::InvalidInput(InvalidInput::NotNumeric).to_string(),
            "invalid input: timestamp is not numeric"
        );
    }
}
