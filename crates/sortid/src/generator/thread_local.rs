//! Thread-local identifier generation.
//!
//! Each OS thread lazily builds its own [`IdGenerator`] with an
//! independently seeded [`Sfc32`] the first time it calls into this module.
//! Threads never share random state, so no locking is involved.
//!
//! # Example
//! ```rust
//! use sortid::thread_local::{decode_id, new_id};
//!
//! let id = new_id(1_700_000_000_000_u64, 12, "-").unwrap().to_string();
//! let parsed = decode_id(&id, "-").unwrap();
//! assert_eq!(parsed.timestamp(), 1_700_000_000_000);
//! assert_eq!(parsed.randomness().len(), 12);
//! ```
//!
//! [`Sfc32`]: crate::Sfc32

use core::cell::RefCell;

use crate::{
    EncodedTimestamp, IdGenerator, Identifier, ParsedId, RandomSuffix, Result, Sfc32,
    SystemClock, TimeInput,
};

thread_local! {
    static GENERATOR: RefCell<IdGenerator<Sfc32, SystemClock>> =
        RefCell::new(IdGenerator::new());
}

fn with_generator<U>(f: impl FnOnce(&mut IdGenerator<Sfc32, SystemClock>) -> U) -> U {
    GENERATOR.with(|g| f(&mut g.borrow_mut()))
}

/// Encodes a timestamp into its 8-symbol form. See
/// [`crate::encode_timestamp`].
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) for negative,
/// fractional, non-finite or non-numeric input.
pub fn encode_timestamp(time: impl TimeInput) -> Result<EncodedTimestamp> {
    crate::encode_timestamp(time)
}

/// Decodes the timestamp prefix of `text`. See [`crate::decode_timestamp`].
#[must_use]
pub fn decode_timestamp(text: impl AsRef<[u8]>) -> Option<u64> {
    crate::decode_timestamp(text)
}

/// Draws a suffix of `clamp_suffix_len(len)` symbols from this thread's
/// generator.
///
/// ```
/// use sortid::thread_local::new_random_suffix;
///
/// assert_eq!(new_random_suffix(5).len(), 12);
/// assert_eq!(new_random_suffix(2000).len(), 1024);
/// ```
#[must_use]
pub fn new_random_suffix(len: usize) -> RandomSuffix {
    with_generator(|g| g.new_suffix(len))
}

/// Builds an identifier for `time` from this thread's generator.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if `time` is
/// not a valid timestamp.
pub fn new_id(time: impl TimeInput, suffix_len: usize, delimiter: &str) -> Result<Identifier> {
    with_generator(|g| g.new_id_with(time, suffix_len, delimiter))
}

/// Builds an identifier for the current system time with a 12-symbol suffix
/// and no delimiter.
#[must_use]
pub fn new_id_now() -> Identifier {
    with_generator(|g| g.new_id())
}

/// Splits `text` into timestamp and suffix. See [`crate::parse`].
#[must_use]
pub fn decode_id<'a>(text: &'a str, delimiter: &str) -> Option<ParsedId<'a>> {
    crate::parse(text, delimiter)
}
