//! Random suffix generation.
//!
//! Each 32-bit draw supplies up to five symbols: symbol `k` of a draw is bits
//! `6k..6k + 6`. Symbols 0-1 and 2-3 go out through the two-symbol
//! [`PAIRS`] table, symbol 4 and any odd trailing symbol one at a time. The
//! top two bits of every draw are discarded.
//!
//! ```text
//!  Bit Index:  31 30 29  24 23        12 11         0
//!              +-----+-----+------------+------------+
//!  Symbols:    | --- |  4  |   3 |  2   |   1 |  0   |
//!              +-----+-----+------------+------------+
//! ```
//!
//! [`PAIRS`]: crate::alphabet::PAIRS

#[cfg(feature = "alloc")]
use alloc::{string::String, vec};
#[cfg(feature = "alloc")]
use core::fmt;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{RandSource, alphabet};

/// Shortest suffix [`generate_suffix`] produces.
pub const MIN_SUFFIX_LEN: usize = 12;

/// Longest suffix [`generate_suffix`] produces.
pub const MAX_SUFFIX_LEN: usize = 1024;

/// Suffix length used when none is configured.
pub const DEFAULT_SUFFIX_LEN: usize = MIN_SUFFIX_LEN;

/// Symbols extracted from one 32-bit draw.
pub const SYMBOLS_PER_DRAW: usize = 5;

/// Coerces a requested suffix length into
/// [`MIN_SUFFIX_LEN`]`..=`[`MAX_SUFFIX_LEN`].
///
/// Out-of-range lengths are not an error; short requests are raised and long
/// ones capped.
///
/// ```
/// use sortid::clamp_suffix_len;
///
/// assert_eq!(clamp_suffix_len(5), 12);
/// assert_eq!(clamp_suffix_len(21), 21);
/// assert_eq!(clamp_suffix_len(2000), 1024);
/// ```
#[must_use]
pub const fn clamp_suffix_len(len: usize) -> usize {
    if len < MIN_SUFFIX_LEN {
        MIN_SUFFIX_LEN
    } else if len > MAX_SUFFIX_LEN {
        MAX_SUFFIX_LEN
    } else {
        len
    }
}

/// Fills `buf` with random symbols drawn from `rng`.
///
/// This is the zero-allocation building block behind [`generate_suffix`]. It
/// fills whatever length it is given; no clamping is applied.
///
/// # Example
/// ```
/// use sortid::{Sfc32, fill_suffix};
///
/// let mut rng = Sfc32::from_seed([1, 2, 3, 4]);
/// let mut buf = [0_u8; 12];
/// fill_suffix(&mut rng, &mut buf);
/// assert_eq!(&buf, b"ZB0Mm0~KUGGJ");
/// ```
#[inline]
pub fn fill_suffix<R>(rng: &mut R, buf: &mut [u8])
where
    R: RandSource<u32> + ?Sized,
{
    let mut chunks = buf.chunks_exact_mut(SYMBOLS_PER_DRAW);
    for chunk in &mut chunks {
        let draw = rng.rand();
        let [s0, s1] = alphabet::pair(draw);
        let [s2, s3] = alphabet::pair(draw >> 12);
        chunk.copy_from_slice(&[s0, s1, s2, s3, alphabet::symbol(draw >> 24)]);
    }

    let rest = chunks.into_remainder();
    if rest.is_empty() {
        return;
    }
    let mut draw = rng.rand();
    let mut pairs = rest.chunks_exact_mut(2);
    for pair in &mut pairs {
        pair.copy_from_slice(&alphabet::pair(draw));
        draw >>= 12;
    }
    if let [last] = pairs.into_remainder() {
        *last = alphabet::symbol(draw);
    }
}

/// Generates a random suffix of `clamp_suffix_len(len)` symbols.
///
/// # Example
/// ```
/// use sortid::{Sfc32, generate_suffix};
///
/// let mut rng = Sfc32::from_seed([1, 2, 3, 4]);
/// assert_eq!(generate_suffix(&mut rng, 5).len(), 12);
/// assert_eq!(generate_suffix(&mut rng, 2000).len(), 1024);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(rng)))]
pub fn generate_suffix<R>(rng: &mut R, len: usize) -> RandomSuffix
where
    R: RandSource<u32> + ?Sized,
{
    let mut buf = vec![0_u8; clamp_suffix_len(len)];
    fill_suffix(rng, &mut buf);
    // SAFETY: `fill_suffix` only writes symbols from the ASCII alphabet.
    RandomSuffix(unsafe { String::from_utf8_unchecked(buf) })
}

/// An owned string of random alphabet symbols.
///
/// Produced by [`generate_suffix`]; ordering is plain byte order and carries
/// no meaning beyond breaking ties between identifiers sharing a timestamp.
#[cfg(feature = "alloc")]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RandomSuffix(String);

#[cfg(feature = "alloc")]
impl RandomSuffix {
    /// Returns the suffix as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the suffix has no symbols. Never the case for a
    /// generated suffix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the suffix, returning the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(feature = "alloc")]
impl fmt::Display for RandomSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "alloc")]
impl AsRef<str> for RandomSuffix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "alloc")]
impl From<RandomSuffix> for String {
    fn from(suffix: RandomSuffix) -> Self {
        suffix.0
    }
}

#[cfg(feature = "alloc")]
impl PartialEq<&str> for RandomSuffix {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
