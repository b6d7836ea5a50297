//! Composite identifiers: an encoded timestamp, an optional delimiter and a
//! random suffix.
//!
//! ```text
//!  +-----------------+-------------+------------------------+
//!  | timestamp (8)   | delimiter   | randomness (12..=1024) |
//!  +-----------------+-------------+------------------------+
//!    0OkFuMW0          -             ZB0Mm0~KUGGJ
//! ```
//!
//! Identifiers sort by timestamp first. Two identifiers minted in the same
//! millisecond compare by their raw suffix bytes, which says nothing about
//! which was created first.

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use core::{cmp::Ordering, fmt, hash::Hash};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{EncodedTimestamp, TIMESTAMP_LEN, encode_millis, timestamp::decode_prefix};
#[cfg(feature = "alloc")]
use crate::{RandSource, RandomSuffix, Result, TimeInput, encode_timestamp, generate_suffix};

/// An identifier assembled from its three parts.
///
/// The parts are kept separately; [`Display`](fmt::Display) and
/// [`Identifier::into_string`] render the composite. Equality, ordering and
/// hashing follow the rendered string.
///
/// # Example
/// ```
/// use sortid::{Sfc32, compose};
///
/// let mut rng = Sfc32::from_seed([1, 2, 3, 4]);
/// let id = compose(&mut rng, 1_700_000_000_000_u64, 12, "-").unwrap();
/// assert_eq!(id.to_string(), "0OkFuMW0-ZB0Mm0~KUGGJ");
/// assert_eq!(id.millis(), 1_700_000_000_000);
/// assert_eq!(id.randomness().as_str(), "ZB0Mm0~KUGGJ");
/// ```
#[cfg(feature = "alloc")]
#[derive(Clone, Debug)]
pub struct Identifier {
    timestamp: EncodedTimestamp,
    delimiter: String,
    randomness: RandomSuffix,
}

#[cfg(feature = "alloc")]
impl Identifier {
    /// Assembles an identifier from already generated parts.
    #[must_use]
    pub fn from_parts(
        timestamp: EncodedTimestamp,
        randomness: RandomSuffix,
        delimiter: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            delimiter: delimiter.into(),
            randomness,
        }
    }

    /// Returns the encoded timestamp part.
    #[must_use]
    pub const fn timestamp(&self) -> EncodedTimestamp {
        self.timestamp
    }

    /// Returns the timestamp in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn millis(&self) -> u64 {
        self.timestamp.millis()
    }

    /// Returns the random suffix part.
    #[must_use]
    pub const fn randomness(&self) -> &RandomSuffix {
        &self.randomness
    }

    /// Returns the delimiter placed between timestamp and suffix (possibly
    /// empty).
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Returns the length of the rendered identifier in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        TIMESTAMP_LEN + self.delimiter.len() + self.randomness.len()
    }

    /// Always `false`: the timestamp alone is 8 symbols.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Renders the identifier into a new `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        let mut out = String::with_capacity(self.len());
        out.push_str(self.timestamp.as_str());
        out.push_str(&self.delimiter);
        out.push_str(self.randomness.as_str());
        out
    }

    /// Returns the timestamp as a [`std::time::SystemTime`].
    #[cfg(feature = "std")]
    #[must_use]
    pub fn datetime(&self) -> std::time::SystemTime {
        self.timestamp.datetime()
    }

    fn tail(&self) -> impl Iterator<Item = u8> + '_ {
        self.delimiter
            .bytes()
            .chain(self.randomness.as_str().bytes())
    }
}

#[cfg(feature = "alloc")]
impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.timestamp.as_str())?;
        f.write_str(&self.delimiter)?;
        f.write_str(self.randomness.as_str())
    }
}

#[cfg(feature = "alloc")]
impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.into_string()
    }
}

#[cfg(feature = "alloc")]
impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

#[cfg(feature = "alloc")]
impl Eq for Identifier {}

#[cfg(feature = "alloc")]
impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(feature = "alloc")]
impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| self.tail().cmp(other.tail()))
    }
}

#[cfg(feature = "alloc")]
impl Hash for Identifier {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        state.write(self.timestamp.as_bytes());
        for b in self.tail() {
            state.write_u8(b);
        }
    }
}

#[cfg(feature = "alloc")]
impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        other.len() == self.len()
            && other.as_bytes()[..TIMESTAMP_LEN] == self.timestamp.as_bytes()[..]
            && other.bytes().skip(TIMESTAMP_LEN).eq(self.tail())
    }
}

#[cfg(feature = "alloc")]
impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Builds an identifier: `encode_timestamp(time) + delimiter + suffix`.
///
/// The suffix is `clamp_suffix_len(suffix_len)` symbols drawn from `rng`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `time` is not a valid timestamp. No
/// randomness is drawn in that case.
///
/// # Example
/// ```
/// use sortid::{Sfc32, compose, parse};
///
/// let mut rng = Sfc32::new();
/// let id = compose(&mut rng, 1_700_000_000_000_u64, 12, "-").unwrap();
/// let text = id.to_string();
/// let parsed = parse(&text, "-").unwrap();
/// assert_eq!(parsed.timestamp(), 1_700_000_000_000);
/// assert_eq!(parsed.randomness().len(), 12);
/// assert!(parse(&text, "_").is_none());
/// ```
///
/// [`Error::InvalidInput`]: crate::Error::InvalidInput
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(rng, time)))]
pub fn compose<R>(
    rng: &mut R,
    time: impl TimeInput,
    suffix_len: usize,
    delimiter: &str,
) -> Result<Identifier>
where
    R: RandSource<u32> + ?Sized,
{
    let timestamp = encode_timestamp(time)?;
    let randomness = generate_suffix(rng, suffix_len);
    Ok(Identifier::from_parts(timestamp, randomness, delimiter))
}

/// The parts recovered from an identifier string by [`parse`].
///
/// Borrows the suffix from the parsed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedId<'a> {
    timestamp: u64,
    randomness: &'a str,
}

impl<'a> ParsedId<'a> {
    /// Returns the timestamp in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Returns the timestamp re-encoded as its 8-symbol form.
    #[must_use]
    pub const fn encoded_timestamp(&self) -> EncodedTimestamp {
        encode_millis(self.timestamp)
    }

    /// Returns everything after the timestamp and delimiter, verbatim.
    ///
    /// The suffix is not checked against the alphabet and may be empty.
    #[must_use]
    pub const fn randomness(&self) -> &'a str {
        self.randomness
    }

    /// Returns the timestamp as a [`std::time::SystemTime`].
    #[cfg(feature = "std")]
    #[must_use]
    pub fn datetime(&self) -> std::time::SystemTime {
        std::time::UNIX_EPOCH + core::time::Duration::from_millis(self.timestamp)
    }
}

/// Splits an identifier string into its timestamp and suffix.
///
/// Returns `None` when:
/// - `text` is shorter than 8 bytes or its first 8 bytes are not a valid
///   encoded timestamp
/// - `delimiter` is non-empty and the bytes after the timestamp are not
///   exactly `delimiter`, which rejects identifiers minted with a different
///   delimiter
///
/// Whatever follows is returned as the randomness, unvalidated and possibly
/// empty.
///
/// # Example
/// ```
/// use sortid::parse;
///
/// let parsed = parse("0OkFuMW0-ZB0Mm0~KUGGJ", "-").unwrap();
/// assert_eq!(parsed.timestamp(), 1_700_000_000_000);
/// assert_eq!(parsed.randomness(), "ZB0Mm0~KUGGJ");
///
/// assert!(parse("0OkFuMW0-ZB0Mm0~KUGGJ", "_").is_none());
/// assert_eq!(parse("0OkFuMW0", "").unwrap().randomness(), "");
/// ```
#[must_use]
pub fn parse<'a>(text: &'a str, delimiter: &str) -> Option<ParsedId<'a>> {
    let timestamp = decode_prefix(text.as_bytes())?;
    // The first 8 bytes are ASCII, so byte 8 is a char boundary.
    let randomness = text.get(TIMESTAMP_LEN..)?.strip_prefix(delimiter)?;
    Some(ParsedId {
        timestamp,
        randomness,
    })
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::{Error, InvalidInput, Sfc32, encode_millis};
    use alloc::{string::ToString, vec::Vec};

    #[test]
    fn compose_concatenates_parts() {
        let mut rng = Sfc32::from_seed([1, 2, 3, 4]);
        let id = compose(&mut rng, 1_700_000_000_000_u64, 12, "-").unwrap();
        assert_eq!(id.to_string(), "0OkFuMW0-ZB0Mm0~KUGGJ");
        assert_eq!(id, "0OkFuMW0-ZB0Mm0~KUGGJ");
        assert_eq!(id.len(), 21);
        assert_eq!(id.delimiter(), "-");
        assert_eq!(id.timestamp(), encode_millis(1_700_000_000_000));

        let mut rng = Sfc32::from_seed([1, 2, 3, 4]);
        let bare = compose(&mut rng, 1_700_000_000_000_u64, 12, "").unwrap();
        assert_eq!(bare.into_string(), "0OkFuMW0ZB0Mm0~KUGGJ");
    }

    #[test]
    fn compose_clamps_suffix() {
        let mut rng = Sfc32::from_seed([4, 3, 2, 1]);
        let short = compose(&mut rng, 0_u64, 5, "").unwrap();
        assert_eq!(short.randomness().len(), 12);
        let long = compose(&mut rng, 0_u64, 2000, "::").unwrap();
        assert_eq!(long.len(), 8 + 2 + 1024);
    }

    #[test]
    fn compose_rejects_invalid_time_without_drawing() {
        let mut rng = Sfc32::from_seed([4, 3, 2, 1]);
        let before = rng.state();
        assert_eq!(
            compose(&mut rng, -5_i32, 12, "-"),
            Err(Error::InvalidInput(InvalidInput::Negative))
        );
        assert_eq!(
            compose(&mut rng, "soon", 12, "-"),
            Err(Error::InvalidInput(InvalidInput::NotNumeric))
        );
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn parse_recovers_parts() {
        let mut rng = Sfc32::from_seed([8, 8, 8, 8]);
        for t in [0, 1, 1_700_000_000_000, crate::MAX_TIMESTAMP] {
            let text = compose(&mut rng, t, 12, "-").unwrap().to_string();
            let parsed = parse(&text, "-").unwrap();
            assert_eq!(parsed.timestamp(), t);
            assert_eq!(parsed.encoded_timestamp(), encode_millis(t));
            assert_eq!(parsed.randomness().len(), 12);
            assert_eq!(&text[9..], parsed.randomness());
        }
    }

    #[test]
    fn parse_rejects_other_delimiters() {
        let mut rng = Sfc32::from_seed([8, 8, 8, 8]);
        let text = compose(&mut rng, 42_u64, 12, "-").unwrap().to_string();
        assert!(parse(&text, "_").is_none());
        assert!(parse(&text, "--").is_none());
        assert!(parse("0OkFuMW0", "-").is_none());
        assert!(parse("0OkFuMW0:", "::").is_none());
    }

    #[test]
    fn parse_without_delimiter_keeps_everything() {
        let parsed = parse("0OkFuMW0-abc", "").unwrap();
        assert_eq!(parsed.randomness(), "-abc");
    }

    #[test]
    fn parse_accepts_empty_or_foreign_suffix() {
        assert_eq!(parse("0OkFuMW0-", "-").unwrap().randomness(), "");
        assert_eq!(parse("0OkFuMW0-héllo wörld", "-").unwrap().randomness(), "héllo wörld");
    }

    #[test]
    fn parse_rejects_bad_timestamp() {
        assert!(parse("", "").is_none());
        assert!(parse("0OkFuMW", "").is_none());
        assert!(parse("0OkFuM!0-ZB0Mm0~KUGGJ", "-").is_none());
        assert!(parse("ééééé", "").is_none());
    }

    #[test]
    fn parse_multibyte_delimiter() {
        let mut rng = Sfc32::from_seed([2, 2, 2, 2]);
        let text = compose(&mut rng, 99_u64, 12, "→").unwrap().to_string();
        let parsed = parse(&text, "→").unwrap();
        assert_eq!(parsed.timestamp(), 99);
        assert_eq!(parsed.randomness().len(), 12);
        assert!(parse(&text, "-").is_none());
    }

    #[test]
    fn later_timestamps_sort_later_regardless_of_suffix() {
        let mut rng = Sfc32::from_seed([1, 1, 1, 1]);
        let ids: Vec<_> = (0..2_000_u64)
            .map(|i| compose(&mut rng, 1_700_000_000_000 + i * 7, 12, "-").unwrap())
            .collect();
        let strings: Vec<_> = ids.iter().map(ToString::to_string).collect();

        let mut sorted_ids = ids.clone();
        sorted_ids.sort();
        assert_eq!(sorted_ids, ids);

        let mut sorted_strings = strings.clone();
        sorted_strings.sort();
        assert_eq!(sorted_strings, strings);
    }

    #[test]
    fn ordering_follows_rendered_string() {
        let t = encode_millis(5);
        let mut rng = Sfc32::from_seed([6, 6, 6, 6]);
        let s1 = generate_suffix(&mut rng, 12);
        let s2 = generate_suffix(&mut rng, 12);
        let a = Identifier::from_parts(t, s1.clone(), "");
        let b = Identifier::from_parts(t, s2.clone(), "");
        assert_eq!(a.cmp(&b), s1.as_str().cmp(s2.as_str()));
        assert_eq!(
            a.cmp(&b),
            a.to_string().as_str().cmp(b.to_string().as_str())
        );
    }
}
