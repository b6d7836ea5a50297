//! The 48-bit millisecond timestamp codec.
//!
//! A timestamp is written as 8 symbols of 6 bits each, most significant
//! chunk first. Because the alphabet is in ascending byte order, comparing two
//! encodings byte by byte gives the same answer as comparing the timestamps.
//!
//! ```text
//!  Bit Index:  47   42 41   36        11    6 5     0
//!              +------+------+- ... --+------+------+
//!  Symbol:     |  0   |  1   |        |  6   |  7   |
//!              +------+------+- ... --+------+------+
//! ```

use core::{fmt, str::FromStr};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Error, InvalidInput, Result, TimeInput,
    alphabet::{self, BITS_PER_SYMBOL, LOOKUP, NO_VALUE},
};

/// Number of symbols in an encoded timestamp.
pub const TIMESTAMP_LEN: usize = 8;

/// Number of timestamp bits the encoding carries.
pub const TIMESTAMP_BITS: u32 = 48;

/// Largest timestamp that encodes without wrapping (`2^48 - 1` ms, early in
/// the year 10889).
pub const MAX_TIMESTAMP: u64 = (1 << TIMESTAMP_BITS) - 1;

/// A fixed-width, sort-preserving, 8-symbol timestamp.
///
/// Ordering, equality and hashing are those of the encoded bytes, which agree
/// with the ordering of the timestamps they encode.
///
/// # Example
/// ```
/// use sortid::encode_timestamp;
///
/// let a = encode_timestamp(1_700_000_000_000_u64).unwrap();
/// let b = encode_timestamp(1_700_000_000_001_u64).unwrap();
/// assert_eq!(a.as_str(), "0OkFuMW0");
/// assert!(a < b);
/// assert_eq!(a.millis(), 1_700_000_000_000);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EncodedTimestamp([u8; TIMESTAMP_LEN]);

impl EncodedTimestamp {
    /// The encoding of timestamp `0`.
    pub const MIN: Self = encode_millis(0);
    /// The encoding of [`MAX_TIMESTAMP`].
    pub const MAX: Self = encode_millis(MAX_TIMESTAMP);

    /// Returns the encoding as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        // SAFETY: every byte was taken from the ASCII alphabet.
        unsafe { core::str::from_utf8_unchecked(&self.0) }
    }

    /// Returns the encoded bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; TIMESTAMP_LEN] {
        &self.0
    }

    /// Returns the encoded timestamp in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn millis(&self) -> u64 {
        let mut value = 0_u64;
        let mut i = 0;
        while i < TIMESTAMP_LEN {
            value = (value << BITS_PER_SYMBOL) | LOOKUP[self.0[i] as usize] as u64;
            i += 1;
        }
        value
    }

    /// Returns the encoded timestamp as a [`std::time::SystemTime`].
    #[cfg(feature = "std")]
    #[must_use]
    pub fn datetime(&self) -> std::time::SystemTime {
        std::time::UNIX_EPOCH + core::time::Duration::from_millis(self.millis())
    }
}

/// Encodes `millis` into 8 symbols without validation.
///
/// Only the low 48 bits are used: values past [`MAX_TIMESTAMP`] wrap around
/// to the start of the range, and their encodings no longer sort after
/// earlier ones.
#[must_use]
pub const fn encode_millis(millis: u64) -> EncodedTimestamp {
    let mut buf = [0_u8; TIMESTAMP_LEN];
    let mut i = 0;
    while i < TIMESTAMP_LEN {
        let shift = BITS_PER_SYMBOL * (TIMESTAMP_LEN - 1 - i) as u32;
        buf[i] = alphabet::symbol((millis >> shift) as u32);
        i += 1;
    }
    EncodedTimestamp(buf)
}

/// Encodes a timestamp into its 8-symbol, sort-preserving form.
///
/// `time` may be anything implementing [`TimeInput`]: integers, whole-number
/// floats, durations since the epoch, system times or numeric text.
///
/// The encoding carries 48 bits. Later times wrap silently (modular
/// extraction) rather than saturate or fail; the first wrap happens in the
/// year 10889.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `time` is negative, fractional,
/// non-finite, before the Unix epoch, or not numeric.
///
/// # Example
/// ```
/// use sortid::{Error, InvalidInput, encode_timestamp};
///
/// assert_eq!(encode_timestamp(0_u64).unwrap().as_str(), "00000000");
/// assert_eq!(encode_timestamp(64_u64).unwrap().as_str(), "00000010");
/// assert_eq!(
///     encode_timestamp(-1_i64),
///     Err(Error::InvalidInput(InvalidInput::Negative))
/// );
/// assert!(encode_timestamp("not a number").is_err());
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(time)))]
pub fn encode_timestamp(time: impl TimeInput) -> Result<EncodedTimestamp> {
    Ok(encode_millis(time.into_millis()?))
}

/// Decodes the timestamp held in the first 8 symbols of `text`.
///
/// Returns `None` when `text` is shorter than 8 bytes or any of its first 8
/// bytes is outside the alphabet. Anything after the eighth byte is ignored,
/// so the timestamp of a composite identifier can be read without knowing
/// its delimiter or suffix length.
///
/// # Example
/// ```
/// use sortid::decode_timestamp;
///
/// assert_eq!(decode_timestamp("0OkFuMW0"), Some(1_700_000_000_000));
/// assert_eq!(decode_timestamp("0OkFuMW0-anything"), Some(1_700_000_000_000));
/// assert_eq!(decode_timestamp("0OkFuMW"), None);
/// assert_eq!(decode_timestamp("0OkF-MW0"), None);
/// ```
#[must_use]
pub fn decode_timestamp(text: impl AsRef<[u8]>) -> Option<u64> {
    decode_prefix(text.as_ref())
}

/// Slice-based worker behind [`decode_timestamp`].
#[inline]
pub(crate) const fn decode_prefix(bytes: &[u8]) -> Option<u64> {
    if bytes.len() < TIMESTAMP_LEN {
        return None;
    }
    let mut value = 0_u64;
    let mut i = 0;
    while i < TIMESTAMP_LEN {
        let index = LOOKUP[bytes[i] as usize];
        if index == NO_VALUE {
            return None;
        }
        value = (value << BITS_PER_SYMBOL) | index as u64;
        i += 1;
    }
    Some(value)
}

impl fmt::Display for EncodedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for EncodedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedTimestamp")
            .field("encoded", &self.as_str())
            .field("millis", &self.millis())
            .finish()
    }
}

impl AsRef<str> for EncodedTimestamp {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for EncodedTimestamp {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for EncodedTimestamp {
    type Err = Error;

    /// Parses exactly one encoded timestamp. Unlike [`decode_timestamp`],
    /// trailing bytes are rejected.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() != TIMESTAMP_LEN {
            return Err(InvalidInput::NotDecodable.into());
        }
        decode_prefix(s.as_bytes())
            .map(encode_millis)
            .ok_or(Error::InvalidInput(InvalidInput::NotDecodable))
    }
}

impl TryFrom<&str> for EncodedTimestamp {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl PartialEq<str> for EncodedTimestamp {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for EncodedTimestamp {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<EncodedTimestamp> for &str {
    fn eq(&self, other: &EncodedTimestamp) -> bool {
        *self == other.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_encodings() {
        assert_eq!(encode_millis(0), "00000000");
        assert_eq!(encode_millis(63), "0000000~");
        assert_eq!(encode_millis(64), "00000010");
        assert_eq!(encode_millis(1_469_922_850_259), "0LOzEgNJ");
        assert_eq!(encode_millis(1_700_000_000_000), "0OkFuMW0");
        assert_eq!(encode_millis(MAX_TIMESTAMP), "~~~~~~~~");
        assert_eq!(EncodedTimestamp::MIN.millis(), 0);
        assert_eq!(EncodedTimestamp::MAX.millis(), MAX_TIMESTAMP);
    }

    #[test]
    fn encode_then_decode_recovers_value() {
        let mut t = 1_u64;
        while t <= MAX_TIMESTAMP {
            for v in [t - 1, t, t + 1, MAX_TIMESTAMP - t] {
                let encoded = encode_timestamp(v).unwrap();
                assert_eq!(encoded.as_bytes().len(), TIMESTAMP_LEN);
                assert_eq!(decode_timestamp(encoded), Some(v), "value {v}");
                assert_eq!(encoded.millis(), v);
            }
            t <<= 1;
        }
    }

    #[test]
    fn encoding_preserves_order() {
        let mut rng = crate::Sfc32::from_seed([3, 1, 4, 1]);
        let mut prev = encode_millis(0);
        let mut t = 0_u64;
        for _ in 0..10_000 {
            t += u64::from(rng.advance() % 1_000_000) + 1;
            let next = encode_millis(t);
            assert!(prev.as_bytes() < next.as_bytes(), "{prev} !< {next}");
            assert!(prev < next);
            prev = next;
        }
        for t in [0, 1, 62, 63, 64, 4095, 4096, MAX_TIMESTAMP - 1] {
            assert!(encode_millis(t).as_str() < encode_millis(t + 1).as_str());
        }
    }

    #[test]
    fn values_past_48_bits_wrap() {
        assert_eq!(encode_millis(MAX_TIMESTAMP + 1), "00000000");
        assert_eq!(encode_millis(MAX_TIMESTAMP + 6), "00000005");
        assert_eq!(encode_timestamp(u64::MAX).unwrap(), "~~~~~~~~");
    }

    #[test]
    fn invalid_inputs_are_errors() {
        assert_eq!(
            encode_timestamp(-1_i64),
            Err(Error::InvalidInput(InvalidInput::Negative))
        );
        assert_eq!(
            encode_timestamp("not a number"),
            Err(Error::InvalidInput(InvalidInput::NotNumeric))
        );
        assert_eq!(
            encode_timestamp(f64::NAN),
            Err(Error::InvalidInput(InvalidInput::NotFinite))
        );
        assert_eq!(
            encode_timestamp(10.5_f64),
            Err(Error::InvalidInput(InvalidInput::Fractional))
        );
    }

    #[test]
    fn accepts_date_like_inputs() {
        let d = core::time::Duration::from_millis(1_700_000_000_000);
        assert_eq!(encode_timestamp(d).unwrap(), "0OkFuMW0");
        assert_eq!(encode_timestamp("1700000000000").unwrap(), "0OkFuMW0");
        assert_eq!(encode_timestamp(1_700_000_000_000.0_f64).unwrap(), "0OkFuMW0");
    }

    #[test]
    fn decode_reads_only_the_prefix() {
        let encoded = encode_millis(1_700_000_000_000);
        let mut buf = [b'_'; 17];
        buf[..8].copy_from_slice(encoded.as_bytes());
        buf[8..].copy_from_slice(b"_anything");
        assert_eq!(decode_timestamp(buf), Some(1_700_000_000_000));
        assert_eq!(decode_timestamp(&buf[..8]), Some(1_700_000_000_000));
        // Garbage past the prefix does not matter.
        buf[12] = 0xFF;
        assert_eq!(decode_timestamp(buf), Some(1_700_000_000_000));
    }

    #[test]
    fn decode_rejects_short_or_foreign_input() {
        assert_eq!(decode_timestamp(""), None);
        assert_eq!(decode_timestamp("0000000"), None);
        assert_eq!(decode_timestamp("0000000-"), None);
        assert_eq!(decode_timestamp("0000 000"), None);
        assert_eq!(decode_timestamp("000000é0"), None);
        assert_eq!(decode_timestamp([0xFF_u8; 8]), None);
        assert_eq!(decode_timestamp("00000000"), Some(0));
    }

    #[test]
    fn from_str_requires_exact_length() {
        let parsed: EncodedTimestamp = "0OkFuMW0".parse().unwrap();
        assert_eq!(parsed.millis(), 1_700_000_000_000);
        assert_eq!(
            "0OkFuMW0x".parse::<EncodedTimestamp>(),
            Err(Error::InvalidInput(InvalidInput::NotDecodable))
        );
        assert_eq!(
            EncodedTimestamp::try_from("0Ok!uMW0"),
            Err(Error::InvalidInput(InvalidInput::NotDecodable))
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn datetime_matches_millis() {
        let encoded = encode_millis(1_234);
        assert_eq!(
            encoded.datetime(),
            std::time::UNIX_EPOCH + core::time::Duration::from_millis(1_234)
        );
        assert_eq!(encode_timestamp(encoded.datetime()).unwrap(), encoded);
    }
}
