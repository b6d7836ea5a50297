use alloc::string::String;

use crate::{DEFAULT_SUFFIX_LEN, clamp_suffix_len};

/// Per-generator configuration: how long the random suffix is and what goes
/// between it and the timestamp.
///
/// The suffix length is stored as given and clamped when used, so an
/// out-of-range value behaves like the nearest bound.
///
/// # Example
/// ```
/// use sortid::IdOptions;
///
/// let opts = IdOptions::default().with_suffix_len(21).with_delimiter("-");
/// assert_eq!(opts.suffix_len(), 21);
/// assert_eq!(opts.delimiter(), "-");
///
/// assert_eq!(IdOptions::default().with_suffix_len(3).suffix_len(), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IdOptions {
    suffix_len: usize,
    delimiter: String,
}

impl Default for IdOptions {
    /// A 12-symbol suffix and no delimiter.
    fn default() -> Self {
        Self {
            suffix_len: DEFAULT_SUFFIX_LEN,
            delimiter: String::new(),
        }
    }
}

impl IdOptions {
    /// Creates options with an explicit suffix length and delimiter.
    #[must_use]
    pub fn new(suffix_len: usize, delimiter: impl Into<String>) -> Self {
        Self {
            suffix_len,
            delimiter: delimiter.into(),
        }
    }

    /// Sets the requested suffix length.
    #[must_use]
    pub const fn with_suffix_len(mut self, suffix_len: usize) -> Self {
        self.suffix_len = suffix_len;
        self
    }

    /// Sets the delimiter placed between timestamp and suffix.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Returns the effective (clamped) suffix length.
    #[must_use]
    pub const fn suffix_len(&self) -> usize {
        clamp_suffix_len(self.suffix_len)
    }

    /// Returns the delimiter, possibly empty.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}
