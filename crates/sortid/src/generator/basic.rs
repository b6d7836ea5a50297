#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    IdOptions, Identifier, ParsedId, RandSource, RandomSuffix, Result, TimeInput, TimeSource,
    compose, encode_millis, generate_suffix, parse,
};

/// An identifier generator owning its random source, clock and options.
///
/// The generator is a plain value: create one per logical context (thread,
/// task, request handler) and call it through `&mut self`. It is not `Clone`:
/// a copy would replay the same random sequence. Build another generator
/// with [`IdGenerator::new`] instead, which seeds it independently.
///
/// ## Features
/// - ✅ Deterministic when built from a seeded [`Sfc32`] and a fixed clock
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered (random within the same millisecond)
/// - ❌ Not shareable across threads without a lock
///
/// ## See Also
/// - [`LockIdGenerator`]
///
/// [`Sfc32`]: crate::Sfc32
/// [`LockIdGenerator`]: crate::LockIdGenerator
#[derive(Debug)]
pub struct IdGenerator<R, T>
where
    R: RandSource<u32>,
    T: TimeSource,
{
    rng: R,
    clock: T,
    options: IdOptions,
}

#[cfg(feature = "std")]
impl IdGenerator<crate::Sfc32, crate::SystemClock> {
    /// Creates a generator with an entropy-seeded [`Sfc32`], the system
    /// clock, and default options (12-symbol suffix, no delimiter).
    ///
    /// # Example
    /// ```
    /// use sortid::IdGenerator;
    ///
    /// let mut generator = IdGenerator::new();
    /// let id = generator.new_id();
    /// assert_eq!(id.len(), 20);
    /// ```
    ///
    /// [`Sfc32`]: crate::Sfc32
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(IdOptions::default())
    }

    /// Creates a generator like [`IdGenerator::new`] with the given options.
    ///
    /// # Example
    /// ```
    /// use sortid::{IdGenerator, IdOptions};
    ///
    /// let mut generator = IdGenerator::with_options(IdOptions::new(21, "-"));
    /// let id = generator.new_id();
    /// assert_eq!(id.to_string().len(), 8 + 1 + 21);
    /// ```
    #[must_use]
    pub fn with_options(options: IdOptions) -> Self {
        Self::from_components(crate::Sfc32::new(), crate::SystemClock, options)
    }
}

#[cfg(feature = "std")]
impl Default for IdGenerator<crate::Sfc32, crate::SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, T> IdGenerator<R, T>
where
    R: RandSource<u32>,
    T: TimeSource,
{
    /// Creates a generator from explicit parts.
    ///
    /// This is the constructor for tests and for callers bringing their own
    /// random source or clock.
    ///
    /// # Example
    /// ```
    /// use sortid::{IdGenerator, IdOptions, Sfc32, TimeSource};
    ///
    /// struct FixedTime;
    /// impl TimeSource for FixedTime {
    ///     fn current_millis(&self) -> u64 {
    ///         1_700_000_000_000
    ///     }
    /// }
    ///
    /// let mut generator = IdGenerator::from_components(
    ///     Sfc32::from_seed([1, 2, 3, 4]),
    ///     FixedTime,
    ///     IdOptions::default().with_delimiter("-"),
    /// );
    /// assert_eq!(generator.new_id().to_string(), "0OkFuMW0-ZB0Mm0~KUGGJ");
    /// ```
    pub const fn from_components(rng: R, clock: T, options: IdOptions) -> Self {
        Self {
            rng,
            clock,
            options,
        }
    }

    /// Returns the configured options.
    pub const fn options(&self) -> &IdOptions {
        &self.options
    }

    /// Returns the configured options for in-place changes.
    pub const fn options_mut(&mut self) -> &mut IdOptions {
        &mut self.options
    }

    /// Returns the owned random source.
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Generates a random suffix of `clamp_suffix_len(len)` symbols.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn new_suffix(&mut self, len: usize) -> RandomSuffix {
        generate_suffix(&mut self.rng, len)
    }

    /// Generates a random suffix of the configured length.
    pub fn new_default_suffix(&mut self) -> RandomSuffix {
        generate_suffix(&mut self.rng, self.options.suffix_len())
    }

    /// Generates an identifier for the current clock time using the
    /// configured options.
    ///
    /// Infallible: the clock always yields a valid timestamp.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn new_id(&mut self) -> Identifier {
        let timestamp = encode_millis(self.clock.current_millis());
        let randomness = generate_suffix(&mut self.rng, self.options.suffix_len());
        Identifier::from_parts(timestamp, randomness, self.options.delimiter())
    }

    /// Generates an identifier for `time` using the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `time` is not a valid timestamp.
    ///
    /// [`Error::InvalidInput`]: crate::Error::InvalidInput
    pub fn new_id_at(&mut self, time: impl TimeInput) -> Result<Identifier> {
        compose(
            &mut self.rng,
            time,
            self.options.suffix_len(),
            self.options.delimiter(),
        )
    }

    /// Generates an identifier for `time` with an explicit suffix length and
    /// delimiter, ignoring the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `time` is not a valid timestamp.
    ///
    /// [`Error::InvalidInput`]: crate::Error::InvalidInput
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self, time)))]
    pub fn new_id_with(
        &mut self,
        time: impl TimeInput,
        suffix_len: usize,
        delimiter: &str,
    ) -> Result<Identifier> {
        compose(&mut self.rng, time, suffix_len, delimiter)
    }

    /// Parses `text` using the configured delimiter.
    #[must_use]
    pub fn decode_id<'a>(&self, text: &'a str) -> Option<ParsedId<'a>> {
        parse(text, self.options.delimiter())
    }

    /// Parses `text` using an explicit delimiter.
    #[must_use]
    pub fn decode_id_with<'a>(&self, text: &'a str, delimiter: &str) -> Option<ParsedId<'a>> {
        parse(text, delimiter)
    }
}
