use alloc::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    IdGenerator, IdOptions, Identifier, RandSource, RandomSuffix, Result, TimeInput, TimeSource,
    generator::{Mutex, MutexGuard},
};

/// A lock-based identifier generator suitable for multi-threaded
/// environments.
///
/// This generator wraps an [`IdGenerator`] in an [`Arc<Mutex<_>>`]. Clones
/// share the same random sequence, and draws from different threads are
/// serialized by the lock, so the sequence is never raced.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ One random sequence for the whole process
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - You want a single shared generator instead of one per thread
///
/// ## See Also
/// - [`IdGenerator`]
///
/// # Errors
///
/// Every method returns [`Error::LockPoisoned`] if another thread panicked
/// while holding the lock. With the `parking-lot` feature the lock does not
/// poison.
///
/// [`Error::LockPoisoned`]: crate::Error
pub struct LockIdGenerator<R, T>
where
    R: RandSource<u32>,
    T: TimeSource,
{
    #[cfg(feature = "cache-padded")]
    pub(crate) state: Arc<crossbeam_utils::CachePadded<Mutex<IdGenerator<R, T>>>>,
    #[cfg(not(feature = "cache-padded"))]
    pub(crate) state: Arc<Mutex<IdGenerator<R, T>>>,
}

impl<R, T> Clone for LockIdGenerator<R, T>
where
    R: RandSource<u32>,
    T: TimeSource,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl LockIdGenerator<crate::Sfc32, crate::SystemClock> {
    /// Creates a shared generator with an entropy-seeded [`Sfc32`], the system
    /// clock and the given options.
    ///
    /// # Example
    /// ```
    /// use sortid::{IdOptions, LockIdGenerator};
    ///
    /// let generator = LockIdGenerator::new(IdOptions::default());
    /// let id = generator.new_id().unwrap();
    /// assert_eq!(id.len(), 20);
    /// ```
    ///
    /// [`Sfc32`]: crate::Sfc32
    #[must_use]
    pub fn new(options: IdOptions) -> Self {
        Self::from_generator(IdGenerator::with_options(options))
    }
}

impl<R, T> LockIdGenerator<R, T>
where
    R: RandSource<u32>,
    T: TimeSource,
{
    /// Wraps an existing generator.
    pub fn from_generator(generator: IdGenerator<R, T>) -> Self {
        Self {
            #[cfg(feature = "cache-padded")]
            state: Arc::new(crossbeam_utils::CachePadded::new(Mutex::new(generator))),
            #[cfg(not(feature = "cache-padded"))]
            state: Arc::new(Mutex::new(generator)),
        }
    }

    /// Runs `f` with exclusive access to the inner generator.
    ///
    /// Use this to batch several draws under one lock acquisition.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn with<F, U>(&self, f: F) -> Result<U>
    where
        F: FnOnce(&mut IdGenerator<R, T>) -> U,
    {
        let mut generator = self.lock()?;
        Ok(f(&mut generator))
    }

    /// Generates an identifier for the current time with the configured
    /// options.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn new_id(&self) -> Result<Identifier> {
        Ok(self.lock()?.new_id())
    }

    /// Generates an identifier for `time` with the configured options.
    ///
    /// # Errors
    ///
    /// Returns an error if `time` is invalid or the lock is poisoned.
    pub fn new_id_at(&self, time: impl TimeInput) -> Result<Identifier> {
        self.lock()?.new_id_at(time)
    }

    /// Generates an identifier for `time` with an explicit suffix length and
    /// delimiter.
    ///
    /// # Errors
    ///
    /// Returns an error if `time` is invalid or the lock is poisoned.
    pub fn new_id_with(
        &self,
        time: impl TimeInput,
        suffix_len: usize,
        delimiter: &str,
    ) -> Result<Identifier> {
        self.lock()?.new_id_with(time, suffix_len, delimiter)
    }

    /// Generates a random suffix of `clamp_suffix_len(len)` symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn new_suffix(&self, len: usize) -> Result<RandomSuffix> {
        Ok(self.lock()?.new_suffix(len))
    }

    fn lock(&self) -> Result<MutexGuard<'_, IdGenerator<R, T>>> {
        #[cfg(feature = "parking-lot")]
        {
            Ok(self.state.lock())
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            Ok(self.state.lock()?)
        }
    }
}
