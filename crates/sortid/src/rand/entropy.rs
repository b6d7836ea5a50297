use core::hash::BuildHasher;
use portable_atomic::{AtomicU32, Ordering};
use rand::{Rng, RngCore, rand_core::impls, rng};
use std::collections::hash_map::RandomState;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Sfc32, SystemClock, TimeSource};

/// Salt mixed into every entropy seed so generators created within the same
/// millisecond still start from different states.
static SEED_SALT: AtomicU32 = AtomicU32::new(0);

const GOLDEN_GAMMA: u32 = 0x9E37_79B9;

impl Sfc32 {
    /// Creates a generator seeded from the wall clock and two independent
    /// weak random sources, then warmed up.
    ///
    /// The seed words are:
    /// - the low 32 bits of the current Unix time in milliseconds
    /// - the high bits of that time, xored with a process-wide salt
    /// - a draw from the thread-local [`rand::rng`]
    /// - a hash from a freshly keyed [`RandomState`]
    ///
    /// Seed once per logical context and keep the generator.
    ///
    /// # Example
    /// ```
    /// use sortid::{RandSource, Sfc32};
    ///
    /// let mut a = Sfc32::new();
    /// let mut b = Sfc32::new();
    /// assert_ne!(a.state(), b.state());
    /// let _ = a.rand();
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    #[must_use]
    pub fn new() -> Self {
        let now = SystemClock.current_millis();
        let salt = SEED_SALT.fetch_add(GOLDEN_GAMMA, Ordering::Relaxed);
        let hashed = RandomState::new().hash_one((now, salt));

        Self::from_seed([
            now as u32,
            (now >> 32) as u32 ^ salt,
            rng().random(),
            (hashed ^ (hashed >> 32)) as u32,
        ])
    }
}

impl Default for Sfc32 {
    /// Equivalent to [`Sfc32::new`].
    fn default() -> Self {
        Self::new()
    }
}

/// Lets [`Sfc32`] drive anything in the `rand` ecosystem, e.g.
/// `rand::Rng::random_range`.
impl RngCore for Sfc32 {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}
