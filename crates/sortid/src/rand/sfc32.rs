#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::rand::RandSource;

/// Number of outputs discarded after seeding to mix the seed words.
pub const WARMUP_ROUNDS: usize = 15;

/// A small-state counter-mixing PRNG in the SFC32 family.
///
/// Four 32-bit words of state, one addition-heavy advance per 32-bit draw, no
/// heap, no syscalls. It is fast and statistically well distributed, but it is
/// **not** cryptographically secure: the full state can be recovered from a
/// handful of outputs. Use [`ThreadRandom`] when suffixes must be
/// unpredictable.
///
/// A generator is a plain value owned by its caller. Draws need `&mut self`,
/// so sharing one sequence across threads requires a lock (see
/// [`LockIdGenerator`]) and independent sequences per thread need one
/// generator per thread.
///
/// ## Advance
///
/// ```text
/// t = a + b
/// d = d + 1
/// a = b ^ (b >> 9)
/// b = c + (c << 3)
/// c = rotl(c, 21) + t
/// return t + d
/// ```
///
/// All arithmetic wraps modulo 2^32.
///
/// # Example
/// ```
/// use sortid::{RandSource, Sfc32};
///
/// let mut a = Sfc32::from_seed([1, 2, 3, 4]);
/// let mut b = Sfc32::from_seed([1, 2, 3, 4]);
/// assert_eq!(a.rand(), b.rand());
/// ```
///
/// [`ThreadRandom`]: crate::ThreadRandom
/// [`LockIdGenerator`]: crate::LockIdGenerator
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sfc32 {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Sfc32 {
    /// Creates a generator from a seed, then discards [`WARMUP_ROUNDS`]
    /// outputs.
    ///
    /// The same seed always yields the same sequence, which makes this the
    /// constructor to use in tests.
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    #[must_use]
    pub fn from_seed(seed: [u32; 4]) -> Self {
        let mut rng = Self::from_state(seed);
        for _ in 0..WARMUP_ROUNDS {
            rng.advance();
        }
        rng
    }

    /// Creates a generator whose state is exactly `state`, without warm-up.
    ///
    /// Pair with [`Sfc32::state`] to resume a captured sequence.
    #[must_use]
    pub const fn from_state(state: [u32; 4]) -> Self {
        let [a, b, c, d] = state;
        Self { a, b, c, d }
    }

    /// Returns the current `[a, b, c, d]` state words.
    #[must_use]
    pub const fn state(&self) -> [u32; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Advances the state once and returns the draw.
    #[inline(always)]
    #[allow(clippy::inline_always)]
    pub const fn advance(&mut self) -> u32 {
        let t = self.a.wrapping_add(self.b);
        self.d = self.d.wrapping_add(1);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21).wrapping_add(t);
        t.wrapping_add(self.d)
    }
}

impl RandSource<u32> for Sfc32 {
    #[inline]
    fn rand(&mut self) -> u32 {
        self.advance()
    }
}
