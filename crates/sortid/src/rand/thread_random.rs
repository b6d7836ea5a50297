use crate::RandSource;
use rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is cryptographically secure (ChaCha-based) and automatically
/// reseeded periodically. It is slower than [`Sfc32`], but suffixes drawn from
/// it cannot be predicted from earlier ones.
///
/// This type does **not** store the RNG itself; it simply accesses the
/// thread-local generator on each call, so it is zero-sized and may be freely
/// moved across threads.
///
/// [`Sfc32`]: crate::Sfc32
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u32> for ThreadRandom {
    fn rand(&mut self) -> u32 {
        rng().random()
    }
}
