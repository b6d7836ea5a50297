/// A trait for random sources that return random integers.
///
/// This abstraction allows you to plug in the built-in [`Sfc32`] generator, a
/// cryptographically secure source, or a mocked random source in tests.
///
/// Sources are stateful, so drawing takes `&mut self`. Suffix generation only
/// needs `RandSource<u32>`.
///
/// # Example
/// ```
/// use sortid::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u32> for FixedRand {
///     fn rand(&mut self) -> u32 {
///         1234
///     }
/// }
///
/// let mut rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
///
/// [`Sfc32`]: crate::Sfc32
pub trait RandSource<T> {
    /// Returns a random integer.
    fn rand(&mut self) -> T;
}

impl<T, R> RandSource<T> for &mut R
where
    R: RandSource<T> + ?Sized,
{
    fn rand(&mut self) -> T {
        (**self).rand()
    }
}
