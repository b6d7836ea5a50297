#[cfg(feature = "std")]
mod entropy;
mod interface;
mod sfc32;
#[cfg(feature = "std")]
mod thread_random;

pub use interface::*;
pub use sfc32::*;
#[cfg(feature = "std")]
pub use thread_random::*;
