mod input;
mod interface;
#[cfg(feature = "std")]
mod system;

pub use input::*;
pub use interface::*;
#[cfg(feature = "std")]
pub use system::*;
