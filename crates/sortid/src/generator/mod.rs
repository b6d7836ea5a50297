mod basic;
#[cfg(feature = "lock")]
mod lock;
#[cfg(feature = "lock")]
mod mutex;
mod options;
#[cfg(feature = "thread-local")]
pub mod thread_local;

pub use basic::*;
#[cfg_attr(docsrs, doc(cfg(feature = "lock")))]
#[cfg(feature = "lock")]
pub use lock::*;
#[cfg(feature = "lock")]
pub(crate) use mutex::*;
pub use options::*;
