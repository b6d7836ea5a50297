#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod alphabet;
mod error;
#[cfg(feature = "alloc")]
mod generator;
mod id;
mod rand;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[cfg(feature = "serde")]
pub mod serde;
mod suffix;
mod time;
mod timestamp;

pub use crate::error::*;
#[cfg(feature = "alloc")]
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::suffix::*;
pub use crate::time::*;
pub use crate::timestamp::*;
