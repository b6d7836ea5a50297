//! Serde support.
//!
//! [`EncodedTimestamp`] serializes as its 8-symbol string and [`Identifier`]
//! as its rendered composite. Identifiers cannot be deserialized generically
//! because splitting one requires knowing its delimiter; deserialize the
//! string and call [`parse`].
//!
//! [`EncodedTimestamp`]: crate::EncodedTimestamp
//! [`Identifier`]: crate::Identifier
//! [`parse`]: crate::parse

mod timestamp;

pub use timestamp::*;
