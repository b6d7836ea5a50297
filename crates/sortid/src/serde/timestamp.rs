use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::EncodedTimestamp;

impl Serialize for EncodedTimestamp {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.as_str())
    }
}

struct EncodedTimestampVisitor;

impl de::Visitor<'_> for EncodedTimestampVisitor {
    type Value = EncodedTimestamp;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an 8-symbol encoded timestamp")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for EncodedTimestamp {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(EncodedTimestampVisitor)
    }
}

#[cfg(feature = "alloc")]
impl Serialize for crate::Identifier {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

/// Serializes a `u64` millisecond field as its 8-symbol encoding.
///
/// Values past 48 bits wrap when serialized, exactly as
/// [`encode_millis`](crate::encode_millis) does.
///
/// # Example
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "sortid::serde::as_encoded_timestamp")]
///     created_at: u64,
/// }
/// ```
pub mod as_encoded_timestamp {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::{EncodedTimestamp, encode_millis};

    /// Serializes `millis` as its 8-symbol encoding.
    pub fn serialize<S>(millis: &u64, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        encode_millis(*millis).serialize(s)
    }

    /// Deserializes an 8-symbol encoding back into milliseconds.
    pub fn deserialize<'de, D>(d: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        EncodedTimestamp::deserialize(d).map(|ts| ts.millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_millis;
    use serde_json::json;

    #[test]
    fn encoded_timestamp_is_a_string() {
        let ts = encode_millis(1_700_000_000_000);
        let json = serde_json::to_string(&ts).expect("serialize");
        assert_eq!(json, r#""0OkFuMW0""#);
        let back: EncodedTimestamp = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, ts);
    }

    #[test]
    fn encoded_timestamp_rejects_bad_strings() {
        assert!(serde_json::from_str::<EncodedTimestamp>(r#""0OkFuMW""#).is_err());
        assert!(serde_json::from_str::<EncodedTimestamp>(r#""0OkFuMW0-""#).is_err());
        assert!(serde_json::from_str::<EncodedTimestamp>(r#""0OkF!MW0""#).is_err());
        assert!(serde_json::from_str::<EncodedTimestamp>("42").is_err());
    }

    #[test]
    fn millis_field_round_trip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_encoded_timestamp")]
            created_at: u64,
        }
        let row = Row {
            created_at: 1_700_000_000_000,
        };

        let value = serde_json::to_value(&row).expect("serialize");
        assert_eq!(value, json!({ "created_at": "0OkFuMW0" }));
        let back: Row = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, row);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn identifier_serializes_rendered() {
        let mut rng = crate::Sfc32::from_seed([1, 2, 3, 4]);
        let id = crate::compose(&mut rng, 1_700_000_000_000_u64, 12, "-").unwrap();
        assert_eq!(
            serde_json::to_value(&id).expect("serialize"),
            json!("0OkFuMW0-ZB0Mm0~KUGGJ")
        );
    }
}
