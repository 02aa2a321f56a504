use serde::{de::Error as DeError, ser::Error as SerError, Deserialize, Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime, UtcOffset,
};

/// Utility-wrapper around `OffsetDateTime` to use with `serde_with` crate macros. Serializes
/// timestamps as UTC ISO 8601 strings with millisecond precision (`2024-01-01T10:00:00.000Z`) and
/// accepts any RFC 3339 timestamp on deserialization, converting it to UTC.
pub struct UtcTimestamp;
impl SerializeAs<OffsetDateTime> for UtcTimestamp {
    fn serialize_as<S>(source: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = source
            .checked_to_offset(UtcOffset::UTC)
            .ok_or_else(|| S::Error::custom("timestamp is out of range in UTC"))?
            .format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
            ))
            .map_err(S::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> DeserializeAs<'de, OffsetDateTime> for UtcTimestamp {
    fn deserialize_as<D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        OffsetDateTime::parse(&raw, &Rfc3339)
            .map_err(D::Error::custom)?
            .checked_to_offset(UtcOffset::UTC)
            .ok_or_else(|| D::Error::custom(format!("timestamp `{raw}` is out of range in UTC")))
    }
}
