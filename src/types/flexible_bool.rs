use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// A boolean that tolerates every encoding Plex uses on the wire.
///
/// Depending on the server version and endpoint, boolean fields arrive as
/// native JSON booleans, as the integers `0`/`1`, or as strings such as
/// `"1"` or `"true"`. Deserialization normalizes all of them. Anything
/// unrecognized, other than a bad string token, decodes as `false` without
/// an error; only an unparseable string propagates a failure to the caller.
///
/// Serializes back to a native JSON boolean.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlexibleBool(bool);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlexibleBoolError {
    #[error("invalid boolean token: {0:?}")]
    InvalidToken(String),
}

impl FlexibleBool {
    pub fn new(value: bool) -> Self {
        Self(value)
    }

    /// Decodes a raw JSON scalar.
    ///
    /// The integer form wins first: `0` and `1` map directly, while any
    /// other integer falls through to the remaining forms. Next a native
    /// boolean is used as-is, and a string is matched against the known
    /// token sets. Every other shape (float, array, object, null) decodes
    /// as `false` with no error.
    pub fn from_wire(value: &Value) -> Result<Self, FlexibleBoolError> {
        if let Some(flag) = value.as_i64() {
            if flag == 0 || flag == 1 {
                return Ok(Self(flag == 1));
            }
        }

        match value {
            Value::Bool(flag) => Ok(Self(*flag)),
            Value::String(raw) => parse_token(raw).map(Self),
            _ => Ok(Self::default()),
        }
    }

    pub fn as_bool(&self) -> bool {
        self.0
    }

    pub fn into_inner(self) -> bool {
        self.0
    }
}

/// Matches the string tokens Plex servers have been seen to emit.
/// Matching is case-sensitive: `"TRue"` is not a boolean.
fn parse_token(raw: &str) -> Result<bool, FlexibleBoolError> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(FlexibleBoolError::InvalidToken(raw.to_owned())),
    }
}

impl From<bool> for FlexibleBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<FlexibleBool> for bool {
    fn from(value: FlexibleBool) -> Self {
        value.0
    }
}

impl Deref for FlexibleBool {
    type Target = bool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<bool> for FlexibleBool {
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}

impl Display for FlexibleBool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for FlexibleBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_wire(&value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for FlexibleBool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.0)
    }
}

#[cfg(test)]
mod flexible_bool_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn decode(raw: &str) -> FlexibleBool {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_integer_forms() {
        assert_eq!(true, decode("1").into_inner());
        assert_eq!(false, decode("0").into_inner());
    }

    #[test]
    fn test_native_forms() {
        assert_eq!(true, decode("true").into_inner());
        assert_eq!(false, decode("false").into_inner());
    }

    #[test]
    fn test_string_forms() {
        assert_eq!(true, decode(r#""true""#).into_inner());
        assert_eq!(true, decode(r#""True""#).into_inner());
        assert_eq!(true, decode(r#""TRUE""#).into_inner());
        assert_eq!(true, decode(r#""1""#).into_inner());
        assert_eq!(true, decode(r#""t""#).into_inner());
        assert_eq!(true, decode(r#""T""#).into_inner());

        assert_eq!(false, decode(r#""false""#).into_inner());
        assert_eq!(false, decode(r#""False""#).into_inner());
        assert_eq!(false, decode(r#""FALSE""#).into_inner());
        assert_eq!(false, decode(r#""0""#).into_inner());
        assert_eq!(false, decode(r#""f""#).into_inner());
        assert_eq!(false, decode(r#""F""#).into_inner());
    }

    #[test]
    fn test_unrecognized_string_is_an_error() {
        assert!(serde_json::from_str::<FlexibleBool>(r#""bogus""#).is_err());
        assert!(serde_json::from_str::<FlexibleBool>(r#""yes""#).is_err());
        assert!(serde_json::from_str::<FlexibleBool>(r#""TRue""#).is_err());
        assert!(serde_json::from_str::<FlexibleBool>(r#""""#).is_err());
    }

    #[test]
    fn test_out_of_range_integer_falls_through_to_false() {
        assert_eq!(false, decode("2").into_inner());
        assert_eq!(false, decode("-1").into_inner());
        assert_eq!(false, decode("42").into_inner());
    }

    #[test]
    fn test_unmatched_shapes_fall_through_to_false() {
        assert_eq!(false, decode("1.5").into_inner());
        assert_eq!(false, decode("null").into_inner());
        assert_eq!(false, decode("[1]").into_inner());
        assert_eq!(false, decode(r#"{"nested": true}"#).into_inner());
    }

    #[test]
    fn test_absent_field_defaults_to_false() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default)]
            selected: FlexibleBool,
        }

        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(false, probe.selected.into_inner());
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let decoded = decode("1");
        let wire = serde_json::to_string(&decoded).unwrap();
        assert_eq!("true", wire);
        assert_eq!(decoded, decode(&wire));
    }

    #[test]
    fn test_from_wire_error_names_the_token() {
        let result = FlexibleBool::from_wire(&Value::String("maybe".to_string()));
        assert_eq!(
            Err(FlexibleBoolError::InvalidToken("maybe".to_string())),
            result
        );
    }
}
