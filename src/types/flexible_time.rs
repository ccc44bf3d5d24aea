use std::fmt::{Display, Formatter};
use std::ops::Deref;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use thiserror::Error;

const LAYOUT_ISO: &str = "%Y-%m-%d";
const LAYOUT_US: &str = "%B %d, %Y";

/// A point in time that tolerates every encoding Plex uses on the wire.
///
/// Timestamp fields arrive as Unix epoch seconds, as `2023-11-14`, as
/// `November 14, 2023`, or as an RFC 3339 string, depending on the server
/// version and endpoint. Deserialization normalizes all of them to UTC.
///
/// A null or absent field decodes as the moment of decoding. A string that
/// matches none of the known layouts decodes as the Unix epoch. A numeric
/// token that is not a whole number of seconds propagates an error.
///
/// Serializes back to epoch seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlexibleTime(DateTime<Utc>);

#[derive(Debug, Error, PartialEq)]
pub enum FlexibleTimeError {
    #[error("numeric timestamp {0} is not a whole number of epoch seconds")]
    NotAnInteger(Number),
    #[error("epoch seconds {0} are outside the representable range")]
    OutOfRange(i64),
    #[error("expected a unix timestamp or a date string, found {0}")]
    UnexpectedShape(&'static str),
}

impl FlexibleTime {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Decodes a raw JSON scalar against the ambient clock `now`.
    ///
    /// `now` is only consulted for null input. Numbers are epoch seconds,
    /// strings are tried against each known layout in order, and any other
    /// shape is an error.
    pub fn from_wire(value: &Value, now: DateTime<Utc>) -> Result<Self, FlexibleTimeError> {
        match value {
            Value::Null => Ok(Self(now)),
            Value::Number(number) => {
                let seconds = number
                    .as_i64()
                    .ok_or_else(|| FlexibleTimeError::NotAnInteger(number.clone()))?;
                let instant = DateTime::from_timestamp(seconds, 0)
                    .ok_or(FlexibleTimeError::OutOfRange(seconds))?;
                Ok(Self(instant))
            }
            Value::String(raw) => Ok(Self(parse_layouts(raw))),
            other => Err(FlexibleTimeError::UnexpectedShape(value_kind(other))),
        }
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }

    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }
}

/// Tries each known layout in order and accepts the first that parses.
/// Date-only layouts resolve to midnight UTC; a string matching no layout
/// resolves to the Unix epoch.
fn parse_layouts(raw: &str) -> DateTime<Utc> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, LAYOUT_ISO) {
        return date.and_time(NaiveTime::MIN).and_utc();
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, LAYOUT_US) {
        return date.and_time(NaiveTime::MIN).and_utc();
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return instant.with_timezone(&Utc);
    }

    DateTime::UNIX_EPOCH
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Absent fields decode as the moment of decoding.
impl Default for FlexibleTime {
    fn default() -> Self {
        Self(Utc::now())
    }
}

impl From<DateTime<Utc>> for FlexibleTime {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl From<FlexibleTime> for DateTime<Utc> {
    fn from(value: FlexibleTime) -> Self {
        value.0
    }
}

impl Deref for FlexibleTime {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for FlexibleTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for FlexibleTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_wire(&value, Utc::now()).map_err(serde::de::Error::custom)
    }
}

impl Serialize for FlexibleTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0.timestamp())
    }
}

#[cfg(test)]
mod flexible_time_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn decode(raw: &str) -> FlexibleTime {
        serde_json::from_str(raw).unwrap()
    }

    fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    #[test]
    fn test_epoch_number() {
        let expected = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(expected, decode("1700000000").as_datetime());
    }

    #[test]
    fn test_iso_date_string() {
        assert_eq!(utc_date(2023, 11, 14), decode(r#""2023-11-14""#).as_datetime());
    }

    #[test]
    fn test_us_long_date_string() {
        assert_eq!(
            utc_date(2023, 11, 14),
            decode(r#""November 14, 2023""#).as_datetime()
        );
        assert_eq!(
            utc_date(2006, 1, 2),
            decode(r#""January 2, 2006""#).as_datetime()
        );
    }

    #[test]
    fn test_rfc3339_string() {
        let expected = NaiveDate::from_ymd_opt(2023, 11, 14)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
            .and_utc();
        assert_eq!(expected, decode(r#""2023-11-14T10:00:00Z""#).as_datetime());
    }

    #[test]
    fn test_rfc3339_offset_normalizes_to_utc() {
        let expected = NaiveDate::from_ymd_opt(2023, 11, 14)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
            .and_utc();
        assert_eq!(
            expected,
            decode(r#""2023-11-14T10:00:00+02:00""#).as_datetime()
        );
    }

    #[test]
    fn test_unparseable_string_resolves_to_the_epoch() {
        assert_eq!(DateTime::UNIX_EPOCH, decode(r#""not-a-date""#).as_datetime());
    }

    #[test]
    fn test_numeric_string_is_not_an_epoch() {
        // A quoted number matches none of the string layouts, so it lands
        // on the epoch rather than being read as epoch seconds.
        assert_eq!(DateTime::UNIX_EPOCH, decode(r#""1700000000""#).as_datetime());
    }

    #[test]
    fn test_fractional_number_is_an_error() {
        assert!(serde_json::from_str::<FlexibleTime>("1700000000.5").is_err());
    }

    #[test]
    fn test_unexpected_shape_is_an_error() {
        assert!(serde_json::from_str::<FlexibleTime>("true").is_err());
        assert!(serde_json::from_str::<FlexibleTime>("[1700000000]").is_err());
        assert!(serde_json::from_str::<FlexibleTime>(r#"{"at": 1}"#).is_err());
    }

    #[test]
    fn test_null_decodes_as_the_injected_clock() {
        let now = utc_date(2024, 6, 1);
        let decoded = FlexibleTime::from_wire(&Value::Null, now).unwrap();
        assert_eq!(now, decoded.as_datetime());
    }

    #[test]
    fn test_absent_field_decodes_near_now() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default)]
            seen_at: FlexibleTime,
        }

        let probe: Probe = serde_json::from_str("{}").unwrap();
        let drift = Utc::now() - probe.seen_at.as_datetime();
        assert!(drift.num_seconds().abs() < 5);
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let decoded = decode(r#""2023-11-14""#);
        let wire = serde_json::to_string(&decoded).unwrap();
        assert_eq!("1699920000", wire);
        assert_eq!(decoded, decode(&wire));
    }

    #[test]
    fn test_out_of_range_epoch_is_an_error() {
        let number = Number::from(i64::MAX);
        let result = FlexibleTime::from_wire(&Value::Number(number), Utc::now());
        assert_eq!(Err(FlexibleTimeError::OutOfRange(i64::MAX)), result);
    }
}
