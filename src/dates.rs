//! Fixed-format date codecs for item fields.
//!
//! Directus `date` and `dateTime` fields travel as plain strings without a
//! timezone offset:
//!
//! - [`Date`]: `YYYY-MM-DD`
//! - [`DateTime`]: `YYYY-MM-DDTHH:MM:SS`, second precision
//!
//! Timestamps with an offset (`date_created`, `date_updated`) use
//! `chrono::DateTime<Utc>` directly.
//!
//! # Example
//!
//! ```rust
//! use directus_api::{Date, DateTime};
//!
//! let date: Date = "2024-02-29".parse().unwrap();
//! assert_eq!(serde_json::to_string(&date).unwrap(), r#""2024-02-29""#);
//!
//! let at: DateTime = serde_json::from_str(r#""2024-02-29T13:45:00""#).unwrap();
//! assert_eq!(at.to_string(), "2024-02-29T13:45:00");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Wire format of [`Date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of [`DateTime`].
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted input format of [`DateTime`]: an optional fractional second
/// may follow the seconds.
const DATE_TIME_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A calendar date, encoded as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(pub NaiveDate);

impl Date {
    /// Creates a date from year, month and day, if valid.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the underlying chrono date.
    #[must_use]
    pub const fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(Self)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid date '{s}': {e}")))
    }
}

/// A date and time without offset, encoded as `YYYY-MM-DDTHH:MM:SS`.
///
/// Fractional seconds are accepted on decode and dropped on encode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(pub NaiveDateTime);

impl DateTime {
    /// Returns the underlying chrono date-time.
    #[must_use]
    pub const fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for DateTime {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl From<DateTime> for NaiveDateTime {
    fn from(value: DateTime) -> Self {
        value.0
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

impl FromStr for DateTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, DATE_TIME_PARSE_FORMAT).map(Self)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid date-time '{s}': {e}")))
    }
}
