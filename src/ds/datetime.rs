use chrono::Local;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::fmt;
use std::ops::Deref;

/// Newtype-struct name the [`Decoder`] recognises as a request for a `dateTime.iso8601` value.
///
/// [`Decoder`]: crate::decode::Decoder
pub(crate) const TOKEN: &str = "$xmlrpc_de::private::DateTime";

/// An XML-RPC `dateTime.iso8601` point in time.
///
/// The wire format carries no offset, so values are interpreted in the local timezone of the
/// running process. The zero value ([`Default`]) is the Unix epoch.
///
/// `DateTime` is the destination type for date-time fields; declaring a field as `String`
/// or a number and receiving a `dateTime.iso8601` node is a type mismatch.
///
/// # Example
/// ```rust
/// # use xmlrpc_de::*;
/// use chrono::{Datelike, Timelike};
///
/// let dt = Value::date_time("20130704T13:45:09").decode::<DateTime>().unwrap();
/// assert_eq!((dt.year(), dt.month(), dt.day()), (2013, 7, 4));
/// assert_eq!((dt.hour(), dt.minute(), dt.second()), (13, 45, 9));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(pub chrono::DateTime<Local>);

impl DateTime {
    /// Unwrap into the inner `chrono` value.
    pub fn into_inner(self) -> chrono::DateTime<Local> {
        self.0
    }
}

impl Deref for DateTime {
    type Target = chrono::DateTime<Local>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<chrono::DateTime<Local>> for DateTime {
    fn from(dt: chrono::DateTime<Local>) -> Self {
        DateTime(dt)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%dT%H:%M:%S"))
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_newtype_struct(TOKEN, DateTimeVisitor)
    }
}

struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
    type Value = DateTime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an RFC 3339 date-time")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        chrono::DateTime::parse_from_rfc3339(v)
            .map(|dt| DateTime(dt.with_timezone(&Local)))
            .map_err(E::custom)
    }

    fn visit_newtype_struct<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_str(self)
    }
}
