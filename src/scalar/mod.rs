//! Coercion of XML-RPC scalar wire text into typed values.
//!
//! These are the leaves of decoding. Each function takes the text exactly as it appeared
//! between the type tags and either produces the value or an [`Error::Format`].
//!
//! [`Error::Format`]: crate::Error::Format
use crate::{DateTime, Error};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::borrow::Cow;

mod datetime;

/// Interpret `<boolean>` text.
///
/// `1`, `true`, `TRUE` and `True` are true. Every other literal is `false`, including
/// unrecognised ones; no error is reported.
///
/// # Example
/// ```rust
/// # use xmlrpc_de::scalar::to_boolean;
/// assert_eq!(to_boolean("1"), true);
/// assert_eq!(to_boolean("True"), true);
/// assert_eq!(to_boolean("0"), false);
/// assert_eq!(to_boolean("yes"), false);
/// ```
pub fn to_boolean(text: &str) -> bool {
    matches!(text, "1" | "true" | "TRUE" | "True")
}

/// Interpret `<dateTime.iso8601>` text of the form `YYYYMMDDTHH:MM:SS`.
///
/// There is no fractional second and no offset; the time is taken to be in the local timezone.
/// A calendar-invalid date, or a local time skipped by a daylight saving transition, is a
/// format error just like malformed text.
///
/// # Example
/// ```rust
/// # use xmlrpc_de::scalar::to_date_time;
/// use chrono::Datelike;
///
/// assert_eq!(to_date_time("20130704T13:45:09").map(|d| d.month()), Ok(7));
/// assert!(to_date_time("2013-07-04").is_err());
/// ```
pub fn to_date_time(text: &str) -> Result<DateTime, Error> {
    datetime::parse(text)
}

/// Decode `<base64>` text using the standard alphabet with padding.
///
/// Line breaks, which many servers insert every 76 characters, are skipped.
///
/// # Example
/// ```rust
/// # use xmlrpc_de::scalar::to_bytes;
/// assert_eq!(to_bytes("eW91IGNhbid0IHJlYWQgdGhpcyE="), Ok(b"you can't read this!".to_vec()));
/// assert!(to_bytes("not base64!").is_err());
/// ```
pub fn to_bytes(text: &str) -> Result<Vec<u8>, Error> {
    let text: Cow<str> = if text.contains(|c| c == '\r' || c == '\n') {
        Cow::Owned(text.chars().filter(|&c| c != '\r' && c != '\n').collect())
    } else {
        Cow::Borrowed(text)
    };

    STANDARD.decode(text.as_bytes()).map_err(|e| Error::Format {
        ty: "base64",
        msg: e.to_string(),
    })
}

/// Interpret `<int>`/`<i4>` text as an integer of width `T`.
///
/// Text that is not a decimal integer, or does not fit in `T`, is a format error.
///
/// # Example
/// ```rust
/// # use xmlrpc_de::scalar::to_int;
/// assert_eq!(to_int::<i32>("-42"), Ok(-42));
/// assert!(to_int::<u8>("300").is_err());
/// assert!(to_int::<i32>("4.2").is_err());
/// ```
pub fn to_int<T: lexical_core::FromLexical>(text: &str) -> Result<T, Error> {
    lexical_core::parse::<T>(text.as_bytes()).map_err(|_| Error::Format {
        ty: "int",
        msg: format!("{:?} is not a decimal integer of the requested width", text),
    })
}

/// Interpret `<double>` text as a floating point number.
///
/// # Example
/// ```rust
/// # use xmlrpc_de::scalar::to_double;
/// assert_eq!(to_double::<f64>("-12.214"), Ok(-12.214));
/// assert!(to_double::<f64>("twelve").is_err());
/// ```
pub fn to_double<T: fast_float::FastFloat>(text: &str) -> Result<T, Error> {
    fast_float::parse::<T, _>(text).map_err(|_| Error::Format {
        ty: "double",
        msg: format!("{:?} is not a floating point number", text),
    })
}

/// Upper-case the first character of a struct member name.
///
/// Member names are normalised this way before being matched against destination fields, so
/// `code` and `Code` resolve to the same field.
///
/// # Example
/// ```rust
/// # use xmlrpc_de::scalar::uppercase_first;
/// assert_eq!(uppercase_first("code"), "Code");
/// assert_eq!(uppercase_first("Code"), "Code");
/// assert_eq!(uppercase_first("élan"), "Élan");
/// assert_eq!(uppercase_first(""), "");
/// ```
pub fn uppercase_first(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.to_uppercase().ne(std::iter::once(first)) => {
            let mut s: String = first.to_uppercase().collect();
            s.push_str(chars.as_str());
            Cow::Owned(s)
        }
        _ => Cow::Borrowed(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_literals() {
        for t in ["1", "true", "TRUE", "True"] {
            assert!(to_boolean(t), "{} should be true", t);
        }
        for f in ["0", "false", "FALSE", "False", "", "yes", "tRUE", " 1"] {
            assert!(!to_boolean(f), "{} should be false", f);
        }
    }

    #[test]
    fn base64_line_breaks() {
        assert_eq!(to_bytes("aGVs\r\nbG8=\n"), Ok(b"hello".to_vec()));
        assert_eq!(to_bytes(""), Ok(vec![]));
    }

    #[test]
    fn base64_errors() {
        assert!(matches!(
            to_bytes("aGVsbG8"),
            Err(Error::Format { ty: "base64", .. })
        ));
        assert!(matches!(
            to_bytes("aGV*bG8="),
            Err(Error::Format { ty: "base64", .. })
        ));
    }

    #[test]
    fn integers() {
        assert_eq!(to_int::<i32>("2147483647"), Ok(i32::MAX));
        assert_eq!(to_int::<i64>("-9"), Ok(-9));
        assert!(matches!(
            to_int::<i32>("2147483648"),
            Err(Error::Format { ty: "int", .. })
        ));
        assert!(to_int::<i32>("").is_err());
        assert!(to_int::<i32>("12abc").is_err());
        assert!(to_int::<u32>("-1").is_err());
    }

    #[test]
    fn doubles() {
        assert_eq!(to_double::<f64>("3.5"), Ok(3.5));
        assert_eq!(to_double::<f32>("-0.25"), Ok(-0.25));
        assert_eq!(to_double::<f64>("1e3"), Ok(1000.0));
        assert!(matches!(
            to_double::<f64>("1.2.3"),
            Err(Error::Format { ty: "double", .. })
        ));
        assert!(to_double::<f64>("").is_err());
    }

    #[test]
    fn uppercase_first_borrows_when_unchanged() {
        assert!(matches!(uppercase_first("Name"), Cow::Borrowed("Name")));
        assert!(matches!(uppercase_first("_name"), Cow::Borrowed("_name")));
        assert!(matches!(uppercase_first("name"), Cow::Owned(_)));
    }
}
