//! Type-directed decoding of XML-RPC responses.
//!
//! XML-RPC carries a small closed set of types inside an XML envelope: integers, doubles,
//! strings, booleans, date-times, base64 blobs, structs and arrays. This crate reads a
//! `<methodResponse>` into a [`Response`] of [`Value`] trees and decodes those trees into any
//! type implementing [`Deserialize`], checking every value against the type the destination
//! declares.
//!
//! # Layout
//! - Data structures: [`Value`], [`Member`], [`Response`], [`Fault`] and [`DateTime`].
//! - [`scalar`]: coercion of scalar wire text into typed values.
//! - [`decode`]: the [`Decoder`](decode::Decoder) that walks a `Value` for a destination type, and
//!   [`Params`](decode::Params) which maps parameters onto the fields of a destination.
//! - [`parse`]: reading the XML document into a `Response`. Requires the _parse_ feature
//!   (enabled by default).
//!
//! # Example
//! ```rust
//! use serde_derive::Deserialize;
//!
//! #[derive(Debug, PartialEq, Deserialize)]
//! struct StateName(String);
//!
//! let xml = r#"<?xml version="1.0"?>
//! <methodResponse>
//!   <params>
//!     <param><value><string>South Dakota</string></value></param>
//!   </params>
//! </methodResponse>"#;
//!
//! let r = xmlrpc_de::from_str::<StateName>(xml);
//! assert_eq!(r, Ok(StateName("South Dakota".into())));
//! ```
//!
//! A fault is its own error variant.
//! ```rust
//! use xmlrpc_de::{Error, Fault};
//!
//! let xml = r#"<methodResponse><fault><value><struct>
//!   <member><name>faultCode</name><value><int>4</int></value></member>
//!   <member><name>faultString</name><value>Too many parameters.</value></member>
//! </struct></value></fault></methodResponse>"#;
//!
//! let r = xmlrpc_de::from_str::<(i32,)>(xml);
//! assert_eq!(r, Err(Error::Fault(Fault { code: 4, string: "Too many parameters.".into() })));
//! ```
#![warn(missing_docs)]

mod ds;

pub mod decode;
#[cfg(feature = "parse")]
pub mod parse;
pub mod scalar;

pub use decode::Error;
pub use ds::{DateTime, Fault, Member, Response, Value};
pub use serde::Deserialize;

/// Decode a parsed [`Response`] into `T`.
///
/// Convenience function for `response.decode::<T>()`.
pub fn from_response<'a, T: Deserialize<'a>>(response: Response<'a>) -> Result<T, Error> {
    response.decode()
}

/// Parse an XML-RPC response document and decode it into `T`.
///
/// Requires the _parse_ feature.
///
/// A fault in the document is returned as [`Error::Fault`]. Otherwise `T` must be a struct or
/// tuple with exactly one field per parameter; parameters are decoded into fields in order.
#[cfg(feature = "parse")]
pub fn from_str<'a, T: Deserialize<'a>>(xml: &'a str) -> Result<T, Error> {
    parse::parse(xml)?.decode()
}
