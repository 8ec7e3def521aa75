//! [`Decoder`] and [`Params`] for converting parsed XML-RPC values into data structures.
//!
//! Decoding leverages [`serde`]: any type that implements [`Deserialize`] can be the destination.
//! The destination's declared types drive decoding, and each XML-RPC value is checked against
//! them; there is no implicit conversion between XML-RPC types.
//!
//! A response is decoded with [`Response::decode`]. A fault in the response is reported as
//! [`Error::Fault`] before anything else is looked at. Otherwise the destination must declare one
//! field per parameter, and parameters are decoded positionally.
//!
//! # Examples
//! ```rust
//! # use xmlrpc_de::*;
//! use serde_derive::Deserialize;
//!
//! #[derive(Debug, PartialEq, Deserialize)]
//! struct Reply {
//!     id: i32,
//!     state: Option<State>,
//! }
//!
//! #[derive(Debug, PartialEq, Deserialize)]
//! struct State {
//!     name: String,
//!     population: i32,
//! }
//!
//! let response = Response::with_params(vec![
//!     Value::int("40"),
//!     Value::structure(vec![
//!         ("Name", Value::string("South Dakota")),
//!         ("population", Value::int("814180")),
//!     ]),
//! ]);
//!
//! let reply = response.decode::<Reply>().unwrap();
//! assert_eq!(reply, Reply {
//!     id: 40,
//!     state: Some(State { name: "South Dakota".into(), population: 814180 }),
//! });
//! ```
//!
//! Faults take precedence over parameters.
//! ```rust
//! # use xmlrpc_de::*;
//! let response = Response {
//!     params: vec![Value::int("1")],
//!     fault: Some(Value::structure(vec![
//!         ("faultCode", Value::int("4")),
//!         ("faultString", Value::string("Too many parameters.")),
//!     ])),
//! };
//!
//! let r = response.decode::<(i32,)>();
//! assert_eq!(r, Err(Error::Fault(Fault { code: 4, string: "Too many parameters.".into() })));
//! ```
//!
//! [`Decoder`]: crate::decode::Decoder
//! [`Deserialize`]: serde::Deserialize
//! [`Params`]: crate::decode::Params
//! [`serde`]: serde
use crate::ds::*;
use serde::Deserialize;

mod decoder;
mod err;
mod params;

pub use self::decoder::Decoder;
pub use self::err::Error;
pub use self::params::Params;

impl<'a> Response<'a> {
    /// Decode the response into `T`, one field per parameter.
    ///
    /// A fault is returned as [`Error::Fault`] without decoding any parameter. If `T` does not
    /// declare exactly as many fields as there are parameters, [`Error::ArityMismatch`] is
    /// returned and nothing is decoded.
    ///
    /// Convenience function for `<T as Deserialize>::deserialize(Params(self.params))` after the
    /// fault check.
    pub fn decode<T: Deserialize<'a>>(self) -> Result<T, Error> {
        if let Some(fault) = &self.fault {
            return Err(Error::Fault(Fault::from_value(fault)?));
        }

        <T as Deserialize>::deserialize(Params(self.params))
    }
}

impl<'a> Value<'a> {
    /// Attempt to decode a single `Value` into type `T`.
    ///
    /// Convenience function for `<T as Deserialize>::deserialize(Decoder(self))`.
    ///
    /// # Example
    /// ```rust
    /// # use xmlrpc_de::*;
    /// let value = Value::array(vec![Value::int("1"), Value::int("2")]);
    /// assert_eq!(value.decode::<Vec<i32>>(), Ok(vec![1, 2]));
    /// ```
    pub fn decode<T: Deserialize<'a>>(self) -> Result<T, Error> {
        <T as Deserialize>::deserialize(Decoder(self))
    }

    /// Decode an `<array>` and append its elements to `dest`.
    ///
    /// Unlike [`decode`](Value::decode), which produces a fresh value, this accumulates: decoding
    /// the same array twice into one vector doubles its length. Every element is decoded before
    /// any is appended, so on error `dest` is untouched. `<nil/>` appends nothing.
    ///
    /// # Example
    /// ```rust
    /// # use xmlrpc_de::*;
    /// let value = Value::array(vec![Value::int("1"), Value::int("2")]);
    /// let mut dest = vec![0];
    /// value.append_into(&mut dest).unwrap();
    /// assert_eq!(dest, vec![0, 1, 2]);
    /// ```
    pub fn append_into<T: Deserialize<'a>>(self, dest: &mut Vec<T>) -> Result<(), Error> {
        let items = match self {
            Value::Array(seq) => seq
                .into_iter()
                .map(Value::decode::<T>)
                .collect::<Result<Vec<_>, _>>()?,
            Value::Nil => return Ok(()),
            x => return Err(Error::mismatch(x.type_name(), "sequence")),
        };

        dest.extend(items);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_accumulates() {
        let value = Value::array(vec![Value::int("1"), Value::int("2"), Value::int("3")]);
        let mut dest: Vec<i32> = Vec::new();
        value.clone().append_into(&mut dest).unwrap();
        assert_eq!(dest, vec![1, 2, 3]);
        value.append_into(&mut dest).unwrap();
        assert_eq!(dest, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn append_is_all_or_nothing() {
        let value = Value::array(vec![Value::int("1"), Value::string("two")]);
        let mut dest = vec![0];
        assert_eq!(
            value.append_into(&mut dest),
            Err(Error::mismatch("string", "i32"))
        );
        assert_eq!(dest, vec![0]);

        assert_eq!(
            Value::int("1").append_into(&mut dest),
            Err(Error::mismatch("int", "sequence"))
        );
        assert_eq!(Value::Nil.append_into(&mut dest), Ok(()));
        assert_eq!(dest, vec![0]);
    }

    #[test]
    fn fault_with_bad_code() {
        let response = Response::with_fault(Value::structure(vec![(
            "faultCode",
            Value::int("x"),
        )]));
        assert!(matches!(
            response.decode::<()>(),
            Err(Error::Format { ty: "int", .. })
        ));
    }
}
