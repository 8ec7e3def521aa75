use super::*;
use serde::de::{self, value::SeqDeserializer, Visitor};
use serde::forward_to_deserialize_any;

type Res<T> = Result<T, Error>;

/// Decoder for the parameter list of a response.
///
/// The destination must be a fixed-field aggregate: a struct, tuple, tuple struct, newtype
/// struct (one parameter) or unit (no parameters). Its field count is checked against the number
/// of parameters _before_ anything is decoded, then each parameter is decoded positionally into
/// the field of the same index.
///
/// # Example
/// ```rust
/// # use xmlrpc_de::*;
/// use xmlrpc_de::decode::Params;
/// use serde::Deserialize;
///
/// let params = vec![Value::int("1"), Value::string("one")];
/// let r = <(i32, String)>::deserialize(Params(params));
/// assert_eq!(r, Ok((1, "one".to_string())));
///
/// let params = vec![Value::int("1"), Value::string("one")];
/// let r = <(i32,)>::deserialize(Params(params));
/// assert_eq!(r, Err(Error::ArityMismatch { expected: 1, found: 2 }));
/// ```
pub struct Params<'de>(pub Vec<Value<'de>>);

impl<'de> Params<'de> {
    fn check_arity(&self, expected: usize) -> Res<()> {
        let found = self.0.len();
        if expected == found {
            Ok(())
        } else {
            Err(Error::ArityMismatch { expected, found })
        }
    }

    fn positional<V: Visitor<'de>>(self, expected: usize, visitor: V) -> Res<V::Value> {
        self.check_arity(expected)?;
        let mut seq = SeqDeserializer::new(self.0.into_iter());
        let value = visitor.visit_seq(&mut seq)?;
        seq.end()?;
        Ok(value)
    }
}

impl<'de> de::Deserializer<'de> for Params<'de> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Res<V::Value> {
        Err(Error::InvalidTarget(String::from(
            "expected a struct or tuple with one field per parameter",
        )))
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option seq map enum identifier ignored_any
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        self.check_arity(0)?;
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Res<V::Value> {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        mut self,
        name: &'static str,
        visitor: V,
    ) -> Res<V::Value> {
        if name == DATETIME_TOKEN {
            return Err(Error::InvalidTarget(String::from(
                "a date-time is a single value, not a parameter list",
            )));
        }

        self.check_arity(1)?;
        match self.0.pop() {
            Some(value) => visitor.visit_newtype_struct(Decoder(value)),
            None => Err(Error::ArityMismatch {
                expected: 1,
                found: 0,
            }),
        }
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, len: usize, visitor: V) -> Res<V::Value> {
        self.positional(len, visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Res<V::Value> {
        self.positional(len, visitor)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Res<V::Value> {
        self.positional(fields.len(), visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn invalid_targets() {
        assert!(matches!(
            i32::deserialize(Params(vec![Value::int("1")])),
            Err(Error::InvalidTarget(_))
        ));
        assert!(matches!(
            Vec::<i32>::deserialize(Params(vec![Value::int("1")])),
            Err(Error::InvalidTarget(_))
        ));
        assert!(matches!(
            DateTime::deserialize(Params(vec![Value::date_time("20130704T13:45:09")])),
            Err(Error::InvalidTarget(_))
        ));
    }

    #[test]
    fn unit_takes_no_params() {
        assert_eq!(<()>::deserialize(Params(vec![])), Ok(()));
        assert_eq!(
            <()>::deserialize(Params(vec![Value::Nil])),
            Err(Error::ArityMismatch {
                expected: 0,
                found: 1
            })
        );
    }

    #[test]
    fn arity_checked_before_decoding() {
        // the malformed int would be a format error if it were decoded
        let params = vec![Value::int("bad"), Value::int("1")];
        assert_eq!(
            <(i32, i32, i32)>::deserialize(Params(params)),
            Err(Error::ArityMismatch {
                expected: 3,
                found: 2
            })
        );
    }
}
