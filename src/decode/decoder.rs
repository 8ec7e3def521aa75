use super::*;
use crate::scalar::{self, to_boolean, to_bytes, to_date_time, to_double, to_int};
use serde::de::{
    self,
    value::{MapDeserializer, SeqDeserializer},
    IntoDeserializer, Unexpected, Visitor,
};
use std::borrow::Cow::{self, *};

type Res<T> = Result<T, Error>;

/// Decoder to pass to [`Deserialize::deserialize`] to decode a [`Value`] into a type.
///
/// `Decoder` _consumes_ the `Value`. The destination type drives decoding: each typed request
/// from the `Deserialize` implementor is checked against the XML-RPC type of the node and the
/// scalar text is coerced at the requested width. No implicit conversions are made between
/// XML-RPC types, so an `<int>` never lands in an `f64` and a `<double>` never lands in an `i32`.
///
/// | XML-RPC type                       | Accepted by                                  |
/// | ---------------------------------- | -------------------------------------------- |
/// | `int`, `i4`                        | any integer primitive (range checked)        |
/// | `double`                           | `f32`, `f64`                                 |
/// | `string`, untyped                  | `String`, `&str`, `char`, unit enum variants |
/// | `boolean`                          | `bool`                                       |
/// | `dateTime.iso8601`                 | [`DateTime`]                                 |
/// | `base64`                           | `Vec<u8>`, byte buffers                      |
/// | `struct`                           | structs (by member name), maps               |
/// | `array`                            | sequences, tuples                            |
/// | `nil`                              | anything; the zero value is produced         |
///
/// Struct member names are normalised by upper-casing the first character before being matched
/// to field names, which are normalised the same way. Members without a matching field are
/// skipped.
///
/// Strings which did not need entity expansion borrow from the source document, so decoding into
/// `&str` works when the `Value` was parsed from a string that outlives the destination.
///
/// [`Value::decode`](crate::Value::decode) can be used for convenience.
///
/// # Examples
/// ```rust
/// # use xmlrpc_de::*;
/// use xmlrpc_de::decode::Decoder;
/// use serde::Deserialize;
///
/// let value = Value::int("42");
/// assert_eq!(i32::deserialize(Decoder(value)), Ok(42));
///
/// let value = Value::int("42");
/// assert_eq!(
///     f64::deserialize(Decoder(value)),
///     Err(Error::TypeMismatch { found: "int", expected: "f64" })
/// );
/// ```
///
/// [`Deserialize::deserialize`]: serde::de::Deserialize::deserialize
/// [`Value`]: crate::Value
/// [`DateTime`]: crate::DateTime
pub struct Decoder<'de>(pub Value<'de>);

macro_rules! decode_int {
    ($($method:ident => $visit:ident($ty:ty),)*) => {$(
        fn $method<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
            match self.0 {
                Value::Int(text) => visitor.$visit(to_int::<$ty>(&text)?),
                Value::Nil => visitor.$visit(0),
                x => Err(Error::mismatch(x.type_name(), stringify!($ty))),
            }
        }
    )*};
}

macro_rules! decode_float {
    ($($method:ident => $visit:ident($ty:ty),)*) => {$(
        fn $method<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
            match self.0 {
                Value::Double(text) => visitor.$visit(to_double::<$ty>(&text)?),
                Value::Nil => visitor.$visit(0.0),
                x => Err(Error::mismatch(x.type_name(), stringify!($ty))),
            }
        }
    )*};
}

impl<'de> de::Deserializer<'de> for Decoder<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Res<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Int(text) => visitor.visit_i64(to_int(&text)?),
            Value::Double(text) => visitor.visit_f64(to_double(&text)?),
            Value::Str(s) | Value::Raw(s) => visit_cow_str(s, visitor),
            Value::Bool(text) => visitor.visit_bool(to_boolean(&text)),
            Value::DateTime(text) => {
                to_date_time(&text)?;
                visit_cow_str(text, visitor)
            }
            Value::Base64(text) => visitor.visit_byte_buf(to_bytes(&text)?),
            Value::Struct(members) => visitor.visit_map(MapDeserializer::new(
                members.into_iter().map(|m| (m.name, m.value)),
            )),
            Value::Array(seq) => visitor.visit_seq(SeqDeserializer::new(seq.into_iter())),
            Value::Nil => visitor.visit_unit(),
        }
    }

    decode_int! {
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_i128 => visit_i128(i128),
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_u128 => visit_u128(u128),
    }

    decode_float! {
        deserialize_f32 => visit_f32(f32),
        deserialize_f64 => visit_f64(f64),
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        match self.0 {
            Value::Bool(text) => visitor.visit_bool(to_boolean(&text)),
            Value::Nil => visitor.visit_bool(false),
            x => Err(Error::mismatch(x.type_name(), "bool")),
        }
    }

    fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        match self.0 {
            Value::Str(s) | Value::Raw(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => visitor.visit_char(c),
                    _ => Err(de::Error::invalid_value(
                        Unexpected::Str(&s),
                        &"a single character",
                    )),
                }
            }
            Value::Nil => visitor.visit_char('\0'),
            x => Err(Error::mismatch(x.type_name(), "char")),
        }
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        match self.0 {
            Value::Str(s) | Value::Raw(s) => visit_cow_str(s, visitor),
            Value::Nil => visitor.visit_borrowed_str(""),
            x => Err(Error::mismatch(x.type_name(), "string")),
        }
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        match self.0 {
            Value::Base64(text) => visitor.visit_byte_buf(to_bytes(&text)?),
            Value::Nil => visitor.visit_byte_buf(Vec::new()),
            x => Err(Error::mismatch(x.type_name(), "bytes")),
        }
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        match self.0 {
            Value::Nil => visitor.visit_none(),
            val => visitor.visit_some(Decoder(val)),
        }
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        match self.0 {
            Value::Nil => visitor.visit_unit(),
            x => Err(Error::mismatch(x.type_name(), "unit")),
        }
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Res<V::Value> {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        visitor: V,
    ) -> Res<V::Value> {
        if name != DATETIME_TOKEN {
            return visitor.visit_newtype_struct(self);
        }

        // the destination reconstructs from RFC 3339 so the local offset survives
        match self.0 {
            Value::DateTime(text) => visitor.visit_string(to_date_time(&text)?.to_rfc3339()),
            Value::Nil => visitor.visit_string(DateTime::default().to_rfc3339()),
            x => Err(Error::mismatch(x.type_name(), "dateTime.iso8601")),
        }
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        match self.0 {
            Value::Array(seq) => visitor.visit_seq(SeqDeserializer::new(seq.into_iter())),
            // Vec<u8> asks for a sequence
            Value::Base64(text) => visitor.visit_seq(SeqDeserializer::new(
                to_bytes(&text)?.into_iter().map(ByteDecoder),
            )),
            Value::Nil => visitor.visit_seq(SeqDeserializer::new(std::iter::empty::<Value>())),
            x => Err(Error::mismatch(x.type_name(), "sequence")),
        }
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, len: usize, visitor: V) -> Res<V::Value> {
        match self.0 {
            Value::Array(seq) if seq.len() == len => {
                visitor.visit_seq(SeqDeserializer::new(seq.into_iter()))
            }
            Value::Array(seq) => {
                let msg = format!("an array of {} element(s)", len);
                Err(de::Error::invalid_length(seq.len(), &msg.as_str()))
            }
            Value::Nil => visitor.visit_seq(SeqDeserializer::new(
                std::iter::repeat(Value::Nil).take(len),
            )),
            x => Err(Error::mismatch(x.type_name(), "tuple")),
        }
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Res<V::Value> {
        self.deserialize_tuple(len, visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        match self.0 {
            Value::Struct(members) => visitor.visit_map(MapDeserializer::new(
                members.into_iter().map(|m| (m.name, m.value)),
            )),
            Value::Nil => visitor.visit_map(MapDeserializer::new(
                std::iter::empty::<(Cow<'_, str>, Value)>(),
            )),
            x => Err(Error::mismatch(x.type_name(), "map")),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Res<V::Value> {
        match self.0 {
            Value::Struct(members) => {
                visitor.visit_map(MapDeserializer::new(match_fields(members, fields).into_iter()))
            }
            Value::Nil => visitor.visit_map(MapDeserializer::new(
                fields.iter().map(|f| (*f, Value::Nil)),
            )),
            x => Err(Error::mismatch(x.type_name(), "struct")),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Res<V::Value> {
        match self.0 {
            Value::Str(s) | Value::Raw(s) => visitor
                .visit_enum(<Cow<'de, str> as IntoDeserializer<'de, Error>>::into_deserializer(s)),
            x => Err(Error::mismatch(x.type_name(), "enum")),
        }
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        visitor.visit_unit()
    }
}

impl<'de> de::IntoDeserializer<'de, Error> for Value<'de> {
    type Deserializer = Decoder<'de>;
    fn into_deserializer(self) -> Decoder<'de> {
        Decoder(self)
    }
}

////// FUNCTIONS ///////////////////////////////////////////////////////////////

fn visit_cow_str<'de, V: Visitor<'de>>(s: Cow<'de, str>, visitor: V) -> Res<V::Value> {
    match s {
        Borrowed(s) => visitor.visit_borrowed_str(s),
        Owned(s) => visitor.visit_string(s),
    }
}

/// Pair each member with the destination field of the same normalised name, handing out the
/// field's own spelling. Members without a field are dropped. Fields no member matched are paired
/// with nil so they take their zero value.
fn match_fields<'de>(
    members: Vec<Member<'de>>,
    fields: &'static [&'static str],
) -> Vec<(&'static str, Value<'de>)> {
    let mut matched: Vec<_> = members
        .into_iter()
        .filter_map(|m| {
            let name = scalar::uppercase_first(&m.name);
            fields
                .iter()
                .find(|f| scalar::uppercase_first(f) == name)
                .map(|f| (*f, m.value))
        })
        .collect();

    let absent = fields
        .iter()
        .filter(|f| !matched.iter().any(|(m, _)| m == *f))
        .map(|f| (*f, Value::Nil))
        .collect::<Vec<_>>();
    matched.extend(absent);

    matched
}

/// A single decoded byte of a `<base64>` node. Only `u8` destinations accept it.
struct ByteDecoder(u8);

macro_rules! reject_byte {
    ($($method:ident => $expected:literal,)*) => {$(
        fn $method<V: Visitor<'de>>(self, _visitor: V) -> Res<V::Value> {
            Err(Error::mismatch("base64", $expected))
        }
    )*};
}

impl<'de> de::Deserializer<'de> for ByteDecoder {
    type Error = Error;

    fn deserialize_u8<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        visitor.visit_u8(self.0)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Res<V::Value> {
        visitor.visit_unit()
    }

    reject_byte! {
        deserialize_any => "u8",
        deserialize_bool => "bool",
        deserialize_i8 => "i8",
        deserialize_i16 => "i16",
        deserialize_i32 => "i32",
        deserialize_i64 => "i64",
        deserialize_i128 => "i128",
        deserialize_u16 => "u16",
        deserialize_u32 => "u32",
        deserialize_u64 => "u64",
        deserialize_u128 => "u128",
        deserialize_f32 => "f32",
        deserialize_f64 => "f64",
        deserialize_char => "char",
        deserialize_str => "string",
        deserialize_string => "string",
        deserialize_bytes => "bytes",
        deserialize_byte_buf => "bytes",
        deserialize_option => "option",
        deserialize_unit => "unit",
        deserialize_seq => "sequence",
        deserialize_map => "map",
        deserialize_identifier => "identifier",
    }

    serde::forward_to_deserialize_any! {
        unit_struct newtype_struct tuple tuple_struct struct enum
    }
}

impl<'de> de::IntoDeserializer<'de, Error> for ByteDecoder {
    type Deserializer = Self;
    fn into_deserializer(self) -> Self {
        self
    }
}
