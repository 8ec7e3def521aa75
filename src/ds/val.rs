use std::borrow::Cow;

/// A parsed XML-RPC `<value>`.
///
/// `Value` has _exactly one_ active variant, as produced by the envelope parser. Scalars keep
/// their wire text untouched; coercion into a typed value only happens when decoding into a
/// destination, which is where format errors are reported.
///
/// Text is held in clone-on-write pointers so a `Value` can borrow from the document it was
/// parsed from until ownership is required.
///
/// # Example
/// ```rust
/// # use xmlrpc_de::*;
/// let value = Value::structure(vec![
///     ("code", Value::int("42")),
///     ("label", Value::string("answer")),
/// ]);
///
/// assert_eq!(value.type_name(), "struct");
/// assert_eq!(value.members().map(|m| m.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    /// `<int>` or the legacy `<i4>`.
    Int(Cow<'a, str>),
    /// `<double>`.
    Double(Cow<'a, str>),
    /// `<string>`. An empty string is still a string.
    Str(Cow<'a, str>),
    /// `<boolean>`.
    Bool(Cow<'a, str>),
    /// `<dateTime.iso8601>`.
    DateTime(Cow<'a, str>),
    /// `<base64>`.
    Base64(Cow<'a, str>),
    /// `<struct>`, members in document order.
    Struct(Vec<Member<'a>>),
    /// `<array><data>`, elements in document order.
    Array(Vec<Value<'a>>),
    /// Untyped `<value>` content, which XML-RPC defines as a string.
    Raw(Cow<'a, str>),
    /// `<nil/>`.
    Nil,
}

/// A named member of a `<struct>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member<'a> {
    /// The member name as it appeared on the wire.
    pub name: Cow<'a, str>,
    /// The member value.
    pub value: Value<'a>,
}

impl<'a> Member<'a> {
    /// A new member.
    pub fn new<S: Into<Cow<'a, str>>>(name: S, value: Value<'a>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Clones all data to make a static `Member`.
    pub fn to_owned(self) -> Member<'static> {
        Member {
            name: Cow::Owned(self.name.into_owned()),
            value: self.value.to_owned(),
        }
    }
}

/// Constructors.
impl<'a> Value<'a> {
    /// A new `<int>` value from its wire text.
    pub fn int<S: Into<Cow<'a, str>>>(text: S) -> Self {
        Value::Int(text.into())
    }

    /// A new `<double>` value from its wire text.
    pub fn double<S: Into<Cow<'a, str>>>(text: S) -> Self {
        Value::Double(text.into())
    }

    /// A new `<string>` value.
    pub fn string<S: Into<Cow<'a, str>>>(text: S) -> Self {
        Value::Str(text.into())
    }

    /// A new `<boolean>` value from its wire text.
    pub fn boolean<S: Into<Cow<'a, str>>>(text: S) -> Self {
        Value::Bool(text.into())
    }

    /// A new `<dateTime.iso8601>` value from its wire text.
    pub fn date_time<S: Into<Cow<'a, str>>>(text: S) -> Self {
        Value::DateTime(text.into())
    }

    /// A new `<base64>` value from its wire text.
    pub fn base64<S: Into<Cow<'a, str>>>(text: S) -> Self {
        Value::Base64(text.into())
    }

    /// A new untyped value.
    pub fn raw<S: Into<Cow<'a, str>>>(text: S) -> Self {
        Value::Raw(text.into())
    }

    /// Construct a `<struct>` from a list of name-value pairs. Order is preserved.
    ///
    /// # Example
    /// ```rust
    /// # use xmlrpc_de::*;
    /// let value = Value::structure(vec![("a", Value::int("0"))]);
    /// assert_eq!(value.members().unwrap()[0].name, "a");
    /// ```
    pub fn structure<I, S>(iter: I) -> Self
    where
        S: Into<Cow<'a, str>>,
        I: IntoIterator<Item = (S, Value<'a>)>,
    {
        Value::Struct(iter.into_iter().map(|(k, v)| Member::new(k, v)).collect())
    }

    /// Construct an `<array>` from a list of elements.
    pub fn array<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Value<'a>>,
    {
        Value::Array(iter.into_iter().collect())
    }
}

/// Accessors.
impl<'a> Value<'a> {
    /// The XML-RPC type name of the active variant, as used in error messages.
    ///
    /// Untyped content is reported as `string`, the type XML-RPC assigns it.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Str(_) | Value::Raw(_) => "string",
            Value::Bool(_) => "boolean",
            Value::DateTime(_) => "dateTime.iso8601",
            Value::Base64(_) => "base64",
            Value::Struct(_) => "struct",
            Value::Array(_) => "array",
            Value::Nil => "nil",
        }
    }

    /// `Value` is `<nil/>`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// `Value` is a string, either tagged or untyped.
    ///
    /// # Example
    /// ```rust
    /// # use xmlrpc_de::*;
    /// assert_eq!(Value::raw("plain").str(), Some("plain"));
    /// assert_eq!(Value::string("").str(), Some(""));
    /// assert_eq!(Value::int("1").str(), None);
    /// ```
    pub fn str(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Raw(s) => Some(s),
            _ => None,
        }
    }

    /// The members if `Value` is a `<struct>`.
    pub fn members(&self) -> Option<&[Member<'a>]> {
        match self {
            Value::Struct(m) => Some(m),
            _ => None,
        }
    }

    /// The elements if `Value` is an `<array>`.
    pub fn elements(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Find the first struct member with the given name.
    pub fn member(&self, name: &str) -> Option<&Value<'a>> {
        self.members()?
            .iter()
            .find(|m| m.name == name)
            .map(|m| &m.value)
    }
}

/// Conversions.
impl<'a> Value<'a> {
    /// Clones all borrowed text to make a static `Value`.
    pub fn to_owned(self) -> Value<'static> {
        fn own(s: Cow<str>) -> Cow<'static, str> {
            Cow::Owned(s.into_owned())
        }

        match self {
            Value::Int(s) => Value::Int(own(s)),
            Value::Double(s) => Value::Double(own(s)),
            Value::Str(s) => Value::Str(own(s)),
            Value::Bool(s) => Value::Bool(own(s)),
            Value::DateTime(s) => Value::DateTime(own(s)),
            Value::Base64(s) => Value::Base64(own(s)),
            Value::Raw(s) => Value::Raw(own(s)),
            Value::Struct(m) => Value::Struct(m.into_iter().map(Member::to_owned).collect()),
            Value::Array(v) => Value::Array(v.into_iter().map(Value::to_owned).collect()),
            Value::Nil => Value::Nil,
        }
    }
}
