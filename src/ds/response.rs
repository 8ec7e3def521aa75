use super::*;
use crate::scalar;
use crate::Error;
use std::{error, fmt};

/// A parsed `<methodResponse>` envelope.
///
/// A response carries either an ordered list of parameters or a fault. When a fault is present
/// it takes precedence: [`Response::decode`] reports it without touching the parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response<'a> {
    /// The `<params>` values, in document order.
    pub params: Vec<Value<'a>>,
    /// The value inside `<fault>`, if the document had one.
    pub fault: Option<Value<'a>>,
}

impl<'a> Response<'a> {
    /// A successful response carrying `params`.
    pub fn with_params(params: Vec<Value<'a>>) -> Self {
        Self {
            params,
            fault: None,
        }
    }

    /// A fault response.
    pub fn with_fault(fault: Value<'a>) -> Self {
        Self {
            params: Vec::new(),
            fault: Some(fault),
        }
    }

    /// The fault carried by this response, if any.
    ///
    /// Returns `Err` if the fault is present but its `faultCode` is not a valid integer.
    pub fn fault(&self) -> Result<Option<Fault>, Error> {
        self.fault.as_ref().map(Fault::from_value).transpose()
    }
}

/// An application-level fault reported by the remote side.
///
/// # Example
/// ```rust
/// # use xmlrpc_de::*;
/// let value = Value::structure(vec![
///     ("faultString", Value::raw("Too many parameters.")),
///     ("faultCode", Value::int("4")),
/// ]);
///
/// let fault = Fault::from_value(&value).unwrap();
/// assert_eq!(fault, Fault { code: 4, string: "Too many parameters.".into() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fault {
    /// `faultCode`.
    pub code: i32,
    /// `faultString`.
    pub string: String,
}

impl Fault {
    /// Extract a fault from the `<struct>` inside `<fault>`.
    ///
    /// Member order does not matter and unrecognised members are ignored. `faultString` may be
    /// untyped content; servers frequently omit the `<string>` tag. A `faultCode` which is not an
    /// integer is a format error; a missing one leaves the code at zero.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let mut code = 0;
        let mut string = String::new();

        for member in value.members().unwrap_or_default() {
            match (member.name.as_ref(), &member.value) {
                ("faultCode", Value::Int(text)) => code = scalar::to_int::<i32>(text)?,
                ("faultCode", other) => {
                    return Err(Error::Format {
                        ty: "int",
                        msg: format!("faultCode given as {}", other.type_name()),
                    })
                }
                ("faultString", other) => {
                    if let Some(s) = other.str() {
                        string = s.to_string();
                    }
                }
                _ => (),
            }
        }

        Ok(Fault { code, string })
    }
}

impl error::Error for Fault {}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "fault {}: {}", self.code, self.string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_member_order() {
        let value = Value::structure(vec![
            ("faultString", Value::string("Too many parameters.")),
            ("faultCode", Value::int("4")),
        ]);
        assert_eq!(
            Fault::from_value(&value),
            Ok(Fault {
                code: 4,
                string: "Too many parameters.".into()
            })
        );
    }

    #[test]
    fn fault_string_raw_fallback() {
        let value = Value::structure(vec![
            ("faultCode", Value::int("-32601")),
            ("faultString", Value::raw("method not found")),
            ("extra", Value::boolean("1")),
        ]);
        let fault = Fault::from_value(&value).unwrap();
        assert_eq!(fault.code, -32601);
        assert_eq!(fault.string, "method not found");
        assert_eq!(fault.to_string(), "fault -32601: method not found");
    }

    #[test]
    fn fault_code_errors() {
        let value = Value::structure(vec![("faultCode", Value::int("four"))]);
        assert!(matches!(
            Fault::from_value(&value),
            Err(Error::Format { ty: "int", .. })
        ));

        let value = Value::structure(vec![("faultCode", Value::string("4"))]);
        assert!(matches!(
            Fault::from_value(&value),
            Err(Error::Format { ty: "int", .. })
        ));

        let value = Value::structure(vec![("faultString", Value::string("no code"))]);
        assert_eq!(
            Fault::from_value(&value),
            Ok(Fault {
                code: 0,
                string: "no code".into()
            })
        );
    }

    #[test]
    fn response_fault_accessor() {
        let resp = Response::with_params(vec![Value::int("1")]);
        assert_eq!(resp.fault(), Ok(None));

        let resp = Response::with_fault(Value::structure(vec![
            ("faultCode", Value::int("1")),
            ("faultString", Value::string("boom")),
        ]));
        assert_eq!(resp.fault().unwrap().map(|f| f.code), Some(1));
    }
}
