use crate::Fault;
use serde::de;
use std::{error, fmt};

/// Errors returned when decoding a response into a destination type.
///
/// [`Error::Fault`] is not a decoding failure: the exchange succeeded and the remote side
/// reported an application error. It is kept apart so callers can match on it.
#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// The destination does not declare as many fields as the response has parameters.
    ArityMismatch {
        /// Number of fields the destination declares.
        expected: usize,
        /// Number of parameters in the response.
        found: usize,
    },
    /// The destination cannot be written as a parameter list.
    InvalidTarget(String),
    /// The value's XML-RPC type cannot be written into the destination's declared type.
    TypeMismatch {
        /// XML-RPC type of the value.
        found: &'static str,
        /// What the destination declared.
        expected: &'static str,
    },
    /// Scalar text does not follow its wire format.
    Format {
        /// XML-RPC type whose format was violated.
        ty: &'static str,
        /// Description of the violation.
        msg: String,
    },
    /// The remote side reported a fault.
    Fault(Fault),
    /// A message raised by the destination's `Deserialize` implementation, such as a duplicate field.
    Message(String),
    /// The document is not a well-formed XML-RPC response.
    #[cfg(feature = "parse")]
    Parse(crate::parse::Error),
}

impl Error {
    /// The remote fault, if this error is one.
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Error::Fault(f) => Some(f),
            _ => None,
        }
    }

    pub(crate) fn mismatch(found: &'static str, expected: &'static str) -> Self {
        Error::TypeMismatch { found, expected }
    }
}

impl de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Fault(f) => Some(f),
            #[cfg(feature = "parse")]
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ArityMismatch { expected, found } => write!(
                f,
                "wrong number of parameters: destination has {} field(s), response has {}",
                expected, found
            ),
            Error::InvalidTarget(s) => write!(f, "invalid destination: {}", s),
            Error::TypeMismatch { found, expected } => {
                write!(f, "type mismatch: {} != {}", found, expected)
            }
            Error::Format { ty, msg } => write!(f, "invalid {}: {}", ty, msg),
            Error::Fault(fault) => write!(f, "{}", fault),
            Error::Message(s) => write!(f, "{}", s),
            #[cfg(feature = "parse")]
            Error::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl From<Fault> for Error {
    fn from(fault: Fault) -> Self {
        Error::Fault(fault)
    }
}

#[cfg(feature = "parse")]
impl From<crate::parse::Error> for Error {
    fn from(e: crate::parse::Error) -> Self {
        Error::Parse(e)
    }
}
