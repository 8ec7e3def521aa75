use std::{error, fmt};

/// The document could not be read as an XML-RPC response.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The XML itself is malformed. Holds the XML parser's message.
    Xml(String),
    /// The root element is not `<methodResponse>`. Holds the root's name.
    NotResponse(String),
    /// An element required by the response structure is absent.
    Missing {
        /// The element that was expected.
        element: &'static str,
        /// The element it was expected in.
        parent: &'static str,
    },
    /// A `<value>` holds a type tag that is not part of XML-RPC.
    UnknownType(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Xml(s) => write!(f, "malformed xml: {}", s),
            Error::NotResponse(s) => {
                write!(f, "expected a <methodResponse> document, found <{}>", s)
            }
            Error::Missing { element, parent } => {
                write!(f, "missing <{}> in <{}>", element, parent)
            }
            Error::UnknownType(s) => write!(f, "unknown value type <{}>", s),
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::Xml(e.to_string())
    }
}
