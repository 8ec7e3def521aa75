mod datetime;
mod response;
mod val;

pub(crate) use self::datetime::TOKEN as DATETIME_TOKEN;
pub use self::datetime::DateTime;
pub use self::response::{Fault, Response};
pub use self::val::{Member, Value};
