mod errors;
mod result;

pub use errors::Error;
pub use result::{Result, ResultExt};

/// Builds an [`Error`] from a status and zero, one or many message parts.
///
/// A single message part is stored verbatim. With more than one part the
/// first is a format string and the rest are its arguments.
///
/// ```
/// use errcode::err;
///
/// assert_eq!(err!(100).to_string(), "errCode: 100, errMsg: ");
/// assert_eq!(err!(100, "err").message(), "err");
/// assert_eq!(err!(-1, "bad {}/{}", 2, 5).message(), "bad 2/5");
/// ```
///
/// A lone message part must be a string:
///
/// ```compile_fail
/// let _ = errcode::err!(1, 'x');
/// ```
///
/// ```compile_fail
/// let _ = errcode::err!(1, 5);
/// ```
#[macro_export]
macro_rules! err {
    ($status:expr $(,)?) => {
        $crate::Error::new($status)
    };
    ($status:expr, $message:expr $(,)?) => {
        $crate::Error::with_message($status, $message)
    };
    ($status:expr, $fmt:expr, $($arg:tt)+) => {
        $crate::Error::with_args($status, format_args!($fmt, $($arg)+))
    };
}
