use std::{
    borrow::Cow,
    fmt::{Arguments, Display},
};

/// A status code paired with a human-readable message.
///
/// Both fields are fixed at construction; the canonical text form is
/// `errCode: <status>, errMsg: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    status: i32,
    message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "errCode: {}, errMsg: {}", self.status, self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    #[inline]
    pub fn new(status: i32) -> Self {
        Self::with_message(status, String::new())
    }

    /// Only string types are accepted; `char` and numbers do not convert.
    pub fn with_message<'a>(status: i32, message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            status,
            message: message.into().into_owned(),
        }
    }

    pub fn with_args(status: i32, args: Arguments<'_>) -> Self {
        Self::with_message(status, args.to_string())
    }

    #[inline]
    pub fn status(&self) -> i32 {
        self.status
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for (i32, String) {
    fn from(err: Error) -> Self {
        (err.status, err.message)
    }
}
