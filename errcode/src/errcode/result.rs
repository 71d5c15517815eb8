use std::fmt::Display;

use super::errors::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Tags a foreign failure with a status, keeping only its text.
pub trait ResultExt<T, E> {
    fn with_status(self, status: i32) -> Result<T>
    where
        E: Display;

    fn with_status_lazy<F: FnOnce(E) -> String>(self, status: i32, f: F) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
    #[inline]
    fn with_status(self, status: i32) -> Result<T>
    where
        E: Display,
    {
        self.map_err(|err| Error::with_message(status, err.to_string()))
    }

    fn with_status_lazy<F: FnOnce(E) -> String>(self, status: i32, f: F) -> Result<T> {
        self.map_err(|err| Error::with_message(status, f(err)))
    }
}
