//! Error types for readable rendering.
//!
//! Errors fall into two groups:
//!
//! - **Call-contract violations**: an absent values list or output buffer handed to
//!   [`try_to_string`](crate::try_to_string) / [`try_append`](crate::try_append). These are
//!   returned to the caller.
//! - **Content failures**: anything that goes wrong while rendering one particular value
//!   (a `Display` impl failing, file metadata that cannot be resolved, a panic, nesting that
//!   is too deep). These never reach the caller; the renderer turns them into an inline
//!   `<error: MESSAGE>` fragment where `MESSAGE` is the error's `Display` text.
//!
//! ## Examples
//!
//! ```rust
//! use readable::{try_to_string, Error};
//!
//! let err = try_to_string(None).unwrap_err();
//! assert!(matches!(err, Error::MissingValues));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents every error the crate can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The values list itself was absent
    #[error("missing values list")]
    MissingValues,

    /// The output buffer itself was absent
    #[error("missing output buffer")]
    MissingBuffer,

    /// An opaque object's own formatting reported failure
    #[error("{type_name} failed to format itself")]
    Format { type_name: String },

    /// IO error while inspecting a file-system entry
    #[error("{0}")]
    Io(String),

    /// A renderer panicked
    #[error("{0}")]
    Panic(String),

    /// Nesting went past the configured depth limit
    #[error("nesting deeper than {0} levels")]
    DepthExceeded(usize),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a formatting error for the named type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use readable::Error;
    ///
    /// let err = Error::format("Point");
    /// assert_eq!(err.to_string(), "Point failed to format itself");
    /// ```
    pub fn format(type_name: &str) -> Self {
        Error::Format {
            type_name: type_name.to_string(),
        }
    }

    /// Creates an I/O error.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a panic error from a payload caught by `catch_unwind`.
    ///
    /// String payloads (the `panic!("...")` forms) keep their message.
    pub fn panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let msg = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic with non-string payload".to_string()
        };
        Error::Panic(msg)
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use readable::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert_eq!(err.to_string(), "something went wrong");
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_payloads() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(Error::panic(payload.as_ref()), Error::Panic("boom".to_string()));

        let payload: Box<dyn std::any::Any + Send> = Box::new(format!("code {}", 7));
        assert_eq!(Error::panic(payload.as_ref()).to_string(), "code 7");

        let payload: Box<dyn std::any::Any + Send> = Box::new(42u32);
        assert_eq!(
            Error::panic(payload.as_ref()).to_string(),
            "panic with non-string payload"
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(Error::MissingValues.to_string(), "missing values list");
        assert_eq!(Error::MissingBuffer.to_string(), "missing output buffer");
        assert_eq!(
            Error::DepthExceeded(3).to_string(),
            "nesting deeper than 3 levels"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(Error::from(io), Error::Io("gone".to_string()));
    }
}
