//! Errors and stack frames as renderable values.
//!
//! [`ErrorInfo`] captures what the renderer needs from an error: its type name, its
//! message and an optional list of [`StackFrame`]s. Rust has no stable API for walking a
//! captured backtrace frame by frame, so frames are supplied by the caller (for example
//! from a scripting runtime or a remote service's error report).
//!
//! ```rust
//! use readable::{ErrorInfo, StackFrame, Value};
//!
//! let info = ErrorInfo::new("app::IoFailure", "disk full")
//!     .with_frame(StackFrame::new("app::store::Writer", "flush", 42));
//!
//! assert_eq!(
//!     Value::from(info).to_string(),
//!     "IoFailure: disk full\r\napp::store::Writer.flush (Writer:42)"
//! );
//! ```

use crate::descriptor::simple_name;

/// One entry of a stack trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackFrame {
    pub class: String,
    pub method: String,
    pub line: i32,
}

impl StackFrame {
    pub fn new(class: impl Into<String>, method: impl Into<String>, line: i32) -> Self {
        StackFrame {
            class: class.into(),
            method: method.into(),
            line,
        }
    }

    /// The class name after its last `.` or `::` separator.
    #[must_use]
    pub fn simple_class(&self) -> &str {
        let class = self.class.as_str();
        let after_colons = class.rfind("::").map_or(0, |i| i + 2);
        let after_dot = class.rfind('.').map_or(0, |i| i + 1);
        &class[after_colons.max(after_dot)..]
    }
}

/// An error with its trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    pub type_name: String,
    pub message: String,
    pub frames: Vec<Option<StackFrame>>,
}

impl ErrorInfo {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorInfo {
            type_name: type_name.into(),
            message: message.into(),
            frames: Vec::new(),
        }
    }

    /// Captures an error's static type name and its `Display` message.
    ///
    /// The name comes from `E`, not from the runtime type: a `&dyn Error` records
    /// `dyn Error`. When only a trait object is at hand, name the error with
    /// [`ErrorInfo::new`] instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use readable::ErrorInfo;
    ///
    /// let err = "x".parse::<i32>().unwrap_err();
    /// let info = ErrorInfo::from_error(&err);
    /// assert_eq!(info.simple_type_name(), "ParseIntError");
    /// assert_eq!(info.message, "invalid digit found in string");
    /// ```
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        ErrorInfo::new(std::any::type_name::<E>(), err.to_string())
    }

    #[must_use]
    pub fn with_frame(mut self, frame: StackFrame) -> Self {
        self.frames.push(Some(frame));
        self
    }

    #[must_use]
    pub fn with_frames<I>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = Option<StackFrame>>,
    {
        self.frames.extend(frames);
        self
    }

    #[must_use]
    pub fn simple_type_name(&self) -> String {
        simple_name(&self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_class() {
        assert_eq!(StackFrame::new("net.http.Client", "run", 1).simple_class(), "Client");
        assert_eq!(StackFrame::new("a::b::Worker", "step", 1).simple_class(), "Worker");
        assert_eq!(StackFrame::new("Main", "main", 1).simple_class(), "Main");
    }

    #[test]
    fn test_from_error_dyn() {
        let err: Box<dyn std::error::Error> = "boom".into();
        let info = ErrorInfo::from_error(err.as_ref());
        assert_eq!(info.message, "boom");
        assert!(info.frames.is_empty());
    }

    #[test]
    fn test_trait_object_records_static_name() {
        let err: Box<dyn std::error::Error> = "boom".into();
        assert_eq!(ErrorInfo::from_error(err.as_ref()).simple_type_name(), "dyn Error");

        let named = ErrorInfo::new("app::TimeoutError", err.to_string());
        assert_eq!(named.simple_type_name(), "TimeoutError");
    }

    #[test]
    fn test_with_frames_keeps_gaps() {
        let info = ErrorInfo::new("E", "m").with_frames(vec![
            None,
            Some(StackFrame::new("A", "b", 3)),
        ]);
        assert_eq!(info.frames.len(), 2);
        assert!(info.frames[0].is_none());
    }
}
