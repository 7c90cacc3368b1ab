//! Opaque objects.
//!
//! Anything that is not one of the recognized kinds can still be rendered as an
//! [`Object`]. The object supplies its own text in one of three ways:
//!
//! - [`Object::display`]: through its `Display` impl,
//! - [`Object::debug`]: through its `Debug` impl,
//! - [`Object::opaque`]: no formatting capability; the text is `SimpleType@identity`
//!   where identity is the object's address in hex.
//!
//! The renderer wraps that text in angle brackets. A formatting impl that fails or panics
//! turns into an inline `<error: ..>` fragment instead of escaping.
//!
//! ```rust
//! use readable::{Object, Value};
//!
//! let url = Object::display("https://example.com");
//! assert_eq!(Value::from(url).to_string(), "<https://example.com>");
//! ```

use crate::descriptor::simple_name;
use crate::Error;
use std::fmt::{self, Write as _};
use std::sync::Arc;

trait ObjectText: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn write_text(&self, out: &mut String) -> fmt::Result;

    fn failure(&self) -> Option<&Error> {
        None
    }
}

struct Displayed<T>(T);

impl<T: fmt::Display + Send + Sync> ObjectText for Displayed<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn write_text(&self, out: &mut String) -> fmt::Result {
        write!(out, "{}", self.0)
    }
}

struct Debugged<T>(T);

impl<T: fmt::Debug + Send + Sync> ObjectText for Debugged<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn write_text(&self, out: &mut String) -> fmt::Result {
        write!(out, "{:?}", self.0)
    }
}

struct Anonymous<T>(T);

impl<T: Send + Sync> ObjectText for Anonymous<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn write_text(&self, out: &mut String) -> fmt::Result {
        let identity = &self.0 as *const T as *const () as usize;
        write!(out, "{}@{:x}", simple_name(self.type_name()), identity)
    }
}

// stands in for a nested value whose conversion already failed
struct Failed(Error);

impl ObjectText for Failed {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Error>()
    }

    fn write_text(&self, _out: &mut String) -> fmt::Result {
        Err(fmt::Error)
    }

    fn failure(&self) -> Option<&Error> {
        Some(&self.0)
    }
}

/// A shared, opaque value rendered through its own text.
#[derive(Clone)]
pub struct Object(Arc<dyn ObjectText>);

impl Object {
    /// Wraps a value that renders through `Display`.
    pub fn display<T: fmt::Display + Send + Sync + 'static>(value: T) -> Self {
        Object(Arc::new(Displayed(value)))
    }

    /// Wraps a value that renders through `Debug`.
    ///
    /// ```rust
    /// use readable::{Object, Value};
    ///
    /// #[derive(Debug)]
    /// struct Point { x: i32 }
    ///
    /// assert_eq!(Value::from(Object::debug(Point { x: 1 })).to_string(), "<Point { x: 1 }>");
    /// ```
    pub fn debug<T: fmt::Debug + Send + Sync + 'static>(value: T) -> Self {
        Object(Arc::new(Debugged(value)))
    }

    /// Wraps a value with no formatting capability.
    pub fn opaque<T: Send + Sync + 'static>(value: T) -> Self {
        Object(Arc::new(Anonymous(value)))
    }

    /// A placeholder for a value that could not be produced. It renders as the inline
    /// error for `err`.
    pub(crate) fn failed(err: Error) -> Self {
        Object(Arc::new(Failed(err)))
    }

    pub(crate) fn failure(&self) -> Option<&Error> {
        self.0.failure()
    }

    /// Fully qualified name of the wrapped type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// Appends the object's own text to `out`.
    ///
    /// On failure `out` may hold a partial rendering; callers that need all-or-nothing
    /// output write into a scratch buffer.
    pub fn write_text(&self, out: &mut String) -> fmt::Result {
        self.0.write_text(out)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.type_name()).finish()
    }
}

/// Objects compare by identity.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
