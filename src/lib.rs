//! # readable
//!
//! Fail-safe, human-readable rendering of arbitrary runtime values for logs and debug
//! output.
//!
//! ## What is it for?
//!
//! Debug output has to work on whatever it is handed: nulls, nested collections, raw
//! bytes, control characters, errors, objects whose own formatting is broken. `readable`
//! turns any [`Value`] into one deterministic line of text and never fails while doing
//! so. Content that cannot be rendered becomes an inline `<error: MESSAGE>` fragment and
//! the rest of the output carries on.
//!
//! ## Key Features
//!
//! - **Total**: rendering never returns an error and never lets a panic escape
//! - **Unambiguous**: strings are quoted, bytes are hex, characters show their code point
//! - **Recursive**: arrays, sequences and maps render their elements through the same engine
//! - **Serde Compatible**: any `T: Serialize` renders through [`to_readable`]
//!
//! ## Quick Start
//!
//! ```rust
//! use readable::{readable, to_string, value, Value};
//!
//! assert_eq!(readable!(true, None::<i32>), "true, <null>");
//! assert_eq!(readable!(18u8, '\n'), "0x12, '\\u000A'-LF");
//!
//! let values = [Value::from(vec![0, 1, -2, 3, -4]), value!({0: "A", 1: "B"})];
//! assert_eq!(to_string(&values), "[0, 1, -2, 3, -4], {0–\"A\", 1–\"B\"}");
//! ```
//!
//! ### Rendering Serde Types
//!
//! ```rust
//! use readable::to_readable;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User { id: u32, name: String, tags: Vec<String> }
//!
//! let user = User { id: 7, name: "Alice".into(), tags: vec!["admin".into()] };
//! assert_eq!(
//!     to_readable(&user),
//!     "{\"id\"–7, \"name\"–\"Alice\", \"tags\"–[\"admin\"]}"
//! );
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Every nested render runs behind `catch_unwind`; builds with `panic = "abort"` keep
//!   the error-to-text conversion but cannot contain panics
//! - Nesting is bounded by [`ReadableOptions::max_depth`]
//! - Only the `try_*` entry points return errors, and only for absent arguments

pub mod descriptor;
pub mod error;
pub mod locale;
pub mod macros;
pub mod map;
pub mod object;
pub mod options;
pub mod render;
pub mod ser;
pub mod trace;
pub mod value;

pub use descriptor::TypeName;
pub use error::{Error, Result};
pub use locale::Locale;
pub use map::ValueMap;
pub use object::Object;
pub use options::ReadableOptions;
pub use render::{Renderer, NULL_MARKER};
pub use ser::{to_value, ValueSerializer};
pub use trace::{ErrorInfo, StackFrame};
pub use value::{Kind, Value};

use serde::Serialize;

/// Renders each value and joins the results with `, `.
///
/// # Examples
///
/// ```rust
/// use readable::{to_string, Value};
///
/// assert_eq!(to_string(&[Value::from(true), Value::Null]), "true, <null>");
/// assert_eq!(to_string(&[]), "");
/// ```
#[must_use]
pub fn to_string(values: &[Value]) -> String {
    to_string_with_options(values, &ReadableOptions::default())
}

/// Renders each value with custom options.
#[must_use]
pub fn to_string_with_options(values: &[Value], options: &ReadableOptions) -> String {
    let mut renderer = Renderer::new(options.clone());
    renderer.render_all(values);
    renderer.into_inner()
}

/// Appends the rendering of each value to `buffer`.
///
/// A `, ` separator is written before every value while the buffer is non-empty, so
/// appending to existing text continues the list.
///
/// # Examples
///
/// ```rust
/// use readable::{append, Value};
///
/// let mut buffer = String::from("args: 1");
/// append(&mut buffer, &[Value::from("two")]);
/// assert_eq!(buffer, "args: 1, \"two\"");
/// ```
pub fn append(buffer: &mut String, values: &[Value]) {
    append_with_options(buffer, values, &ReadableOptions::default());
}

/// Appends with custom options.
pub fn append_with_options(buffer: &mut String, values: &[Value], options: &ReadableOptions) {
    let mut renderer = Renderer::with_buffer(std::mem::take(buffer), options.clone());
    renderer.render_all(values);
    *buffer = renderer.into_inner();
}

/// Like [`to_string`], but for callers whose values list may itself be absent.
///
/// # Errors
///
/// Returns [`Error::MissingValues`] when `values` is `None`. Problems with the values
/// themselves are rendered inline and never returned.
pub fn try_to_string(values: Option<&[Value]>) -> Result<String> {
    let values = values.ok_or(Error::MissingValues)?;
    Ok(to_string(values))
}

/// Like [`append`], but for callers whose buffer or values list may be absent.
///
/// # Errors
///
/// Returns [`Error::MissingBuffer`] or [`Error::MissingValues`] for an absent argument.
pub fn try_append(buffer: Option<&mut String>, values: Option<&[Value]>) -> Result<()> {
    let buffer = buffer.ok_or(Error::MissingBuffer)?;
    let values = values.ok_or(Error::MissingValues)?;
    append(buffer, values);
    Ok(())
}

/// Renders any `T: Serialize`.
///
/// Failures while converting the value are rendered inline like any other failure, in
/// the slot of the element, field or entry that failed.
///
/// # Examples
///
/// ```rust
/// use readable::to_readable;
///
/// assert_eq!(to_readable(&(1, "a", [0.5f32])), "[1, \"a\", [0.5]]");
/// ```
#[must_use]
pub fn to_readable<T>(value: &T) -> String
where
    T: ?Sized + Serialize,
{
    let mut renderer = Renderer::new(ReadableOptions::default());
    renderer.render_serialize(value);
    renderer.into_inner()
}
