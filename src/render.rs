//! The rendering engine.
//!
//! [`Renderer::render`] is the dispatcher: it resolves a [`Value`]'s kind and appends that
//! kind's rendering to the output buffer. Composite renderers call back into `render` for
//! every element, and every one of those calls runs behind the same fail-safe boundary, so
//! a failure deep inside a structure only replaces the element that failed.
//!
//! ## Output Grammar
//!
//! | Kind | Example |
//! |------|---------|
//! | absent | `<null>` |
//! | type | `Vec<String>`, `i32[][]` |
//! | bool | `true` |
//! | byte | `0x12` |
//! | char | `'\u0061'-'a'`, `'\u000A'-LF` |
//! | int, long | `-200` |
//! | float, double | `0.5`, `100.0`, `1e-7` |
//! | string | `"text"` (never escaped) |
//! | arrays, sequences | `[1, 2, 3]` |
//! | map | `{"a"–1, "b"–2}` |
//! | file | `<PathBuf: name=a.txt, type=file, rw-, len=10, path="/abs/a.txt">` |
//! | error | `ParseIntError: invalid digit` plus frames |
//! | stack frame | `\r\napp::Worker.run (Worker:12)` |
//! | locale | `en-US` |
//! | object | `<own text>` |
//! | failure | `<error: message>` |
//!
//! ## Direct Renderer Usage
//!
//! ```rust
//! use readable::{Renderer, ReadableOptions, Value};
//!
//! let mut renderer = Renderer::new(ReadableOptions::new());
//! renderer.render_all(&[Value::from(true), Value::Null]);
//! assert_eq!(renderer.into_inner(), "true, <null>");
//! ```

use crate::descriptor::simple_name;
use crate::{
    to_value, Error, ErrorInfo, Kind, Locale, Object, ReadableOptions, Result, StackFrame,
    Value, ValueMap,
};
use serde::Serialize;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Rendering of an absent value.
pub const NULL_MARKER: &str = "<null>";

/// Separator between top-level values and between composite elements.
pub const SEPARATOR: &str = ", ";

/// Separator between a map entry's key and value (U+2013 EN DASH).
pub const ENTRY_SEPARATOR: char = '–';

const LINE_BREAK: &str = "\r\n";

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Appends readable renderings of values to an owned buffer.
///
/// `render` never fails: content that cannot be rendered becomes an inline
/// `<error: MESSAGE>` fragment.
pub struct Renderer {
    output: String,
    options: ReadableOptions,
    depth: usize,
}

impl Renderer {
    pub fn new(options: ReadableOptions) -> Self {
        Renderer {
            output: String::with_capacity(64),
            options,
            depth: 0,
        }
    }

    /// Continues rendering into an existing buffer.
    pub fn with_buffer(output: String, options: ReadableOptions) -> Self {
        Renderer {
            output,
            options,
            depth: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Renders each value, writing `, ` before a value whenever the buffer already holds
    /// text.
    pub fn render_all(&mut self, values: &[Value]) {
        for value in values {
            if !self.output.is_empty() {
                self.output.push_str(SEPARATOR);
            }
            self.render(value);
        }
    }

    /// Renders one value.
    pub fn render(&mut self, value: &Value) {
        self.guarded(Some(value.kind()), |r| r.dispatch(value));
    }

    /// Converts any `Serialize` type with [`to_value`] and renders the result.
    ///
    /// Conversion failures and panics inside `Serialize` impls are rendered inline like
    /// any other failure.
    pub fn render_serialize<T>(&mut self, value: &T)
    where
        T: ?Sized + Serialize,
    {
        self.guarded(None, |r| {
            let value = to_value(value)?;
            r.dispatch(&value)
        });
    }

    /// The fail-safe boundary around one render step.
    fn guarded<F>(&mut self, kind: Option<Kind>, step: F)
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let depth = self.depth;
        if depth >= self.options.max_depth {
            tracing::trace!(max_depth = self.options.max_depth, "render depth limit reached");
            self.write_error(&Error::DepthExceeded(self.options.max_depth));
            return;
        }

        self.depth += 1;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| step(&mut *self)));
        self.depth = depth;

        let err = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(err)) => err,
            Err(payload) => Error::panic(payload.as_ref()),
        };
        tracing::debug!(
            kind = ?kind,
            composite = kind.is_some_and(Kind::is_composite),
            error = %err,
            "value rendered as inline error"
        );
        self.write_error(&err);
    }

    fn dispatch(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.output.push_str(NULL_MARKER),
            Value::Type(name) => self.output.push_str(&name.simple_name()),
            Value::Bool(v) => self.write_bool(*v),
            Value::Byte(v) => self.write_byte(*v),
            Value::Char(v) => self.write_char(*v),
            Value::Int(v) => self.write_int(*v),
            Value::Long(v) => self.write_long(*v),
            Value::Float(v) => self.write_float(*v),
            Value::Double(v) => self.write_double(*v),
            Value::String(s) => self.write_string(s),
            Value::BoolArray(items) => self.write_primitive_array(items, Self::write_bool),
            Value::ByteArray(items) => self.write_primitive_array(items, Self::write_byte),
            Value::CharArray(items) => self.write_primitive_array(items, Self::write_char),
            Value::IntArray(items) => self.write_primitive_array(items, Self::write_int),
            Value::LongArray(items) => self.write_primitive_array(items, Self::write_long),
            Value::FloatArray(items) => self.write_primitive_array(items, Self::write_float),
            Value::DoubleArray(items) => self.write_primitive_array(items, Self::write_double),
            Value::Array(items) | Value::Seq(items) => self.write_seq(items),
            Value::Map(map) => self.write_map(map),
            Value::File(path) => self.write_file(path)?,
            Value::Error(info) => self.write_error_info(info),
            Value::StackTrace(frames) => self.write_stack_trace(frames),
            Value::Locale(locale) => self.write_locale(locale),
            Value::Object(object) => self.write_object(object)?,
        }
        Ok(())
    }

    pub(crate) fn write_error(&mut self, err: &Error) {
        self.output.push_str("<error: ");
        self.output.push_str(&err.to_string());
        self.output.push('>');
    }

    fn write_bool(&mut self, v: bool) {
        self.output.push_str(if v { "true" } else { "false" });
    }

    fn write_byte(&mut self, v: u8) {
        self.output.push_str("0x");
        self.output.push(HEX[(v >> 4) as usize] as char);
        self.output.push(HEX[(v & 0x0F) as usize] as char);
    }

    fn write_char(&mut self, v: char) {
        let tail = match v {
            '\u{0008}' => Some("BS"),
            '\t' => Some("TAB"),
            '\n' => Some("LF"),
            '\u{000C}' => Some("FF"),
            '\r' => Some("CR"),
            '\u{00A0}' => Some("NBSP"),
            _ => None,
        };

        self.output.push_str(&format!("'\\u{:04X}'-", v as u32));
        match tail {
            Some(name) => self.output.push_str(name),
            None => {
                self.output.push('\'');
                self.output.push(v);
                self.output.push('\'');
            }
        }
    }

    fn write_int(&mut self, v: i32) {
        self.output.push_str(&v.to_string());
    }

    fn write_long(&mut self, v: i64) {
        self.output.push_str(&v.to_string());
    }

    // Debug is the shortest round-trip form and keeps the `.0` on whole numbers
    fn write_float(&mut self, v: f32) {
        self.output.push_str(&format!("{:?}", v));
    }

    fn write_double(&mut self, v: f64) {
        self.output.push_str(&format!("{:?}", v));
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        self.output.push_str(s);
        self.output.push('"');
    }

    fn write_primitive_array<T: Copy>(&mut self, items: &[T], write: fn(&mut Self, T)) {
        self.output.push('[');
        for (n, item) in items.iter().enumerate() {
            if n > 0 {
                self.output.push_str(SEPARATOR);
            }
            write(self, *item);
        }
        self.output.push(']');
    }

    fn write_seq(&mut self, items: &[Value]) {
        self.output.push('[');
        for (n, item) in items.iter().enumerate() {
            if n > 0 {
                self.output.push_str(SEPARATOR);
            }
            self.render(item);
        }
        self.output.push(']');
    }

    fn write_map(&mut self, map: &ValueMap) {
        self.output.push('{');
        for (n, (key, value)) in map.iter().enumerate() {
            if n > 0 {
                self.output.push_str(SEPARATOR);
            }
            self.render(key);
            self.output.push(ENTRY_SEPARATOR);
            self.render(value);
        }
        self.output.push('}');
    }

    /// Describes a file-system entry from its metadata. The entry is never opened.
    fn write_file(&mut self, path: &Path) -> Result<()> {
        let absolute = std::path::absolute(path)?;
        let metadata = fs::metadata(path).ok();
        let is_dir = metadata.as_ref().is_some_and(fs::Metadata::is_dir);
        let [read, write, execute] = metadata.as_ref().map_or([false; 3], permission_bits);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        self.output.push('<');
        self.output.push_str(&simple_name(std::any::type_name::<PathBuf>()));
        self.output.push_str(": name=");
        self.output.push_str(&name);
        self.output.push_str(", type=");
        self.output.push_str(if is_dir { "dir" } else { "file" });
        self.output.push_str(", ");
        self.output.push(if read { 'r' } else { '-' });
        self.output.push(if write { 'w' } else { '-' });
        self.output.push(if execute { 'x' } else { '-' });
        if !is_dir {
            let len = metadata.as_ref().map_or(0, fs::Metadata::len);
            self.output.push_str(", len=");
            self.output.push_str(&len.to_string());
        }
        self.output.push_str(", path=\"");
        self.output.push_str(&absolute.to_string_lossy());
        self.output.push_str("\">");
        Ok(())
    }

    fn write_error_info(&mut self, info: &ErrorInfo) {
        self.output.push_str(&info.simple_type_name());
        self.output.push_str(": ");
        self.output.push_str(&info.message);
        self.write_stack_trace(&info.frames);
    }

    fn write_stack_trace(&mut self, frames: &[Option<StackFrame>]) {
        for frame in frames.iter().flatten() {
            self.output.push_str(LINE_BREAK);
            self.output.push_str(&frame.class);
            self.output.push('.');
            self.output.push_str(&frame.method);
            self.output.push_str(" (");
            self.output.push_str(frame.simple_class());
            self.output.push(':');
            self.output.push_str(&frame.line.to_string());
            self.output.push(')');
        }
    }

    fn write_locale(&mut self, locale: &Locale) {
        self.output.push_str(locale.language());
        self.output.push('-');
        self.output.push_str(locale.region());
    }

    fn write_object(&mut self, object: &Object) -> Result<()> {
        if let Some(err) = object.failure() {
            return Err(err.clone());
        }

        // format into scratch space so a failing impl leaves no partial text behind
        let mut text = String::new();
        object
            .write_text(&mut text)
            .map_err(|_| Error::format(&simple_name(object.type_name())))?;

        self.output.push('<');
        self.output.push_str(&text);
        self.output.push('>');
        Ok(())
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &fs::Metadata) -> [bool; 3] {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode();
    [mode & 0o400 != 0, mode & 0o200 != 0, mode & 0o100 != 0]
}

#[cfg(not(unix))]
fn permission_bits(metadata: &fs::Metadata) -> [bool; 3] {
    [true, !metadata.permissions().readonly(), metadata.is_dir()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    fn render(value: &Value) -> String {
        let mut renderer = Renderer::new(ReadableOptions::default());
        renderer.render(value);
        renderer.into_inner()
    }

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    struct Panicking;

    impl fmt::Display for Panicking {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            panic!("display exploded")
        }
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&Value::Null), "<null>");
        assert_eq!(render(&Value::Bool(false)), "false");
        assert_eq!(render(&Value::Byte(0)), "0x00");
        assert_eq!(render(&Value::Byte(0xAB)), "0xAB");
        assert_eq!(render(&Value::Int(i32::MIN)), "-2147483648");
        assert_eq!(render(&Value::Long(9_000_000_000_000_000_000)), "9000000000000000000");
        assert_eq!(render(&Value::Float(-200.0)), "-200.0");
        assert_eq!(render(&Value::Double(0.3333333333333333)), "0.3333333333333333");
        assert_eq!(render(&Value::String(String::new())), "\"\"");
    }

    #[test]
    fn test_char_forms() {
        assert_eq!(render(&Value::Char('\u{0008}')), "'\\u0008'-BS");
        assert_eq!(render(&Value::Char('\u{000C}')), "'\\u000C'-FF");
        assert_eq!(render(&Value::Char('\u{00A0}')), "'\\u00A0'-NBSP");
        assert_eq!(render(&Value::Char('\'')), "'\\u0027'-'''");
        assert_eq!(render(&Value::Char('😀')), "'\\u1F600'-'😀'");
    }

    #[test]
    fn test_primitive_arrays_match_dispatch() {
        let chars = vec!['a', '\t'];
        let direct = render(&Value::CharArray(chars.clone()));
        let dispatched = render(&Value::seq(chars));
        assert_eq!(direct, dispatched);
        assert_eq!(direct, "['\\u0061'-'a', '\\u0009'-TAB]");
    }

    #[test]
    fn test_failing_display_is_contained() {
        let value = Value::seq([
            Value::from(1),
            Value::Object(Object::display(Failing)),
            Value::from(2),
        ]);
        assert_eq!(
            render(&value),
            "[1, <error: Failing failed to format itself>, 2]"
        );
    }

    #[test]
    fn test_panicking_display_is_contained() {
        let value = Value::map([(Value::from("k"), Value::Object(Object::display(Panicking)))]);
        assert_eq!(render(&value), "{\"k\"–<error: display exploded>}");
    }

    #[test]
    fn test_depth_restored_after_panic() {
        let options = ReadableOptions::new().with_max_depth(3);
        let mut renderer = Renderer::new(options);
        renderer.render(&Value::seq([Value::Object(Object::display(Panicking))]));
        assert_eq!(renderer.depth, 0);
        renderer.render(&Value::seq([Value::seq([1])]));
        assert_eq!(
            renderer.into_inner(),
            "[<error: display exploded>][[1]]"
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut value = Value::from(0);
        for _ in 0..10 {
            value = Value::seq([value]);
        }
        let options = ReadableOptions::new().with_max_depth(3);
        assert_eq!(
            value.render_with_options(&options),
            "[[[<error: nesting deeper than 3 levels>]]]"
        );
    }

    #[test]
    fn test_stack_trace_skips_missing_frames() {
        let frames = vec![
            Some(StackFrame::new("app.Main", "main", 10)),
            None,
            Some(StackFrame::new("app::Worker", "run", -1)),
        ];
        assert_eq!(
            render(&Value::StackTrace(frames)),
            "\r\napp.Main.main (Main:10)\r\napp::Worker.run (Worker:-1)"
        );
        assert_eq!(render(&Value::StackTrace(Vec::new())), "");
    }

    #[test]
    fn test_render_serialize() {
        let mut renderer = Renderer::new(ReadableOptions::default());
        renderer.render_serialize(&vec![Some(1u8), None]);
        assert_eq!(renderer.into_inner(), "[0x01, <null>]");
    }

    #[test]
    fn test_render_all_continues_existing_text() {
        let mut renderer = Renderer::with_buffer("start".to_string(), ReadableOptions::new());
        renderer.render_all(&[Value::from(1)]);
        assert_eq!(renderer.as_str(), "start, 1");
    }
}
