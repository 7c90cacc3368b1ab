//! Type descriptors.
//!
//! A [`TypeName`] is a value that stands for a type rather than an instance of it. It
//! renders as the type's simple name: every module path is dropped, and Rust array and
//! slice types are written element-first with one `[]` per dimension, wherever they
//! appear in the name (generic arguments and tuples included).
//!
//! ```rust
//! use readable::TypeName;
//!
//! assert_eq!(TypeName::of::<Vec<String>>().simple_name(), "Vec<String>");
//! assert_eq!(TypeName::of::<[[i32; 3]; 2]>().simple_name(), "i32[][]");
//! assert_eq!(TypeName::of::<[u8]>().simple_name(), "u8[]");
//! assert_eq!(TypeName::of::<Vec<[u8; 2]>>().simple_name(), "Vec<u8[]>");
//! ```

use std::fmt;

/// A value representing a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeName(String);

impl TypeName {
    /// Describes `T` using [`std::any::type_name`].
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        TypeName(std::any::type_name::<T>().to_string())
    }

    /// Describes a type by its name, qualified or not.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        TypeName(name.into())
    }

    /// The name as given, module paths included.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.0
    }

    /// The unqualified name used for rendering.
    #[must_use]
    pub fn simple_name(&self) -> String {
        simple_name(&self.0)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.simple_name())
    }
}

/// Reduces a qualified type name to its simple form.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`, `[[i32; 3]; 2]`
/// becomes `i32[][]`.
pub(crate) fn simple_name(full: &str) -> String {
    array_notation(&strip_paths(full))
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut rest = full;
    while let Some(idx) = rest.find("::") {
        out.push_str(&rest[..idx]);
        // drop the module segment that precedes the `::`
        let keep = out.trim_end_matches(is_ident_char).len();
        out.truncate(keep);
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}

// every `[T; N]` or `[T]`, including ones nested in generic arguments, becomes `T[]`
fn array_notation(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let Some(close) = matching_bracket(&rest[open..]) else {
            out.push_str(&rest[open..]);
            return out;
        };
        let inner = &rest[open + 1..open + close];
        out.push_str(&array_notation(array_element(inner)));
        out.push_str("[]");
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out
}

/// Offset of the `]` closing the `[` that `s` starts with.
fn matching_bracket(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

// `T; N` splits on the one `;` outside any nested brackets
fn array_element(inner: &str) -> &str {
    let mut depth = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '[' | '(' | '<' => depth += 1,
            ']' | ')' | '>' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => return inner[..i].trim(),
            _ => {}
        }
    }
    inner.trim()
}
