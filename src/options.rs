//! Configuration options for rendering.
//!
//! The output grammar itself is fixed. The only knob is how deep the renderer will
//! follow nested composites before it stops and emits an inline error instead.
//!
//! ## Examples
//!
//! ```rust
//! use readable::{to_string_with_options, value, ReadableOptions};
//!
//! let nested = value!([[[1]]]);
//! let options = ReadableOptions::new().with_max_depth(2);
//! let text = to_string_with_options(&[nested], &options);
//! assert_eq!(text, "[[<error: nesting deeper than 2 levels>]]");
//! ```

/// Default nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for rendering.
///
/// # Examples
///
/// ```rust
/// use readable::ReadableOptions;
///
/// let options = ReadableOptions::new();
/// assert_eq!(options.max_depth, 128);
///
/// let shallow = ReadableOptions::new().with_max_depth(8);
/// assert_eq!(shallow.max_depth, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadableOptions {
    /// Number of nested render calls allowed before the depth guard trips.
    pub max_depth: usize,
}

impl Default for ReadableOptions {
    fn default() -> Self {
        ReadableOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ReadableOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nesting limit.
    ///
    /// A limit of `0` turns every value into the depth error fragment.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
