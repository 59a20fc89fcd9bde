//! # Style
//! Style blocks and the capability used to scope them under a media condition.
//!
//! A [`MediaQuery`](crate::media_query::MediaQuery) does not know how style
//! content is represented. It only needs a way to take an opaque block and
//! return a new block nested under a condition, which is what [`MediaScope`]
//! provides. [`Css`] is the built-in implementation and renders plain CSS
//! text; any other templating type can implement `MediaScope` and be passed
//! to [`MediaQuery::apply`](crate::media_query::MediaQuery::apply) in its place.
//!
//! ```
//! use responsive_css::css;
//! use responsive_css::media_query::wrap_in_media_query;
//!
//! let gutter = 16;
//! let block = wrap_in_media_query("print").css(css!("padding: {gutter}px;"));
//! assert_eq!(block.as_str(), "@media print {\n  padding: 16px;\n}");
//! ```

use std::fmt::{self, Write as _};


/// Wraps a style block under a media condition.
pub trait MediaScope: Sized {
    fn scope_media(self, condition: &str) -> Self;
}

/// A block of CSS text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Css(String);

impl Css {
    pub fn new(content: impl Into<String>) -> Self {
        Css(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Appends `other` on a new line.
    pub fn apply(mut self, other: impl Into<Css>) -> Self {
        let other = other.into();
        if other.is_empty() {
            return self;
        }
        if !self.0.is_empty() && !self.0.ends_with('\n') {
            self.0.push('\n');
        }
        self.0.push_str(&other.0);
        self
    }
}

impl MediaScope for Css {
    fn scope_media(self, condition: &str) -> Self {
        let mut out = String::with_capacity(self.0.len() + condition.len() + 16);
        // Writing to a `String` cannot fail.
        let _ = writeln!(out, "@media {condition} {{");
        for line in self.0.lines() {
            if !line.trim().is_empty() {
                out.push_str("  ");
                out.push_str(line);
            }
            out.push('\n');
        }
        out.push('}');
        Css(out)
    }
}

impl fmt::Display for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Css {
    fn from(value: &str) -> Self {
        Css(value.to_string())
    }
}

impl From<String> for Css {
    fn from(value: String) -> Self {
        Css(value)
    }
}

impl From<fmt::Arguments<'_>> for Css {
    fn from(value: fmt::Arguments<'_>) -> Self {
        Css(fmt::format(value))
    }
}

/// Builds a [`Css`] block with `format!` syntax.
#[macro_export]
macro_rules! css {
    ($($arg:tt)*) => {
        $crate::style::Css::from(::std::format!($($arg)*))
    };
}
