//! # Responsive CSS
//! Media queries for themeable style blocks, driven by named screen sizes.
//!
//! A theme defines four ascending width [breakpoints](responsive::Breakpoints):
//! `medium`, `large`, `xLarge` and `max`. Screen-size tokens name the ranges
//! between them:
//!
//! | token | from | up to (exclusive) |
//! |---|---|---|
//! | `small` | | `medium` |
//! | `medium` | `medium` | `large` |
//! | `large` | `large` | `xLarge` |
//! | `xLarge` | `xLarge` | `max` |
//! | `max` | `max` | |
//!
//! `smallAndMedium` and `mediumAndLarge` are still accepted but deprecated.
//!
//! ## Example
//! ```rust
//! use responsive_css::prelude::*;
//!
//! let hide_on_phones = query_up_to(ScreenSize::Medium)?.css("display: none;");
//! assert_eq!(
//!     hide_on_phones.as_str(),
//!     "@media (max-width: 767px) {\n  display: none;\n}"
//! );
//!
//! let wide = query_from("large")?;
//! assert_eq!(wide.condition(), "(min-width: 1200px)");
//!
//! // Anything that is not a token is used as the condition itself.
//! let print = query_to("print")?;
//! assert_eq!(print.condition(), "print");
//! # Ok::<(), responsive_css::Error>(())
//! ```
//!
//! ## Queries
//!
//! - [`query_up_to`](media_query::query_up_to) covers everything below the end
//!   of a screen size.
//! - [`query_from`](media_query::query_from) covers everything from the start of
//!   a screen size upward.
//! - [`query_to`](media_query::query_to) covers exactly one screen size, or
//!   takes a literal condition.
//! - [`wrap_in_media_query`](media_query::wrap_in_media_query) takes a literal
//!   condition.
//!
//! The first two are strict and fail with [`Error::InvalidScreenSize`] for
//! unknown tokens. All of them return a [`MediaQuery`](media_query::MediaQuery)
//! which scopes any [`MediaScope`](style::MediaScope) block, such as
//! [`Css`](style::Css).
//!
//! The free functions use the default breakpoints. To use a theme's, call the
//! methods of the same name on [`Theme`](theme::Theme) or
//! [`Breakpoints`](responsive::Breakpoints).
//!
//! ## Logging
//! Deprecated tokens are reported through [`tracing`] at `warn` level on
//! every use. Built conditions are traced at `trace` level.

pub mod error;
pub mod media_query;
pub mod responsive;
pub mod style;
pub mod theme;
pub mod unit;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::css;
    pub use crate::media_query::{
        MediaQuery, build_query_string, media_queries, query_from, query_to, query_up_to,
        wrap_in_media_query,
    };
    pub use crate::responsive::{
        Breakpoints, ScreenSize, WidthBreakpoints, resolve_screen_breakpoints,
    };
    pub use crate::style::{Css, MediaScope};
    pub use crate::theme::Theme;
    pub use crate::unit::{Px, UnitExt};
}
