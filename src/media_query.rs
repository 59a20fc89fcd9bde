//! Building media conditions from screen sizes and wrapping style blocks in them.
//!
//! The free functions resolve tokens against [`Breakpoints::default`]; the
//! methods of the same name on [`Breakpoints`] take the configuration
//! explicitly, usually from a loaded [`Theme`](crate::theme::Theme).
//!
//! `query_up_to` and `query_from` are strict and reject anything that is not a
//! screen-size token. `query_to` is lenient and uses unknown input verbatim as
//! the media condition.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::responsive::{Breakpoints, ScreenSize, WidthBreakpoints, resolve_screen_breakpoints};
use crate::style::{Css, MediaScope};

/// Builds a width condition such as `(min-width: 768px) and (max-width: 1199px)`.
///
/// `max` is exclusive and is written as an inclusive check one pixel below it.
pub fn build_query_string(range: WidthBreakpoints) -> Result<String> {
    let WidthBreakpoints { min, max } = range;
    let invalid = || Error::InvalidRange { min, max };

    let max = match (min, max) {
        (None, None) => return Err(invalid()),
        (Some(min), Some(max)) if max < min => return Err(invalid()),
        (_, Some(max)) => Some(max.pred().ok_or_else(invalid)?),
        (_, None) => None,
    };

    let mut conditions = Vec::with_capacity(2);
    if let Some(min) = min {
        conditions.push(format!("(min-width: {min})"));
    }
    if let Some(max) = max {
        conditions.push(format!("(max-width: {max})"));
    }
    let query = conditions.join(" and ");
    tracing::trace!(?range, %query, "built media condition");
    Ok(query)
}

/// A media condition ready to scope style blocks.
///
/// Cloning is cheap and applying never changes the query, so one value can
/// wrap any number of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaQuery {
    condition: Arc<str>,
}

impl MediaQuery {
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Nests `block` inside `@media <condition> { ... }`.
    pub fn apply<B: MediaScope>(&self, block: B) -> B {
        block.scope_media(&self.condition)
    }

    pub fn css(&self, content: impl Into<Css>) -> Css {
        self.apply(content.into())
    }
}

impl std::fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@media {}", self.condition)
    }
}

/// Wraps an already formed media condition. The condition is not validated.
pub fn wrap_in_media_query(condition: impl Into<String>) -> MediaQuery {
    MediaQuery {
        condition: Arc::from(condition.into()),
    }
}

fn strict_resolve(screen: &str, breakpoints: &Breakpoints) -> Result<WidthBreakpoints> {
    resolve_screen_breakpoints(screen, breakpoints)
        .ok_or_else(|| Error::InvalidScreenSize(screen.to_string()))
}

impl Breakpoints {
    /// Everything below the end of `screen`.
    pub fn query_up_to(&self, screen: impl AsRef<str>) -> Result<MediaQuery> {
        let range = strict_resolve(screen.as_ref(), self)?;
        build_query_string(range.upper()).map(wrap_in_media_query)
    }

    /// Everything from the start of `screen` upward.
    pub fn query_from(&self, screen: impl AsRef<str>) -> Result<MediaQuery> {
        let range = strict_resolve(screen.as_ref(), self)?;
        build_query_string(range.lower()).map(wrap_in_media_query)
    }

    /// Exactly the range of `screen`, or `screen` itself as a literal condition
    /// when it is not a screen-size token.
    pub fn query_to(&self, screen_or_literal: impl AsRef<str>) -> Result<MediaQuery> {
        let input = screen_or_literal.as_ref();
        match resolve_screen_breakpoints(input, self) {
            Some(range) => build_query_string(range).map(wrap_in_media_query),
            None => {
                tracing::debug!(condition = input, "using literal media condition");
                Ok(wrap_in_media_query(input))
            }
        }
    }

    /// The full condition of every current screen size, smallest first.
    pub fn media_queries(&self) -> IndexMap<ScreenSize, String> {
        ScreenSize::CURRENT
            .into_iter()
            .filter_map(|screen| {
                build_query_string(self.resolve(screen))
                    .ok()
                    .map(|query| (screen, query))
            })
            .collect()
    }
}

pub fn query_up_to(screen: impl AsRef<str>) -> Result<MediaQuery> {
    Breakpoints::default().query_up_to(screen)
}

pub fn query_from(screen: impl AsRef<str>) -> Result<MediaQuery> {
    Breakpoints::default().query_from(screen)
}

pub fn query_to(screen_or_literal: impl AsRef<str>) -> Result<MediaQuery> {
    Breakpoints::default().query_to(screen_or_literal)
}

pub fn media_queries(breakpoints: &Breakpoints) -> IndexMap<ScreenSize, String> {
    breakpoints.media_queries()
}
