//! Theme configuration.
//!
//! A theme supplies the breakpoints every query is resolved against. With the
//! `serde` feature it can be loaded from JSON:
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # {
//! use responsive_css::theme::Theme;
//! use responsive_css::unit::Px;
//!
//! let theme = Theme::from_json(r#"{ "breakpoints": { "medium": 640 } }"#).unwrap();
//! assert_eq!(theme.breakpoints.medium, Px(640));
//! assert_eq!(theme.breakpoints.large, Px(1200));
//! # }
//! ```

use crate::error::Result;
use crate::media_query::MediaQuery;
use crate::responsive::Breakpoints;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Theme {
    pub breakpoints: Breakpoints,
}

impl Theme {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self { breakpoints }
    }

    /// Parses a theme. Missing fields keep their defaults and nothing is
    /// validated; call [`Theme::validate`] for that.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let theme: Theme = serde_json::from_str(json)?;
        tracing::debug!(breakpoints = ?theme.breakpoints, "loaded theme");
        Ok(theme)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(crate::Error::ThemeSerialization)
    }

    pub fn validate(&self) -> Result<()> {
        self.breakpoints.validate()
    }

    pub fn query_up_to(&self, screen: impl AsRef<str>) -> Result<MediaQuery> {
        self.breakpoints.query_up_to(screen)
    }

    pub fn query_from(&self, screen: impl AsRef<str>) -> Result<MediaQuery> {
        self.breakpoints.query_from(screen)
    }

    pub fn query_to(&self, screen_or_literal: impl AsRef<str>) -> Result<MediaQuery> {
        self.breakpoints.query_to(screen_or_literal)
    }
}
