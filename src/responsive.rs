use std::str::FromStr;

use crate::error::{Error, Result};
use crate::unit::Px;

pub use self::screen_size::ScreenSize;

// Derive output names the deprecated variants.
mod screen_size {
    #![allow(deprecated)]

    /// A named range of viewport widths.
    ///
    /// Tokens parse from and display as their camelCase names (`"xLarge"`),
    /// which is also how a [`ScreenSize`] is passed as `impl AsRef<str>`.
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        strum::EnumIter,
        strum::EnumString,
        strum::Display,
        strum::AsRefStr,
        strum::IntoStaticStr,
    )]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(rename_all = "camelCase")
    )]
    pub enum ScreenSize {
        /// Below `medium`.
        #[strum(serialize = "small")]
        Small,
        /// Below `large`.
        #[deprecated(note = "use `query_up_to(ScreenSize::Medium)`")]
        #[strum(serialize = "smallAndMedium")]
        SmallAndMedium,
        /// From `medium` up to `large`.
        #[strum(serialize = "medium")]
        Medium,
        /// From `medium` upward.
        #[deprecated(note = "use `query_from(ScreenSize::Medium)`")]
        #[strum(serialize = "mediumAndLarge")]
        MediumAndLarge,
        /// From `large` up to `xLarge`.
        #[strum(serialize = "large")]
        Large,
        /// From `xLarge` up to `max`.
        #[strum(serialize = "xLarge")]
        XLarge,
        /// From `max` upward.
        #[strum(serialize = "max")]
        Max,
    }

    impl ScreenSize {
        /// Screen sizes that are neither deprecated nor aliases, smallest first.
        pub const CURRENT: [ScreenSize; 5] = [
            ScreenSize::Small,
            ScreenSize::Medium,
            ScreenSize::Large,
            ScreenSize::XLarge,
            ScreenSize::Max,
        ];

        pub fn is_deprecated(self) -> bool {
            self.replacement().is_some()
        }

        /// The query that supersedes a deprecated token.
        pub fn replacement(self) -> Option<&'static str> {
            match self {
                ScreenSize::SmallAndMedium => Some("query_up_to(\"medium\")"),
                ScreenSize::MediumAndLarge => Some("query_from(\"medium\")"),
                _ => None,
            }
        }
    }
}

/// Logs on every use, so the warning reaches whichever subscriber is current.
fn warn_deprecated(screen: ScreenSize) {
    if let Some(replacement) = screen.replacement() {
        tracing::warn!(
            screen = %screen,
            "'{screen}' screen size has been deprecated. Please, use '{replacement}'."
        );
    }
}

/// Width breakpoints in pixels, ascending.
///
/// Each value is the first pixel of the screen size with the same name, so
/// `medium` is where `small` ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Breakpoints {
    pub medium: Px,
    pub large: Px,
    pub x_large: Px,
    pub max: Px,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium: Px(768),
            large: Px(1200),
            x_large: Px(1440),
            max: Px(1920),
        }
    }
}

impl Breakpoints {
    pub const fn new(medium: Px, large: Px, x_large: Px, max: Px) -> Self {
        Self {
            medium,
            large,
            x_large,
            max,
        }
    }

    /// The width range covered by `screen`.
    ///
    /// Deprecated tokens still resolve, and log a warning the first time each
    /// one is seen.
    #[allow(deprecated)]
    pub fn resolve(&self, screen: ScreenSize) -> WidthBreakpoints {
        match screen {
            ScreenSize::Small => WidthBreakpoints::up_to(self.medium),
            ScreenSize::SmallAndMedium => {
                warn_deprecated(screen);
                WidthBreakpoints::up_to(self.large)
            }
            ScreenSize::Medium => WidthBreakpoints::between(self.medium, self.large),
            ScreenSize::MediumAndLarge => {
                warn_deprecated(screen);
                WidthBreakpoints::starting_at(self.medium)
            }
            ScreenSize::Large => WidthBreakpoints::between(self.large, self.x_large),
            ScreenSize::XLarge => WidthBreakpoints::between(self.x_large, self.max),
            ScreenSize::Max => WidthBreakpoints::starting_at(self.max),
        }
    }

    /// Checks that every breakpoint is strictly greater than the previous one.
    pub fn validate(&self) -> Result<()> {
        let ordered = [
            ("medium", self.medium),
            ("large", self.large),
            ("xLarge", self.x_large),
            ("max", self.max),
        ];
        for pair in ordered.windows(2) {
            let (lower, low) = pair[0];
            let (upper, high) = pair[1];
            if low >= high {
                return Err(Error::UnorderedBreakpoints { lower, upper });
            }
        }
        Ok(())
    }
}

/// One resolved width range. `min` is inclusive and `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WidthBreakpoints {
    pub min: Option<Px>,
    pub max: Option<Px>,
}

impl WidthBreakpoints {
    pub const fn new(min: Option<Px>, max: Option<Px>) -> Self {
        Self { min, max }
    }

    pub const fn up_to(max: Px) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub const fn starting_at(min: Px) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn between(min: Px, max: Px) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Drops the upper bound.
    pub const fn lower(self) -> Self {
        Self {
            min: self.min,
            max: None,
        }
    }

    /// Drops the lower bound.
    pub const fn upper(self) -> Self {
        Self {
            min: None,
            max: self.max,
        }
    }
}

/// Resolves a screen-size token against `breakpoints`.
///
/// Returns `None` for anything that is not a screen-size token so callers can
/// fall back to treating the input as a literal media condition.
pub fn resolve_screen_breakpoints(
    screen: impl AsRef<str>,
    breakpoints: &Breakpoints,
) -> Option<WidthBreakpoints> {
    let screen = ScreenSize::from_str(screen.as_ref()).ok()?;
    Some(breakpoints.resolve(screen))
}
