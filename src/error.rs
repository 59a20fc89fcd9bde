use thiserror::Error;

use crate::unit::Px;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A strict query was asked for a token that is not a screen size.
    #[error("invalid screen size `{0}`")]
    InvalidScreenSize(String),

    /// The bounds cannot form a width condition.
    #[error("invalid range: {}", describe_range(.min, .max))]
    InvalidRange { min: Option<Px>, max: Option<Px> },

    #[error("{0} is not a whole, non-negative pixel value")]
    NonIntegerPx(f64),

    #[error("breakpoint `{lower}` must be less than breakpoint `{upper}`")]
    UnorderedBreakpoints {
        lower: &'static str,
        upper: &'static str,
    },

    #[cfg(feature = "serde")]
    #[error("failed to load theme: {0}")]
    Theme(#[from] serde_json::Error),

    #[cfg(feature = "serde")]
    #[error("failed to serialize theme: {0}")]
    ThemeSerialization(#[source] serde_json::Error),
}

fn describe_range(min: &Option<Px>, max: &Option<Px>) -> String {
    match (*min, *max) {
        (None, None) => "both breakpoints cannot be absent".to_string(),
        (Some(min), Some(max)) if max < min => {
            format!("the min({min}) breakpoint must be less than max({max})")
        }
        (_, Some(max)) => format!("max({max}) leaves no pixel below it"),
        (Some(min), None) => format!("min({min}) is not a valid range"),
    }
}
