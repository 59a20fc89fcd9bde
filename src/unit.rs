use std::fmt;

use crate::error::Error;

/// A whole number of CSS pixels.
///
/// Breakpoints are compared and offset by single pixels, so fractional
/// values are rejected on conversion instead of being truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Px(pub u32);

impl Px {
    pub const ZERO: Px = Px(0);

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The last pixel strictly below this one, or `None` at zero.
    pub const fn pred(self) -> Option<Px> {
        match self.0.checked_sub(1) {
            Some(v) => Some(Px(v)),
            None => None,
        }
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Self {
        Px(value)
    }
}

impl From<u16> for Px {
    fn from(value: u16) -> Self {
        Px(value as u32)
    }
}

impl From<Px> for u32 {
    fn from(value: Px) -> Self {
        value.0
    }
}

impl TryFrom<i32> for Px {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Px)
            .map_err(|_| Error::NonIntegerPx(value as f64))
    }
}

impl TryFrom<f64> for Px {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() && value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) {
            Ok(Px(value as u32))
        } else {
            Err(Error::NonIntegerPx(value))
        }
    }
}

impl TryFrom<f32> for Px {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Px::try_from(value as f64)
    }
}

pub trait UnitExt {
    fn px(self) -> Px;
}

impl UnitExt for u32 {
    fn px(self) -> Px {
        Px(self)
    }
}

impl UnitExt for u16 {
    fn px(self) -> Px {
        Px(self as u32)
    }
}
