use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Working unit of a mat design.
///
/// The tag does not change what stored numbers mean: every coordinate in a
/// [`super::MatDesignerState`] is already expressed in its unit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "in")]
    Inch,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Millimeter, Unit::Centimeter, Unit::Inch];

    /// Short label appended to dimension values.
    #[inline]
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Inch => "in",
        }
    }

    #[inline]
    pub const fn millimeters_per_unit(self) -> f64 {
        match self {
            Unit::Millimeter => 1.0,
            Unit::Centimeter => 10.0,
            Unit::Inch => 25.4,
        }
    }

    /// Converts `value` expressed in `self` into `to`.
    #[inline]
    pub fn convert(self, value: f64, to: Unit) -> f64 {
        if self == to {
            return value;
        }
        value * self.millimeters_per_unit() / to.millimeters_per_unit()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Error returned when a string is not one of `mm`, `cm`, `in`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitError(pub String);

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit `{}` (expected mm, cm or in)", self.0)
    }
}

impl std::error::Error for ParseUnitError {}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|u| u.suffix() == s)
            .ok_or_else(|| ParseUnitError(s.to_owned()))
    }
}
