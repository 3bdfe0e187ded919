//! Units and the unit normalizer.
//!
//! Two families exist and never convert into each other:
//! - angle: `deg`, `rad` (base `rad`)
//! - length: `m`, `cm`, `mm` (base `m`)

use std::fmt;

use crate::ast::NumberNode;

/// A unit suffix attached to a number.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    Deg,
    Rad,
    M,
    Cm,
    Mm,
}

/// Group of units convertible to one another.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnitFamily {
    Angle,
    Length,
}

impl Unit {
    /// Look up a unit by its source suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "deg" => Some(Self::Deg),
            "rad" => Some(Self::Rad),
            "m" => Some(Self::M),
            "cm" => Some(Self::Cm),
            "mm" => Some(Self::Mm),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deg => "deg",
            Self::Rad => "rad",
            Self::M => "m",
            Self::Cm => "cm",
            Self::Mm => "mm",
        }
    }

    pub const fn family(self) -> UnitFamily {
        match self {
            Self::Deg | Self::Rad => UnitFamily::Angle,
            Self::M | Self::Cm | Self::Mm => UnitFamily::Length,
        }
    }

    /// Convert `value` in this unit to the family's base unit.
    #[inline]
    fn to_base(self, value: f64) -> f64 {
        match self {
            Self::Deg => value.to_radians(),
            Self::Cm => value / 100.0,
            Self::Mm => value / 1000.0,
            Self::Rad | Self::M => value,
        }
    }
}

impl UnitFamily {
    pub const fn base_unit(self) -> Unit {
        match self {
            Self::Angle => Unit::Rad,
            Self::Length => Unit::M,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite a number in its family's base unit.
///
/// `deg` becomes `rad`, `cm` and `mm` become `m`; `rad`, `m` and unitless
/// numbers pass through untouched.
pub fn normalize(node: NumberNode) -> NumberNode {
    match node.unit {
        Some(unit) => NumberNode::with_unit(unit.to_base(node.number), unit.family().base_unit()),
        None => node,
    }
}
