//! Flow direction of the rendered diagram.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Direction in which the diagram flows.
///
/// The names match the Mermaid keywords and the configuration strings.
///
/// # Variants
///
/// - `LR` - Left to right (default)
/// - `BT` - Bottom to top
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Direction {
    /// Left to right (default)
    #[default]
    LR,
    /// Bottom to top
    BT,
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LR" => Ok(Self::LR),
            "BT" => Ok(Self::BT),
            _ => Err("Unsupported direction, expected LR or BT"),
        }
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        match val {
            Direction::LR => "LR",
            Direction::BT => "BT",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
