//! Data Shapes

use algobench_core::BenchError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Ordering class of a generated input array
///
/// Declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataShape {
    /// Uniformly random integers
    Random,
    /// Ascending `0..length`
    Sorted,
    /// Descending `length-1..=0`
    Reversed,
    /// One sorted half and one random half, in random order
    PartiallySorted,
}

impl DataShape {
    /// All shapes, in reporting order
    pub const ALL: [DataShape; 4] = [
        DataShape::Random,
        DataShape::Sorted,
        DataShape::Reversed,
        DataShape::PartiallySorted,
    ];

    /// Kebab-case identifier, as accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            DataShape::Random => "random",
            DataShape::Sorted => "sorted",
            DataShape::Reversed => "reversed",
            DataShape::PartiallySorted => "partially-sorted",
        }
    }
}

impl fmt::Display for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DataShape {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "random" => Ok(DataShape::Random),
            "sorted" => Ok(DataShape::Sorted),
            "reversed" | "reverse" => Ok(DataShape::Reversed),
            "partially-sorted" | "partiallysorted" | "partial" => Ok(DataShape::PartiallySorted),
            other => Err(BenchError::invalid_argument(format!(
                "unknown data shape: {}",
                other
            ))),
        }
    }
}

/// Accepts exactly the spellings `FromStr` accepts
impl<'de> Deserialize<'de> for DataShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
