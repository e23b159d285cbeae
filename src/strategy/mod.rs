use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownStrategyError;

pub mod copy; // Auxiliary buffer, O(n) extra space
pub mod cyclic; // Cycle decomposition, O(1) extra space
pub mod reversal; // Triple reversal, O(1) extra space

/// Selects one of the rotation algorithms.
///
/// All strategies produce identical results for the same input; they differ
/// only in auxiliary space and memory access pattern. Parsing and serde both
/// accept `reverse` and `ring_replace` as aliases.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Copy,
    #[serde(alias = "reverse")]
    Reversal,
    #[default]
    #[serde(alias = "ring_replace")]
    Cyclic,
}

impl Strategy {
    pub const ALL: [Strategy; 3] =
        [Strategy::Copy, Strategy::Reversal, Strategy::Cyclic];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Copy => "copy",
            Strategy::Reversal => "reversal",
            Strategy::Cyclic => "cyclic",
        }
    }

    /// Rotates `s` right by `rot` in place. Negative `rot` rotates left.
    #[tracing::instrument(skip(s), fields(len = s.len()), level = "debug")]
    pub fn rotate<T>(self, s: &mut [T], rot: i64)
    where
        T: Clone,
    {
        match self {
            Strategy::Copy => copy::rotate(s, rot),
            Strategy::Reversal => reversal::rotate(s, rot),
            Strategy::Cyclic => cyclic::rotate(s, rot),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "copy" => Ok(Strategy::Copy),
            "reversal" | "reverse" => Ok(Strategy::Reversal),
            "cyclic" | "ring_replace" => Ok(Strategy::Cyclic),
            _ => Err(UnknownStrategyError(s.to_string())),
        }
    }
}
