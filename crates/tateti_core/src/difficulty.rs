//! Difficulty levels and their mistake rates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// How often the computer deliberately plays a non-optimal move.
///
/// Unrecognized names are never rejected: they normalize to [`Difficulty::Normal`],
/// both through [`Difficulty::from_name`] and when deserializing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase", from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Errs most of the time.
    Easy,
    /// Errs now and then.
    #[default]
    Normal,
    /// Never errs.
    Pro,
}

impl Difficulty {
    /// Probability in `[0, 1]` of substituting a safe mistake for the best move.
    pub fn mistake_rate(self) -> f64 {
        match self {
            Difficulty::Easy => 0.65,
            Difficulty::Normal => 0.25,
            Difficulty::Pro => 0.0,
        }
    }

    /// Parses a difficulty name, falling back to `Normal` for anything unknown.
    #[instrument]
    pub fn from_name(name: &str) -> Self {
        Difficulty::from_str(name.trim()).unwrap_or_else(|_| {
            debug!(name, "Unrecognized difficulty, using normal");
            Difficulty::default()
        })
    }

    /// The next level in the easy → normal → pro cycle.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Pro,
            Difficulty::Pro => Difficulty::Easy,
        }
    }
}

impl From<String> for Difficulty {
    fn from(name: String) -> Self {
        Difficulty::from_name(&name)
    }
}
