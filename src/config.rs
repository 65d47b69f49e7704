//! Configuration surface exposed to the host runtime
//!
//! Two plain enumerated options with no nested schema: the ordering mode and,
//! for concentric mode, the fallback sort applied to properties that have no
//! entry in the metadata table. The host validates raw option strings before
//! invoking the engines; `FromStr` is the validation boundary.

use crate::error::{LintError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canonical ordering model applied to a style object's property names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingMode {
    /// Plain code-point lexicographic order
    Alphabetical,
    /// Box-model group order, then priority within group, then name
    Concentric,
}

/// How properties absent from the metadata table sort against each other
/// under concentric mode. They always rank after every mapped group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortRemainingProperties {
    /// Unmapped properties form one trailing bucket, ordered alphabetically
    Alphabetical,
    /// Unmapped properties keep their authored order (never flagged)
    Grouped,
}

/// Lint options and settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Which canonical order the ordering engine enforces
    pub ordering_mode: OrderingMode,

    /// Fallback sort for unmapped properties (concentric mode only)
    pub sort_remaining: SortRemainingProperties,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            ordering_mode: OrderingMode::Alphabetical,
            sort_remaining: SortRemainingProperties::Alphabetical,
        }
    }
}

impl LintConfig {
    pub fn alphabetical() -> Self {
        Self::default()
    }

    pub fn concentric() -> Self {
        Self {
            ordering_mode: OrderingMode::Concentric,
            sort_remaining: SortRemainingProperties::Alphabetical,
        }
    }
}

impl FromStr for OrderingMode {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alphabetical" => Ok(OrderingMode::Alphabetical),
            "concentric" => Ok(OrderingMode::Concentric),
            other => Err(LintError::config(
                "ordering_mode",
                format!("unknown mode '{}', expected 'alphabetical' or 'concentric'", other),
            )),
        }
    }
}

impl FromStr for SortRemainingProperties {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alphabetical" => Ok(SortRemainingProperties::Alphabetical),
            "grouped" => Ok(SortRemainingProperties::Grouped),
            other => Err(LintError::config(
                "sort_remaining",
                format!("unknown fallback '{}', expected 'alphabetical' or 'grouped'", other),
            )),
        }
    }
}
