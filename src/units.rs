//! Closed CSS unit vocabulary
//!
//! Centralized unit-to-category mapping used by the value canonicalizer.
//! This is a versioned, closed list: additions are a deliberate data change,
//! never inferred from input.

/// Category of a recognized CSS unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Length,
    Angle,
    Time,
    Resolution,
    Frequency,
    Percentage,
    Unitless,
}

impl UnitCategory {
    /// Units in these categories drop entirely on a zero magnitude.
    /// Percentage is excluded: `0%` and `0` are not interchangeable in
    /// every CSS property.
    pub fn strippable_at_zero(&self) -> bool {
        !matches!(self, UnitCategory::Percentage | UnitCategory::Unitless)
    }
}

/// Classification result for a unit string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    Known(UnitCategory),
    Unknown,
}

impl UnitClass {
    pub fn is_known(&self) -> bool {
        matches!(self, UnitClass::Known(_))
    }
}

/// Classify a unit string against the closed vocabulary
///
/// Unit keywords are ASCII-case-insensitive in CSS, so lookup normalizes
/// case first. The empty string is always known (unitless).
pub fn classify(unit: &str) -> UnitClass {
    let lowered = unit.to_ascii_lowercase();
    let category = match lowered.as_str() {
        "" => UnitCategory::Unitless,
        "%" => UnitCategory::Percentage,

        // Absolute and relative lengths
        "px" | "em" | "rem" | "vh" | "vw" | "vmin" | "vmax" | "ex" | "ch" | "cm" | "mm"
        | "in" | "pt" | "pc" | "q" | "fr" => UnitCategory::Length,

        // Angles
        "deg" | "rad" | "grad" | "turn" => UnitCategory::Angle,

        // Time
        "s" | "ms" => UnitCategory::Time,

        // Resolution
        "dpi" | "dpcm" | "dppx" => UnitCategory::Resolution,

        // Frequency
        "hz" | "khz" => UnitCategory::Frequency,

        _ => return UnitClass::Unknown,
    };
    UnitClass::Known(category)
}
