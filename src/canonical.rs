//! Canonical textual forms for numeric CSS values
//!
//! Applies three independent rules to one tokenized scalar value:
//! trailing fractional zeros are removed, a zero magnitude loses its unit
//! (except percentages), and the unit is checked against the closed
//! vocabulary. Non-numeric values are not this module's concern and pass
//! through untouched.

use crate::tokenizer::{tokenize, NumericToken};
use crate::units::{classify, UnitClass};

/// Result of canonicalizing one numeric value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalValue {
    /// Minimal CSS-equivalent text, all rules applied
    pub trimmed_text: String,
    /// Trailing-zero rule removed at least one fractional zero
    pub trailing_trimmed: bool,
    /// Zero-unit rule dropped the unit
    pub unit_stripped: bool,
    /// Unit is present in the closed vocabulary
    pub unit_known: bool,
}

/// Canonicalize a scalar value string, or `None` when it is not numeric
pub fn canonicalize(text: &str) -> Option<CanonicalValue> {
    let token = tokenize(text)?;

    let mut fraction = token.fraction_part.clone();
    let had_fraction = !fraction.is_empty();
    while fraction.ends_with('0') {
        fraction.pop();
    }
    let trailing_trimmed = had_fraction && fraction.len() < token.fraction_part.len();

    let class = classify(&token.unit);
    let unit_known = class.is_known();

    let unit_stripped = match class {
        UnitClass::Known(category) => {
            !token.unit.is_empty() && token.is_zero() && category.strippable_at_zero()
        }
        UnitClass::Unknown => false,
    };

    let trimmed_text = serialize(&token, &fraction, unit_stripped);

    Some(CanonicalValue {
        trimmed_text,
        trailing_trimmed,
        unit_stripped,
        unit_known,
    })
}

/// Reassemble `sign + integer + ('.' + fraction)? + unit`. The integer part
/// defaults to `0` only when both digit runs would otherwise be empty; a
/// value with no digits at all is never emitted.
fn serialize(token: &NumericToken, fraction: &str, strip_unit: bool) -> String {
    let mut out = String::new();
    out.push_str(token.sign.as_str());

    if token.integer_part.is_empty() && fraction.is_empty() {
        out.push('0');
    } else {
        out.push_str(&token.integer_part);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
    }

    if !strip_unit {
        out.push_str(&token.unit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trimmed(text: &str) -> String {
        canonicalize(text).unwrap().trimmed_text
    }

    #[test]
    fn test_trailing_zero_exactness() {
        assert_eq!(trimmed("1.50rem"), "1.5rem");
        assert_eq!(trimmed("2.00px"), "2px");
        assert_eq!(trimmed("1.25em"), "1.25em");
        assert!(canonicalize("1.50rem").unwrap().trailing_trimmed);
        assert!(!canonicalize("1.25em").unwrap().trailing_trimmed);
    }

    #[test]
    fn test_zero_unit_exactness() {
        assert_eq!(trimmed("0px"), "0");
        assert_eq!(trimmed("0%"), "0%");
        assert_eq!(trimmed("0.0em"), "0");
        assert!(canonicalize("0px").unwrap().unit_stripped);
        assert!(!canonicalize("0%").unwrap().unit_stripped);
    }

    #[test]
    fn test_zero_keeps_unknown_unit() {
        let value = canonicalize("0foo").unwrap();
        assert!(!value.unit_stripped);
        assert!(!value.unit_known);
        assert_eq!(value.trimmed_text, "0foo");
    }

    #[test]
    fn test_angle_time_frequency_resolution_stripped_at_zero() {
        assert_eq!(trimmed("0deg"), "0");
        assert_eq!(trimmed("0s"), "0");
        assert_eq!(trimmed("0Hz"), "0");
        assert_eq!(trimmed("0dpi"), "0");
    }

    #[test]
    fn test_bare_zero_unchanged() {
        let value = canonicalize("0").unwrap();
        assert_eq!(value.trimmed_text, "0");
        assert!(!value.unit_stripped);
        assert!(value.unit_known);
    }

    #[test]
    fn test_fraction_only_zero_gains_leading_digit() {
        assert_eq!(trimmed(".0px"), "0");
        assert_eq!(trimmed(".50em"), ".5em");
    }

    #[test]
    fn test_sign_preserved() {
        assert_eq!(trimmed("-0px"), "-0");
        assert_eq!(trimmed("-1.20em"), "-1.2em");
        assert_eq!(trimmed("+0.50"), "+0.5");
    }

    #[test]
    fn test_unknown_unit_flag() {
        assert!(!canonicalize("10xyz").unwrap().unit_known);
        assert!(canonicalize("10px").unwrap().unit_known);
        assert!(canonicalize("10").unwrap().unit_known);
        assert!(canonicalize("10PX").unwrap().unit_known);
    }

    #[test]
    fn test_unknown_unit_still_trims_zeros() {
        let value = canonicalize("1.50xyz").unwrap();
        assert_eq!(value.trimmed_text, "1.5xyz");
        assert!(value.trailing_trimmed);
        assert!(!value.unit_known);
    }

    #[test]
    fn test_not_applicable_values() {
        assert_eq!(canonicalize("var(--x)"), None);
        assert_eq!(canonicalize("calc(1px + 2px)"), None);
        assert_eq!(canonicalize("red"), None);
        assert_eq!(canonicalize("10px 20px"), None);
    }

    #[test]
    fn test_idempotence() {
        for text in [
            "1.50rem", "2.00px", "0px", "0%", "0.0em", ".50em", "-0px", "42", "10xyz", "1.25em",
        ] {
            let once = canonicalize(text).unwrap().trimmed_text;
            let twice = canonicalize(&once).unwrap().trimmed_text;
            assert_eq!(once, twice, "canonicalize not idempotent for '{}'", text);
        }
    }

    #[test]
    fn test_value_preservation_when_unit_kept() {
        // Trailing-zero trimming never changes the decimal magnitude
        for (input, expected) in [("1.50rem", "1.5rem"), ("12.340px", "12.34px")] {
            let value = canonicalize(input).unwrap();
            assert!(!value.unit_stripped);
            assert_eq!(value.trimmed_text, expected);
        }
    }
}
