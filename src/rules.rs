//! Rule adapters between the engines and the host analysis runtime
//!
//! The engines return plain verdicts; these adapters translate them into
//! the diagnostic records the host's reporting protocol expects, one entry
//! point per discovered property list or scalar value. Each rule also
//! carries a static descriptor the host registers under its own plugin ABI.

use crate::canonical::canonicalize;
use crate::config::LintConfig;
use crate::diagnostics::{Diagnostic, MessageKind};
use crate::ordering::{OrderingEngine, OrderingVerdict};

/// Static descriptor for one registered rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub fixable: bool,
}

pub const PROPERTY_ORDER_RULE: RuleMeta = RuleMeta {
    name: "property-order",
    description: "Enforce a canonical ordering of style-object properties",
    fixable: true,
};

pub const TRAILING_ZERO_RULE: RuleMeta = RuleMeta {
    name: "no-trailing-zeros",
    description: "Disallow redundant trailing zeros in numeric values",
    fixable: true,
};

pub const ZERO_UNIT_RULE: RuleMeta = RuleMeta {
    name: "no-unit-on-zero",
    description: "Disallow units on zero-magnitude values (percentages excluded)",
    fixable: true,
};

pub const UNKNOWN_UNIT_RULE: RuleMeta = RuleMeta {
    name: "no-unknown-unit",
    description: "Disallow units outside the closed CSS unit vocabulary",
    fixable: false,
};

/// Check one style object's property sequence
///
/// `properties` is the authored `(name, handle)` sequence. At most one
/// diagnostic is returned: the first property that breaks the canonical
/// order, attached to that property's handle. The `before-index` param
/// names the insertion point so the host can express the fix as a minimal
/// move of source ranges.
pub fn check_property_order<S, H>(
    properties: &[(S, H)],
    config: &LintConfig,
) -> Option<Diagnostic<H>>
where
    S: AsRef<str>,
    H: Clone,
{
    let engine = OrderingEngine::new(config);
    let names: Vec<&str> = properties.iter().map(|(name, _)| name.as_ref()).collect();
    let entries = engine.build_entries(&names);

    match engine.evaluate(&entries) {
        OrderingVerdict::InOrder => None,
        OrderingVerdict::Violation {
            current_index,
            should_come_before_index,
        } => {
            log::debug!(
                "property order violation: '{}' at {} should come before '{}' at {}",
                names[current_index],
                current_index,
                names[should_come_before_index],
                should_come_before_index,
            );
            let diagnostic = Diagnostic::new(
                MessageKind::OrderViolation,
                properties[current_index].1.clone(),
            )
            .with_param("property", names[current_index])
            .with_param("before", names[should_come_before_index])
            .with_param("current-index", current_index.to_string())
            .with_param("before-index", should_come_before_index.to_string());
            Some(diagnostic)
        }
    }
}

/// Check one scalar value literal
///
/// Non-numeric values (keywords, `var()`, `calc()`, shorthand lists) are not
/// this engine's concern and produce no diagnostics. The three value rules
/// fire independently, up to one diagnostic each; the fixable ones carry the
/// fully canonical replacement text, so one applied fix converges.
pub fn check_numeric_value<H: Clone>(text: &str, handle: H) -> Vec<Diagnostic<H>> {
    let value = match canonicalize(text) {
        Some(value) => value,
        None => return Vec::new(),
    };

    let mut diagnostics = Vec::new();

    if value.trailing_trimmed {
        diagnostics.push(
            Diagnostic::new(MessageKind::TrailingZero, handle.clone())
                .with_param("value", text)
                .with_param("canonical", value.trimmed_text.as_str())
                .with_fix(value.trimmed_text.as_str()),
        );
    }

    if value.unit_stripped {
        diagnostics.push(
            Diagnostic::new(MessageKind::ZeroUnit, handle.clone())
                .with_param("value", text)
                .with_param("canonical", value.trimmed_text.as_str())
                .with_fix(value.trimmed_text.as_str()),
        );
    }

    if !value.unit_known {
        // No fix: the author's intent behind an unrecognized unit is unknowable
        let unit = unit_of(text);
        diagnostics.push(
            Diagnostic::new(MessageKind::UnknownUnit, handle)
                .with_param("value", text)
                .with_param("unit", unit),
        );
    }

    if !diagnostics.is_empty() {
        log::debug!("value '{}' produced {} diagnostic(s)", text, diagnostics.len());
    }
    diagnostics
}

fn unit_of(text: &str) -> String {
    crate::tokenizer::tokenize(text).map_or_else(String::new, |token| token.unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;

    fn handles(names: &[&str]) -> Vec<(String, usize)> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect()
    }

    #[test]
    fn test_order_diagnostic_targets_offending_node() {
        let properties = handles(&["color", "border", "margin"]);
        let diagnostic =
            check_property_order(&properties, &LintConfig::alphabetical()).unwrap();

        assert_eq!(diagnostic.kind, MessageKind::OrderViolation);
        assert_eq!(diagnostic.target, 1);
        assert_eq!(diagnostic.params["property"], "border");
        assert_eq!(diagnostic.params["before"], "color");
        assert_eq!(diagnostic.params["before-index"], "0");
        assert_eq!(diagnostic.fix_text, None);
    }

    #[test]
    fn test_order_in_order_is_silent() {
        let properties = handles(&["border", "color", "margin"]);
        assert!(check_property_order(&properties, &LintConfig::alphabetical()).is_none());
    }

    #[test]
    fn test_value_rules_fire_independently() {
        // Trailing zero and unknown unit on the same value: both reported
        let diagnostics = check_numeric_value("1.50xyz", 0usize);
        let kinds: Vec<_> = diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![MessageKind::TrailingZero, MessageKind::UnknownUnit]);
        assert_eq!(diagnostics[0].fix_text.as_deref(), Some("1.5xyz"));
        assert_eq!(diagnostics[1].fix_text, None);
        assert_eq!(diagnostics[1].params["unit"], "xyz");
    }

    #[test]
    fn test_zero_unit_diagnostic() {
        let diagnostics = check_numeric_value("0px", ());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, MessageKind::ZeroUnit);
        assert_eq!(diagnostics[0].fix_text.as_deref(), Some("0"));
    }

    #[test]
    fn test_zero_percent_is_clean() {
        assert!(check_numeric_value("0%", ()).is_empty());
    }

    #[test]
    fn test_non_numeric_values_pass_through() {
        assert!(check_numeric_value("var(--x)", ()).is_empty());
        assert!(check_numeric_value("calc(1px + 2px)", ()).is_empty());
        assert!(check_numeric_value("red", ()).is_empty());
    }

    #[test]
    fn test_rule_metadata() {
        assert!(PROPERTY_ORDER_RULE.fixable);
        assert!(TRAILING_ZERO_RULE.fixable);
        assert!(ZERO_UNIT_RULE.fixable);
        assert!(!UNKNOWN_UNIT_RULE.fixable);
        assert_eq!(UNKNOWN_UNIT_RULE.name, "no-unknown-unit");
    }
}
