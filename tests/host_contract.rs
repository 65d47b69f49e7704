//! Host-side contract tests
//!
//! Drives the adapters the way a host analysis runtime would: apply the
//! returned fix, re-run the check, and repeat until no diagnostic remains.
//! The engines only ever report the first violation; convergence of the
//! loop is the host's responsibility and is what these tests exercise.

use stylint::{
    check_numeric_value, check_property_order, LintConfig, MessageKind, OrderingMode,
    SortRemainingProperties,
};

/// Apply order fixes until the check is silent, returning the final order
/// and the number of passes taken
fn run_order_to_fixed_point(names: &[&str], config: &LintConfig) -> (Vec<String>, usize) {
    let mut properties: Vec<(String, usize)> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), i))
        .collect();

    let mut passes = 0;
    while let Some(diagnostic) = check_property_order(&properties, config) {
        passes += 1;
        assert!(passes <= names.len() * names.len(), "host loop failed to converge");

        let current: usize = diagnostic.params["current-index"].parse().unwrap();
        let before: usize = diagnostic.params["before-index"].parse().unwrap();
        let entry = properties.remove(current);
        properties.insert(before, entry);
    }

    (properties.into_iter().map(|(name, _)| name).collect(), passes)
}

#[test]
fn order_fix_loop_converges_alphabetically() {
    let config = LintConfig::alphabetical();
    let (fixed, _) = run_order_to_fixed_point(
        &["z-index", "color", "width", "border", "margin"],
        &config,
    );
    assert_eq!(fixed, vec!["border", "color", "margin", "width", "z-index"]);
}

#[test]
fn order_fix_loop_single_move_for_one_misplaced_property() {
    let config = LintConfig::alphabetical();
    let (fixed, passes) = run_order_to_fixed_point(&["azimuth", "color", "border"], &config);
    assert_eq!(fixed, vec!["azimuth", "border", "color"]);
    assert_eq!(passes, 1);
}

#[test]
fn order_fix_loop_converges_concentrically() {
    let config = LintConfig::concentric();
    let (fixed, _) = run_order_to_fixed_point(
        &["color", "margin-left", "position", "width", "margin-top", "font-size"],
        &config,
    );
    assert_eq!(
        fixed,
        vec!["position", "width", "margin-top", "margin-left", "color", "font-size"]
    );
}

#[test]
fn order_fix_loop_leaves_unmapped_grouped_properties_alone() {
    let config = LintConfig {
        ordering_mode: OrderingMode::Concentric,
        sort_remaining: SortRemainingProperties::Grouped,
    };
    let (fixed, passes) =
        run_order_to_fixed_point(&["width", "scroll-snap-type", "scroll-margin"], &config);
    assert_eq!(fixed, vec!["width", "scroll-snap-type", "scroll-margin"]);
    assert_eq!(passes, 0);
}

#[test]
fn value_fix_then_rerun_is_silent() {
    for value in ["1.50rem", "0px", "0.0em", "2.00px", "-0deg"] {
        let diagnostics = check_numeric_value(value, ());
        let fix = diagnostics
            .iter()
            .find_map(|d| d.fix_text.clone())
            .expect("expected a fixable diagnostic");

        let rerun = check_numeric_value(&fix, ());
        let fixable_left = rerun.iter().filter(|d| d.fix_text.is_some()).count();
        assert_eq!(fixable_left, 0, "fix for '{}' did not converge", value);
    }
}

#[test]
fn unknown_unit_survives_fixing() {
    // The unfixable diagnostic persists across the host's fix passes
    let diagnostics = check_numeric_value("1.50xyz", ());
    let fix = diagnostics[0].fix_text.clone().unwrap();

    let rerun = check_numeric_value(&fix, ());
    assert_eq!(rerun.len(), 1);
    assert_eq!(rerun[0].kind, MessageKind::UnknownUnit);
}

#[test]
fn diagnostics_serialize_for_transport() {
    let diagnostics = check_numeric_value("0px", 42usize);
    let json = serde_json::to_value(&diagnostics[0]).unwrap();

    assert_eq!(json["kind"], "ZeroUnit");
    assert_eq!(json["fix_text"], "0");
    assert_eq!(json["params"]["value"], "0px");
    // Opaque handles never cross the transport boundary
    assert!(json.get("target").is_none());
}

#[test]
fn messages_render_from_params() {
    let properties = [("color", 0usize), ("border", 1)];
    let diagnostic = check_property_order(&properties, &LintConfig::alphabetical()).unwrap();
    assert_eq!(
        diagnostic.message(),
        "Expected property 'border' to come before property 'color'"
    );
}
