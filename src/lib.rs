//! Stylint - style-object lint core
//!
//! Two pure text-analysis engines over the CSS-like key/value pairs a host
//! static-analysis runtime extracts from style-object literals:
//!
//! - **Property ordering**: decides the canonical order of property names
//!   (alphabetical, or grouped "concentric" box-model ordering) and reports
//!   the first property breaking it, together with a minimal move fix.
//! - **Numeric value normalization**: parses a scalar length/number token
//!   into sign, digits, and unit, validates the unit against a closed
//!   vocabulary, and computes the canonical textual form (no trailing
//!   zeros, no unit on zero).
//!
//! Both engines are deterministic, side-effect-free functions: the host
//! calls them once per discovered property list or value literal and
//! consumes structured diagnostics carrying optional replacement text. Rule
//! registration, AST traversal, and reporting live in the host; after
//! applying a fix the host re-runs the engines until no verdict remains.
//!
//! # Basic Usage
//!
//! ```rust
//! use stylint::{check_property_order, check_numeric_value, LintConfig};
//!
//! let properties = [("color", 0usize), ("border", 1), ("margin", 2)];
//! let diagnostic = check_property_order(&properties, &LintConfig::alphabetical());
//! assert!(diagnostic.is_some());
//!
//! let diagnostics = check_numeric_value("1.50rem", 0usize);
//! assert_eq!(diagnostics[0].fix_text.as_deref(), Some("1.5rem"));
//! ```

pub mod error;
pub mod config;
pub mod tokenizer;
pub mod units;
pub mod canonical;
pub mod properties;
pub mod ordering;
pub mod diagnostics;
pub mod rules;

// Re-export commonly used types and functions
pub use error::{LintError, Result};
pub use config::{LintConfig, OrderingMode, SortRemainingProperties};
pub use tokenizer::{tokenize, NumericToken, Sign};
pub use units::{classify, UnitCategory, UnitClass};
pub use canonical::{canonicalize, CanonicalValue};
pub use properties::{concentric_key, PropertyGroup};
pub use ordering::{OrderingEngine, OrderingVerdict, PropertyEntry};
pub use diagnostics::{Diagnostic, MessageKind};
pub use rules::{
    check_numeric_value, check_property_order, RuleMeta, PROPERTY_ORDER_RULE,
    TRAILING_ZERO_RULE, UNKNOWN_UNIT_RULE, ZERO_UNIT_RULE,
};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
