//! Host-facing diagnostic records
//!
//! The core never talks to files or terminals; every finding is returned as
//! a structured record the host turns into user-facing output. The node
//! handle is opaque: the core never inspects it, it is only threaded back so
//! the host can attach source ranges and apply fixes.

use serde::Serialize;
use std::collections::BTreeMap;

/// Kind of finding a rule produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageKind {
    OrderViolation,
    TrailingZero,
    UnknownUnit,
    ZeroUnit,
}

/// One finding, attached to the host's opaque node handle
///
/// `fix_text` is a drop-in textual replacement for the flagged node when the
/// rule is fixable; ordering fixes are moves of source ranges and carry the
/// move target in `params` instead. The host decides whether to apply fixes
/// and re-invokes the core afterwards to reach a fixed point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic<H> {
    pub kind: MessageKind,
    /// Placeholder name to value; `BTreeMap` keeps transport deterministic
    pub params: BTreeMap<String, String>,
    pub fix_text: Option<String>,
    #[serde(skip)]
    pub target: H,
}

impl<H> Diagnostic<H> {
    pub fn new(kind: MessageKind, target: H) -> Self {
        Self {
            kind,
            params: BTreeMap::new(),
            fix_text: None,
            target,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_fix(mut self, fix_text: impl Into<String>) -> Self {
        self.fix_text = Some(fix_text.into());
        self
    }

    fn param(&self, name: &str) -> &str {
        self.params.get(name).map(String::as_str).unwrap_or("")
    }

    /// Default human-readable rendering; hosts may re-render from `params`
    pub fn message(&self) -> String {
        match self.kind {
            MessageKind::OrderViolation => format!(
                "Expected property '{}' to come before property '{}'",
                self.param("property"),
                self.param("before"),
            ),
            MessageKind::TrailingZero => format!(
                "Expected '{}' to be written without trailing zeros as '{}'",
                self.param("value"),
                self.param("canonical"),
            ),
            MessageKind::UnknownUnit => format!(
                "Unexpected unknown unit '{}' in value '{}'",
                self.param("unit"),
                self.param("value"),
            ),
            MessageKind::ZeroUnit => format!(
                "Expected zero value '{}' to be written as '{}'",
                self.param("value"),
                self.param("canonical"),
            ),
        }
    }
}
