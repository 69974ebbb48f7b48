//! Diagnostics: non-fatal warnings accumulated for a final report.
//!
//! Warnings never stop a run. Each one is logged through `tracing` when it is
//! recorded and kept in a [`WarningCollector`] so callers can print a summary
//! once the graph is assembled.

use std::fmt::Write as _;
use std::sync::Arc;

/// Warning codes.
///
/// - **W0001-W0099**: canonicalization warnings
#[allow(dead_code)]
pub mod codes {
    /// Low-confidence canonical-owner pick among re-exporting modules.
    pub const AMBIGUOUS_REEXPORT: &str = "W0001";
    /// A module claims canonical ownership of a name it does not expose.
    pub const IGNORED_CANONICAL_FOR: &str = "W0002";
}

/// Kind of warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WarningKind {
    AmbiguousReexport,
    IgnoredCanonicalFor,
}

impl WarningKind {
    pub fn code(&self) -> &'static str {
        match self {
            WarningKind::AmbiguousReexport => codes::AMBIGUOUS_REEXPORT,
            WarningKind::IgnoredCanonicalFor => codes::IGNORED_CANONICAL_FOR,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WarningKind::AmbiguousReexport => "ambiguous-reexport",
            WarningKind::IgnoredCanonicalFor => "ignored-canonical-for",
        }
    }
}

/// A single warning.
#[derive(Clone, Debug, PartialEq)]
pub struct Warning {
    pub kind: WarningKind,
    /// The element the warning is about (usually a qualified name).
    pub element: Arc<str>,
    pub message: Arc<str>,
    /// Extra lines shown only when extended debugging is requested.
    pub extended_debug: Vec<String>,
}

impl Warning {
    pub fn new(
        kind: WarningKind,
        element: impl Into<Arc<str>>,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            kind,
            element: element.into(),
            message: message.into(),
            extended_debug: Vec::new(),
        }
    }

    pub fn with_extended_debug(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.extended_debug.extend(lines);
        self
    }
}

/// Collects warnings during discovery and graph assembly.
#[derive(Clone, Debug, Default)]
pub struct WarningCollector {
    warnings: Vec<Warning>,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and log it.
    pub fn add(&mut self, warning: Warning) {
        tracing::warn!(
            "[{}] {}: {}",
            warning.kind.code(),
            warning.kind.label(),
            warning.message
        );
        for line in &warning.extended_debug {
            tracing::debug!("    {}", line);
        }
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn has_kind(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }

    /// Final summary, one line per warning.
    ///
    /// With `extended` set, each warning's debug lines follow it, indented.
    pub fn report(&self, extended: bool) -> String {
        let mut out = String::new();
        for warning in &self.warnings {
            let _ = writeln!(
                out,
                "warning[{}]: {}",
                warning.kind.code(),
                warning.message
            );
            if extended {
                for line in &warning.extended_debug {
                    let _ = writeln!(out, "    {}", line);
                }
            }
        }
        let _ = write!(out, "{} warning(s)", self.warnings.len());
        out
    }
}
