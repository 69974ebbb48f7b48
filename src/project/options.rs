//! Discovery options: already-parsed configuration values.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use super::layout::PackageLayout;
use crate::base::constants::DEFAULT_MIN_CONFIDENCE;
use crate::error::{DocgraphError, Result};

/// Options consumed by discovery and canonicalization.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct DiscoveryOptions {
    /// Module names to document; empty means "everything discovered".
    pub include: IndexSet<String>,
    /// Module names excluded from the missing-include check.
    pub exclude: IndexSet<String>,
    /// Seed the crawl with every dependency's top-level modules too.
    pub auto_include_dependencies: bool,
    /// Minimum score margin below which a canonical pick is reported.
    #[cfg_attr(feature = "serde", serde(rename = "ambiguousReexportScorerMinConfidence"))]
    pub ambiguous_reexport_min_confidence: f64,
    /// Do not pull in the full platform manifest when a platform file is seen.
    pub skip_platform_manifest: bool,
    /// Location of the platform distribution.
    pub platform_root: Option<PathBuf>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            include: IndexSet::new(),
            exclude: IndexSet::new(),
            auto_include_dependencies: false,
            ambiguous_reexport_min_confidence: DEFAULT_MIN_CONFIDENCE,
            skip_platform_manifest: false,
            platform_root: None,
        }
    }
}

impl DiscoveryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_auto_include_dependencies(mut self, enabled: bool) -> Self {
        self.auto_include_dependencies = enabled;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.ambiguous_reexport_min_confidence = min_confidence;
        self
    }

    pub fn with_skip_platform_manifest(mut self, skip: bool) -> Self {
        self.skip_platform_manifest = skip;
        self
    }

    pub fn with_platform_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.platform_root = Some(root.into());
        self
    }

    pub fn platform_root(&self) -> Option<&Path> {
        self.platform_root.as_deref()
    }

    /// Whether a module with simple name `name` passes the include filter.
    pub fn is_included(&self, name: &str) -> bool {
        self.include.is_empty() || self.include.contains(name)
    }

    /// Check the options against the environment before any discovery work.
    pub fn validate(&self, layout: &dyn PackageLayout) -> Result<()> {
        let min = self.ambiguous_reexport_min_confidence;
        if !min.is_finite() || min < 0.0 {
            return Err(DocgraphError::configuration(format!(
                "ambiguousReexportScorerMinConfidence must be a non-negative number, got {min}"
            )));
        }
        if layout.requires_platform_root() && self.platform_root.is_none() {
            return Err(DocgraphError::configuration(format!(
                "Top level package '{}' requires a platform root, but none was configured",
                layout.program().name()
            )));
        }
        Ok(())
    }
}
