//! Package layout and configuration-overlay interfaces.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexSet;

use super::options::DiscoveryOptions;
use crate::error::Result;
use crate::model::DistributionUnit;

/// Knowledge of which distribution units exist and which files they hold.
pub trait PackageLayout {
    /// The distribution being documented.
    fn program(&self) -> Arc<DistributionUnit>;

    /// Every other distribution the program depends on.
    fn dependencies(&self) -> Vec<Arc<DistributionUnit>>;

    /// The distribution unit owning `path`, if known.
    fn unit_for(&self, path: &Path) -> Option<Arc<DistributionUnit>>;

    /// Public top-level module files of `unit`, excluding its private subtree.
    fn top_level_files(&self, unit: &DistributionUnit) -> Result<Vec<PathBuf>>;

    /// Every module file of the platform distribution.
    fn platform_manifest(&self) -> Result<Vec<PathBuf>>;

    /// Files of modules that anchor always-present synthetic entries.
    fn special_files(&self) -> Vec<PathBuf>;

    /// Whether the program cannot be documented without a platform root.
    fn requires_platform_root(&self) -> bool {
        false
    }
}

/// Per-file configuration overlays.
pub trait OverlaySource {
    /// Extra files the overlay governing `path` asks to include.
    fn include_external(&self, path: &Path) -> Vec<PathBuf>;
}

/// Files the ordinary crawl starts from.
///
/// The program's top-level files, plus every dependency's when
/// `auto_include_dependencies` is set. Sorted and de-duplicated.
pub fn initial_files(
    layout: &dyn PackageLayout,
    options: &DiscoveryOptions,
) -> Result<IndexSet<PathBuf>> {
    let mut files: IndexSet<PathBuf> = layout.top_level_files(&layout.program())?.into_iter().collect();

    if options.auto_include_dependencies {
        for unit in layout.dependencies() {
            let unit_files = layout.top_level_files(&unit)?;
            tracing::debug!(
                "Auto-including {} file(s) from dependency '{}'",
                unit_files.len(),
                unit.name()
            );
            files.extend(unit_files);
        }
    }

    files.sort();
    Ok(files)
}
