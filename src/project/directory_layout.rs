//! Filesystem-backed package layout.
//!
//! Each distribution unit is a directory. Public modules live under
//! `<root>/lib`; everything under `<root>/lib/src` is private and never
//! seeded as a top-level module.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use walkdir::WalkDir;

use super::layout::{OverlaySource, PackageLayout};
use crate::base::constants::{LIBRARY_DIR, PRIVATE_DIR};
use crate::error::Result;
use crate::model::{DistributionUnit, UnitKind};

/// Package layout over unit directories on disk.
#[derive(Clone, Debug)]
pub struct DirectoryLayout {
    program: Arc<DistributionUnit>,
    dependencies: Vec<Arc<DistributionUnit>>,
    platform: Option<Arc<DistributionUnit>>,
    extension: String,
    special_files: Vec<PathBuf>,
    /// Directory → `include_external` entries of the overlay living there.
    overlays: IndexMap<PathBuf, Vec<PathBuf>>,
    requires_platform_root: bool,
}

impl DirectoryLayout {
    /// A layout whose program lives at `root`; module files end in `.{extension}`.
    pub fn new(
        name: impl Into<Arc<str>>,
        root: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            program: Arc::new(DistributionUnit::new(name, UnitKind::Program).with_root(root)),
            dependencies: Vec::new(),
            platform: None,
            extension: extension.into(),
            special_files: Vec::new(),
            overlays: IndexMap::new(),
            requires_platform_root: false,
        }
    }

    pub fn with_dependency(mut self, name: impl Into<Arc<str>>, root: impl Into<PathBuf>) -> Self {
        self.dependencies.push(Arc::new(
            DistributionUnit::new(name, UnitKind::Dependency).with_root(root),
        ));
        self
    }

    pub fn with_platform(mut self, name: impl Into<Arc<str>>, root: impl Into<PathBuf>) -> Self {
        self.platform = Some(Arc::new(
            DistributionUnit::new(name, UnitKind::Platform).with_root(root),
        ));
        self
    }

    pub fn with_special_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.special_files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Register an overlay in `dir`; relative entries resolve against `dir`.
    pub fn with_overlay<I, P>(mut self, dir: impl Into<PathBuf>, include_external: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let dir = dir.into();
        let entries = include_external
            .into_iter()
            .map(|p| {
                let p: PathBuf = p.into();
                if p.is_relative() { dir.join(p) } else { p }
            })
            .collect();
        self.overlays.insert(dir, entries);
        self
    }

    pub fn requiring_platform_root(mut self) -> Self {
        self.requires_platform_root = true;
        self
    }

    fn units(&self) -> impl Iterator<Item = &Arc<DistributionUnit>> {
        std::iter::once(&self.program)
            .chain(self.dependencies.iter())
            .chain(self.platform.iter())
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.extension)
    }

    /// Module files under `dir`, skipping `skip` and its subtree. Sorted.
    fn collect_files(&self, dir: &Path, skip: Option<&Path>) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| skip.is_none_or(|skip| e.path() != skip));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                std::io::Error::other(format!("Failed to walk {}: {}", dir.display(), e))
            })?;
            if entry.file_type().is_file() && self.has_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}

impl PackageLayout for DirectoryLayout {
    fn program(&self) -> Arc<DistributionUnit> {
        Arc::clone(&self.program)
    }

    fn dependencies(&self) -> Vec<Arc<DistributionUnit>> {
        self.dependencies.clone()
    }

    fn unit_for(&self, path: &Path) -> Option<Arc<DistributionUnit>> {
        self.units()
            .filter_map(|unit| {
                let root = unit.root()?;
                path.starts_with(root)
                    .then(|| (root.components().count(), unit))
            })
            .max_by_key(|(depth, _)| *depth)
            .map(|(_, unit)| Arc::clone(unit))
    }

    fn top_level_files(&self, unit: &DistributionUnit) -> Result<Vec<PathBuf>> {
        let Some(root) = unit.root() else {
            return Ok(Vec::new());
        };
        let lib = root.join(LIBRARY_DIR);
        let private = lib.join(PRIVATE_DIR);
        self.collect_files(&lib, Some(&private))
    }

    fn platform_manifest(&self) -> Result<Vec<PathBuf>> {
        match self.platform.as_ref().and_then(|p| p.root()) {
            Some(root) => self.collect_files(root, None),
            None => Ok(Vec::new()),
        }
    }

    fn special_files(&self) -> Vec<PathBuf> {
        self.special_files.clone()
    }

    fn requires_platform_root(&self) -> bool {
        self.requires_platform_root
    }
}

impl OverlaySource for DirectoryLayout {
    /// The nearest overlay at or above the file's directory wins.
    fn include_external(&self, path: &Path) -> Vec<PathBuf> {
        path.ancestors()
            .skip(1)
            .find_map(|dir| self.overlays.get(dir))
            .cloned()
            .unwrap_or_default()
    }
}
