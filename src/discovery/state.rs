//! Bookkeeping shared by every crawl of a run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;

use crate::model::ModuleId;

/// What has been discovered so far.
///
/// Both sets only ever grow. A file, once classified as a module file or as
/// a part, keeps that classification for the rest of the run.
#[derive(Clone, Debug, Default)]
pub struct DiscoveryState {
    /// Delivered modules and their simple names, in delivery order.
    processed_modules: IndexMap<ModuleId, Arc<str>>,
    /// Simple names of every module resolved by an ordinary crawl, delivered
    /// or filtered out.
    resolved_names: IndexSet<Arc<str>>,
    /// Files that are fragments of some module.
    known_parts: IndexSet<PathBuf>,
    /// Files that resolved to a module.
    module_files: FxHashMap<PathBuf, ModuleId>,
}

impl DiscoveryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` has already been delivered.
    pub fn is_processed(&self, id: &ModuleId) -> bool {
        self.processed_modules.contains_key(id)
    }

    /// Record a delivery. Returns false if `id` was already processed.
    pub fn mark_processed(&mut self, id: ModuleId, name: impl Into<Arc<str>>) -> bool {
        if self.processed_modules.contains_key(&id) {
            return false;
        }
        self.processed_modules.insert(id, name.into());
        true
    }

    pub fn processed_count(&self) -> usize {
        self.processed_modules.len()
    }

    /// Simple names of delivered modules, in delivery order.
    pub fn processed_names(&self) -> impl Iterator<Item = &str> {
        self.processed_modules.values().map(|name| name.as_ref())
    }

    /// Remember that a module named `name` was resolved.
    pub fn record_resolved_name(&mut self, name: &str) {
        if !self.resolved_names.contains(name) {
            self.resolved_names.insert(Arc::from(name));
        }
    }

    /// Names of every module resolved so far, in first-seen order.
    pub fn resolved_names(&self) -> impl Iterator<Item = &str> {
        self.resolved_names.iter().map(|name| name.as_ref())
    }

    pub fn is_known_part(&self, path: &Path) -> bool {
        self.known_parts.contains(path)
    }

    /// Classify `path` as a part. Returns false if it was already known.
    pub fn mark_part(&mut self, path: PathBuf) -> bool {
        debug_assert!(
            !self.module_files.contains_key(&path),
            "{} is already classified as a module file",
            path.display()
        );
        self.known_parts.insert(path)
    }

    pub fn known_parts(&self) -> &IndexSet<PathBuf> {
        &self.known_parts
    }

    /// Classify `path` as the file of module `id`.
    pub fn record_module_file(&mut self, path: PathBuf, id: ModuleId) {
        debug_assert!(
            !self.known_parts.contains(&path),
            "{} is already classified as a part",
            path.display()
        );
        self.module_files.entry(path).or_insert(id);
    }

    /// The module a file resolved to, if it has been classified as one.
    pub fn module_for_file(&self, path: &Path) -> Option<&ModuleId> {
        self.module_files.get(path)
    }
}
