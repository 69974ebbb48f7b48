//! Module records.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexSet;

use super::unit::DistributionUnit;
use crate::base::constants::{LIBRARY_DIR, PRIVATE_DIR};
use crate::base::{Segments, name_segments};

/// Opaque, resolver-assigned identity of a resolved module.
///
/// Cheap to clone; equality and hashing follow the resolver's key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(Arc<str>);

impl ModuleId {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// A resolved module as seen by the documentation graph.
///
/// Immutable after construction; build one with [`ModuleRecord::builder`].
#[derive(Clone, Debug)]
pub struct ModuleRecord {
    id: ModuleId,
    name: Arc<str>,
    name_segments: Segments,
    path: PathBuf,
    unit: Arc<DistributionUnit>,
    is_deprecated: bool,
    is_public: bool,
    canonical_for: IndexSet<String>,
    exported_names: IndexSet<String>,
}

impl ModuleRecord {
    pub fn builder(
        id: impl Into<ModuleId>,
        name: impl Into<Arc<str>>,
        path: impl Into<PathBuf>,
        unit: Arc<DistributionUnit>,
    ) -> ModuleRecordBuilder {
        ModuleRecordBuilder {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            unit,
            is_deprecated: false,
            canonical_for: IndexSet::new(),
            exported_names: IndexSet::new(),
        }
    }

    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    /// The module's simple (declared) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_segments(&self) -> &Segments {
        &self.name_segments
    }

    /// The module's own source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn unit(&self) -> &Arc<DistributionUnit> {
        &self.unit
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    /// Whether the module may host documentation pages.
    ///
    /// Modules under the unit's private subtree, or with a `_`-prefixed name,
    /// are not public.
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// Fully-qualified names this module explicitly claims to own.
    pub fn canonical_for(&self) -> &IndexSet<String> {
        &self.canonical_for
    }

    pub fn claims(&self, qualified_name: &str) -> bool {
        self.canonical_for.contains(qualified_name)
    }

    /// Fully-qualified names of the symbols visible through this module.
    pub fn exported_names(&self) -> &IndexSet<String> {
        &self.exported_names
    }

    pub fn exposes(&self, qualified_name: &str) -> bool {
        self.exported_names.contains(qualified_name)
    }
}

impl PartialEq for ModuleRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ModuleRecord {}

/// Builder for [`ModuleRecord`].
#[derive(Debug)]
pub struct ModuleRecordBuilder {
    id: ModuleId,
    name: Arc<str>,
    path: PathBuf,
    unit: Arc<DistributionUnit>,
    is_deprecated: bool,
    canonical_for: IndexSet<String>,
    exported_names: IndexSet<String>,
}

impl ModuleRecordBuilder {
    pub fn deprecated(mut self, is_deprecated: bool) -> Self {
        self.is_deprecated = is_deprecated;
        self
    }

    pub fn canonical_for<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.canonical_for.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn exports<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exported_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> ModuleRecord {
        let is_public = !self.name.starts_with('_') && !in_private_tree(&self.path, &self.unit);
        ModuleRecord {
            name_segments: name_segments(&self.name),
            id: self.id,
            name: self.name,
            path: self.path,
            unit: self.unit,
            is_deprecated: self.is_deprecated,
            is_public,
            canonical_for: self.canonical_for,
            exported_names: self.exported_names,
        }
    }
}

fn in_private_tree(path: &Path, unit: &DistributionUnit) -> bool {
    match unit.root() {
        Some(root) => path.starts_with(root.join(LIBRARY_DIR).join(PRIVATE_DIR)),
        None => false,
    }
}
