//! An in-memory world of distribution units, modules and part files.
//!
//! Module identities are the module's file path, so links can be written as
//! plain paths:
//!
//! ```ignore
//! let (resolver, layout) = World::new("app")
//!     .dependency("shapes")
//!     .module("/ws/app/lib/app.ext", "app", &["/ws/shapes/lib/shapes.ext"], &[], &[])
//!     .module("/ws/shapes/lib/shapes.ext", "shapes", &[], &[], &[])
//!     .build();
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use docgraph::error::Result;
use docgraph::model::{DistributionUnit, ModuleId, ModuleRecord, UnitKind};
use docgraph::project::{OverlaySource, PackageLayout};
use docgraph::resolve::{
    ModuleLinks, ModuleRef, ModuleResolver, Resolution, ResolveError, ResolvedModule,
};

#[derive(Clone, Debug)]
struct ModuleEntry {
    record: Arc<ModuleRecord>,
    links: ModuleLinks,
}

/// Builder for a resolver/layout pair sharing one set of facts.
#[derive(Debug)]
pub struct World {
    program: Arc<DistributionUnit>,
    dependencies: Vec<Arc<DistributionUnit>>,
    platform: Option<Arc<DistributionUnit>>,
    modules: Vec<(PathBuf, ModuleEntry)>,
    parts: HashSet<PathBuf>,
    unresolvable: HashSet<PathBuf>,
    failing: HashSet<PathBuf>,
    overlays: HashMap<PathBuf, Vec<PathBuf>>,
    special: Vec<PathBuf>,
    requires_platform_root: bool,
    lazy_links: bool,
}

impl World {
    /// A world whose program unit `name` lives at `/ws/<name>`.
    pub fn new(name: &str) -> Self {
        Self::new_at(name, format!("/ws/{name}"))
    }

    pub fn new_at(name: &str, root: impl Into<PathBuf>) -> Self {
        Self {
            program: Arc::new(DistributionUnit::new(name, UnitKind::Program).with_root(root)),
            dependencies: Vec::new(),
            platform: None,
            modules: Vec::new(),
            parts: HashSet::new(),
            unresolvable: HashSet::new(),
            failing: HashSet::new(),
            overlays: HashMap::new(),
            special: Vec::new(),
            requires_platform_root: false,
            lazy_links: false,
        }
    }

    /// A dependency unit living at `/ws/<name>`.
    pub fn dependency(self, name: &str) -> Self {
        self.dependency_at(name, format!("/ws/{name}"))
    }

    pub fn dependency_at(mut self, name: &str, root: impl Into<PathBuf>) -> Self {
        self.dependencies.push(Arc::new(
            DistributionUnit::new(name, UnitKind::Dependency).with_root(root),
        ));
        self
    }

    /// The platform unit, living at `/<name>`.
    pub fn platform(mut self, name: &str) -> Self {
        self.platform = Some(Arc::new(
            DistributionUnit::new(name, UnitKind::Platform).with_root(format!("/{name}")),
        ));
        self
    }

    /// A plain module with import, export and part links.
    pub fn module(
        self,
        path: &str,
        name: &str,
        imports: &[&str],
        exports: &[&str],
        parts: &[&str],
    ) -> Self {
        let record = self.record(path, name).build();
        self.with_record(record, imports, exports, parts)
    }

    /// A module exposing `symbols`, optionally claiming some and deprecated.
    pub fn module_exposing(
        self,
        path: &str,
        name: &str,
        exports: &[&str],
        symbols: &[&str],
        claims: &[&str],
    ) -> Self {
        let record = self
            .record(path, name)
            .exports(symbols.iter().copied())
            .canonical_for(claims.iter().copied())
            .build();
        self.with_record(record, &[], exports, &[])
    }

    pub fn unresolvable(mut self, path: &str) -> Self {
        self.unresolvable.insert(PathBuf::from(path));
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(PathBuf::from(path));
        self
    }

    /// Per-file overlay asking to include `externals`.
    pub fn overlay(mut self, path: &str, externals: &[&str]) -> Self {
        self.overlays.insert(
            PathBuf::from(path),
            externals.iter().map(PathBuf::from).collect(),
        );
        self
    }

    pub fn special(mut self, path: &str) -> Self {
        self.special.push(PathBuf::from(path));
        self
    }

    pub fn requiring_platform_root(mut self) -> Self {
        self.requires_platform_root = true;
        self
    }

    /// Only hand out links for modules that have been resolved already.
    pub fn lazy_links(mut self) -> Self {
        self.lazy_links = true;
        self
    }

    pub fn build(self) -> (FixtureResolver, FixtureLayout) {
        let by_id = self
            .modules
            .iter()
            .map(|(_, entry)| (entry.record.id().clone(), entry.links.clone()))
            .collect();
        let module_files = self.modules.iter().map(|(path, _)| path.clone()).collect();

        let resolver = FixtureResolver {
            modules: self.modules.into_iter().collect(),
            by_id,
            parts: self.parts,
            unresolvable: self.unresolvable,
            failing: self.failing,
            lazy_links: self.lazy_links,
            resolved: HashSet::new(),
            calls: Vec::new(),
        };
        let layout = FixtureLayout {
            program: self.program,
            dependencies: self.dependencies,
            platform: self.platform,
            module_files,
            overlays: self.overlays,
            special: self.special,
            requires_platform_root: self.requires_platform_root,
        };
        (resolver, layout)
    }

    fn unit_of(&self, path: &Path) -> Arc<DistributionUnit> {
        std::iter::once(&self.program)
            .chain(self.dependencies.iter())
            .chain(self.platform.iter())
            .find(|u| u.root().is_some_and(|root| path.starts_with(root)))
            .cloned()
            .unwrap_or_else(|| Arc::new(DistributionUnit::new("unknown", UnitKind::Dependency)))
    }

    fn record(&self, path: &str, name: &str) -> docgraph::model::ModuleRecordBuilder {
        ModuleRecord::builder(path, name, path, self.unit_of(Path::new(path)))
    }

    fn with_record(
        mut self,
        record: ModuleRecord,
        imports: &[&str],
        exports: &[&str],
        parts: &[&str],
    ) -> Self {
        let path = record.path().to_path_buf();
        let links = ModuleLinks::new(&path)
            .with_imports(imports.iter().map(|p| ModuleRef::new(*p, *p)))
            .with_exports(exports.iter().map(|p| ModuleRef::new(*p, *p)))
            .with_parts(parts.iter().copied());
        self.parts.extend(parts.iter().map(PathBuf::from));
        self.modules.push((
            path,
            ModuleEntry {
                record: Arc::new(record),
                links,
            },
        ));
        self
    }
}

/// Resolver over a [`World`]; records every `resolve` call.
#[derive(Debug)]
pub struct FixtureResolver {
    modules: HashMap<PathBuf, ModuleEntry>,
    by_id: HashMap<ModuleId, ModuleLinks>,
    parts: HashSet<PathBuf>,
    unresolvable: HashSet<PathBuf>,
    failing: HashSet<PathBuf>,
    lazy_links: bool,
    resolved: HashSet<ModuleId>,
    pub calls: Vec<PathBuf>,
}

impl FixtureResolver {
    /// How many times `path` was resolved.
    pub fn resolve_count(&self, path: &str) -> usize {
        self.calls.iter().filter(|c| c.as_path() == Path::new(path)).count()
    }
}

impl ModuleResolver for FixtureResolver {
    fn resolve(&mut self, path: &Path) -> std::result::Result<Resolution, ResolveError> {
        self.calls.push(path.to_path_buf());
        if self.failing.contains(path) {
            return Err(ResolveError::failed("corrupt analysis summary"));
        }
        if self.unresolvable.contains(path) {
            return Ok(Resolution::Unresolvable("not a source file".to_string()));
        }
        if self.parts.contains(path) {
            return Ok(Resolution::Part);
        }
        match self.modules.get(path) {
            Some(entry) => {
                self.resolved.insert(entry.record.id().clone());
                Ok(Resolution::Module(ResolvedModule::new(
                    Arc::clone(&entry.record),
                    entry.links.clone(),
                )))
            }
            None => Ok(Resolution::Unresolvable("no such file".to_string())),
        }
    }

    fn links(&self, id: &ModuleId) -> Option<ModuleLinks> {
        if self.lazy_links && !self.resolved.contains(id) {
            return None;
        }
        self.by_id.get(id).cloned()
    }
}

/// Layout and overlays over a [`World`].
#[derive(Debug)]
pub struct FixtureLayout {
    program: Arc<DistributionUnit>,
    dependencies: Vec<Arc<DistributionUnit>>,
    platform: Option<Arc<DistributionUnit>>,
    module_files: Vec<PathBuf>,
    overlays: HashMap<PathBuf, Vec<PathBuf>>,
    special: Vec<PathBuf>,
    requires_platform_root: bool,
}

impl FixtureLayout {
    fn units(&self) -> impl Iterator<Item = &Arc<DistributionUnit>> {
        std::iter::once(&self.program)
            .chain(self.dependencies.iter())
            .chain(self.platform.iter())
    }
}

impl PackageLayout for FixtureLayout {
    fn program(&self) -> Arc<DistributionUnit> {
        Arc::clone(&self.program)
    }

    fn dependencies(&self) -> Vec<Arc<DistributionUnit>> {
        self.dependencies.clone()
    }

    fn unit_for(&self, path: &Path) -> Option<Arc<DistributionUnit>> {
        self.units()
            .find(|u| u.root().is_some_and(|root| path.starts_with(root)))
            .cloned()
    }

    fn top_level_files(&self, unit: &DistributionUnit) -> Result<Vec<PathBuf>> {
        let Some(root) = unit.root() else {
            return Ok(Vec::new());
        };
        let lib = root.join("lib");
        let private = lib.join("src");
        let mut files: Vec<PathBuf> = self
            .module_files
            .iter()
            .filter(|f| f.starts_with(&lib) && !f.starts_with(&private))
            .cloned()
            .collect();
        files.sort();
        Ok(files)
    }

    fn platform_manifest(&self) -> Result<Vec<PathBuf>> {
        let Some(root) = self.platform.as_ref().and_then(|p| p.root()) else {
            return Ok(Vec::new());
        };
        let mut files: Vec<PathBuf> = self
            .module_files
            .iter()
            .filter(|f| f.starts_with(root))
            .cloned()
            .collect();
        files.sort();
        Ok(files)
    }

    fn special_files(&self) -> Vec<PathBuf> {
        self.special.clone()
    }

    fn requires_platform_root(&self) -> bool {
        self.requires_platform_root
    }
}

impl OverlaySource for FixtureLayout {
    fn include_external(&self, path: &Path) -> Vec<PathBuf> {
        self.overlays.get(path).cloned().unwrap_or_default()
    }
}
