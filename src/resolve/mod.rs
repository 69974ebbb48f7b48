//! The external resolver boundary.
//!
//! Parsing and analysing source files is not done here. The crawler consults
//! a [`ModuleResolver`] for two kinds of facts:
//!
//! - [`ModuleResolver::resolve`]: the heavyweight per-file result, requested
//!   once per candidate file and dropped as soon as it has been delivered;
//! - [`ModuleResolver::links`]: the lightweight element view of a module
//!   (its file, direct imports/exports and part files), used to compute the
//!   transitive set of files a module references.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::model::{ModuleId, ModuleRecord};

/// A link to another module: its identity and its own file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModuleRef {
    pub id: ModuleId,
    pub path: PathBuf,
}

impl ModuleRef {
    pub fn new(id: impl Into<ModuleId>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }
}

/// The import/export/part structure of one module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleLinks {
    /// The module's own file.
    pub path: PathBuf,
    /// Directly imported modules.
    pub imports: Vec<ModuleRef>,
    /// Directly exported (re-exported) modules.
    pub exports: Vec<ModuleRef>,
    /// Part files contributing to this module.
    pub parts: Vec<PathBuf>,
}

impl ModuleLinks {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_imports<I: IntoIterator<Item = ModuleRef>>(mut self, imports: I) -> Self {
        self.imports.extend(imports);
        self
    }

    pub fn with_exports<I: IntoIterator<Item = ModuleRef>>(mut self, exports: I) -> Self {
        self.exports.extend(exports);
        self
    }

    pub fn with_parts<I, P>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.parts.extend(parts.into_iter().map(Into::into));
        self
    }

    /// Imported then exported modules, in declaration order.
    pub fn linked_modules(&self) -> impl Iterator<Item = &ModuleRef> {
        self.imports.iter().chain(self.exports.iter())
    }
}

/// A fully resolved module.
#[derive(Clone, Debug)]
pub struct ResolvedModule {
    pub record: Arc<ModuleRecord>,
    pub links: ModuleLinks,
}

impl ResolvedModule {
    pub fn new(record: impl Into<Arc<ModuleRecord>>, links: ModuleLinks) -> Self {
        Self {
            record: record.into(),
            links,
        }
    }

    pub fn id(&self) -> &ModuleId {
        self.record.id()
    }
}

/// Outcome of resolving a single file.
#[derive(Clone, Debug)]
pub enum Resolution {
    /// The file is a standalone module.
    Module(ResolvedModule),
    /// The file is a fragment owned by some module.
    Part,
    /// The file could not be turned into a module (soft failure).
    ///
    /// Treated like [`Resolution::Part`]: classified once, never retried.
    Unresolvable(String),
}

/// A hard resolver fault. Ends the crawl.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Failed(String),
}

impl ResolveError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Source of resolved modules.
pub trait ModuleResolver {
    /// Resolve `path` into a module, or classify it as a part.
    fn resolve(&mut self, path: &Path) -> Result<Resolution, ResolveError>;

    /// Lightweight structure of an already-known module.
    ///
    /// Returns `None` for modules the resolver has not analysed yet. The
    /// module's own file, known from the [`ModuleRef`] pointing at it, is
    /// still part of the file closure; only its onward edges are skipped
    /// until it is resolved itself.
    fn links(&self, id: &ModuleId) -> Option<ModuleLinks>;
}
