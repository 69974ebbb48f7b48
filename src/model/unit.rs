//! Distribution units (packages) that own modules.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::base::{Segments, name_segments};

/// What role a distribution unit plays in a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// The platform / standard distribution.
    Platform,
    /// The program being documented.
    Program,
    /// Any other dependency.
    Dependency,
}

/// A named collection of modules shipped and versioned together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionUnit {
    name: Arc<str>,
    name_segments: Segments,
    kind: UnitKind,
    root: Option<PathBuf>,
}

impl DistributionUnit {
    pub fn new(name: impl Into<Arc<str>>, kind: UnitKind) -> Self {
        let name = name.into();
        Self {
            name_segments: name_segments(&name),
            name,
            kind,
            root: None,
        }
    }

    /// Attach the directory this unit lives in.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_segments(&self) -> &Segments {
        &self.name_segments
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn is_platform(&self) -> bool {
        self.kind == UnitKind::Platform
    }
}
