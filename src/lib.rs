//! # docgraph-base
//!
//! Module discovery and canonical-owner resolution for documentation graphs.
//!
//! Given a program and its dependencies, docgraph discovers the complete,
//! de-duplicated set of modules reachable from the program (following
//! imports, exports and part files to a fixed point) and decides, for every
//! symbol visible through several modules, which single module is its
//! canonical documentation home.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! graph     → Module graph assembler, canonical-home queries
//!   ↓
//! discovery → Fixed-point crawler, discovery state, session
//!   ↓
//! canonical → Canonicalization scorer and score reasons
//!   ↓
//! project   → Options, package layout, overlays, initial files
//!   ↓
//! resolve   → External resolver boundary
//!   ↓
//! model     → ModuleRecord, DistributionUnit, SymbolLocation
//!   ↓
//! base      → Constants, segment splitting
//! ```

// ============================================================================
// MODULES (dependency order: base → model → resolve → project → canonical → discovery → graph)
// ============================================================================

/// Foundation: constants and segment splitting
pub mod base;

/// Passive data model
pub mod model;

/// External resolver boundary
pub mod resolve;

/// Options, package layout, initial file set
pub mod project;

/// Canonicalization scorer
pub mod canonical;

/// Fixed-point module discovery
pub mod discovery;

/// Module graph assembler
pub mod graph;

/// Non-fatal warnings
pub mod diagnostics;

/// Fatal errors
pub mod error;

/// External-tool support (temp files)
pub mod tools;

pub use canonical::{Canonicalizable, CanonicalizationScorer};
pub use diagnostics::{Warning, WarningCollector, WarningKind};
pub use discovery::{DiscoveryReport, DiscoverySession, ModuleSink};
pub use error::{DocgraphError, Result};
pub use graph::ModuleGraph;
pub use model::{DistributionUnit, ModuleId, ModuleRecord, SymbolLocation, UnitKind};
pub use project::{DirectoryLayout, DiscoveryOptions};
pub use resolve::{ModuleLinks, ModuleRef, ModuleResolver, Resolution, ResolvedModule};
