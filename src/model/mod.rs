//! Passive data model: modules, distribution units and symbol locations.
//!
//! Records are created once per resolved module by the external resolver and
//! are read-only afterwards. They are shared as `Arc<ModuleRecord>` between
//! the crawler, the graph assembler and the scorer.

mod module;
mod symbol;
mod unit;

pub use module::{ModuleId, ModuleRecord, ModuleRecordBuilder};
pub use symbol::SymbolLocation;
pub use unit::{DistributionUnit, UnitKind};
