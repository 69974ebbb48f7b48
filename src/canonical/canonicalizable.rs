//! The "can be canonicalized" capability.

use crate::base::Segments;
use crate::model::{ModuleRecord, SymbolLocation};

/// Anything whose documentation home can be chosen among several modules.
pub trait Canonicalizable {
    /// Fully-qualified name, matched against `canonical_for` claims.
    fn qualified_name(&self) -> &str;

    /// Segments of the declaring file's location.
    fn location_segments(&self) -> &Segments;

    /// The module this particular instance is documented in, if any.
    fn enclosing_module(&self) -> Option<&ModuleRecord> {
        None
    }

    /// Whether this instance lives in `canonical`, the chosen home.
    fn is_canonical(&self, canonical: Option<&ModuleRecord>) -> bool {
        match (self.enclosing_module(), canonical) {
            (Some(module), Some(canonical)) => module == canonical,
            _ => false,
        }
    }
}

impl Canonicalizable for SymbolLocation {
    fn qualified_name(&self) -> &str {
        SymbolLocation::qualified_name(self)
    }

    fn location_segments(&self) -> &Segments {
        SymbolLocation::location_segments(self)
    }
}
