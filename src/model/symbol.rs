//! Symbols whose canonical home is being decided.

use std::sync::Arc;

use crate::base::{Segments, location_segments};

/// A documentable symbol, identified by its qualified name and the file it is
/// declared in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolLocation {
    qualified_name: Arc<str>,
    location: Arc<str>,
    location_segments: Segments,
}

impl SymbolLocation {
    /// `location` is the declaring file, e.g. `package:shapes/src/circle.ext`.
    pub fn new(qualified_name: impl Into<Arc<str>>, location: impl Into<Arc<str>>) -> Self {
        let location = location.into();
        Self {
            qualified_name: qualified_name.into(),
            location_segments: location_segments(&location),
            location,
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn location_segments(&self) -> &Segments {
        &self.location_segments
    }
}
