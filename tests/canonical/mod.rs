//! Canonicalization tests
//!
//! Tests for picking a symbol's documentation home:
//! - Explicit `canonical_for` claims dominate the heuristics
//! - Confidence thresholds and warning text
//! - Deprecation and tie-breaking
//! - Graph-level candidate selection

pub mod tests_graph;
