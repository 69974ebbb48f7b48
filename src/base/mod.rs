//! Foundation types for the docgraph toolchain.
//!
//! This module provides the primitives used throughout the crate:
//! - [`Segments`] - Ordered token sets derived from names and locations
//! - [`name_segments`], [`location_segments`] - Token splitting rules
//! - Domain constants (URI scheme, library/private directory names)
//!
//! This module has NO dependencies on other docgraph modules.

pub mod constants;
mod segments;

pub use segments::{Segments, location_segments, name_segments, split_word_parts};
