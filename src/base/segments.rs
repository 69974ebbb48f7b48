//! Segment splitting for heuristic name matching.
//!
//! Module names, distribution names and declaring-file locations are broken
//! into ordered sets of tokens. Matching between these sets drives the
//! canonicalization scorer.

use indexmap::IndexSet;
use smol_str::SmolStr;

use super::constants::{LOCATION_SEPARATORS, NAME_SEPARATORS, PACKAGE_SCHEME, WORD_SEPARATOR};

/// An ordered set of non-empty tokens.
///
/// Insertion order is preserved so diagnostics and scores are reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segments(IndexSet<SmolStr>);

impl Segments {
    /// Create an empty segment set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, segment: &str) -> bool {
        self.0.contains(segment)
    }

    /// Iterate segments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(SmolStr::as_str)
    }

    /// Number of segments present in both sets.
    pub fn intersection_len(&self, other: &Segments) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Returns true if the two sets share no segment.
    pub fn is_disjoint(&self, other: &Segments) -> bool {
        self.0.is_disjoint(&other.0)
    }

    fn push(&mut self, token: &str) {
        if !token.is_empty() {
            self.0.insert(SmolStr::new(token));
        }
    }
}

impl<'a> FromIterator<&'a str> for Segments {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut segments = Segments::new();
        for token in iter {
            segments.push(token);
        }
        segments
    }
}

/// Split on every occurrence of the `package:` scheme, then on `separators`.
fn split_with(text: &str, separators: &[char]) -> Segments {
    text.split(PACKAGE_SCHEME)
        .flat_map(|chunk| chunk.split(separators))
        .collect()
}

/// Segments of a module or distribution name.
///
/// `"foo_bar.baz"` → `{foo, bar, baz}`.
pub fn name_segments(name: &str) -> Segments {
    split_with(name, NAME_SEPARATORS)
}

/// Segments of a declaring-file location.
///
/// `"package:shapes/src/round_things.ext"` → `{shapes, src, round_things, ext}`.
/// Underscores are kept; see [`split_word_parts`].
pub fn location_segments(location: &str) -> Segments {
    split_with(location, LOCATION_SEPARATORS)
}

/// Split a single location segment into its compound-word parts.
pub fn split_word_parts(segment: &str) -> impl Iterator<Item = &str> {
    segment.split(WORD_SEPARATOR)
}
