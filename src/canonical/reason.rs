//! Score contributions and scored candidates.

use std::fmt;
use std::sync::Arc;

use crate::model::ModuleRecord;

/// One contribution to a candidate's score.
///
/// Every variant carries the data its delta is computed from, so the
/// diagnostic trail can be compared exactly in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScoreReason {
    /// The module explicitly claims the symbol.
    CanonicalFor,
    /// The module is deprecated.
    Deprecated,
    /// The module's name shares no segment with its distribution unit's name.
    PackageNameNotEmbedded,
    /// Bonus proportional to the module name's segment count.
    LongName { segments: usize },
    /// Share of location segments also present in the module name.
    SharedLocation { shared: usize, total: usize },
    /// Count of (location word, module segment) pairs where the word starts
    /// with the segment.
    LocationPrefix { matches: usize },
}

impl ScoreReason {
    pub fn delta(&self) -> f64 {
        match *self {
            ScoreReason::CanonicalFor => 5.0,
            ScoreReason::Deprecated => -1.0,
            ScoreReason::PackageNameNotEmbedded => 1.0,
            ScoreReason::LongName { segments } => 0.01 * segments as f64,
            ScoreReason::SharedLocation { shared, total } => {
                if total == 0 {
                    0.0
                } else {
                    shared as f64 / total as f64
                }
            }
            ScoreReason::LocationPrefix { matches } => 0.001 * matches as f64,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreReason::CanonicalFor => "canonicalFor",
            ScoreReason::Deprecated => "deprecated",
            ScoreReason::PackageNameNotEmbedded => "packageName",
            ScoreReason::LongName { .. } => "longName",
            ScoreReason::SharedLocation { .. } => "sharedNamePart",
            ScoreReason::LocationPrefix { .. } => "locationPartStart",
        }
    }
}

impl fmt::Display for ScoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:+}", self.label(), self.delta())
    }
}

/// A module with its accumulated score for one disambiguation.
#[derive(Clone, Debug)]
pub struct ScoredCandidate {
    module: Arc<ModuleRecord>,
    score: f64,
    reasons: Vec<ScoreReason>,
    /// Position in the candidate list; breaks exact ties.
    pub(super) order: usize,
}

impl ScoredCandidate {
    pub fn new(module: Arc<ModuleRecord>) -> Self {
        Self {
            module,
            score: 0.0,
            reasons: Vec::new(),
            order: 0,
        }
    }

    pub(super) fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Apply a contribution and record it.
    pub fn alter_score(&mut self, reason: ScoreReason) {
        self.score += reason.delta();
        self.reasons.push(reason);
    }

    pub fn module(&self) -> &Arc<ModuleRecord> {
        &self.module
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Contributions in the order they were applied.
    pub fn reasons(&self) -> &[ScoreReason] {
        &self.reasons
    }
}

impl fmt::Display for ScoredCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - [",
            self.module.name(),
            super::format_significant(self.score, 4)
        )?;
        for (i, reason) in self.reasons.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", reason)?;
        }
        f.write_str("]")
    }
}
