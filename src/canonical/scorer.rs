//! The canonicalization scorer.

use std::sync::Arc;

use super::canonicalizable::Canonicalizable;
use super::reason::{ScoreReason, ScoredCandidate};
use crate::base::constants::DEFAULT_MIN_CONFIDENCE;
use crate::base::split_word_parts;
use crate::diagnostics::{Warning, WarningCollector, WarningKind};
use crate::model::ModuleRecord;
use crate::project::DiscoveryOptions;

/// The outcome of ranking candidates for one symbol.
#[derive(Clone, Debug)]
pub struct Canonicalization {
    /// Candidates in ascending score order; the last one is the pick.
    ranked: Vec<ScoredCandidate>,
    /// Highest minus second-highest score (infinite with one candidate).
    confidence: f64,
}

impl Canonicalization {
    /// Rank already-scored candidates, given in candidate-list order.
    ///
    /// Sorted ascending by score; exact ties go to the earlier candidate.
    /// Returns `None` for an empty list.
    pub fn from_scored(scored: Vec<ScoredCandidate>) -> Option<Self> {
        if scored.is_empty() {
            return None;
        }

        let mut ranked: Vec<ScoredCandidate> = scored
            .into_iter()
            .enumerate()
            .map(|(order, candidate)| candidate.with_order(order))
            .collect();
        ranked.sort_by(|a, b| {
            a.score()
                .total_cmp(&b.score())
                .then_with(|| b.order.cmp(&a.order))
        });

        let confidence = match ranked.len() {
            1 => f64::INFINITY,
            n => ranked[n - 1].score() - ranked[n - 2].score(),
        };

        Some(Self { ranked, confidence })
    }

    /// The chosen module.
    pub fn canonical(&self) -> &Arc<ModuleRecord> {
        // `ranked` is never empty; see `from_scored`.
        self.ranked[self.ranked.len() - 1].module()
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn ranked(&self) -> &[ScoredCandidate] {
        &self.ranked
    }

    pub fn is_low_confidence(&self, min_confidence: f64) -> bool {
        self.confidence < min_confidence
    }

    /// Build the low-confidence warning for `qualified_name`.
    pub fn warning(&self, qualified_name: &str) -> Warning {
        let names: Vec<&str> = self.ranked.iter().map(|c| c.module().name()).collect();
        let message = format!(
            "{}, [{}] -> {} (confidence: {})",
            qualified_name,
            names.join(", "),
            self.canonical().name(),
            format_significant(self.confidence, 4)
        );
        Warning::new(WarningKind::AmbiguousReexport, qualified_name, message)
            .with_extended_debug(self.ranked.iter().map(|c| c.to_string()))
    }
}

/// Ranks candidate modules for a symbol and picks the most plausible owner.
///
/// Holds no mutable state; one scorer can serve any number of symbols,
/// from any number of threads.
#[derive(Clone, Copy, Debug)]
pub struct CanonicalizationScorer {
    min_confidence: f64,
}

impl Default for CanonicalizationScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CONFIDENCE)
    }
}

impl CanonicalizationScorer {
    pub fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    /// A scorer honouring `ambiguousReexportScorerMinConfidence`.
    pub fn from_options(options: &DiscoveryOptions) -> Self {
        Self::new(options.ambiguous_reexport_min_confidence)
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Score a single module as a home for `symbol`.
    pub fn score<S>(&self, symbol: &S, module: &Arc<ModuleRecord>) -> ScoredCandidate
    where
        S: Canonicalizable + ?Sized,
    {
        let mut candidate = ScoredCandidate::new(Arc::clone(module));

        if module.claims(symbol.qualified_name()) {
            candidate.alter_score(ScoreReason::CanonicalFor);
        }

        if module.is_deprecated() {
            candidate.alter_score(ScoreReason::Deprecated);
        }

        let name_segments = module.name_segments();
        if name_segments.is_disjoint(module.unit().name_segments()) {
            candidate.alter_score(ScoreReason::PackageNameNotEmbedded);
        }

        candidate.alter_score(ScoreReason::LongName {
            segments: name_segments.len(),
        });

        let location = symbol.location_segments();
        if location.is_empty() {
            tracing::debug!(
                "[CANONICAL] '{}' has no location segments; scoring '{}' on name only",
                symbol.qualified_name(),
                module.name()
            );
            return candidate;
        }

        candidate.alter_score(ScoreReason::SharedLocation {
            shared: name_segments.intersection_len(location),
            total: location.len(),
        });

        let matches = location
            .iter()
            .flat_map(split_word_parts)
            .map(|word| {
                name_segments
                    .iter()
                    .filter(|segment| word.starts_with(segment))
                    .count()
            })
            .sum();
        candidate.alter_score(ScoreReason::LocationPrefix { matches });

        candidate
    }

    /// Rank `candidates` without emitting anything.
    ///
    /// Candidates are sorted ascending by score. Exact ties are broken in
    /// favour of the candidate that appears first in `candidates`.
    /// Returns `None` for an empty candidate list.
    pub fn rank<S>(&self, symbol: &S, candidates: &[Arc<ModuleRecord>]) -> Option<Canonicalization>
    where
        S: Canonicalizable + ?Sized,
    {
        let scored = candidates
            .iter()
            .map(|module| self.score(symbol, module))
            .collect();
        Canonicalization::from_scored(scored)
    }

    /// Rank `candidates` and record a warning when the pick is ambiguous.
    pub fn canonicalize<S>(
        &self,
        symbol: &S,
        candidates: &[Arc<ModuleRecord>],
        warnings: &mut WarningCollector,
    ) -> Option<Arc<ModuleRecord>>
    where
        S: Canonicalizable + ?Sized,
    {
        let decision = self.rank(symbol, candidates)?;
        if decision.is_low_confidence(self.min_confidence) {
            warnings.add(decision.warning(symbol.qualified_name()));
        }
        Some(Arc::clone(decision.canonical()))
    }
}

/// Format `value` with `digits` significant digits (`0.02` → `"0.02000"`).
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return format!("{:.*}", digits.saturating_sub(1), 0.0);
    }
    let decimals_for = |magnitude: i32| (digits as i32 - 1 - magnitude).max(0) as usize;
    let mut magnitude = value.abs().log10().floor() as i32;

    // Rounding can carry into the next power of ten (9.99995 → 10.00).
    let text = format!("{:.*}", decimals_for(magnitude), value);
    match text.parse::<f64>() {
        Ok(rounded) if rounded.abs() >= 10f64.powi(magnitude + 1) => {
            magnitude += 1;
            format!("{:.*}", decimals_for(magnitude), value)
        }
        _ => text,
    }
}
