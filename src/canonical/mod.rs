//! Canonicalization: choosing one home module for a re-exported symbol.
//!
//! When a symbol is visible through several modules (typically via
//! re-exporting "barrel" modules) exactly one of them hosts its
//! documentation. The [`CanonicalizationScorer`] ranks the candidates with a
//! weighted heuristic and flags picks whose margin over the runner-up is
//! below the configured minimum confidence.
//!
//! ## Scoring
//!
//! | Reason | Condition | Delta |
//! |---|---|---|
//! | [`ScoreReason::CanonicalFor`] | module claims the qualified name | +5.0 |
//! | [`ScoreReason::Deprecated`] | module is deprecated | −1.0 |
//! | [`ScoreReason::PackageNameNotEmbedded`] | module and unit names share no segment | +1.0 |
//! | [`ScoreReason::LongName`] | always | +0.01 per name segment |
//! | [`ScoreReason::SharedLocation`] | location known | shared / location segments |
//! | [`ScoreReason::LocationPrefix`] | location known | +0.001 per prefix match |

mod canonicalizable;
mod reason;
mod scorer;

pub use canonicalizable::Canonicalizable;
pub use reason::{ScoreReason, ScoredCandidate};
pub use scorer::{Canonicalization, CanonicalizationScorer, format_significant};
