//! # Discovery
//!
//! Finds the complete set of modules reachable from a starting file set.
//!
//! The set of files to inspect is not known up front. The
//! [`DiscoveryCrawler`] repeatedly resolves the files it knows about, follows
//! their import/export/part relationships to new files, and pulls in the
//! top-level modules of every newly seen distribution unit, until a pass
//! discovers nothing the previous pass had not already seen.
//!
//! ```text
//! initial files ──► pass 1 ──► pass 2 ──► … ──► fixed point
//!                     │          │
//!                     ▼          ▼
//!               ModuleSink::on_module (each module exactly once)
//! ```
//!
//! Resolution is strictly sequential: one resolver call is outstanding at a
//! time and each heavyweight result is handed to the sink before the next
//! file is resolved.

mod crawler;
mod progress;
mod references;
mod session;
mod state;

pub use crawler::{CrawlMode, CrawlSummary, DiscoveryCrawler, ModuleSink};
pub use progress::{NoProgress, ProgressReporter, TracingProgress};
pub use references::files_referenced_by;
pub use session::{DiscoveryReport, DiscoverySession};
pub use state::DiscoveryState;
