//! Support for running external tools over documentation snippets.
//!
//! Only the run-scoped temp-file context lives here; the subprocess runner
//! is provided by the embedding application.

mod temp_files;

pub use temp_files::TempFileContext;
