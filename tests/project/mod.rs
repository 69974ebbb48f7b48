//! Project tests
//!
//! End-to-end discovery over real directories with [`docgraph::DirectoryLayout`].
