//! Project management: options, package layout, initial file set.

mod directory_layout;
mod layout;
mod options;

pub use directory_layout::DirectoryLayout;
pub use layout::{OverlaySource, PackageLayout, initial_files};
pub use options::DiscoveryOptions;
