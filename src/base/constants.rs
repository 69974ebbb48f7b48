//! Domain constants shared by the layout, the model and the scorer.

/// URI scheme prefix of package-relative locations (`package:foo/bar.ext`).
pub const PACKAGE_SCHEME: &str = "package:";

/// Directory (relative to a distribution root) holding public modules.
pub const LIBRARY_DIR: &str = "lib";

/// Directory (relative to [`LIBRARY_DIR`]) holding private implementation files.
pub const PRIVATE_DIR: &str = "src";

/// Separators used when splitting a module or distribution name into segments.
pub const NAME_SEPARATORS: &[char] = &['.', '_', '/', '\\', ';', ':'];

/// Separators used when splitting a declaring-file location into segments.
pub const LOCATION_SEPARATORS: &[char] = &['/', '\\', ';', '.'];

/// Separator of compound words inside a single location segment.
pub const WORD_SEPARATOR: char = '_';

/// Default minimum confidence margin for canonical-owner picks.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.1;
