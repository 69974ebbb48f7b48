//! A complete discovery run: ordinary crawl, include check, special crawl.

use std::path::PathBuf;

use indexmap::IndexSet;

use super::crawler::{CrawlMode, DiscoveryCrawler, ModuleSink};
use super::progress::{ProgressReporter, TracingProgress};
use super::state::DiscoveryState;
use crate::error::{DocgraphError, Result};
use crate::project::{DiscoveryOptions, OverlaySource, PackageLayout, initial_files};
use crate::resolve::ModuleResolver;

/// Outcome of a [`DiscoverySession`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Modules delivered through [`ModuleSink::on_module`].
    pub modules: usize,
    /// Modules delivered through [`ModuleSink::on_special_module`].
    pub special_modules: usize,
    /// Files classified as parts.
    pub known_parts: usize,
    /// Passes over both crawls.
    pub passes: usize,
    /// Simple names of all delivered modules, in delivery order.
    pub discovered_names: Vec<String>,
}

/// Drives discovery for one run.
pub struct DiscoverySession<'a> {
    resolver: &'a mut dyn ModuleResolver,
    layout: &'a dyn PackageLayout,
    overlays: &'a dyn OverlaySource,
    options: &'a DiscoveryOptions,
    progress: Box<dyn ProgressReporter + 'a>,
}

impl<'a> DiscoverySession<'a> {
    pub fn new(
        resolver: &'a mut dyn ModuleResolver,
        layout: &'a dyn PackageLayout,
        overlays: &'a dyn OverlaySource,
        options: &'a DiscoveryOptions,
    ) -> Self {
        Self {
            resolver,
            layout,
            overlays,
            options,
            progress: Box::new(TracingProgress::default()),
        }
    }

    pub fn with_progress(mut self, progress: impl ProgressReporter + 'a) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Discover every module and deliver it to `sink`.
    ///
    /// The ordinary crawl runs to completion before the special crawl
    /// starts; the special crawl only covers special files that were not
    /// part of the initial file set.
    pub fn run(mut self, sink: &mut dyn ModuleSink) -> Result<DiscoveryReport> {
        self.options.validate(self.layout)?;

        let files = initial_files(self.layout, self.options)?;
        let special_files: IndexSet<PathBuf> = self
            .layout
            .special_files()
            .into_iter()
            .filter(|f| !files.contains(f))
            .collect();

        let mut state = DiscoveryState::new();
        let mut crawler = DiscoveryCrawler::new(
            &mut *self.resolver,
            self.layout,
            self.overlays,
            self.options,
            &mut *self.progress,
        );

        let ordinary = crawler.crawl(files, CrawlMode::Ordinary, &mut state, sink)?;
        check_for_missing_includes(self.options, &state)?;
        let special = crawler.crawl(special_files, CrawlMode::Special, &mut state, sink)?;

        Ok(DiscoveryReport {
            modules: ordinary.delivered,
            special_modules: special.delivered,
            known_parts: state.known_parts().len(),
            passes: ordinary.passes + special.passes,
            discovered_names: state.processed_names().map(str::to_string).collect(),
        })
    }
}

/// Fail if the include list names modules that were never discovered.
///
/// The error lists every module the ordinary crawl resolved, including those
/// the include list filtered out, so typos can be spotted.
pub(super) fn check_for_missing_includes(
    options: &DiscoveryOptions,
    state: &DiscoveryState,
) -> Result<()> {
    if options.include.is_empty() {
        return Ok(());
    }

    let known: IndexSet<&str> = state.resolved_names().collect();
    let missing: Vec<String> = options
        .include
        .iter()
        .filter(|name| !known.contains(name.as_str()) && !options.exclude.contains(*name))
        .cloned()
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    Err(DocgraphError::missing_includes(
        missing,
        known.into_iter().map(str::to_string),
    ))
}
