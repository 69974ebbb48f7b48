//! The fixed-point discovery crawler.

use std::path::PathBuf;

use indexmap::IndexSet;
use rustc_hash::FxHashSet;

use super::progress::ProgressReporter;
use super::references::files_referenced_by;
use super::state::DiscoveryState;
use crate::error::{DocgraphError, Result};
use crate::project::{DiscoveryOptions, OverlaySource, PackageLayout};
use crate::resolve::{ModuleResolver, Resolution, ResolvedModule};

/// Which set of modules a crawl is delivering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrawlMode {
    /// Regular modules: include filtering, overlays, unit pull-in and
    /// progress reporting all apply.
    Ordinary,
    /// Always-included synthetic anchors: every module found is delivered.
    Special,
}

/// Receiver of discovered modules.
pub trait ModuleSink {
    /// Called exactly once per discovered, non-filtered module.
    fn on_module(&mut self, module: ResolvedModule);

    /// Called exactly once per always-included anchor module.
    fn on_special_module(&mut self, module: ResolvedModule);
}

/// Counters for one crawl.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub passes: usize,
    pub resolved: usize,
    pub delivered: usize,
    pub filtered: usize,
}

/// Repeatedly resolves a growing file set until it stops growing.
pub struct DiscoveryCrawler<'a> {
    resolver: &'a mut dyn ModuleResolver,
    layout: &'a dyn PackageLayout,
    overlays: &'a dyn OverlaySource,
    options: &'a DiscoveryOptions,
    progress: &'a mut dyn ProgressReporter,
}

impl<'a> DiscoveryCrawler<'a> {
    pub fn new(
        resolver: &'a mut dyn ModuleResolver,
        layout: &'a dyn PackageLayout,
        overlays: &'a dyn OverlaySource,
        options: &'a DiscoveryOptions,
        progress: &'a mut dyn ProgressReporter,
    ) -> Self {
        Self {
            resolver,
            layout,
            overlays,
            options,
            progress,
        }
    }

    /// Crawl from `files` until the fixed point, delivering each new module
    /// to `sink`.
    ///
    /// `state` is shared between crawls of the same run so that no module is
    /// ever delivered twice.
    pub fn crawl(
        &mut self,
        files: IndexSet<PathBuf>,
        mode: CrawlMode,
        state: &mut DiscoveryState,
        sink: &mut dyn ModuleSink,
    ) -> Result<CrawlSummary> {
        let ordinary = mode == CrawlMode::Ordinary;
        let mut files = files;
        let mut summary = CrawlSummary::default();
        let mut resolved_files: FxHashSet<PathBuf> = FxHashSet::default();
        let mut known_units: FxHashSet<String> = FxHashSet::default();
        let mut last_pass: IndexSet<PathBuf> = IndexSet::new();

        tracing::info!(
            "Discovering {:?} modules from {} file(s)",
            mode,
            files.len()
        );

        loop {
            summary.passes += 1;

            let candidates: Vec<PathBuf> = files
                .iter()
                .filter(|f| !state.is_known_part(f) && !resolved_files.contains(*f))
                .cloned()
                .collect();

            if ordinary {
                self.progress.start(candidates.len());
            }

            let mut discovered: IndexSet<PathBuf> = IndexSet::new();
            for file in candidates {
                if ordinary {
                    self.progress.tick();
                }
                resolved_files.insert(file.clone());
                summary.resolved += 1;
                tracing::trace!("[DISCOVERY] resolving {}", file.display());

                let resolution = self
                    .resolver
                    .resolve(&file)
                    .map_err(|e| DocgraphError::resolve(&file, e.to_string()))?;

                let module = match resolution {
                    Resolution::Module(module) => module,
                    Resolution::Part => {
                        tracing::debug!("[DISCOVERY] {} is a part", file.display());
                        state.mark_part(file);
                        continue;
                    }
                    Resolution::Unresolvable(reason) => {
                        tracing::debug!(
                            "[DISCOVERY] {} is not a module ({}); treating as a part",
                            file.display(),
                            reason
                        );
                        state.mark_part(file);
                        continue;
                    }
                };

                discovered.extend(files_referenced_by(
                    &*self.resolver,
                    module.id(),
                    &module.links,
                ));
                state.record_module_file(file, module.id().clone());

                if ordinary {
                    state.record_resolved_name(module.record.name());
                }
                if state.is_processed(module.id()) {
                    continue;
                }
                if ordinary && !self.options.is_included(module.record.name()) {
                    tracing::trace!(
                        "[DISCOVERY] '{}' not in include list",
                        module.record.name()
                    );
                    summary.filtered += 1;
                    continue;
                }

                state.mark_processed(module.id().clone(), module.record.name());
                summary.delivered += 1;
                match mode {
                    CrawlMode::Ordinary => sink.on_module(module),
                    CrawlMode::Special => sink.on_special_module(module),
                }
            }

            if ordinary {
                self.progress.complete();
            }

            if ordinary {
                let externals = self.included_externals(&discovered);
                files.extend(discovered);
                files.extend(externals);
                self.pull_in_units(&mut files, state, &mut known_units)?;
            } else {
                files.extend(discovered);
            }

            let current: IndexSet<PathBuf> = files
                .iter()
                .filter(|f| !state.is_known_part(f))
                .cloned()
                .collect();

            tracing::debug!(
                "[DISCOVERY] pass {}: {} file(s) known, {} module(s) delivered so far",
                summary.passes,
                current.len(),
                state.processed_count()
            );

            if current.is_subset(&last_pass) {
                break;
            }
            last_pass = current;
        }

        tracing::info!(
            "Discovered {} {:?} module(s) in {} pass(es)",
            summary.delivered,
            mode,
            summary.passes
        );
        Ok(summary)
    }

    /// Extra files requested by the configuration overlays of `files`.
    fn included_externals(&self, files: &IndexSet<PathBuf>) -> IndexSet<PathBuf> {
        files
            .iter()
            .flat_map(|file| self.overlays.include_external(file))
            .collect()
    }

    /// Add the files of every distribution unit seen for the first time.
    fn pull_in_units(
        &self,
        files: &mut IndexSet<PathBuf>,
        state: &DiscoveryState,
        known_units: &mut FxHashSet<String>,
    ) -> Result<()> {
        let mut new_units = Vec::new();
        for file in files.iter().filter(|f| !state.is_known_part(f)) {
            if let Some(unit) = self.layout.unit_for(file) {
                if known_units.insert(unit.name().to_string()) {
                    new_units.push(unit);
                }
            }
        }

        for unit in new_units {
            if unit.is_platform() {
                if self.options.skip_platform_manifest {
                    continue;
                }
                let manifest = self.layout.platform_manifest()?;
                tracing::debug!(
                    "[DISCOVERY] pulling in {} platform file(s) from '{}'",
                    manifest.len(),
                    unit.name()
                );
                files.extend(manifest);
            } else {
                let top_level = self.layout.top_level_files(&unit)?;
                tracing::debug!(
                    "[DISCOVERY] pulling in {} top-level file(s) from '{}'",
                    top_level.len(),
                    unit.name()
                );
                files.extend(top_level);
            }
        }
        Ok(())
    }
}
