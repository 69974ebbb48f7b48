use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use crate::base::Segments;
use crate::canonical::{Canonicalizable, CanonicalizationScorer};
use crate::diagnostics::{Warning, WarningCollector, WarningKind};
use crate::discovery::ModuleSink;
use crate::model::{ModuleId, ModuleRecord, SymbolLocation};
use crate::resolve::ResolvedModule;

/// A symbol as seen through one particular module.
#[derive(Clone, Copy, Debug)]
pub struct ExposedSymbol<'a> {
    symbol: &'a SymbolLocation,
    module: &'a ModuleRecord,
}

impl<'a> ExposedSymbol<'a> {
    pub fn module(&self) -> &'a ModuleRecord {
        self.module
    }
}

impl Canonicalizable for ExposedSymbol<'_> {
    fn qualified_name(&self) -> &str {
        self.symbol.qualified_name()
    }

    fn location_segments(&self) -> &Segments {
        self.symbol.location_segments()
    }

    fn enclosing_module(&self) -> Option<&ModuleRecord> {
        Some(self.module)
    }
}

/// All discovered modules, in delivery order.
#[derive(Clone, Debug, Default)]
pub struct ModuleGraph {
    modules: IndexMap<ModuleId, Arc<ModuleRecord>>,
    special: IndexSet<ModuleId>,
    /// Qualified name → modules exposing it, in delivery order.
    exposures: IndexMap<String, Vec<ModuleId>>,
    scorer: CanonicalizationScorer,
}

impl ModuleGraph {
    pub fn new(scorer: CanonicalizationScorer) -> Self {
        Self {
            scorer,
            ..Self::default()
        }
    }

    /// Add a module record. Returns false if its identity is already present.
    pub fn add_module(&mut self, record: Arc<ModuleRecord>) -> bool {
        if self.modules.contains_key(record.id()) {
            return false;
        }
        for name in record.exported_names() {
            self.exposures
                .entry(name.clone())
                .or_default()
                .push(record.id().clone());
        }
        self.modules.insert(record.id().clone(), record);
        true
    }

    /// Add an always-present anchor module.
    pub fn add_special_module(&mut self, record: Arc<ModuleRecord>) -> bool {
        let id = record.id().clone();
        let added = self.add_module(record);
        if added {
            self.special.insert(id);
        }
        added
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, id: &ModuleId) -> Option<&Arc<ModuleRecord>> {
        self.modules.get(id)
    }

    /// Modules in delivery order.
    pub fn modules(&self) -> impl Iterator<Item = &Arc<ModuleRecord>> {
        self.modules.values()
    }

    pub fn is_special(&self, id: &ModuleId) -> bool {
        self.special.contains(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Arc<ModuleRecord>> {
        self.modules.values().find(|m| m.name() == name)
    }

    /// Every module exposing `qualified_name`, in delivery order.
    pub fn modules_exposing(&self, qualified_name: &str) -> Vec<Arc<ModuleRecord>> {
        self.exposures
            .get(qualified_name)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.modules.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `symbol` as seen through each module exposing it.
    pub fn exposures_of<'a>(&'a self, symbol: &'a SymbolLocation) -> Vec<ExposedSymbol<'a>> {
        self.exposures
            .get(symbol.qualified_name())
            .into_iter()
            .flatten()
            .filter_map(|id| self.modules.get(id))
            .map(|module| ExposedSymbol {
                symbol,
                module: module.as_ref(),
            })
            .collect()
    }

    /// The module that should host `symbol`'s documentation.
    ///
    /// Only public modules are candidates. A single candidate wins outright;
    /// so does a single candidate claiming the name via `canonical_for`.
    /// Otherwise the scorer decides, and low-confidence picks are recorded
    /// in `warnings`.
    pub fn canonical_module_for<S>(
        &self,
        symbol: &S,
        warnings: &mut WarningCollector,
    ) -> Option<Arc<ModuleRecord>>
    where
        S: Canonicalizable + ?Sized,
    {
        let candidates: Vec<Arc<ModuleRecord>> = self
            .modules_exposing(symbol.qualified_name())
            .into_iter()
            .filter(|m| m.is_public())
            .collect();

        match candidates.len() {
            0 => return None,
            1 => return candidates.into_iter().next(),
            _ => {}
        }

        let mut claimants = candidates
            .iter()
            .filter(|m| m.claims(symbol.qualified_name()));
        if let (Some(claimant), None) = (claimants.next(), claimants.next()) {
            return Some(Arc::clone(claimant));
        }

        self.scorer.canonicalize(symbol, &candidates, warnings)
    }

    /// Warn about `canonical_for` claims on names a module does not expose.
    pub fn validate_canonical_for(&self, warnings: &mut WarningCollector) {
        for module in self.modules.values() {
            for name in module.canonical_for() {
                if !module.exposes(name) {
                    warnings.add(Warning::new(
                        WarningKind::IgnoredCanonicalFor,
                        name.as_str(),
                        format!(
                            "'{}' claims canonical ownership of '{}', which it does not expose",
                            module.name(),
                            name
                        ),
                    ));
                }
            }
        }
    }
}

impl ModuleSink for ModuleGraph {
    fn on_module(&mut self, module: ResolvedModule) {
        self.add_module(module.record);
    }

    fn on_special_module(&mut self, module: ResolvedModule) {
        self.add_special_module(module.record);
    }
}
