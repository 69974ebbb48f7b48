//! Files transitively referenced by a module.

use std::collections::VecDeque;
use std::path::PathBuf;

use indexmap::IndexSet;
use rustc_hash::FxHashSet;

use crate::model::ModuleId;
use crate::resolve::{ModuleLinks, ModuleResolver};

/// Every file reachable from the module `id` with structure `links`.
///
/// Includes the module's own file, its part files and the file of every
/// directly imported or exported module. Linked modules the resolver has
/// links for are expanded the same way, transitively; the others contribute
/// only their own file. Each module is expanded at most once, so cycles and
/// long re-export chains are fine.
pub fn files_referenced_by(
    resolver: &dyn ModuleResolver,
    id: &ModuleId,
    links: &ModuleLinks,
) -> IndexSet<PathBuf> {
    let mut files = IndexSet::new();
    let mut visited: FxHashSet<ModuleId> = FxHashSet::default();
    visited.insert(id.clone());

    let mut worklist: VecDeque<ModuleLinks> = VecDeque::new();
    worklist.push_back(links.clone());

    while let Some(current) = worklist.pop_front() {
        files.insert(current.path.clone());
        files.extend(current.parts.iter().cloned());

        for linked in current.linked_modules() {
            if !visited.insert(linked.id.clone()) {
                continue;
            }
            files.insert(linked.path.clone());
            match resolver.links(&linked.id) {
                Some(next) => worklist.push_back(next),
                None => tracing::trace!("[DISCOVERY] No links known for module '{}'", linked.id),
            }
        }
    }

    files
}
