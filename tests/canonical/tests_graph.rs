#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use docgraph::model::{DistributionUnit, ModuleRecord, SymbolLocation, UnitKind};
use docgraph::{
    Canonicalizable, CanonicalizationScorer, ModuleGraph, WarningCollector, WarningKind,
};

fn shapes_unit() -> Arc<DistributionUnit> {
    Arc::new(DistributionUnit::new("shapes", UnitKind::Dependency).with_root("/ws/shapes"))
}

fn exposing(unit: &Arc<DistributionUnit>, name: &str, path: &str, symbols: &[&str]) -> Arc<ModuleRecord> {
    Arc::new(
        ModuleRecord::builder(path, name, path, Arc::clone(unit))
            .exports(symbols.iter().copied())
            .build(),
    )
}

/// `shapes` re-exports everything; `circle` is the focused module; the
/// private implementation file also exposes the class.
fn barrel_graph() -> ModuleGraph {
    let unit = shapes_unit();
    let mut graph = ModuleGraph::new(CanonicalizationScorer::default());
    graph.add_module(exposing(&unit, "shapes", "/ws/shapes/lib/shapes.ext", &["shapes.Circle", "shapes.Square"]));
    graph.add_module(exposing(&unit, "circle", "/ws/shapes/lib/circle.ext", &["shapes.Circle"]));
    graph.add_module(exposing(&unit, "circle", "/ws/shapes/lib/src/circle.ext", &["shapes.Circle"]));
    graph
}

#[test]
fn test_focused_module_beats_barrel() {
    let graph = barrel_graph();
    let symbol = SymbolLocation::new("shapes.Circle", "package:shapes/src/circle.ext");
    let mut warnings = WarningCollector::new();

    let home = graph.canonical_module_for(&symbol, &mut warnings).unwrap();
    assert_eq!(home.path(), std::path::Path::new("/ws/shapes/lib/circle.ext"));
    assert!(warnings.is_empty());
}

#[test]
fn test_private_modules_are_never_candidates() {
    let graph = barrel_graph();
    let symbol = SymbolLocation::new("shapes.Square", "package:shapes/src/square.ext");
    let mut warnings = WarningCollector::new();

    let home = graph.canonical_module_for(&symbol, &mut warnings).unwrap();
    assert_eq!(home.name(), "shapes");

    let unexposed = SymbolLocation::new("shapes.Triangle", "package:shapes/src/triangle.ext");
    assert!(graph.canonical_module_for(&unexposed, &mut warnings).is_none());
}

#[test]
fn test_exposures_know_their_canonical_home() {
    let graph = barrel_graph();
    let symbol = SymbolLocation::new("shapes.Circle", "package:shapes/src/circle.ext");
    let mut warnings = WarningCollector::new();
    let home = graph.canonical_module_for(&symbol, &mut warnings);

    let canonical: Vec<_> = graph
        .exposures_of(&symbol)
        .into_iter()
        .filter(|e| e.is_canonical(home.as_deref()))
        .map(|e| e.module().path().to_path_buf())
        .collect();
    assert_eq!(canonical, vec![std::path::PathBuf::from("/ws/shapes/lib/circle.ext")]);
}

#[test]
fn test_unexposed_claim_is_reported() {
    let unit = shapes_unit();
    let mut graph = ModuleGraph::default();
    graph.add_module(Arc::new(
        ModuleRecord::builder("/ws/shapes/lib/shapes.ext", "shapes", "/ws/shapes/lib/shapes.ext", unit)
            .exports(["shapes.Circle"])
            .canonical_for(["shapes.Circle", "shapes.Hexagon"])
            .build(),
    ));

    let mut warnings = WarningCollector::new();
    graph.validate_canonical_for(&mut warnings);
    assert_eq!(warnings.len(), 1);
    assert!(warnings.has_kind(WarningKind::IgnoredCanonicalFor));
    assert_eq!(&*warnings.warnings()[0].element, "shapes.Hexagon");
}
