#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Session-level behaviour: include lists, special anchors, configuration.

use std::collections::HashSet;

use crate::helpers::sinks::RecordingSink;
use crate::helpers::world::World;
use docgraph::discovery::{DiscoverySession, NoProgress};
use docgraph::{DiscoveryOptions, DocgraphError};

const APP: &str = "/ws/app/lib/app.ext";
const HELPERS: &str = "/ws/app/lib/helpers.ext";
const CORE: &str = "/platform/core/core.ext";
const ASYNC: &str = "/platform/async/async.ext";

fn world() -> World {
    World::new("app")
        .platform("platform")
        .module(APP, "app", &[CORE], &[], &[])
        .module(HELPERS, "helpers", &[], &[], &[])
        .module(CORE, "core", &[], &[], &[])
        .module(ASYNC, "async", &[], &[], &[])
        .special(CORE)
        .special(ASYNC)
}

fn skip_platform() -> DiscoveryOptions {
    DiscoveryOptions::new().with_skip_platform_manifest(true)
}

#[test]
fn test_special_modules_not_redelivered() {
    let (mut resolver, layout) = world().build();
    let mut sink = RecordingSink::new();
    let options = skip_platform();

    let report = DiscoverySession::new(&mut resolver, &layout, &layout, &options)
        .with_progress(NoProgress)
        .run(&mut sink)
        .unwrap();

    // core was reached through app; only async is left for the special crawl.
    assert_eq!(sink.sorted(), vec!["app", "core", "helpers"]);
    assert_eq!(sink.special, vec!["async"]);
    assert_eq!(report.special_modules, 1);

    let all = sink.all();
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_include_filter_does_not_apply_to_specials() {
    let (mut resolver, layout) = world().build();
    let mut sink = RecordingSink::new();
    let options = skip_platform().with_include(["app"]);

    let report = DiscoverySession::new(&mut resolver, &layout, &layout, &options)
        .with_progress(NoProgress)
        .run(&mut sink)
        .unwrap();

    assert_eq!(sink.ordinary, vec!["app"]);
    // core was filtered out of the ordinary crawl, so it is still delivered
    // as an anchor.
    let mut special = sink.special.clone();
    special.sort();
    assert_eq!(special, vec!["async", "core"]);
    assert_eq!(report.discovered_names, vec!["app", "core", "async"]);
}

#[test]
fn test_missing_include_reports_names() {
    let (mut resolver, layout) = world().build();
    let mut sink = RecordingSink::new();
    let options = skip_platform().with_include(["app", "cor"]);

    let err = DiscoverySession::new(&mut resolver, &layout, &layout, &options)
        .with_progress(NoProgress)
        .run(&mut sink)
        .unwrap_err();

    // Filtered-out modules are listed too, so the typo is easy to spot.
    assert_eq!(
        err.to_string(),
        "Did not find: [cor] in known modules: [app, core, helpers]"
    );
    assert_eq!(sink.ordinary, vec!["app"]);
    // The special crawl never ran.
    assert!(sink.special.is_empty());
}

#[test]
fn test_excluded_include_is_not_missing() {
    let (mut resolver, layout) = world().build();
    let mut sink = RecordingSink::new();
    let options = skip_platform()
        .with_include(["app", "Foo"])
        .with_exclude(["Foo"]);

    assert!(
        DiscoverySession::new(&mut resolver, &layout, &layout, &options)
            .with_progress(NoProgress)
            .run(&mut sink)
            .is_ok()
    );
}

#[test]
fn test_missing_platform_root_fails_before_discovery() {
    let (mut resolver, layout) = world().requiring_platform_root().build();
    let mut sink = RecordingSink::new();
    let options = skip_platform();

    let err = DiscoverySession::new(&mut resolver, &layout, &layout, &options)
        .run(&mut sink)
        .unwrap_err();

    assert!(matches!(err, DocgraphError::Configuration(_)));
    assert!(resolver.calls.is_empty());
    assert!(sink.all().is_empty());
}

#[test]
fn test_configured_platform_root_satisfies_requirement() {
    let (mut resolver, layout) = world().requiring_platform_root().build();
    let mut sink = RecordingSink::new();
    let options = skip_platform().with_platform_root("/platform");

    assert!(
        DiscoverySession::new(&mut resolver, &layout, &layout, &options)
            .with_progress(NoProgress)
            .run(&mut sink)
            .is_ok()
    );
}

#[test]
fn test_negative_min_confidence_is_rejected() {
    let (mut resolver, layout) = world().build();
    let mut sink = RecordingSink::new();
    let options = skip_platform().with_min_confidence(-1.0);

    let err = DiscoverySession::new(&mut resolver, &layout, &layout, &options)
        .run(&mut sink)
        .unwrap_err();
    assert!(matches!(err, DocgraphError::Configuration(_)));
}
