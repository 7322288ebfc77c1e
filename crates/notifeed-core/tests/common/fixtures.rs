//! Test fixture loading utilities

use std::path::PathBuf;

use notifeed_core::{DirectorySource, LoadOutcome, Snapshot};

/// Get the path to a fixture directory
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a snapshot from a fixture data directory
pub fn load_fixture_snapshot(name: &str) -> LoadOutcome {
    Snapshot::load(&DirectorySource::new(fixture_path(name)))
}

/// Load the full sample feed
pub fn load_sample() -> LoadOutcome {
    load_fixture_snapshot("sample")
}
