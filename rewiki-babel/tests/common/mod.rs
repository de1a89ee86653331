//! Fixture loading shared by the pipeline tests.
//!
//! Fixtures live in tests/fixtures as pairs: `<name>.wiki` holds the wiki source and
//! `<name>.wiki.re` the expected Re:VIEW output.

use std::fs;
use std::path::PathBuf;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Source and expected output of the fixture `name`.
pub fn load_fixture(name: &str) -> (String, String) {
    let dir = fixtures_dir();
    let source_path = dir.join(format!("{name}.wiki"));
    let expected_path = dir.join(format!("{name}.wiki.re"));

    let source = fs::read_to_string(&source_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", source_path.display()));
    let expected = fs::read_to_string(&expected_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", expected_path.display()));

    (source, expected)
}

/// Names of every fixture pair, sorted.
pub fn fixture_names() -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(fixtures_dir())
        .expect("Failed to read fixtures directory")
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            file_name.strip_suffix(".wiki").map(str::to_string)
        })
        .collect();
    names.sort();
    names
}
