//! Shared test utilities for sumo-search integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory and config-file helpers.
//!
//! Invariants:
//! - `RUST_LOG` is cleared so stderr assertions see the level selected by
//!   the configuration's debug flag, not the host environment.

use std::path::PathBuf;

/// Returns a hermetic `sumo-search` command for integration testing.
pub fn sumo_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("sumo-search");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a configuration document into `dir` and return its path.
pub fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("sumo.yaml");
    std::fs::write(&path, contents).unwrap();
    path
}

/// A records/screen configuration pointed at `base_url`.
#[allow(dead_code)]
pub fn screen_config(base_url: &str, timeout_secs: u64, batch: usize) -> String {
    format!(
        r#"
sumologic_environment:
  api_base_url: {base_url}
  api_access_id: test-id
  api_access_key: test-key
sumologic_search:
  query: "error | count by _sourceHost"
  from: "-1h"
  to: "now"
  timeZone: "UTC"
  type: records
processing:
  timeout: {timeout_secs}
  batch: {batch}
  output_type: screen
"#
    )
}
