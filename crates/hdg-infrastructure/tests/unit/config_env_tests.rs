//! Environment override tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p hdg-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Tests use `unsafe` blocks for `env::set_var`/`env::remove_var` because
//! Rust 2024 edition requires this for environment variable mutations.

use std::env;

use hdg_domain::value_objects::ChunkingStrategy;
use hdg_infrastructure::config::ConfigLoader;
use tempfile::TempDir;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_nested_keys() {
    set_env("HDG__CHUNKING__STRATEGY", "structural");
    set_env("HDG__CHUNKING__MAX_CHUNK_SIZE", "250");

    let dir = TempDir::new().expect("temp dir");
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load();

    remove_env("HDG__CHUNKING__STRATEGY");
    remove_env("HDG__CHUNKING__MAX_CHUNK_SIZE");

    let config = config.expect("config");
    assert_eq!(config.chunking.strategy, ChunkingStrategy::Structural);
    assert_eq!(config.chunking.max_chunk_size, 250);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_wins_over_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("hdg.toml");
    std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").expect("write config");

    set_env("HDG__LOGGING__LEVEL", "debug");
    let config = ConfigLoader::new().with_config_path(&path).load();
    remove_env("HDG__LOGGING__LEVEL");

    assert_eq!(config.expect("config").logging.level, "debug");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_not_loaded() {
    set_env("HDG_CHUNKING_MAX_CHUNK_SIZE", "7");

    let dir = TempDir::new().expect("temp dir");
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load();

    remove_env("HDG_CHUNKING_MAX_CHUNK_SIZE");

    assert_ne!(config.expect("config").chunking.max_chunk_size, 7);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_prefix() {
    set_env("DOCS__EMBEDDING__DIMENSIONS", "12");

    let dir = TempDir::new().expect("temp dir");
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("DOCS")
        .load();

    remove_env("DOCS__EMBEDDING__DIMENSIONS");

    assert_eq!(config.expect("config").embedding.dimensions, 12);
}
