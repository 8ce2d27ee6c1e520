//! Error Extension Tests

use std::io;

use hdg_domain::error::{Error, Result};
use hdg_infrastructure::error_ext::ErrorContext;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context() {
    let result: Result<()> = not_found().io_context("failed to read document");

    match result {
        Err(Error::Io { message, source }) => {
            assert!(message.contains("failed to read document"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_context_maps_to_infrastructure() {
    let result: Result<()> = not_found().context("loading");
    assert!(matches!(
        result,
        Err(Error::Infrastructure { source: Some(_), .. })
    ));
}

#[test]
fn test_config_context() {
    let result: Result<()> = not_found().config_context("reading hdg.toml");
    match result {
        Err(Error::Configuration { message, .. }) => {
            assert_eq!(message, "reading hdg.toml: file not found");
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let mut evaluated = false;
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| {
            evaluated = true;
            "never built"
        })
        .expect("ok value");
    assert_eq!(value, 1);
    assert!(!evaluated);

    let result: Result<()> = not_found().with_context(|| format!("step {}", 2));
    assert!(result.unwrap_err().to_string().contains("step 2"));
}
