//! Unit tests for domain error types

use hdg_domain::Error;

#[test]
fn test_error_display() {
    let error = Error::internal("Something went wrong");
    assert_eq!(format!("{}", error), "Internal error: Something went wrong");
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("Rule set cannot be empty");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "Rule set cannot be empty"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_invalid_rule_error_keeps_source() {
    let source = regex::Regex::new("(").unwrap_err();
    let error = Error::invalid_rule("broken", source);
    assert!(format!("{}", error).contains("broken"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_cancelled_is_distinct() {
    assert!(Error::Cancelled.is_cancelled());
    assert!(!Error::internal("boom").is_cancelled());
    assert_eq!(format!("{}", Error::Cancelled), "Processing cancelled");
}

#[test]
fn test_keyword_error() {
    let error = Error::keyword("backend unavailable");
    match error {
        Error::Keyword { message, source } => {
            assert_eq!(message, "backend unavailable");
            assert!(source.is_none());
        }
        _ => panic!("Expected Keyword error"),
    }
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Missing required config");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Missing required config");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_configuration_error_keeps_source() {
    let source = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad toml");
    let error = Error::configuration_with_source("Failed to parse hdg.toml", source);
    assert!(format!("{}", error).contains("Failed to parse hdg.toml"));
    assert!(std::error::Error::source(&error).is_some());
}
