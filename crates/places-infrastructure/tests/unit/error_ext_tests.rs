//! Error Extension Tests

use places_domain::error::{Error, Result};
use places_infrastructure::error_ext::{ErrorContext, provider_error, to_domain_error};
use std::io;

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "file not found")
}

#[test]
fn test_io_context_keeps_source() {
    let result: Result<()> = Err(not_found()).io_context("failed to read rows");

    match result {
        Err(Error::Io { source, message }) => {
            assert_eq!(message, "failed to read rows: file not found");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context_maps_to_configuration() {
    let result: Result<()> = Err(not_found()).config_context("places.toml");
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context built for a success") })
        .expect("ok passes through");
    assert_eq!(value, 1);

    let err: Result<u8> = Err(not_found()).with_context(|| format!("row {}", 3));
    match err {
        Err(Error::Infrastructure { message, .. }) => {
            assert!(message.starts_with("row 3: "));
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_to_domain_error_and_provider_error() {
    let error = to_domain_error(not_found(), "opening export");
    assert!(error.to_string().contains("opening export: file not found"));

    let error = provider_error("place store", "Unknown place store provider 'disk'".into());
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "place store provider: Unknown place store provider 'disk'");
            assert!(source.is_none());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
