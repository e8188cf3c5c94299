//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::mansion_tree::Direction;
use crate::error::config::ConfigError;
use crate::error::exploration::ExplorationError;
use crate::error::{
    report_error, set_error_reporter, DetectiveError, ErrorContext, ErrorReporter,
    TracingErrorReporter,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = DetectiveError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: DetectiveError = io_error.into();
    assert!(format!("{error}").contains("file not found"));

    let error: DetectiveError = ConfigError::FileNotFound(PathBuf::from("case.toml")).into();
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration file not found: case.toml"
    );
}

/// Exploration errors carry the player-facing message.
#[test]
fn test_exploration_messages() {
    assert_eq!(
        ExplorationError::InvalidCommand('x').to_string(),
        "Opção inválida. Tente novamente."
    );
    assert_eq!(
        ExplorationError::NoPath(Direction::Left).to_string(),
        "Não há caminho para a esquerda aqui."
    );
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct CountingReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for CountingReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
///
/// This is the only test installing a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(CountingReporter::default());
    assert!(set_error_reporter(reporter.clone()));
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter)));

    report_error(ErrorContext::new(
        DetectiveError::Custom("test error".to_string()),
        "test_component",
    ));

    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 1);
}

/// Test that the default tracing error reporter can be used directly.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = DetectiveError::Custom("test error".to_string());

    // Just make sure this doesn't panic
    reporter.report(ErrorContext::new(error, "test_component"));
}
