//! The global subscriber can only be installed once per process, so this
//! file holds a single test.

use shopterm::config::LoggingConfig;
use shopterm::logging::{init_logging, LoggingError};
use tempfile::TempDir;

#[test]
fn logs_go_to_configured_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("shopterm.log");
    let config = LoggingConfig {
        level: "info".to_string(),
        file: Some(path.clone()),
    };

    let written_to = init_logging(&config).unwrap();
    assert_eq!(written_to, path);

    tracing::info!(marker = "logging-test", "Hello from the test");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Hello from the test"));
    assert!(content.contains("INFO"));

    let err = init_logging(&config).unwrap_err();
    assert!(matches!(err, LoggingError::Install(_)));
}
