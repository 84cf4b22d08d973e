//! Integration tests for logger system
//!
//! These tests verify:
//! - Routing between console and file by output mode and level
//! - Rotation happens before a line would overflow the size limit
//! - Rotated files keep their contents and get distinct names
//! - Close/reopen lifecycle
//! - Write-path failures are absorbed

use chrono::NaiveDate;
use rust_rotating_logger::appenders::RotatingFileAppender;
use rust_rotating_logger::core::{
    FixedClock, LogLevel, Logger, LoggerConfig, LoggerError, OutputMode, SourceLocation,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

fn fixed_clock() -> Arc<FixedClock> {
    let at = NaiveDate::from_ymd_opt(2026, 1, 31)
        .unwrap()
        .and_hms_opt(23, 10, 15)
        .unwrap();
    Arc::new(FixedClock::new(at))
}

fn log_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("Failed to read log dir")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files
}

#[test]
fn test_debug_goes_to_file_only_then_rotates() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logs = temp_dir.path().join("logs");
    let clock = fixed_clock();

    let logger = Logger::builder()
        .config(LoggerConfig::both(
            LogLevel::Info,
            LogLevel::Debug,
            logs.join("app.log"),
            100,
        ))
        .clock(clock.clone())
        .build()
        .expect("Failed to build logger");

    // "2026/01/31 23:10:15 DEBUG: x.rs:1 - " is 36 bytes; pad the line to 90
    let location = SourceLocation::new("x.rs", 1);
    let message = "m".repeat(90 - 36 - 1);
    logger.log_at(LogLevel::Debug, location, message.as_str());

    let metrics = logger.metrics();
    assert_eq!(metrics.console_lines_written(), 0);
    assert_eq!(metrics.file_lines_written(), 1);
    assert_eq!(logger.current_file_size(), 90);

    let first = logger.current_file_path().expect("file should be open");
    let first_content = fs::read_to_string(&first).unwrap();

    // 90 + 50 > 100: a new file must be started before this write
    logger.log_at(LogLevel::Debug, location, "one more line");
    let second = logger.current_file_path().expect("file should be open");

    assert_ne!(first, second);
    assert_eq!(second, logs.join("app_31.01.2026_23-10-15_01.log"));
    assert_eq!(fs::read_to_string(&first).unwrap(), first_content);

    let expected = "2026/01/31 23:10:15 DEBUG: x.rs:1 - one more line\n";
    assert_eq!(fs::read_to_string(&second).unwrap(), expected);
    assert_eq!(logger.current_file_size(), expected.len() as u64);
    assert_eq!(metrics.rotations(), 1);
}

#[test]
fn test_rotation_never_overflows_limit() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let clock = fixed_clock();
    let max = 256;

    let logger = Logger::builder()
        .config(LoggerConfig::file_only(
            LogLevel::Debug,
            temp_dir.path().join("rotation.log"),
            max,
        ))
        .clock(clock)
        .build()
        .unwrap();

    for i in 0..200 {
        logger.info(format!("Test message number {}", i));
    }

    let files = log_files(temp_dir.path());
    assert!(files.len() > 1, "expected several rotated files");

    let mut total_lines = 0;
    for file in &files {
        let len = fs::metadata(file).unwrap().len();
        assert!(len <= max, "{} is {} bytes", file.display(), len);
        total_lines += fs::read_to_string(file).unwrap().lines().count();
    }
    assert_eq!(total_lines, 200);
    assert_eq!(logger.metrics().dropped_count(), 0);
}

#[test]
fn test_no_rotation_with_zero_limit() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let logger = Logger::builder()
        .config(LoggerConfig::file_only(
            LogLevel::Debug,
            temp_dir.path().join("never.log"),
            0,
        ))
        .clock(fixed_clock())
        .build()
        .unwrap();

    for i in 0..1000 {
        logger.info(format!("Test message number {}", i));
    }

    assert_eq!(log_files(temp_dir.path()).len(), 1);
    assert_eq!(logger.metrics().rotations(), 0);
}

#[test]
fn test_rotated_files_use_distinct_seconds() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let clock = fixed_clock();

    let logger = Logger::builder()
        .config(LoggerConfig::file_only(
            LogLevel::Debug,
            temp_dir.path().join("app.log"),
            100,
        ))
        .clock(clock.clone())
        .build()
        .unwrap();

    logger.info("first file");
    clock.advance(chrono::Duration::seconds(1));
    logger.info("second file, one second later");

    let names: Vec<String> = log_files(temp_dir.path())
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "app_31.01.2026_23-10-15.log".to_string(),
            "app_31.01.2026_23-10-16.log".to_string(),
        ]
    );
}

#[test]
fn test_console_only_creates_no_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let logger = Logger::new(
        LoggerConfig::console_only(LogLevel::Debug).with_file_path(temp_dir.path().join("x.log")),
    )
    .unwrap();

    logger.error("to stderr");
    logger.info("to stdout");

    assert_eq!(logger.output_mode(), OutputMode::ConsoleOnly);
    assert!(log_files(temp_dir.path()).is_empty());
    assert_eq!(logger.metrics().console_lines_written(), 2);
}

#[test]
fn test_close_twice_is_ok() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new(LoggerConfig::file_only(
        LogLevel::Debug,
        temp_dir.path().join("close.log"),
        0,
    ))
    .unwrap();

    logger.info("before close");
    assert!(logger.close().is_ok());
    assert!(logger.close().is_ok());
    assert!(logger.current_file_path().is_none());
}

#[test]
fn test_write_failure_is_absorbed_and_counted() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logs = temp_dir.path().join("logs");

    let logger = Logger::builder()
        .config(LoggerConfig::file_only(LogLevel::Debug, logs.join("app.log"), 0))
        .clock(fixed_clock())
        .build()
        .unwrap();
    logger.close().unwrap();

    // With the directory replaced by a file, reopening on the next write fails
    fs::remove_dir_all(&logs).unwrap();
    fs::write(&logs, b"").unwrap();

    logger.error("dropped");
    logger.error("dropped too");

    assert!(logger.current_file_path().is_none());
    assert_eq!(logger.metrics().dropped_count(), 2);
    assert_eq!(logger.metrics().open_failures(), 2);

    // Once the directory is back the next line gets through
    fs::remove_file(&logs).unwrap();
    logger.error("kept");
    let content = fs::read_to_string(logger.current_file_path().unwrap()).unwrap();
    assert!(content.ends_with("- kept\n"));
}

#[test]
fn test_reopen_existing_file_seeds_size() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let existing = temp_dir.path().join("app_existing.log");
    fs::write(&existing, "x".repeat(64)).unwrap();

    let mut appender = RotatingFileAppender::new(temp_dir.path().join("app.log"), 100);
    appender.open_path(&existing).unwrap();
    assert_eq!(appender.current_size(), 64);

    // 64 + 40 > 100, so this write goes to a fresh file
    appender.write_line(&format!("{}\n", "y".repeat(39))).unwrap();
    assert_ne!(appender.current_path(), Some(existing.as_path()));
    assert_eq!(appender.current_size(), 40);
    assert_eq!(fs::metadata(&existing).unwrap().len(), 64);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let result = Logger::new(LoggerConfig::default().with_output_mode(OutputMode::Both));
    assert!(matches!(
        result,
        Err(LoggerError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_config_from_json_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("logger.json");
    let log_base = temp_dir.path().join("out").join("svc.log");
    fs::write(
        &config_path,
        format!(
            r#"{{"output_mode": "file_only", "file_level": "warn", "file_path": {}, "max_file_size": 4096}}"#,
            serde_json::to_string(&log_base).unwrap()
        ),
    )
    .unwrap();

    let config = LoggerConfig::from_json_file(&config_path).unwrap();
    let logger = Logger::new(config).unwrap();
    logger.info("filtered");
    logger.warn("kept");

    let content = fs::read_to_string(logger.current_file_path().unwrap()).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("WARN: integration_tests.rs:"));
}
