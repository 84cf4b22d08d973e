//! File logging example
//!
//! Demonstrates logging to console and a size-rotated file at the same time.
//!
//! Run with: cargo run --example file_logging

use rust_rotating_logger::prelude::*;
use rust_rotating_logger::{debug, info, warn};

fn main() -> Result<()> {
    println!("=== Rust Rotating Logger - File Logging Example ===\n");

    // Console shows Info and up, the file keeps everything; rotate every 2 KB
    let logger = Logger::builder()
        .output_mode(OutputMode::Both)
        .console_level(LogLevel::Info)
        .file_level(LogLevel::Debug)
        .file_path("demo_logs/application.log")
        .max_file_size(2 * 1024)
        .colors(true)
        .build()?;

    println!("1. Logging to both console and file:");

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Generating enough output to rotate:");

    for i in 1..=60 {
        debug!(logger, "Processing item {}/60", i);
        if i % 20 == 0 {
            info!(logger, "Checkpoint at item {}", i);
        }
    }
    warn!(logger, "Rotated {} times", logger.metrics().rotations());

    if let Some(path) = logger.current_file_path() {
        println!("\nCurrently writing to {}", path.display());
    }

    logger.close()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'demo_logs/' for the rotated log files");

    Ok(())
}
