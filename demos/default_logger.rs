//! Process-wide default logger example
//!
//! Demonstrates one-time initialization and the `log_*!` macros.
//!
//! Run with: cargo run --example default_logger

use rust_rotating_logger::global;
use rust_rotating_logger::prelude::*;
use rust_rotating_logger::{log_debug, log_error, log_info, log_warn};

fn handle_request(id: u32) {
    log_debug!("handling request {}", id);
    if id % 3 == 0 {
        log_warn!("request {} is slow", id);
    }
}

fn main() -> Result<()> {
    // Nothing is installed yet, so this goes nowhere
    log_info!("this line is discarded");

    global::init_both(LogLevel::Info, LogLevel::Debug, "demo_logs/service.log", 0)?;

    // Later initialization attempts are ignored
    global::init_console_only(LogLevel::Error)?;

    log_info!("service started");
    for id in 1..=6 {
        handle_request(id);
    }
    log_error!("shutting down after {} requests", 6);

    global::close()?;
    global::close()?;

    Ok(())
}
