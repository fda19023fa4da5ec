//! Logger module
//!
//! Provides logging utilities for the server including:
//! - Per-request logging to stdout and an append-only log file
//! - Server lifecycle logging
//! - Error and warning logging

mod format;
pub mod writer;

pub use format::format_request_line;

use chrono::Local;
use hyper::Method;
use std::net::SocketAddr;

use crate::config::Config;

/// Set the request log file path
///
/// Should be called once at application startup, inside the runtime.
pub fn init(request_log_file: &str) {
    writer::init(request_log_file);
}

/// Log one request before it is routed.
///
/// The line goes to stdout immediately; the file append runs in a
/// background task and never delays or fails the request.
pub fn log_request(method: &Method, target: &str) {
    let line = format_request_line(&Local::now(), method.as_str(), target);
    writer::record(line);
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Server is up on port {}", config.server.port);
    println!("Listening on: http://{addr}");
    println!("Request log: {}", config.logging.request_log_file);
    println!("======================================\n");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
