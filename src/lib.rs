//! Core library for the `faster-requests` CLI.
//!
//! A batch fires [`http::BATCH_SIZE`] GET requests at one URL through a worker
//! pool bounded by [`config::Config::max_workers`], reports each outcome in
//! submission order on a single redrawn line, and prints the total wall-clock
//! time.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod progress;
