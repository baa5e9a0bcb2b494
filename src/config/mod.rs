//! Process-wide settings resolved once from the environment.
mod env;


use std::time::Duration;

use tracing::debug;

pub use env::{
    DEFAULT_REQUEST_TIMEOUT, MAX_DEFAULT_WORKERS, TIMEOUT_ENV, WORKERS_ENV, WORKERS_PER_CPU,
    default_max_workers, detected_cpu_count, resolve_max_workers, resolve_request_timeout,
};

/// Immutable batch settings: worker pool bound and per-request timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    max_workers: usize,
    request_timeout: Duration,
}

impl Config {
    /// Builds a config from explicit values. `max_workers` is clamped to at least one.
    #[must_use]
    pub fn new(max_workers: usize, request_timeout: Duration) -> Self {
        Self {
            max_workers: max_workers.max(1),
            request_timeout,
        }
    }

    /// Reads `FASTER_REQUESTS_WORKERS` and `FASTER_REQUESTS_TIMEOUT`.
    ///
    /// Absent or malformed values fall back to the defaults; nothing here fails.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), detected_cpu_count())
    }

    /// Resolves the config through `lookup` instead of the process environment.
    #[must_use]
    pub fn from_lookup<F>(lookup: F, cpu_count: usize) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let workers = lookup(WORKERS_ENV);
        let timeout = lookup(TIMEOUT_ENV);
        let config = Self {
            max_workers: resolve_max_workers(workers.as_deref(), cpu_count),
            request_timeout: resolve_request_timeout(timeout.as_deref()),
        };
        debug!(
            "Resolved config: max_workers={}, request_timeout={:?}",
            config.max_workers, config.request_timeout
        );
        config
    }

    #[must_use]
    pub const fn max_workers(&self) -> usize {
        self.max_workers
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
