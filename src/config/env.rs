use std::num::{IntErrorKind, NonZeroUsize};
use std::time::Duration;

use tracing::warn;

pub const WORKERS_ENV: &str = "FASTER_REQUESTS_WORKERS";
pub const TIMEOUT_ENV: &str = "FASTER_REQUESTS_TIMEOUT";

/// Upper bound of the computed worker default; an explicit override may exceed it.
pub const MAX_DEFAULT_WORKERS: usize = 100;
pub const WORKERS_PER_CPU: usize = 5;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[must_use]
pub fn detected_cpu_count() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// `min(100, 5 * cpu_count)`, never below one.
#[must_use]
pub fn default_max_workers(cpu_count: usize) -> usize {
    cpu_count
        .saturating_mul(WORKERS_PER_CPU)
        .min(MAX_DEFAULT_WORKERS)
        .max(1)
}

/// Resolves the pool size from a raw override.
///
/// Any integer is accepted and clamped to `max(1, value)`; absent, empty or
/// non-integer input yields [`default_max_workers`].
#[must_use]
pub fn resolve_max_workers(raw: Option<&str>, cpu_count: usize) -> usize {
    let fallback = default_max_workers(cpu_count);
    let Some(value) = raw.filter(|value| !value.is_empty()) else {
        return fallback;
    };

    parse_worker_count(value).unwrap_or_else(|| {
        warn!(
            "Ignoring {}='{}' (not an integer); using {} workers.",
            WORKERS_ENV, value, fallback
        );
        fallback
    })
}

fn parse_worker_count(value: &str) -> Option<usize> {
    match value.trim().parse::<i64>() {
        Ok(parsed) if parsed < 1 => Some(1),
        Ok(parsed) => Some(usize::try_from(parsed).unwrap_or(usize::MAX)),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Some(usize::MAX),
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => Some(1),
        Err(_) => None,
    }
}

/// Resolves the per-request timeout from a raw override in seconds.
///
/// Absent, empty, non-numeric, NaN, or non-positive input yields
/// [`DEFAULT_REQUEST_TIMEOUT`]. Values too large for a `Duration`, infinity
/// included, saturate to `Duration::MAX`.
#[must_use]
pub fn resolve_request_timeout(raw: Option<&str>) -> Duration {
    let Some(value) = raw.filter(|value| !value.is_empty()) else {
        return DEFAULT_REQUEST_TIMEOUT;
    };

    value
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(positive_timeout)
        .unwrap_or_else(|| {
            warn!(
                "Ignoring {}='{}' (not a positive number of seconds); using {:?}.",
                TIMEOUT_ENV, value, DEFAULT_REQUEST_TIMEOUT
            );
            DEFAULT_REQUEST_TIMEOUT
        })
}

fn positive_timeout(secs: f64) -> Option<Duration> {
    if secs.is_nan() || secs <= 0.0 {
        return None;
    }
    let timeout = Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX);
    (!timeout.is_zero()).then_some(timeout)
}
