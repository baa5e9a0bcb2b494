//! Batch request execution over a scoped, bounded worker pool.
mod batch;
mod client;
mod outcome;
mod pool;


pub use batch::{BATCH_SIZE, BatchRunner};
pub use client::{DEFAULT_USER_AGENT, build_client, send_get};
pub use outcome::{BatchResult, IndexedOutcome, RequestOutcome};
#[cfg(test)]
pub(crate) use pool::WorkerPool;
