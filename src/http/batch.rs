use std::io::{IsTerminal, Write};

use tokio::time::Instant;
use tracing::debug;

use crate::config::Config;
use crate::error::RequestError;
use crate::progress::ProgressWriter;

use super::client::{build_client, send_get};
use super::outcome::{BatchResult, IndexedOutcome, RequestOutcome};
use super::pool::WorkerPool;

/// Number of requests issued per batch.
pub const BATCH_SIZE: usize = 10;

const LOST_WORKER_MESSAGE: &str = "worker stopped before the request completed";

/// Fires [`BATCH_SIZE`] GET requests at one URL through a worker pool sized
/// from [`Config::max_workers`].
#[derive(Debug, Clone)]
pub struct BatchRunner {
    config: Config,
}

impl BatchRunner {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs one batch, redrawing progress on stdout.
    pub async fn run(&self, url: &str) -> BatchResult {
        let stdout = std::io::stdout();
        let clear_line = stdout.is_terminal();
        self.run_with_writer(url, stdout, clear_line).await
    }

    /// Runs one batch, writing progress to `out`.
    ///
    /// Per-request failures end up in the returned outcomes; output write
    /// failures only stop the progress display.
    pub async fn run_with_writer<W: Write>(
        &self,
        url: &str,
        out: W,
        clear_line: bool,
    ) -> BatchResult {
        let start = Instant::now();
        let mut progress = ProgressWriter::new(out, clear_line);
        debug!(
            "Starting batch of {} requests to {} ({} workers, timeout {:?})",
            BATCH_SIZE,
            url,
            self.config.max_workers(),
            self.config.request_timeout()
        );

        let client = build_client(&self.config).map_err(|err| err.to_string());
        let pool = WorkerPool::new(self.config.max_workers().min(BATCH_SIZE));
        let mut handles = Vec::with_capacity(BATCH_SIZE);
        for index in 1..=BATCH_SIZE {
            let client = client.clone();
            let url = url.to_owned();
            handles.push(pool.submit(async move {
                debug!("Request {} dispatched", index);
                match client {
                    Ok(client) => send_get(&client, &url).await,
                    Err(message) => Err(RequestError::ClientBuild { message }),
                }
            }));
        }

        let mut outcomes = Vec::with_capacity(BATCH_SIZE);
        for (index, handle) in (1..=BATCH_SIZE).zip(handles) {
            let outcome = handle.wait().await.map_or_else(
                || RequestOutcome::Error(LOST_WORKER_MESSAGE.to_owned()),
                RequestOutcome::from,
            );
            debug!("Request {} resolved: {:?}", index, outcome);
            progress.record(index, &outcome);
            outcomes.push(IndexedOutcome { index, outcome });
        }

        pool.shutdown().await;
        let elapsed = start.elapsed();
        progress.finish(BATCH_SIZE, elapsed);
        debug!("Batch finished in {:?}", elapsed);

        BatchResult::new(outcomes, elapsed)
    }
}
