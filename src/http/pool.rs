use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc, oneshot};
use tokio::task::{JoinHandle, JoinSet};
use tracing::debug;

type Job = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Bounded set of worker slots owned by one batch.
///
/// Submitted tasks start in submission order as slots free up. Dropping the
/// pool aborts whatever has not finished; `shutdown` waits for it instead.
pub(crate) struct WorkerPool {
    queue: Option<mpsc::UnboundedSender<Job>>,
    dispatcher: Option<JoinHandle<()>>,
}

/// Result slot of one submitted task.
pub(crate) struct TaskHandle<T> {
    receiver: oneshot::Receiver<T>,
}

impl<T> TaskHandle<T> {
    /// Waits for the task. `None` means it was aborted or panicked.
    pub(crate) async fn wait(self) -> Option<T> {
        self.receiver.await.ok()
    }
}

impl WorkerPool {
    pub(crate) fn new(workers: usize) -> Self {
        let slots = workers.clamp(1, Semaphore::MAX_PERMITS);
        let permits = Arc::new(Semaphore::new(slots));
        let (queue, jobs) = mpsc::unbounded_channel();
        let dispatcher = tokio::spawn(dispatch(jobs, permits));
        debug!("Worker pool started with {} slots", slots);
        Self {
            queue: Some(queue),
            dispatcher: Some(dispatcher),
        }
    }

    pub(crate) fn submit<F, T>(&self, task: F) -> TaskHandle<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let job: Job = Box::pin(async move {
            drop(sender.send(task.await));
        });
        if let Some(queue) = self.queue.as_ref()
            && queue.send(job).is_err()
        {
            debug!("Worker pool dispatcher is gone; task dropped");
        }
        TaskHandle { receiver }
    }

    /// Stops accepting work and waits for every queued and running task.
    pub(crate) async fn shutdown(mut self) {
        drop(self.queue.take());
        if let Some(dispatcher) = self.dispatcher.take()
            && let Err(err) = dispatcher.await
        {
            debug!("Worker pool dispatcher ended abnormally: {}", err);
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        if let Some(dispatcher) = self.dispatcher.take() {
            dispatcher.abort();
        }
    }
}

async fn dispatch(mut jobs: mpsc::UnboundedReceiver<Job>, permits: Arc<Semaphore>) {
    let mut running = JoinSet::new();
    while let Some(job) = jobs.recv().await {
        let Ok(permit) = Arc::clone(&permits).acquire_owned().await else {
            break;
        };
        running.spawn(async move {
            job.await;
            drop(permit);
        });
        while running.try_join_next().is_some() {}
    }
    while running.join_next().await.is_some() {}
}
