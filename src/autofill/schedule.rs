//! Cancellable timer tasks for auto-fill moves.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, instrument};

/// Handles of the spawned auto-fill tasks.
///
/// Every [`FillSchedule::cancel`] aborts the outstanding tasks and bumps the
/// epoch; a task spawned under an older epoch must not write to the board.
#[derive(Debug, Default)]
pub struct FillSchedule {
    handles: Vec<JoinHandle<()>>,
    epoch: u64,
}

impl FillSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current epoch, captured by tasks at spawn time.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True if `epoch` has not been cancelled.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Runs `task` on the tokio runtime after `delay`.
    ///
    /// Must be called from within a runtime.
    pub fn spawn<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handles.retain(|handle| !handle.is_finished());
        self.handles.push(tokio::spawn(async move {
            sleep(delay).await;
            task.await;
        }));
    }

    /// Number of tasks that have not completed yet.
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    /// Aborts every outstanding task and starts a new epoch.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn cancel(&mut self) {
        let outstanding = self.pending();
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        self.epoch += 1;
        if outstanding > 0 {
            debug!(outstanding, "Cancelled auto-fill tasks");
        }
    }
}

impl Drop for FillSchedule {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_tasks_fire_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut schedule = FillSchedule::new();
        for k in 0..3u64 {
            let fired = Arc::clone(&fired);
            schedule.spawn(Duration::from_millis(100 * k), async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }

        sleep(Duration::from_millis(150)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 2);

        sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 3);
        assert_eq!(schedule.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_pending_tasks() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut schedule = FillSchedule::new();
        for k in 1..=3u64 {
            let fired = Arc::clone(&fired);
            schedule.spawn(Duration::from_millis(100 * k), async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }

        sleep(Duration::from_millis(150)).await;
        let epoch = schedule.epoch();
        schedule.cancel();
        assert!(!schedule.is_current(epoch));

        sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(schedule.pending(), 0);
    }
}
