/**
 * Count of sends that have been accepted but not yet completed.
 *
 * Incremented on the caller's thread when a send is accepted and
 * decremented by the send task after its callback has returned. `flush`
 * waits on the condvar until the count drops to zero.
 *
 * Uses a `Mutex<usize>` + `Condvar` pair. The lock is never held while
 * user code runs. A poisoned lock is recovered.
 */
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Default)]
pub struct PendingSends {
    count: Mutex<usize>,
    drained: Condvar,
}

impl PendingSends {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly accepted send.
    pub fn begin(&self) {
        *self.lock() += 1;
    }

    /// Records a completed send and wakes flushers once none remain.
    pub fn finish(&self) {
        let mut count = self.lock();
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.drained.notify_all();
        }
    }

    pub fn count(&self) -> usize {
        *self.lock()
    }

    /**
     * Blocks until the count reaches zero or `timeout` elapses.
     *
     * # Returns
     * `true` if every send completed in time, `false` on timeout.
     */
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let guard = self.lock();
        let (guard, _) = self
            .drained
            .wait_timeout_while(guard, timeout, |count| *count > 0)
            .unwrap_or_else(PoisonError::into_inner);

        *guard == 0
    }

    fn lock(&self) -> MutexGuard<'_, usize> {
        self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
