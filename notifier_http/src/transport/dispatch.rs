/**
 * Bounded dispatcher: runs each send on its own background thread.
 *
 * ```text
 *  ┌─────────────┐  submit()   ┌──────────────────────────────────────┐
 *  │  Caller     │ ──────────► │  notifier-send thread (one per send) │
 *  │  (returns   │             │   1. budget.acquire()   (may park)   │
 *  │   at once)  │             │   2. sender.send_post() (blocking)   │
 *  └─────────────┘             │   3. classify response               │
 *                              │   4. callback(result)                │
 *                              │   5. permit dropped → released       │
 *                              └──────────────────────────────────────┘
 * ```
 *
 * At most `capacity` threads are past step 1 at any moment; the rest park
 * on the budget. The callback runs while the permit is still held, so a
 * capacity of 1 processes sends strictly one after another.
 *
 * Waiting sends are not served in FIFO order, and nothing times out a
 * send stuck in the transport. Every queued send also parks its own OS
 * thread on the budget, so a burst of K sends costs K threads no matter
 * how small the capacity is.
 *
 * Every accepted send is represented by a `SendTask`. Its callback is
 * invoked exactly once: by `run` on the normal path, or by `Drop` if the
 * task is discarded before running (the thread could not be spawned).
 */
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use notifier_core::{Callback, NotifyError, SendResult};
use tracing::{debug, warn};

use super::budget::DispatchBudget;
use super::pending::PendingSends;
use super::sender::Sender;
use crate::protocol::response::Response;

/// Name given to every send thread.
const THREAD_NAME: &str = "notifier-send";

/**
 * State shared by every send task spawned from one client.
 *
 * The budget and pending counter are owned here; the sender is shared
 * read-only by all tasks.
 */
pub struct Dispatcher {
    url: String,
    sender: Arc<dyn Sender>,
    budget: DispatchBudget,
    pending: PendingSends,
}

impl Dispatcher {
    /// `capacity` must be non-zero.
    pub fn new(url: String, capacity: usize, sender: Arc<dyn Sender>) -> Self {
        Self {
            url,
            sender,
            budget: DispatchBudget::new(capacity),
            pending: PendingSends::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn capacity(&self) -> usize {
        self.budget.capacity()
    }

    /// Sends currently holding a permit.
    pub fn in_flight(&self) -> usize {
        self.budget.in_use()
    }

    /// Sends accepted whose callback has not returned yet.
    pub fn pending(&self) -> usize {
        self.pending.count()
    }

    pub fn flush(&self, timeout: Duration) -> bool {
        self.pending.wait_timeout(timeout)
    }

    /**
     * Accepts a send and hands it to a new background thread.
     *
     * Never blocks on the budget. If the thread cannot be spawned the task
     * is dropped by `std::thread`, which reports `NotifyError::Abandoned`
     * through the callback.
     */
    pub fn submit(self: &Arc<Self>, message: Vec<u8>, callback: Option<Callback>) {
        let task = SendTask::new(Arc::clone(self), message, callback);

        debug!(url = %self.url, bytes = task.message.len(), "notification scheduled");

        let spawned = thread::Builder::new()
            .name(THREAD_NAME.into())
            .spawn(move || task.run());

        if let Err(err) = spawned {
            warn!(url = %self.url, error = %err, "failed to spawn notification thread");
        }
    }
}

/// One accepted send, from submission until its callback returns.
struct SendTask {
    dispatcher: Arc<Dispatcher>,
    message: Vec<u8>,
    callback: Option<Callback>,
    completed: bool,
}

impl SendTask {
    fn new(dispatcher: Arc<Dispatcher>, message: Vec<u8>, callback: Option<Callback>) -> Self {
        dispatcher.pending.begin();
        Self {
            dispatcher,
            message,
            callback,
            completed: false,
        }
    }

    fn run(mut self) {
        let _permit = self.dispatcher.budget.acquire();
        debug!(
            url = %self.dispatcher.url,
            in_flight = self.dispatcher.budget.in_use(),
            "permit acquired"
        );

        let result = self.deliver();
        match &result {
            Ok(content) => debug!(url = %self.dispatcher.url, bytes = content.len(), "notification delivered"),
            Err(err) => warn!(url = %self.dispatcher.url, error = %err, "notification failed"),
        }

        self.complete(result);
    }

    /// Performs the single POST and turns its outcome into a `SendResult`.
    fn deliver(&self) -> SendResult {
        let dispatcher = &self.dispatcher;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            dispatcher.sender.send_post(&self.message, &dispatcher.url)
        }));

        match outcome {
            Ok(Ok(response)) => classify(response),
            Ok(Err(err)) => Err(NotifyError::Transport(err)),
            Err(payload) => Err(NotifyError::SenderPanicked {
                message: panic_message(payload.as_ref()),
            }),
        }
    }

    /// Hands `result` to the callback, if any. A panicking callback is contained.
    fn complete(&mut self, result: SendResult) {
        self.completed = true;

        let Some(callback) = self.callback.take() else {
            return;
        };

        if panic::catch_unwind(AssertUnwindSafe(move || callback(result))).is_err() {
            warn!(url = %self.dispatcher.url, "notification callback panicked");
        }
    }
}

impl Drop for SendTask {
    fn drop(&mut self) {
        if !self.completed {
            self.complete(Err(NotifyError::Abandoned));
        }
        self.dispatcher.pending.finish();
    }
}

/**
 * Maps a transport-level success to the callback result.
 *
 * Accepted codes deliver the body; any other code becomes
 * `UnsuccessfulResponse` and the body is dropped.
 */
pub fn classify(response: Response) -> SendResult {
    if response.is_success() {
        Ok(response.content)
    } else {
        Err(NotifyError::UnsuccessfulResponse {
            code: response.code,
            status: response.status,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    match payload.downcast_ref::<&str>() {
        Some(s) => (*s).to_string(),
        None => match payload.downcast_ref::<String>() {
            Some(s) => s.clone(),
            None => "<unknown panic>".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifier_core::TransportError;
    use std::sync::mpsc;

    struct NeverCalledSender;

    impl Sender for NeverCalledSender {
        fn send_post(&self, _message: &[u8], _url: &str) -> Result<Response, TransportError> {
            panic!("sender must not be reached");
        }
    }

    fn dispatcher() -> Arc<Dispatcher> {
        Arc::new(Dispatcher::new(
            "https://test.com".into(),
            1,
            Arc::new(NeverCalledSender),
        ))
    }

    #[test]
    fn test_classify_delivers_body_for_accepted_codes() {
        for code in [200, 201, 202] {
            let result = classify(Response::from_code(code, b"body".to_vec()));
            assert_eq!(result.unwrap(), b"body".to_vec());
        }
    }

    #[test]
    fn test_classify_discards_body_for_other_codes() {
        let result = classify(Response::from_code(400, b"details".to_vec()));
        match result {
            Err(NotifyError::UnsuccessfulResponse { code, status }) => {
                assert_eq!(code, 400);
                assert_eq!(status, "400 Bad Request");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_dropped_task_reports_abandoned_once() {
        let dispatcher = dispatcher();
        let (tx, rx) = mpsc::channel();

        let task = SendTask::new(
            dispatcher.clone(),
            b"lost".to_vec(),
            Some(Box::new(move |result| tx.send(result).unwrap())),
        );
        assert_eq!(dispatcher.pending(), 1);
        drop(task);

        assert!(matches!(rx.recv().unwrap(), Err(NotifyError::Abandoned)));
        assert!(rx.try_recv().is_err(), "callback must run exactly once");
        assert_eq!(dispatcher.pending(), 0);
    }

    #[test]
    fn test_panic_message_extracts_text() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let borrowed: Box<dyn Any + Send> = Box::new("borrowed");
        let other: Box<dyn Any + Send> = Box::new(7_u8);

        assert_eq!(panic_message(owned.as_ref()), "owned");
        assert_eq!(panic_message(borrowed.as_ref()), "borrowed");
        assert_eq!(panic_message(other.as_ref()), "<unknown panic>");
    }
}
