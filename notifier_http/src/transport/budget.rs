/**
 * Counting semaphore that caps the number of POSTs in flight.
 *
 * Built on a bounded `crossbeam_channel` used as a token store:
 *
 * ```text
 *   acquire  ── send(()) ──►  [ () () () . . ]  capacity N
 *   release  ◄─ try_recv ───
 * ```
 *
 * `send` parks the calling thread once N tokens are outstanding, which is
 * exactly the acquire-blocks-when-exhausted contract. Releasing is done by
 * dropping the `Permit`, so no exit path can leak a token.
 *
 * Waiters are not served in FIFO order and there is no timeout: a permit
 * held by a send that never returns is never given back.
 */
use crossbeam_channel::{Receiver, Sender};

pub struct DispatchBudget {
    tokens: Sender<()>,
    drain: Receiver<()>,
    capacity: usize,
}

impl DispatchBudget {
    /**
     * Creates a budget with room for `capacity` concurrent holders.
     *
     * `capacity` must be non-zero; a zero-capacity crossbeam channel is a
     * rendezvous channel and would block every acquirer forever. The client
     * constructor rejects zero before it gets here.
     */
    pub fn new(capacity: usize) -> Self {
        let (tokens, drain) = crossbeam_channel::bounded(capacity);
        Self {
            tokens,
            drain,
            capacity,
        }
    }

    /// Blocks the current thread until a permit is free, then takes it.
    pub fn acquire(&self) -> Permit {
        // The budget owns a receiver, so the channel can never disconnect.
        let _ = self.tokens.send(());
        Permit {
            drain: self.drain.clone(),
        }
    }

    /// Maximum number of permits that can be held at once.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of permits currently held.
    pub fn in_use(&self) -> usize {
        self.tokens.len()
    }
}

/// A held unit of budget. Dropping it releases the unit.
pub struct Permit {
    drain: Receiver<()>,
}

impl Drop for Permit {
    fn drop(&mut self) {
        let _ = self.drain.try_recv();
    }
}
