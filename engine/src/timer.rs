//! Countdown scheduling.
//!
//! A round's countdown is a repeating interval represented by a [`TimerHandle`].
//! The engine owns the handle for the active round and cancels it whenever the
//! round resolves or a new round starts. Every [`Tick`] names the timer that
//! produced it so ticks from a cancelled timer can be told apart and dropped.

use std::time::Duration;

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// One countdown step.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// One elapsed period of a specific timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub timer: TimerId,
}

/// Cancellable handle to a running interval.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    id: TimerId,
    abort: AbortHandle,
}

impl TimerHandle {
    #[must_use]
    pub fn new(id: TimerId, abort: AbortHandle) -> Self {
        Self { id, abort }
    }

    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// A tick as this timer would deliver it.
    #[must_use]
    pub fn tick(&self) -> Tick {
        Tick { timer: self.id }
    }

    /// Stop the interval. Cancelling twice is a no-op.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Starts repeating intervals on behalf of the engine.
pub trait Scheduler {
    fn start_interval(&mut self, period: Duration) -> TimerHandle;
}

/// Runs each interval as a tokio task that sends [`Tick`]s into a channel.
///
/// `start_interval` must be called from inside a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    ticks: mpsc::UnboundedSender<Tick>,
    next_id: u64,
}

impl TokioScheduler {
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (ticks, rx) = mpsc::unbounded_channel();
        (Self { ticks, next_id: 0 }, rx)
    }
}

impl Scheduler for TokioScheduler {
    fn start_interval(&mut self, period: Duration) -> TimerHandle {
        let id = TimerId::new(self.next_id);
        self.next_id += 1;

        let (abort_handle, abort_registration) = AbortHandle::new_pair();
        let ticks = self.ticks.clone();
        let interval = async move {
            // First tick fires one full period after start, not immediately.
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(Tick { timer: id }).is_err() {
                    tracing::debug!(timer = id.value(), "Tick receiver dropped, stopping");
                    break;
                }
            }
        };
        tokio::spawn(Abortable::new(interval, abort_registration));

        tracing::trace!(timer = id.value(), ?period, "Interval started");
        TimerHandle::new(id, abort_handle)
    }
}

/// Hands out timers without running anything; the caller delivers ticks itself.
///
/// A test double for driving rounds on virtual time. It keeps every handle it
/// has issued, cancelled or not, so [`issued`](Self::issued) grows by one per
/// round; real hosts use [`TokioScheduler`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    issued: Vec<TimerHandle>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every handle issued so far, oldest first.
    #[must_use]
    pub fn issued(&self) -> &[TimerHandle] {
        &self.issued
    }

    /// Number of issued timers that have not been cancelled.
    #[must_use]
    pub fn running(&self) -> usize {
        self.issued.iter().filter(|h| !h.is_cancelled()).count()
    }
}

impl Scheduler for ManualScheduler {
    fn start_interval(&mut self, _period: Duration) -> TimerHandle {
        let (abort_handle, _abort_registration) = AbortHandle::new_pair();
        let handle = TimerHandle::new(TimerId::new(self.issued.len() as u64), abort_handle);
        self.issued.push(handle.clone());
        handle
    }
}
