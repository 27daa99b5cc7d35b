//! Async driver for the intro sequencer.
//!
//! The driver owns the only timer of the intro. It is a plain future: the UI
//! spawns it in the overlay's scope, so unmounting the overlay drops the
//! future and, with it, the pending timer and the event receiver.

use std::future;

use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, trace, warn};

use crate::config::IntroConfig;
use crate::error::DriverError;
use crate::phase::IntroPhase;
use crate::sequencer::{DeadlineCause, IntroEvent, IntroSequencer, Outcome, Step};

/// How a driver run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The terminal phase was reached and the completion callback ran.
    Finished,
    /// The handle cancelled the run before it finished.
    Cancelled,
    /// Every handle was dropped before the run finished.
    Abandoned,
}

/// Create a driver and the handle that feeds it.
pub fn intro_channel(config: &IntroConfig, shard_count: usize) -> (IntroDriver, IntroHandle) {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (phase_tx, phase_rx) = watch::channel(IntroPhase::START);
    let cancel = CancellationToken::new();

    let driver = IntroDriver {
        sequencer: IntroSequencer::new(config, shard_count),
        events: events_rx,
        phase_tx,
        cancel: cancel.clone(),
    };
    let handle = IntroHandle {
        events: events_tx,
        phase: phase_rx,
        cancel,
    };
    (driver, handle)
}

/// Runs an [`IntroSequencer`] against real time.
pub struct IntroDriver {
    sequencer: IntroSequencer,
    events: mpsc::UnboundedReceiver<IntroEvent>,
    phase_tx: watch::Sender<IntroPhase>,
    cancel: CancellationToken,
}

/// A deadline waiting to elapse.
#[derive(Debug, Clone, Copy)]
struct Pending {
    at: Instant,
    epoch: u64,
    cause: DeadlineCause,
}

impl IntroDriver {
    /// Play the intro to the end.
    ///
    /// `on_finish` runs once, when the sequencer finishes. It never runs if
    /// the run is cancelled, abandoned, or the future is dropped first.
    pub async fn run<F>(mut self, on_finish: F) -> RunOutcome
    where
        F: FnOnce(),
    {
        let mut pending = None;
        let step = self.sequencer.start();
        info!(phase = %self.sequencer.phase(), "Intro started");
        if self.apply(step, &mut pending, None) {
            on_finish();
            return RunOutcome::Finished;
        }

        loop {
            let mut fired = None;
            let step = tokio::select! {
                biased;

                _ = self.cancel.cancelled() => {
                    info!(phase = %self.sequencer.phase(), "Intro cancelled");
                    return RunOutcome::Cancelled;
                }

                (epoch, cause) = wait_for(pending) => {
                    pending = None;
                    fired = Some(cause);
                    self.sequencer.handle(IntroEvent::DeadlineElapsed { epoch })
                }

                event = self.events.recv() => match event {
                    Some(event) => self.sequencer.handle(event),
                    None => {
                        debug!(phase = %self.sequencer.phase(), "All intro handles dropped");
                        return RunOutcome::Abandoned;
                    }
                },
            };

            if self.apply(step, &mut pending, fired) {
                on_finish();
                return RunOutcome::Finished;
            }
        }
    }

    /// Publish and log a step, re-arming the deadline. Returns true once finished.
    fn apply(
        &mut self,
        step: Step,
        pending: &mut Option<Pending>,
        fired: Option<DeadlineCause>,
    ) -> bool {
        if step.rearms() {
            if let Some(previous) = pending.as_ref() {
                trace!(cause = ?previous.cause, "Replacing pending intro deadline");
            }
            // A deadline beyond the clock's range never elapses.
            *pending = step.deadline.and_then(|deadline| {
                Some(Pending {
                    at: Instant::now().checked_add(deadline.after)?,
                    epoch: deadline.epoch,
                    cause: deadline.cause,
                })
            });
        }

        match step.outcome {
            Outcome::Started => false,
            Outcome::Advanced { from, to } => {
                if fired == Some(DeadlineCause::Watchdog) {
                    warn!(%from, %to, "Intro watchdog forced the phase forward");
                } else {
                    info!(%from, %to, "Intro phase advanced");
                }
                self.phase_tx.send_replace(to);
                false
            }
            Outcome::Progress { phase, remaining } => {
                trace!(%phase, remaining, "Shard animation settled");
                false
            }
            Outcome::Ignored(reason) => {
                debug!(phase = %self.sequencer.phase(), ?reason, "Intro event ignored");
                false
            }
            Outcome::Finished => {
                // The scripted timer reaches the terminal phase here.
                let phase = self.sequencer.phase();
                self.phase_tx.send_if_modified(|current| {
                    let changed = *current != phase;
                    *current = phase;
                    changed
                });
                info!("Intro finished");
                true
            }
        }
    }
}

async fn wait_for(pending: Option<Pending>) -> (u64, DeadlineCause) {
    match pending {
        Some(p) => {
            sleep_until(p.at).await;
            (p.epoch, p.cause)
        }
        None => future::pending().await,
    }
}

/// Cloneable handle used by the UI to feed and observe a running intro.
#[derive(Debug, Clone)]
pub struct IntroHandle {
    events: mpsc::UnboundedSender<IntroEvent>,
    phase: watch::Receiver<IntroPhase>,
    cancel: CancellationToken,
}

impl IntroHandle {
    /// The visitor pressed the enter control.
    pub fn enter(&self) -> Result<(), DriverError> {
        self.send(IntroEvent::Enter)
    }

    /// Shard `index` finished falling.
    pub fn shard_fell(&self, index: usize) -> Result<(), DriverError> {
        self.send(IntroEvent::ShardFell(index))
    }

    /// Shard `index` finished rising.
    pub fn shard_rose(&self, index: usize) -> Result<(), DriverError> {
        self.send(IntroEvent::ShardRose(index))
    }

    fn send(&self, event: IntroEvent) -> Result<(), DriverError> {
        self.events.send(event).map_err(|_| DriverError::Closed)
    }

    /// Latest published phase.
    pub fn phase(&self) -> IntroPhase {
        *self.phase.borrow()
    }

    /// Receiver notified on every phase change.
    pub fn subscribe(&self) -> watch::Receiver<IntroPhase> {
        self.phase.clone()
    }

    /// Stop the driver without firing the completion callback.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Guard that cancels the driver when dropped.
    pub fn cancel_on_drop(&self) -> DropGuard {
        self.cancel.clone().drop_guard()
    }

    /// Whether the driver has stopped.
    pub fn is_closed(&self) -> bool {
        self.events.is_closed()
    }
}
