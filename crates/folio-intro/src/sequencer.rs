//! Intro phase machine.
//!
//! [`IntroSequencer`] is pure: it consumes [`IntroEvent`]s and answers with a
//! [`Step`] describing what happened and which deadline, if any, must be
//! armed next. Timers live in the [driver](crate::driver).
//!
//! Interactive staged timeline:
//!
//! ```text
//! Idle(i)   --deadline--> Idle(i+1)      for each configured reveal delay
//! Idle(K)   --enter-----> Falling
//! Falling   --all fell | fall deadline | watchdog--> Rising
//! Rising    --all rose | watchdog-------------------> Assembled
//! Assembled --trailing deadline--> finished
//! ```
//!
//! The scripted timer skips every phase: `Idle(0) --deadline--> Assembled`,
//! finished at once.

use std::time::Duration;

use crate::config::{FallingExit, IntroConfig, IntroMode};
use crate::fan_in::{CompletionFanIn, FanInRecord};
use crate::phase::IntroPhase;

/// Input to the phase machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroEvent {
    /// A deadline armed at `epoch` elapsed.
    DeadlineElapsed { epoch: u64 },
    /// The visitor pressed the enter control.
    Enter,
    /// Shard `index` finished its fall animation.
    ShardFell(usize),
    /// Shard `index` finished its rise animation.
    ShardRose(usize),
}

/// Why a deadline was armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineCause {
    Scripted,
    Reveal,
    FallTimeout,
    Watchdog,
    Trailing,
}

/// A timer the driver must arm. It replaces any previously armed deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    pub after: Duration,
    pub epoch: u64,
    pub cause: DeadlineCause,
}

/// Why an event had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NotStarted,
    AlreadyStarted,
    Finished,
    /// The deadline belongs to an earlier epoch, or none is armed.
    StaleDeadline,
    /// Enter arrived while the text reveal was still running, or after it.
    NotAwaitingEnter,
    /// A shard report that does not belong to the current phase.
    WrongPhase,
    DuplicateShard,
    UnknownShard,
}

/// What an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Started,
    Advanced { from: IntroPhase, to: IntroPhase },
    /// A new shard report was counted.
    Progress { phase: IntroPhase, remaining: usize },
    /// The completion signal must fire now. Returned once per sequencer.
    Finished,
    Ignored(IgnoreReason),
}

/// Result of feeding one event to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub outcome: Outcome,
    /// Deadline to arm. Only meaningful for `Started`, `Advanced` and `Finished`.
    pub deadline: Option<Deadline>,
}

impl Step {
    fn ignored(reason: IgnoreReason) -> Self {
        Self {
            outcome: Outcome::Ignored(reason),
            deadline: None,
        }
    }

    /// Whether the driver should replace its pending deadline with `deadline`.
    pub fn rearms(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::Started | Outcome::Advanced { .. } | Outcome::Finished
        )
    }
}

/// The intro state machine.
#[derive(Debug, Clone)]
pub struct IntroSequencer {
    mode: IntroMode,
    reveal_delays: Vec<Duration>,
    falling_exit: FallingExit,
    trailing: Duration,
    watchdog: Option<Duration>,
    phase: IntroPhase,
    /// Incremented on every transition; tags armed deadlines.
    epoch: u64,
    armed: Option<Deadline>,
    fell: CompletionFanIn,
    rose: CompletionFanIn,
    started: bool,
    finished: bool,
}

impl IntroSequencer {
    /// Create a sequencer for `shard_count` animating shards.
    pub fn new(config: &IntroConfig, shard_count: usize) -> Self {
        Self {
            mode: config.mode,
            reveal_delays: config
                .reveal_delays_ms
                .iter()
                .take(usize::from(config.reveal_steps()))
                .copied()
                .map(Duration::from_millis)
                .collect(),
            falling_exit: config.falling_exit,
            trailing: config.trailing_delay(),
            watchdog: config.watchdog(),
            phase: IntroPhase::START,
            epoch: 0,
            armed: None,
            fell: CompletionFanIn::new(shard_count),
            rose: CompletionFanIn::new(shard_count),
            started: false,
            finished: false,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn armed(&self) -> Option<Deadline> {
        self.armed
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the enter control should be offered.
    pub fn awaiting_enter(&self) -> bool {
        self.started
            && matches!(self.mode, IntroMode::InteractiveStaged)
            && self.phase == IntroPhase::Idle { step: self.reveal_steps() }
    }

    fn reveal_steps(&self) -> u8 {
        self.reveal_delays.len() as u8
    }

    /// Start the timeline and arm its first deadline.
    pub fn start(&mut self) -> Step {
        if self.started {
            return Step::ignored(IgnoreReason::AlreadyStarted);
        }
        self.started = true;

        let deadline = match self.mode {
            IntroMode::ScriptedTimer { delay_ms } => {
                self.arm(Duration::from_millis(delay_ms), DeadlineCause::Scripted)
            }
            IntroMode::InteractiveStaged => self.arm_for_phase(),
        };
        Step {
            outcome: Outcome::Started,
            deadline,
        }
    }

    /// Feed one event.
    pub fn handle(&mut self, event: IntroEvent) -> Step {
        if !self.started {
            return Step::ignored(IgnoreReason::NotStarted);
        }
        if self.finished {
            return Step::ignored(IgnoreReason::Finished);
        }

        match event {
            IntroEvent::DeadlineElapsed { epoch } => self.on_deadline(epoch),
            IntroEvent::Enter => {
                if self.awaiting_enter() {
                    self.advance(IntroPhase::Falling)
                } else {
                    Step::ignored(IgnoreReason::NotAwaitingEnter)
                }
            }
            IntroEvent::ShardFell(index) => {
                if self.phase != IntroPhase::Falling {
                    return Step::ignored(IgnoreReason::WrongPhase);
                }
                let record = self.fell.record(index);
                // A fixed fall delay ignores the fan-in.
                let fan_in_exits = self.falling_exit == FallingExit::AllShards;
                self.on_record(record, fan_in_exits, IntroPhase::Rising)
            }
            IntroEvent::ShardRose(index) => {
                if self.phase != IntroPhase::Rising {
                    return Step::ignored(IgnoreReason::WrongPhase);
                }
                let record = self.rose.record(index);
                self.on_record(record, true, IntroPhase::Assembled)
            }
        }
    }

    fn on_record(&mut self, record: FanInRecord, exits: bool, next: IntroPhase) -> Step {
        match record {
            FanInRecord::Counted { remaining } => Step {
                outcome: Outcome::Progress {
                    phase: self.phase,
                    remaining,
                },
                deadline: None,
            },
            FanInRecord::Completed if exits => self.advance(next),
            FanInRecord::Completed => Step {
                outcome: Outcome::Progress {
                    phase: self.phase,
                    remaining: 0,
                },
                deadline: None,
            },
            FanInRecord::Duplicate => Step::ignored(IgnoreReason::DuplicateShard),
            FanInRecord::OutOfRange => Step::ignored(IgnoreReason::UnknownShard),
        }
    }

    fn on_deadline(&mut self, epoch: u64) -> Step {
        let Some(armed) = self.armed.filter(|d| d.epoch == epoch) else {
            return Step::ignored(IgnoreReason::StaleDeadline);
        };
        self.armed = None;

        match armed.cause {
            DeadlineCause::Scripted => {
                self.phase = IntroPhase::Assembled;
                self.epoch += 1;
                self.finish()
            }
            DeadlineCause::Trailing => self.finish(),
            DeadlineCause::Reveal => match self.phase {
                IntroPhase::Idle { step } => self.advance(IntroPhase::Idle { step: step + 1 }),
                _ => Step::ignored(IgnoreReason::StaleDeadline),
            },
            DeadlineCause::FallTimeout | DeadlineCause::Watchdog => match self.phase {
                IntroPhase::Falling => self.advance(IntroPhase::Rising),
                IntroPhase::Rising => self.advance(IntroPhase::Assembled),
                _ => Step::ignored(IgnoreReason::StaleDeadline),
            },
        }
    }

    fn finish(&mut self) -> Step {
        self.finished = true;
        Step {
            outcome: Outcome::Finished,
            deadline: None,
        }
    }

    fn advance(&mut self, to: IntroPhase) -> Step {
        let from = self.phase;
        debug_assert!(to > from, "intro phases only move forward: {from} -> {to}");
        self.phase = to;
        self.epoch += 1;
        self.armed = None;

        Step {
            outcome: Outcome::Advanced { from, to },
            deadline: self.arm_for_phase(),
        }
    }

    /// Arm the deadline that belongs to the current phase, if any.
    fn arm_for_phase(&mut self) -> Option<Deadline> {
        match self.phase {
            IntroPhase::Idle { step } => {
                let delay = self.reveal_delays.get(usize::from(step)).copied()?;
                self.arm(delay, DeadlineCause::Reveal)
            }
            IntroPhase::Falling => match self.falling_exit {
                FallingExit::After { ms } => {
                    self.arm(Duration::from_millis(ms), DeadlineCause::FallTimeout)
                }
                FallingExit::AllShards => {
                    let watchdog = self.watchdog?;
                    self.arm(watchdog, DeadlineCause::Watchdog)
                }
            },
            IntroPhase::Rising => {
                let watchdog = self.watchdog?;
                self.arm(watchdog, DeadlineCause::Watchdog)
            }
            IntroPhase::Assembled => self.arm(self.trailing, DeadlineCause::Trailing),
        }
    }

    fn arm(&mut self, after: Duration, cause: DeadlineCause) -> Option<Deadline> {
        let deadline = Deadline {
            after,
            epoch: self.epoch,
            cause,
        };
        self.armed = Some(deadline);
        Some(deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interactive(shards: usize) -> IntroSequencer {
        let config = IntroConfig::interactive().with_watchdog(None);
        IntroSequencer::new(&config, shards)
    }

    /// Fire whatever deadline is armed.
    fn elapse(seq: &mut IntroSequencer) -> Step {
        let epoch = seq.armed().expect("a deadline is armed").epoch;
        seq.handle(IntroEvent::DeadlineElapsed { epoch })
    }

    fn reveal_all(seq: &mut IntroSequencer) {
        seq.start();
        for _ in 0..3 {
            elapse(seq);
        }
        assert!(seq.awaiting_enter());
    }

    #[test]
    fn test_reveal_steps_advance_on_deadlines() {
        let mut seq = interactive(4);
        let step = seq.start();
        assert_eq!(step.outcome, Outcome::Started);
        assert_eq!(step.deadline.unwrap().after, Duration::from_millis(600));

        let step = elapse(&mut seq);
        assert_eq!(
            step.outcome,
            Outcome::Advanced {
                from: IntroPhase::Idle { step: 0 },
                to: IntroPhase::Idle { step: 1 }
            }
        );
        elapse(&mut seq);
        let step = elapse(&mut seq);
        assert_eq!(seq.phase(), IntroPhase::Idle { step: 3 });
        assert!(step.deadline.is_none());
        assert!(seq.awaiting_enter());
    }

    #[test]
    fn test_enter_too_early_is_ignored() {
        let mut seq = interactive(4);
        seq.start();
        let step = seq.handle(IntroEvent::Enter);
        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::NotAwaitingEnter));
        assert_eq!(seq.phase(), IntroPhase::START);
    }

    #[test]
    fn test_events_before_start_are_ignored() {
        let mut seq = interactive(4);
        let step = seq.handle(IntroEvent::Enter);
        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::NotStarted));
    }

    #[test]
    fn test_full_interactive_timeline() {
        let mut seq = interactive(3);
        reveal_all(&mut seq);

        seq.handle(IntroEvent::Enter);
        assert_eq!(seq.phase(), IntroPhase::Falling);

        seq.handle(IntroEvent::ShardFell(2));
        seq.handle(IntroEvent::ShardFell(0));
        assert_eq!(seq.phase(), IntroPhase::Falling);
        seq.handle(IntroEvent::ShardFell(1));
        assert_eq!(seq.phase(), IntroPhase::Rising);

        for i in 0..3 {
            seq.handle(IntroEvent::ShardRose(i));
        }
        assert_eq!(seq.phase(), IntroPhase::Assembled);
        let trailing = seq.armed().unwrap();
        assert_eq!(trailing.cause, DeadlineCause::Trailing);
        assert!(!seq.is_finished());

        let step = elapse(&mut seq);
        assert_eq!(step.outcome, Outcome::Finished);
        assert!(seq.is_finished());
    }

    #[test]
    fn test_finished_exactly_once() {
        let mut seq = interactive(2);
        reveal_all(&mut seq);
        seq.handle(IntroEvent::Enter);
        seq.handle(IntroEvent::ShardFell(0));
        seq.handle(IntroEvent::ShardFell(1));
        seq.handle(IntroEvent::ShardRose(1));
        seq.handle(IntroEvent::ShardRose(0));
        let epoch = seq.armed().unwrap().epoch;

        let mut finished = 0;
        for event in [
            IntroEvent::DeadlineElapsed { epoch },
            IntroEvent::DeadlineElapsed { epoch },
            IntroEvent::ShardRose(1),
            IntroEvent::ShardRose(1),
            IntroEvent::Enter,
        ] {
            if seq.handle(event).outcome == Outcome::Finished {
                finished += 1;
            }
        }
        assert_eq!(finished, 1);
    }

    #[test]
    fn test_shard_reports_in_wrong_phase() {
        let mut seq = interactive(2);
        reveal_all(&mut seq);
        let step = seq.handle(IntroEvent::ShardRose(0));
        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::WrongPhase));

        seq.handle(IntroEvent::Enter);
        let step = seq.handle(IntroEvent::ShardRose(0));
        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::WrongPhase));
        let step = seq.handle(IntroEvent::ShardFell(7));
        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::UnknownShard));
    }

    #[test]
    fn test_stale_deadline_ignored() {
        let mut seq = interactive(2);
        seq.start();
        let first = seq.armed().unwrap().epoch;
        elapse(&mut seq);

        let step = seq.handle(IntroEvent::DeadlineElapsed { epoch: first });
        assert_eq!(step.outcome, Outcome::Ignored(IgnoreReason::StaleDeadline));
        assert_eq!(seq.phase(), IntroPhase::Idle { step: 1 });
    }

    #[test]
    fn test_fixed_fall_delay_ignores_fan_in() {
        let config = IntroConfig {
            falling_exit: FallingExit::After { ms: 800 },
            ..IntroConfig::interactive()
        };
        let mut seq = IntroSequencer::new(&config, 2);
        reveal_all(&mut seq);
        let step = seq.handle(IntroEvent::Enter);
        assert_eq!(step.deadline.unwrap().cause, DeadlineCause::FallTimeout);

        seq.handle(IntroEvent::ShardFell(0));
        seq.handle(IntroEvent::ShardFell(1));
        assert_eq!(seq.phase(), IntroPhase::Falling);

        elapse(&mut seq);
        assert_eq!(seq.phase(), IntroPhase::Rising);
    }

    #[test]
    fn test_watchdog_forces_progress() {
        let config = IntroConfig::interactive().with_watchdog(Some(Duration::from_secs(5)));
        let mut seq = IntroSequencer::new(&config, 10);
        reveal_all(&mut seq);
        let step = seq.handle(IntroEvent::Enter);
        assert_eq!(step.deadline.unwrap().cause, DeadlineCause::Watchdog);

        elapse(&mut seq);
        assert_eq!(seq.phase(), IntroPhase::Rising);
        elapse(&mut seq);
        assert_eq!(seq.phase(), IntroPhase::Assembled);
        assert_eq!(elapse(&mut seq).outcome, Outcome::Finished);
    }

    #[test]
    fn test_scripted_skips_phases() {
        let config = IntroConfig::scripted(Duration::from_millis(2500));
        let mut seq = IntroSequencer::new(&config, 0);
        let step = seq.start();
        assert_eq!(step.deadline.unwrap().cause, DeadlineCause::Scripted);
        assert!(!seq.awaiting_enter());

        assert_eq!(
            seq.handle(IntroEvent::Enter).outcome,
            Outcome::Ignored(IgnoreReason::NotAwaitingEnter)
        );
        assert_eq!(elapse(&mut seq).outcome, Outcome::Finished);
        assert_eq!(seq.phase(), IntroPhase::Assembled);
    }

    #[test]
    fn test_no_reveal_delays_awaits_enter_immediately() {
        let config = IntroConfig {
            reveal_delays_ms: Vec::new(),
            ..IntroConfig::interactive()
        };
        let mut seq = IntroSequencer::new(&config, 1);
        let step = seq.start();
        assert!(step.deadline.is_none());
        assert!(seq.awaiting_enter());
    }
}
