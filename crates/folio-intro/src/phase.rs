//! Intro phases and their ordering.

use std::cmp::Ordering;
use std::fmt;

/// Where the sequencer is in its timeline.
///
/// Phases are totally ordered along the timeline:
/// `Idle(0) < Idle(1) < ... < Falling < Rising < Assembled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntroPhase {
    /// Text reveal in progress; `step` counts revealed blocks.
    Idle { step: u8 },
    /// Shards scatter away.
    Falling,
    /// Shards return to their place.
    Rising,
    /// Terminal: the grid is whole again and hand-off follows.
    Assembled,
}

impl IntroPhase {
    /// First phase of every sequencer.
    pub const START: IntroPhase = IntroPhase::Idle { step: 0 };

    /// Position on the timeline.
    pub fn rank(self) -> u16 {
        match self {
            IntroPhase::Idle { step } => u16::from(step),
            IntroPhase::Falling => 256,
            IntroPhase::Rising => 257,
            IntroPhase::Assembled => 258,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == IntroPhase::Assembled
    }

    /// Number of revealed text blocks (all of them once past `Idle`).
    pub fn revealed(self, total: u8) -> u8 {
        match self {
            IntroPhase::Idle { step } => step.min(total),
            _ => total,
        }
    }

    /// CSS class suffix used by the overlay.
    pub fn css_value(self) -> &'static str {
        match self {
            IntroPhase::Idle { .. } => "idle",
            IntroPhase::Falling => "falling",
            IntroPhase::Rising => "rising",
            IntroPhase::Assembled => "assembled",
        }
    }
}

impl Default for IntroPhase {
    fn default() -> Self {
        Self::START
    }
}

impl PartialOrd for IntroPhase {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IntroPhase {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for IntroPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntroPhase::Idle { step } => write!(f, "idle({step})"),
            other => f.write_str(other.css_value()),
        }
    }
}
