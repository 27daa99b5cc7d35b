//! Intro sequencer for the Folio portfolio
//!
//! The intro is the one-time entrance animation shown before the main page
//! content. This crate holds everything about it that is not rendering:
//!
//! - **Configuration**: [`IntroConfig`] selects between the scripted timer and
//!   the interactive staged intro, and carries every delay and grid dimension.
//! - **Phase machine**: [`IntroSequencer`] is a pure state machine. It never
//!   sleeps; it tells its caller which deadline to arm next.
//! - **Shards**: [`ShardGrid`] generates the decorative grid pieces once, with
//!   randomized cosmetic parameters.
//! - **Driver**: [`IntroDriver`] owns the timers, feeds events into the
//!   machine and fires the completion callback at most once.
//! - **Page latch**: [`IntroLatch`] is the owner's one-shot "show intro" flag.
//!
//! # Example
//!
//! ```ignore
//! use folio_intro::{intro_channel, IntroConfig, ShardGrid};
//!
//! let config = IntroConfig::interactive();
//! let grid = ShardGrid::from_config(&config);
//! let (driver, handle) = intro_channel(&config, grid.len());
//!
//! tokio::spawn(driver.run(|| tracing::info!("intro finished")));
//!
//! // Later, when the visitor clicks "enter":
//! handle.enter()?;
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod fan_in;
pub mod latch;
pub mod phase;
pub mod sequencer;
pub mod shard;

pub use config::{FallingExit, GridConfig, IntroConfig, IntroMode, ShardJitter};
pub use driver::{intro_channel, IntroDriver, IntroHandle, RunOutcome};
pub use error::{ConfigError, DriverError};
pub use fan_in::{CompletionFanIn, FanInRecord};
pub use latch::{IntroLatch, PageView};
pub use phase::IntroPhase;
pub use sequencer::{Deadline, DeadlineCause, IgnoreReason, IntroEvent, IntroSequencer, Outcome, Step};
pub use shard::{Shard, ShardGrid};
