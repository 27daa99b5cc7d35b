//! Configuration types for the intro sequencer

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Delay used by the scripted timer when none is configured.
pub const DEFAULT_SCRIPTED_DELAY_MS: u64 = 2500;

/// Upper bound on the number of timed text reveal steps.
pub const MAX_REVEAL_STEPS: usize = 16;

/// Which intro the sequencer plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum IntroMode {
    /// No internal phases; the intro ends after one fixed delay.
    ScriptedTimer {
        #[serde(default = "default_scripted_delay_ms")]
        delay_ms: u64,
    },
    /// Timed text reveal, then "enter", then the falling/rising shard grid.
    #[default]
    InteractiveStaged,
}

/// Whole milliseconds of `duration`, clamped to `u64::MAX`.
pub fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn default_scripted_delay_ms() -> u64 {
    DEFAULT_SCRIPTED_DELAY_MS
}

/// What ends the `Falling` phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FallingExit {
    /// Every shard reported its fall animation as finished.
    #[default]
    AllShards,
    /// A fixed delay after `Falling` began.
    After { ms: u64 },
}

/// Shard grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: u16,
    pub cols: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 10, cols: 12 }
    }
}

impl GridConfig {
    /// Number of shards in the grid
    pub fn shard_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }
}

/// Bounds for the randomized cosmetic parameters of each shard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShardJitter {
    /// Upper bound of the uniform fall delay
    pub fall_jitter_ms: u64,
    /// Upper bound of the uniform rise delay
    pub rise_jitter_ms: u64,
    /// Rotation is drawn from `[-max_rotation_deg, max_rotation_deg]`
    pub max_rotation_deg: f32,
    /// Extra fall delay per row counted from the bottom row
    pub row_stagger_ms: u64,
}

impl Default for ShardJitter {
    fn default() -> Self {
        Self {
            fall_jitter_ms: 300,
            rise_jitter_ms: 600,
            max_rotation_deg: 45.0,
            row_stagger_ms: 0,
        }
    }
}

/// Main intro configuration
///
/// Every field has a default, so a settings file only needs to name what it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    /// Scripted timer or interactive staged intro
    pub mode: IntroMode,

    /// Delay before each text reveal step, measured from the previous step
    pub reveal_delays_ms: Vec<u64>,

    /// What ends the falling phase
    pub falling_exit: FallingExit,

    /// Pause between the grid reassembling and the completion signal
    pub trailing_delay_ms: u64,

    /// Upper bound for each animation phase before it is forced forward
    pub watchdog_ms: Option<u64>,

    /// Shard grid dimensions
    pub grid: GridConfig,

    /// Cosmetic randomization bounds
    pub jitter: ShardJitter,

    /// Fixed RNG seed for shard generation (random per launch when unset)
    pub seed: Option<u64>,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            mode: IntroMode::default(),
            reveal_delays_ms: vec![600, 900, 900],
            falling_exit: FallingExit::default(),
            trailing_delay_ms: 120,
            watchdog_ms: Some(6000),
            grid: GridConfig::default(),
            jitter: ShardJitter::default(),
            seed: None,
        }
    }
}

impl IntroConfig {
    /// Scripted timer intro ending after `delay`
    pub fn scripted(delay: Duration) -> Self {
        Self {
            mode: IntroMode::ScriptedTimer {
                delay_ms: saturating_millis(delay),
            },
            ..Default::default()
        }
    }

    /// Interactive staged intro with default timings
    pub fn interactive() -> Self {
        Self::default()
    }

    /// Set the grid dimensions
    pub fn with_grid(mut self, rows: u16, cols: u16) -> Self {
        self.grid = GridConfig { rows, cols };
        self
    }

    /// Set the watchdog bound (`None` disables it)
    pub fn with_watchdog(mut self, watchdog: Option<Duration>) -> Self {
        self.watchdog_ms = watchdog.map(saturating_millis);
        self
    }

    /// Set the shard generation seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration for values the sequencer cannot play
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.grid.rows,
                cols: self.grid.cols,
            });
        }
        if self.reveal_delays_ms.len() > MAX_REVEAL_STEPS {
            return Err(ConfigError::TooManyRevealSteps {
                count: self.reveal_delays_ms.len(),
                max: MAX_REVEAL_STEPS,
            });
        }
        let rotation = self.jitter.max_rotation_deg;
        if !rotation.is_finite() || rotation < 0.0 {
            return Err(ConfigError::InvalidRotation(rotation));
        }
        if self.watchdog_ms == Some(0) {
            return Err(ConfigError::ZeroWatchdog);
        }
        Ok(())
    }

    /// Number of timed reveal steps before "enter" is offered
    pub fn reveal_steps(&self) -> u8 {
        self.reveal_delays_ms.len().min(MAX_REVEAL_STEPS) as u8
    }

    /// Delay before reveal step `step + 1`
    pub fn reveal_delay(&self, step: u8) -> Option<Duration> {
        self.reveal_delays_ms
            .get(usize::from(step))
            .copied()
            .map(Duration::from_millis)
    }

    pub fn trailing_delay(&self) -> Duration {
        Duration::from_millis(self.trailing_delay_ms)
    }

    pub fn watchdog(&self) -> Option<Duration> {
        self.watchdog_ms.map(Duration::from_millis)
    }

    /// Whether the visitor has to press "enter" for the intro to finish
    pub fn is_interactive(&self) -> bool {
        matches!(self.mode, IntroMode::InteractiveStaged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IntroConfig::default();
        assert!(config.is_interactive());
        assert_eq!(config.reveal_steps(), 3);
        assert_eq!(config.grid.shard_count(), 120);
        assert_eq!(config.watchdog(), Some(Duration::from_secs(6)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scripted_config() {
        let config = IntroConfig::scripted(Duration::from_millis(2500));
        assert_eq!(config.mode, IntroMode::ScriptedTimer { delay_ms: 2500 });
        assert!(!config.is_interactive());
    }

    #[test]
    fn test_empty_grid_rejected() {
        let config = IntroConfig::interactive().with_grid(0, 12);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 12 })
        );
    }

    #[test]
    fn test_zero_watchdog_rejected() {
        let config = IntroConfig::interactive().with_watchdog(Some(Duration::ZERO));
        assert_eq!(config.validate(), Err(ConfigError::ZeroWatchdog));
    }

    #[test]
    fn test_negative_rotation_rejected() {
        let mut config = IntroConfig::interactive();
        config.jitter.max_rotation_deg = -5.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRotation(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"mode":{"kind":"scripted-timer"},"grid":{"rows":4}}"#;
        let config: IntroConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.mode,
            IntroMode::ScriptedTimer {
                delay_ms: DEFAULT_SCRIPTED_DELAY_MS
            }
        );
        assert_eq!(config.grid, GridConfig { rows: 4, cols: 12 });
        assert_eq!(config.trailing_delay_ms, 120);
    }

    #[test]
    fn test_null_watchdog_disables_it() {
        let json = r#"{"watchdog_ms":null,"falling_exit":{"kind":"after","ms":800}}"#;
        let config: IntroConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.watchdog(), None);
        assert_eq!(config.falling_exit, FallingExit::After { ms: 800 });
    }

    #[test]
    fn test_durations_saturate_to_u64_millis() {
        assert_eq!(saturating_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(saturating_millis(Duration::MAX), u64::MAX);

        let config = IntroConfig::scripted(Duration::MAX).with_watchdog(Some(Duration::MAX));
        assert_eq!(config.mode, IntroMode::ScriptedTimer { delay_ms: u64::MAX });
        assert_eq!(config.watchdog_ms, Some(u64::MAX));
    }
}
