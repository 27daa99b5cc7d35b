//! Decorative shard grid.
//!
//! Shards are generated once per sequencer instance and shared behind an
//! `Arc`; re-rendering never regenerates them.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GridConfig, IntroConfig, ShardJitter};

/// One piece of the intro grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shard {
    /// Row-major position in the grid
    pub index: usize,
    pub row: u16,
    pub col: u16,
    /// Delay before this shard starts falling
    pub fall_delay: Duration,
    /// Delay before this shard starts rising
    pub rise_delay: Duration,
    /// Rotation applied while falling, in degrees
    pub rotation_deg: f32,
}

impl Shard {
    /// Stable identity, usable as a render key.
    pub fn id(&self) -> String {
        format!("shard-{}-{}", self.row, self.col)
    }
}

/// Immutable collection of `rows * cols` shards in row-major order.
#[derive(Debug, Clone)]
pub struct ShardGrid {
    grid: GridConfig,
    shards: Arc<[Shard]>,
}

impl ShardGrid {
    /// Generate a grid using the given RNG.
    pub fn generate<R: Rng + ?Sized>(grid: GridConfig, jitter: &ShardJitter, rng: &mut R) -> Self {
        let mut shards = Vec::with_capacity(grid.shard_count());
        for row in 0..grid.rows {
            // Lower rows crumble first.
            let stagger = jitter
                .row_stagger_ms
                .saturating_mul(u64::from(grid.rows - row - 1));
            for col in 0..grid.cols {
                let fall = stagger.saturating_add(uniform_ms(rng, jitter.fall_jitter_ms));
                let rise = uniform_ms(rng, jitter.rise_jitter_ms);
                let rotation_deg = if jitter.max_rotation_deg > 0.0 {
                    rng.random_range(-jitter.max_rotation_deg..=jitter.max_rotation_deg)
                } else {
                    0.0
                };
                shards.push(Shard {
                    index: shards.len(),
                    row,
                    col,
                    fall_delay: Duration::from_millis(fall),
                    rise_delay: Duration::from_millis(rise),
                    rotation_deg,
                });
            }
        }

        Self {
            grid,
            shards: shards.into(),
        }
    }

    /// Generate a grid for `config`, seeded when the config names a seed.
    pub fn from_config(config: &IntroConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::generate(config.grid, &config.jitter, &mut rng)
    }

    /// A grid with no shards, for intros that never animate any.
    pub fn empty() -> Self {
        Self {
            grid: GridConfig { rows: 0, cols: 0 },
            shards: Arc::from(Vec::new()),
        }
    }

    pub fn rows(&self) -> u16 {
        self.grid.rows
    }

    pub fn cols(&self) -> u16 {
        self.grid.cols
    }

    pub fn len(&self) -> usize {
        self.shards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shard> {
        self.shards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shard> {
        self.shards.iter()
    }

    /// Whether both handles share the same generated shards.
    pub fn same_generation(&self, other: &ShardGrid) -> bool {
        Arc::ptr_eq(&self.shards, &other.shards)
    }
}

fn uniform_ms<R: Rng + ?Sized>(rng: &mut R, max_ms: u64) -> u64 {
    if max_ms == 0 {
        0
    } else {
        rng.random_range(0..=max_ms)
    }
}
