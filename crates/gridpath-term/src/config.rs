use std::time::Duration;

use gridpath_search::SessionConfig;

/// Configuration for the terminal front-end.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TermConfig {
    pub session: SessionConfig,
    /// Pause after each settled cell while animating a search.
    pub step_delay: Duration,
    /// Chance that an open interior cell becomes a barrier on scatter.
    pub barrier_density: f64,
    /// Seed for barrier scattering. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Capture mouse events for painting.
    pub mouse: bool,
}

impl TermConfig {
    /// Fits a 80x24 terminal with room for the status lines.
    pub const DEFAULT_ROWS: i32 = 22;
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(15);
    pub const DEFAULT_DENSITY: f64 = 0.25;

    pub fn with_rows(mut self, rows: i32) -> Self {
        self.session = self.session.with_rows(rows);
        self
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Set the scatter density, clamped to `0.0..=1.0`.
    pub fn with_barrier_density(mut self, density: f64) -> Self {
        self.barrier_density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default().with_rows(Self::DEFAULT_ROWS),
            step_delay: Self::DEFAULT_DELAY,
            barrier_density: Self::DEFAULT_DENSITY,
            seed: None,
            mouse: true,
        }
    }
}
