use std::time::Duration;

use pairlink_core::{ConfigurationError, Layout, Palette};

/// Settings for a game session.
///
/// All fields have defaults matching the classic 10×10 board, and missing
/// fields fall back to those defaults when deserializing.
///
/// # Examples
///
/// ```
/// use pairlink_core::{ConfigurationError, Layout};
/// use pairlink_game::GameConfig;
///
/// let config = GameConfig::default()
///     .with_size(6, 8)
///     .with_palette_size(12)
///     .with_layouts(vec![Layout::CollapseDown, Layout::CollapseLeft]);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.layout_for_level(3), Layout::CollapseDown);
///
/// assert_eq!(
///     GameConfig::default().with_size(3, 3).validate(),
///     Err(ConfigurationError::OddCellCount { rows: 3, cols: 3 }),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows on the board.
    pub rows: usize,
    /// Number of columns on the board.
    pub cols: usize,
    /// Number of distinct symbols.
    pub palette_size: u16,
    /// Number of levels before play wraps back to level 1.
    pub max_level: u32,
    /// Layout schedule; level `n` uses entry `(n - 1) % layouts.len()`.
    pub layouts: Vec<Layout>,
    /// Upper bound on shuffles tried when the board is stuck.
    pub max_reshuffle_attempts: u32,
    /// Whether a successful match reshuffles a stuck board automatically.
    pub auto_reshuffle: bool,
    /// Time allowed per level. Enforced by the caller, which calls
    /// [`Game::restart`](crate::Game::restart) when it runs out.
    pub level_time: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            palette_size: Palette::DEFAULT_LEN,
            max_level: 7,
            layouts: Layout::ALL.to_vec(),
            max_reshuffle_attempts: 64,
            auto_reshuffle: true,
            level_time: Duration::from_secs(180),
        }
    }
}

impl GameConfig {
    /// Sets the board size.
    #[must_use]
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Sets the number of distinct symbols.
    #[must_use]
    pub fn with_palette_size(mut self, palette_size: u16) -> Self {
        self.palette_size = palette_size;
        self
    }

    /// Sets the number of levels.
    #[must_use]
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level;
        self
    }

    /// Sets the layout schedule.
    #[must_use]
    pub fn with_layouts(mut self, layouts: Vec<Layout>) -> Self {
        self.layouts = layouts;
        self
    }

    /// Sets the reshuffle budget.
    #[must_use]
    pub fn with_max_reshuffle_attempts(mut self, attempts: u32) -> Self {
        self.max_reshuffle_attempts = attempts;
        self
    }

    /// Enables or disables the reshuffle after a match.
    #[must_use]
    pub fn with_auto_reshuffle(mut self, enabled: bool) -> Self {
        self.auto_reshuffle = enabled;
        self
    }

    /// Sets the time allowed per level.
    #[must_use]
    pub fn with_level_time(mut self, level_time: Duration) -> Self {
        self.level_time = level_time;
        self
    }

    /// Returns the symbol palette.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette_size)
    }

    /// Returns the layout applied on `level`.
    ///
    /// Levels past the end of the schedule cycle back to its start. An empty
    /// schedule yields [`Layout::Identity`].
    #[must_use]
    pub fn layout_for_level(&self, level: u32) -> Layout {
        if self.layouts.is_empty() {
            return Layout::Identity;
        }
        let index = level.saturating_sub(1) as usize % self.layouts.len();
        self.layouts[index]
    }

    /// Checks that a board can be generated from this configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem found as a [`ConfigurationError`].
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        ConfigurationError::check_shape(self.rows, self.cols)?;
        if self.palette_size == 0 {
            return Err(ConfigurationError::EmptyPalette);
        }
        if self.max_level == 0 {
            return Err(ConfigurationError::NoLevels);
        }
        if self.layouts.is_empty() {
            return Err(ConfigurationError::EmptyLayoutSchedule);
        }
        Ok(())
    }
}
