use serde::{Deserialize, Serialize};

use crate::playback::Playback;
use crate::search::Stepper;

/// Which trace the viewer plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Stop at the first solution.
    FirstSolution,
    /// Stop after `max_solutions` solutions.
    UpTo,
    /// Enumerate every solution.
    All,
}

impl SearchMode {
    pub fn label(self) -> &'static str {
        match self {
            SearchMode::FirstSolution => "First solution",
            SearchMode::UpTo => "Up to k solutions",
            SearchMode::All => "All solutions",
        }
    }
}

/// Viewer configuration, persisted between runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board_size: usize,
    /// 1 (slowest) to 10 (as fast as possible).
    pub speed: u64,
    pub mode: SearchMode,
    pub max_solutions: usize,
    pub show_threats: bool,
    pub theme: String,
    /// Trace events kept for step export.
    pub history_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: 8,
            speed: 5,
            mode: SearchMode::FirstSolution,
            max_solutions: 1,
            show_threats: false,
            theme: String::from("Sleek Dark"),
            history_limit: Playback::DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Settings {
    pub const MAX_BOARD_SIZE: usize = 30;
    pub const MAX_SPEED: u64 = 10;
    pub const MAX_SOLUTIONS: usize = 1000;
    pub const MAX_HISTORY: usize = 1_000_000;

    /// Clamps every field into its valid range.
    pub fn sanitized(mut self) -> Self {
        self.board_size = self.board_size.clamp(1, Self::MAX_BOARD_SIZE);
        self.speed = self.speed.clamp(1, Self::MAX_SPEED);
        self.max_solutions = self.max_solutions.clamp(1, Self::MAX_SOLUTIONS);
        self.history_limit = self.history_limit.clamp(1, Self::MAX_HISTORY);
        self
    }

    /// Milliseconds between steps; zero at full speed.
    pub fn step_delay_ms(&self) -> u64 {
        Self::MAX_SPEED.saturating_sub(self.speed) * 50
    }

    pub fn stepper(&self) -> Stepper {
        match self.mode {
            SearchMode::FirstSolution => Stepper::first_solution(self.board_size),
            SearchMode::UpTo => Stepper::bounded(self.board_size, self.max_solutions),
            SearchMode::All => Stepper::exhaustive(self.board_size),
        }
    }

    /// A fresh playback of [`Settings::stepper`] with this history limit.
    pub fn playback(&self) -> Playback {
        Playback::new(self.stepper()).with_history_limit(self.history_limit)
    }

    pub fn apply(&mut self, preset: &Preset) {
        self.board_size = preset.board_size;
        self.mode = preset.mode;
        self.max_solutions = preset.max_solutions;
    }
}

/// A one-click board size and mode, optionally exporting the steps once the
/// run completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub board_size: usize,
    pub mode: SearchMode,
    pub max_solutions: usize,
    pub export_steps: bool,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        label: "4-Queens (2 solutions)",
        board_size: 4,
        mode: SearchMode::UpTo,
        max_solutions: 2,
        export_steps: false,
    },
    Preset {
        label: "5-Queens",
        board_size: 5,
        mode: SearchMode::UpTo,
        max_solutions: 1,
        export_steps: false,
    },
    Preset {
        label: "6-Queens",
        board_size: 6,
        mode: SearchMode::UpTo,
        max_solutions: 1,
        export_steps: false,
    },
    Preset {
        label: "8-Queens (first only)",
        board_size: 8,
        mode: SearchMode::UpTo,
        max_solutions: 1,
        export_steps: false,
    },
    Preset {
        label: "Export 4-Queens steps",
        board_size: 4,
        mode: SearchMode::FirstSolution,
        max_solutions: 1,
        export_steps: true,
    },
    Preset {
        label: "Export 8-Queens steps",
        board_size: 8,
        mode: SearchMode::FirstSolution,
        max_solutions: 1,
        export_steps: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_clamps() {
        let settings = Settings {
            board_size: 0,
            speed: 42,
            max_solutions: 0,
            history_limit: usize::MAX,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(settings.history_limit, Settings::MAX_HISTORY);
        assert_eq!(settings.board_size, 1);
        assert_eq!(settings.speed, 10);
        assert_eq!(settings.max_solutions, 1);
    }

    #[test]
    fn test_step_delay() {
        let mut settings = Settings::default();
        assert_eq!(settings.step_delay_ms(), 250);
        settings.speed = 10;
        assert_eq!(settings.step_delay_ms(), 0);
        settings.speed = 1;
        assert_eq!(settings.step_delay_ms(), 450);
    }

    #[test]
    fn test_stepper_follows_mode() {
        let mut settings = Settings {
            board_size: 4,
            ..Settings::default()
        };
        settings.mode = SearchMode::All;
        let mut stepper = settings.stepper();
        stepper.by_ref().for_each(drop);
        assert_eq!(stepper.solutions().len(), 2);

        settings.mode = SearchMode::UpTo;
        settings.max_solutions = 1;
        let mut stepper = settings.stepper();
        stepper.by_ref().for_each(drop);
        assert_eq!(stepper.solutions().len(), 1);
    }

    #[test]
    fn test_playback_uses_history_limit() {
        let settings = Settings {
            board_size: 5,
            mode: SearchMode::All,
            history_limit: 8,
            ..Settings::default()
        };
        let mut playback = settings.playback();
        playback.run_for(20);
        assert_eq!(playback.history().count(), 8);
        assert_eq!(playback.first_retained_step(), 13);
    }

    #[test]
    fn test_apply_preset() {
        let mut settings = Settings::default();
        settings.apply(&PRESETS[0]);
        assert_eq!(settings.board_size, 4);
        assert_eq!(settings.mode, SearchMode::UpTo);
        assert_eq!(settings.max_solutions, 2);
    }
}
