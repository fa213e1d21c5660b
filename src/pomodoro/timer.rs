//! Countdown state machine for focus and break sessions

use serde::{Deserialize, Serialize};

use crate::stats::StudyStats;

/// Timer mode with its fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub fn duration_secs(self) -> u32 {
        match self {
            TimerMode::Focus => 25 * 60,
            TimerMode::ShortBreak => 5 * 60,
            TimerMode::LongBreak => 15 * 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Focus => "Focus Time",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }

    fn is_focus(self) -> bool {
        matches!(self, TimerMode::Focus)
    }
}

/// One process-wide countdown cycling focus and break sessions.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    mode: TimerMode,
    remaining_seconds: u32,
    running: bool,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl PomodoroTimer {
    pub fn new() -> Self {
        Self {
            mode: TimerMode::Focus,
            remaining_seconds: TimerMode::Focus.duration_secs(),
            running: false,
        }
    }

    /// Switch to a mode. A running countdown stops first with no completion
    /// credit; the new mode starts paused at its full duration.
    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.running = false;
        self.mode = mode;
        self.remaining_seconds = mode.duration_secs();
    }

    /// Begin counting down. Starting while already running is a no-op, so a
    /// double start never produces two concurrent tickers.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop counting down, retaining the remaining seconds.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop and restore the current mode's full duration.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.mode.duration_secs();
    }

    /// Advance the countdown by one second. When the countdown reaches zero
    /// the session completes exactly once: a finished focus session credits
    /// the stats, and the timer switches (paused) to the next mode, which is
    /// returned. Ticking a paused timer does nothing.
    pub fn tick(&mut self, stats: &mut StudyStats) -> Option<TimerMode> {
        if !self.running {
            return None;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return None;
        }

        let finished = self.mode;
        self.running = false;
        if finished.is_focus() {
            stats.record_focus_session();
        }
        let next = match finished {
            // A long break after every 4th focus session of the day
            TimerMode::Focus => {
                if stats.sessions_today > 0 && stats.sessions_today % 4 == 0 {
                    TimerMode::LongBreak
                } else {
                    TimerMode::ShortBreak
                }
            }
            TimerMode::ShortBreak | TimerMode::LongBreak => TimerMode::Focus,
        };
        self.switch_mode(next);
        log::info!("{} complete, next up: {}", finished.label(), next.label());
        Some(next)
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining time formatted as "MM:SS".
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_seconds / 60,
            self.remaining_seconds % 60
        )
    }
}
