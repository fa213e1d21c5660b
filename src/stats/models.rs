//! Data model for persisted study statistics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minutes credited per completed focus session.
pub const FOCUS_SESSION_MINUTES: u64 = 25;

/// Persisted study statistics. `sessions_today` and `current_streak` are
/// daily counters; `cards_studied` and `total_focus_minutes` accumulate
/// forever.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStats {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub cards_studied: u64,
    #[serde(default)]
    pub sessions_today: u32,
    #[serde(default)]
    pub total_focus_minutes: u64,
    #[serde(default)]
    pub current_streak: u32,
    pub last_reset_date: NaiveDate,
}

fn default_theme() -> String {
    "light".to_string()
}

impl StudyStats {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            theme: default_theme(),
            cards_studied: 0,
            sessions_today: 0,
            total_focus_minutes: 0,
            current_streak: 0,
            last_reset_date: today,
        }
    }

    /// One card was shown to the user (deck load, navigation or shuffle).
    pub fn record_card_viewed(&mut self) {
        self.cards_studied += 1;
    }

    /// One focus session finished: credit today's count, total minutes and
    /// the streak.
    pub fn record_focus_session(&mut self) {
        self.sessions_today += 1;
        self.total_focus_minutes += FOCUS_SESSION_MINUTES;
        self.current_streak += 1;
    }

    /// Zero the daily counters when the calendar date has changed.
    /// `total_focus_minutes` and `cards_studied` are never reset. Returns
    /// true if a rollover happened.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if self.last_reset_date == today {
            return false;
        }
        self.sessions_today = 0;
        self.current_streak = 0;
        self.last_reset_date = today;
        true
    }

    pub fn toggle_theme(&mut self) {
        self.theme = if self.theme == "light" {
            "dark".to_string()
        } else {
            "light".to_string()
        };
    }

    /// Total focus time formatted as "Xh Ym".
    pub fn focus_time_display(&self) -> String {
        let hours = self.total_focus_minutes / 60;
        let minutes = self.total_focus_minutes % 60;
        format!("{}h {}m", hours, minutes)
    }
}
