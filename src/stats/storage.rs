//! Storage for study statistics (one JSON file, atomic write)

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use thiserror::Error;

use super::models::StudyStats;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, StatsError>;

/// Storage for the stats file. There is a single writer per process; the
/// file is read-modify-written without any cross-process guarantee.
pub struct StatsStorage {
    stats_path: PathBuf,
}

impl StatsStorage {
    /// Create a stats storage rooted at a data directory, creating the
    /// directory if needed.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            stats_path: data_dir.join("stats.json"),
        })
    }

    /// Default data directory (e.g. ~/.local/share/slaystudy).
    pub fn default_data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("slaystudy"))
    }

    /// Load the stats, applying the daily rollover. A fresh stats record is
    /// returned when the file does not exist yet; a rollover is persisted
    /// immediately so re-reads within the day agree.
    pub fn load(&self) -> Result<StudyStats> {
        let today = Local::now().date_naive();

        if !self.stats_path.exists() {
            return Ok(StudyStats::new(today));
        }

        let content = fs::read_to_string(&self.stats_path)?;
        let mut stats: StudyStats = serde_json::from_str(&content)?;
        if stats.roll_over(today) {
            log::info!("daily rollover: zeroed sessions and streak");
            self.save(&stats)?;
        }
        Ok(stats)
    }

    /// Save the stats using atomic write (write to .tmp then rename).
    pub fn save(&self, stats: &StudyStats) -> Result<()> {
        let tmp_path = self.stats_path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(stats)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.stats_path)?;
        Ok(())
    }
}
