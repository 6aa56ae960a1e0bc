//! Transformation history and usage rollups.
//!
//! Every accepted rewrite is logged as a record holding the text pair, the
//! tone it was rewritten with and the counts derived from the word diff.
//! The log keeps records newest first under a configurable cap, maintains
//! per-day rollups for the dashboard, and persists as pretty JSON under the
//! platform config directory.

use crate::constant::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_MAX_RECORDS, HISTORY_FILE_NAME,
};
use crate::diff;
use crate::metrics::count_sentences;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Custom error types for history persistence
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No config directory available on this platform")]
    NoConfigDir,
}

/// One logged rewrite: the text pair plus the counts derived from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformationRecord {
    pub id: Uuid,
    pub tone_label: String,
    pub original_text: String,
    pub transformed_text: String,
    pub timestamp: DateTime<Utc>,
    pub word_count: usize,
    pub sentence_count: usize,
    pub added_count: usize,
    pub removed_count: usize,
}

/// Per-day rollup of transformation activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayStats {
    pub date: NaiveDate,
    pub transformation_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
}

impl DayStats {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            transformation_count: 0,
            word_count: 0,
            sentence_count: 0,
        }
    }
}

/// Totals across the whole log, for the usage dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageSummary {
    pub total_transformations: usize,
    pub total_words_transformed: usize,
    pub total_sentences_transformed: usize,
}

/// In-memory transformation log with capped records and per-day rollups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformationLog {
    /// Newest first
    pub records: Vec<TransformationRecord>,
    /// Rollups keyed by "YYYY-MM-DD"
    pub daily_stats: HashMap<String, DayStats>,
    pub max_records: Option<usize>,
}

impl Default for TransformationLog {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            daily_stats: HashMap::new(),
            max_records: Some(DEFAULT_MAX_RECORDS),
        }
    }
}

impl TransformationLog {
    /// Log one rewrite, deriving the diff counts from the text pair.
    ///
    /// Records sit newest first; once the cap is reached the oldest ones
    /// fall off. Day rollups keep counting capped-out records.
    pub fn record(
        &mut self,
        tone_label: impl Into<String>,
        original: &str,
        transformed: &str,
    ) -> &TransformationRecord {
        self.record_at(tone_label, original, transformed, Utc::now())
    }

    /// Like [`Self::record`], with an explicit timestamp
    pub fn record_at(
        &mut self,
        tone_label: impl Into<String>,
        original: &str,
        transformed: &str,
        timestamp: DateTime<Utc>,
    ) -> &TransformationRecord {
        let counts = diff::word_change_counts(original, transformed);

        let record = TransformationRecord {
            id: Uuid::new_v4(),
            tone_label: tone_label.into(),
            original_text: original.to_string(),
            transformed_text: transformed.to_string(),
            timestamp,
            word_count: counts.added_count + counts.removed_count,
            sentence_count: count_sentences(transformed),
            added_count: counts.added_count,
            removed_count: counts.removed_count,
        };

        self.roll_up(&record);

        self.records.insert(0, record);
        if let Some(max) = self.max_records
            && max > 0
            && self.records.len() > max
        {
            self.records.truncate(max);
        }

        &self.records[0]
    }

    fn roll_up(&mut self, record: &TransformationRecord) {
        let date = record.timestamp.date_naive();
        let key = date.format(DATE_KEY_FORMAT).to_string();

        let day = self
            .daily_stats
            .entry(key)
            .or_insert_with(|| DayStats::empty(date));
        day.transformation_count += 1;
        day.word_count += record.word_count;
        day.sentence_count += record.sentence_count;
    }

    /// Most recent records, newest first
    pub fn recent(&self, limit: usize) -> &[TransformationRecord] {
        let end = self.records.len().min(limit);
        &self.records[..end]
    }

    /// Totals across the whole log
    pub fn usage_summary(&self) -> UsageSummary {
        UsageSummary {
            total_transformations: self.records.len(),
            total_words_transformed: self.records.iter().map(|r| r.word_count).sum(),
            total_sentences_transformed: self.records.iter().map(|r| r.sentence_count).sum(),
        }
    }

    /// Rollups for the last `days` days ending today, oldest first.
    /// Days without activity come back zeroed.
    pub fn daily_stats(&self, days: usize) -> Vec<DayStats> {
        self.daily_stats_ending(Utc::now().date_naive(), days)
    }

    /// Like [`Self::daily_stats`], with an explicit final day
    pub fn daily_stats_ending(&self, last_day: NaiveDate, days: usize) -> Vec<DayStats> {
        let mut stats = Vec::with_capacity(days);
        for offset in (0..days).rev() {
            let date = last_day - Duration::days(offset as i64);
            let key = date.format(DATE_KEY_FORMAT).to_string();
            stats.push(
                self.daily_stats
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| DayStats::empty(date)),
            );
        }
        stats
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.daily_stats.clear();
    }
}

/// Loads and saves the transformation log on disk
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Store under the platform config directory, creating it if needed
    pub fn open_default() -> Result<Self, HistoryError> {
        let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or(HistoryError::NoConfigDir)?;
        let dir = dirs.config_dir().to_path_buf();
        fs::create_dir_all(&dir)?;

        Ok(Self {
            path: dir.join(HISTORY_FILE_NAME),
        })
    }

    /// Store at an explicit file path
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The history file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the log, falling back to an empty one when the file is missing
    /// or unreadable
    pub fn load(&self) -> TransformationLog {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(log) => log,
                Err(e) => {
                    warn!("Ignoring unreadable history file {:?}: {}", self.path, e);
                    TransformationLog::default()
                }
            },
            Err(_) => TransformationLog::default(),
        }
    }

    /// Save the log as pretty JSON
    pub fn save(&self, log: &TransformationLog) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(log)?;
        fs::write(&self.path, json)?;
        info!(
            "Saved {} history records to {:?}",
            log.records.len(),
            self.path
        );
        Ok(())
    }
}
