use std::path::PathBuf;

use chrono::NaiveDate;
use dqq_model::DietQualityIndicators;

/// One scored day in a meal export.
#[derive(Debug, Clone)]
pub struct DayScore {
    pub date: NaiveDate,
    pub meals: usize,
    pub indicators: DietQualityIndicators,
}

/// Result of scoring one meal export.
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub source: PathBuf,
    pub days: Vec<DayScore>,
}
