//! Meal-export readers: JSON arrays and CSV survey exports.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use dqq_model::{AnswerSet, QuestionId};
use dqq_score::MealRecord;
use tracing::{debug, warn};

/// CSV column carrying the meal timestamp.
const EATEN_AT_COLUMN: &str = "eaten_at";

/// Supported meal-export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A JSON array of `{ "eaten_at": ..., "answers": {...} }` records.
    Json,
    /// A CSV export with an `eaten_at` column plus one column per DQQ key.
    Csv,
}

/// Pick the input format, preferring an explicit choice over the extension.
pub fn detect_format(path: &Path, forced: Option<InputFormat>) -> Result<InputFormat> {
    if let Some(format) = forced {
        return Ok(format);
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(InputFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(InputFormat::Csv),
        _ => bail!(
            "cannot infer input format from {}; pass --format json or --format csv",
            path.display()
        ),
    }
}

/// Read meal records from the given file.
pub fn read_meals(path: &Path, format: InputFormat) -> Result<Vec<MealRecord>> {
    let meals = match format {
        InputFormat::Json => read_json(path)?,
        InputFormat::Csv => read_csv(path)?,
    };
    debug!(meals = meals.len(), path = %path.display(), "read meal export");
    Ok(meals)
}

fn read_json(path: &Path) -> Result<Vec<MealRecord>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let meals: Vec<MealRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse meal records from {}", path.display()))?;
    Ok(meals)
}

fn read_csv(path: &Path) -> Result<Vec<MealRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("open {}", path.display()))?;
    let mut meals = Vec::new();
    for (row, record) in reader.deserialize::<HashMap<String, String>>().enumerate() {
        let record = record.with_context(|| format!("read row {} of {}", row + 1, path.display()))?;
        let Some(raw_timestamp) = record.get(EATEN_AT_COLUMN) else {
            bail!("{} has no '{EATEN_AT_COLUMN}' column", path.display());
        };
        let eaten_at = parse_timestamp(raw_timestamp).with_context(|| {
            format!(
                "row {}: invalid {EATEN_AT_COLUMN} value '{raw_timestamp}'",
                row + 1
            )
        })?;

        let mut answers = AnswerSet::all_false();
        for (column, value) in &record {
            if column == EATEN_AT_COLUMN {
                continue;
            }
            match column.parse::<QuestionId>() {
                Ok(question) => answers.set(question, truthy(value)),
                Err(_) => {
                    warn!(column, row = row + 1, "ignoring unrecognized column");
                }
            }
        }
        meals.push(MealRecord::new(eaten_at, answers));
    }
    Ok(meals)
}

/// Parse a meal timestamp: ISO 8601 date-time (with `T` or space separator)
/// or a bare date, which reads as midnight.
fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Ok(datetime);
        }
    }
    bail!("expected YYYY-MM-DD[THH:MM:SS]")
}

/// CSV cells have no types; accept the usual spreadsheet spellings of "yes".
fn truthy(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.eq_ignore_ascii_case("true") || trimmed == "1" || trimmed.eq_ignore_ascii_case("yes")
}
