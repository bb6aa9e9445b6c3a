use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::Table;
use dqq_model::{Demographics, Gender, QuestionId};
use dqq_score::{group_by_day, score};
use tracing::{info, info_span};

use dqq_cli::input::{self, InputFormat};

use crate::cli::{GenderArg, InputFormatArg, ScoreArgs};
use crate::summary::apply_table_style;
use crate::types::{DayScore, ScoreResult};

pub fn run_questions() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Food group"]);
    apply_table_style(&mut table);
    for question in QuestionId::ALL {
        table.add_row(vec![question.key(), question.label()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_score(args: &ScoreArgs) -> Result<ScoreResult> {
    let span = info_span!("score", input = %args.input.display());
    let _guard = span.enter();

    let format = input::detect_format(&args.input, args.format.map(InputFormat::from))?;
    let meals = input::read_meals(&args.input, format)?;
    let demographics = Demographics::new(args.age, args.gender.map(Gender::from));

    let mut meal_counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for meal in &meals {
        *meal_counts.entry(meal.day()).or_insert(0) += 1;
    }

    let days: Vec<DayScore> = group_by_day(&meals)
        .into_iter()
        .map(|(date, answers)| DayScore {
            date,
            meals: meal_counts.get(&date).copied().unwrap_or(0),
            indicators: score(&answers, &demographics),
        })
        .collect();
    info!(meals = meals.len(), days = days.len(), "scored meal export");

    Ok(ScoreResult {
        source: args.input.clone(),
        days,
    })
}

/// Render a score result as the `{date: indicator-map}` JSON object consumed
/// by downstream analysis scripts.
pub fn render_json(result: &ScoreResult) -> Result<String> {
    let mut map = serde_json::Map::new();
    for day in &result.days {
        map.insert(
            day.date.to_string(),
            serde_json::to_value(&day.indicators)?,
        );
    }
    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(
        map,
    ))?)
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Json => InputFormat::Json,
            InputFormatArg::Csv => InputFormat::Csv,
        }
    }
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}
