//! Reduction of per-meal answer sets into daily sets.
//!
//! A food group counts as consumed for a day if any meal in that day reported
//! it, so the reduction is a plain logical OR: idempotent, commutative, and
//! monotone (adding a meal never clears a flag).

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use dqq_model::AnswerSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One recorded meal: when it was eaten and which food groups it touched.
///
/// This is the portable core of the app's meal export; photo references,
/// ingredient lists, and LLM annotations are carried elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Local timestamp of the meal, ISO 8601 without offset.
    pub eaten_at: NaiveDateTime,
    /// Consumption flags extracted for this meal.
    pub answers: AnswerSet,
}

impl MealRecord {
    pub fn new(eaten_at: NaiveDateTime, answers: AnswerSet) -> Self {
        Self { eaten_at, answers }
    }

    /// Calendar date this meal belongs to for daily aggregation.
    pub fn day(&self) -> NaiveDate {
        self.eaten_at.date()
    }
}

/// OR-fold a sequence of answer sets into one.
///
/// Returns `None` for an empty sequence: "no meals recorded" is not the same
/// observation as "meals recorded, nothing consumed", and callers that want
/// the all-false reading must opt into it explicitly. Inputs are not mutated.
pub fn merge_answer_sets<'a, I>(sets: I) -> Option<AnswerSet>
where
    I: IntoIterator<Item = &'a AnswerSet>,
{
    let mut iter = sets.into_iter();
    let first = *iter.next()?;
    Some(iter.fold(first, |mut merged, set| {
        merged.merge(set);
        merged
    }))
}

/// Bucket meals by calendar date and merge each day's answers.
///
/// The result is ordered by date, one merged answer set per day that has at
/// least one meal; days with no meals simply do not appear.
pub fn group_by_day(meals: &[MealRecord]) -> BTreeMap<NaiveDate, AnswerSet> {
    let mut days: BTreeMap<NaiveDate, AnswerSet> = BTreeMap::new();
    for meal in meals {
        days.entry(meal.day()).or_default().merge(&meal.answers);
    }
    debug!(meals = meals.len(), days = days.len(), "grouped meals by day");
    days
}
