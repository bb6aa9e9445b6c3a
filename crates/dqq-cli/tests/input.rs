//! Integration tests for the meal-export readers.

use std::io::Write;

use dqq_cli::input::{InputFormat, detect_format, read_meals};
use dqq_model::{Demographics, Gender, QuestionId as Q};
use dqq_score::{group_by_day, merge_answer_sets, score};
use tempfile::NamedTempFile;

fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn reads_json_export() {
    let file = write_temp(
        ".json",
        r#"[
            {"eaten_at": "2026-03-01T08:00:00", "answers": {"DQQ1": true, "DQQ25": true}},
            {"eaten_at": "2026-03-01T19:30:00", "answers": {"DQQ6": true, "DQQ28": true}}
        ]"#,
    );
    let meals = read_meals(file.path(), InputFormat::Json).expect("read json export");
    assert_eq!(meals.len(), 2);
    assert!(meals[0].answers.get(Q::Dqq1));
    assert!(meals[1].answers.get(Q::Dqq28));
}

#[test]
fn reads_csv_export() {
    let file = write_temp(
        ".csv",
        "eaten_at,DQQ1,DQQ6,DQQ28,note\n\
         2026-03-01T08:00:00,true,false,0,breakfast\n\
         2026-03-01,0,1,yes,dinner\n",
    );
    let meals = read_meals(file.path(), InputFormat::Csv).expect("read csv export");
    assert_eq!(meals.len(), 2);
    assert!(meals[0].answers.get(Q::Dqq1));
    assert!(!meals[0].answers.get(Q::Dqq28));
    assert!(meals[1].answers.get(Q::Dqq6));
    assert!(meals[1].answers.get(Q::Dqq28));
}

#[test]
fn csv_without_timestamp_column_errors() {
    let file = write_temp(".csv", "DQQ1,DQQ2\ntrue,false\n");
    assert!(read_meals(file.path(), InputFormat::Csv).is_err());
}

#[test]
fn json_and_csv_exports_of_the_same_day_score_identically() {
    let json = write_temp(
        ".json",
        r#"[
            {"eaten_at": "2026-03-01T08:00:00", "answers": {"DQQ1": true, "DQQ25": true}},
            {"eaten_at": "2026-03-01T19:30:00", "answers": {"DQQ6": true, "DQQ20": true}}
        ]"#,
    );
    let csv = write_temp(
        ".csv",
        "eaten_at,DQQ1,DQQ25,DQQ6,DQQ20\n\
         2026-03-01T08:00:00,true,true,false,false\n\
         2026-03-01T19:30:00,false,false,true,true\n",
    );
    let demographics = Demographics::new(Some(30), Some(Gender::Female));

    let from_json = read_meals(json.path(), InputFormat::Json).expect("json meals");
    let from_csv = read_meals(csv.path(), InputFormat::Csv).expect("csv meals");

    let json_days = group_by_day(&from_json);
    let csv_days = group_by_day(&from_csv);
    assert_eq!(json_days, csv_days);

    let day = *json_days.keys().next().expect("one day");
    let merged =
        merge_answer_sets(from_json.iter().map(|meal| &meal.answers)).expect("merged set");
    assert_eq!(
        score(&json_days[&day], &demographics),
        score(&merged, &demographics)
    );
}

#[test]
fn format_detection_respects_forced_format() {
    let file = write_temp(".dat", "eaten_at,DQQ1\n2026-03-01,true\n");
    assert!(detect_format(file.path(), None).is_err());
    let meals = read_meals(file.path(), InputFormat::Csv).expect("forced csv");
    assert_eq!(meals.len(), 1);
}
