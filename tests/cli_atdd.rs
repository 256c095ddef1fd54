#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn dii(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dii").expect("binary should compile");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn score_json(home: &TempDir, args: &[&str]) -> Value {
    let output = dii(home)
        .arg("score")
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("command should run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

fn contributor<'a>(day: &'a Value, code: &str) -> Option<&'a Value> {
    day["contributors"]
        .as_array()?
        .iter()
        .find(|entry| entry["nutrient"] == code)
}

#[test]
fn cronometer_export_scores_each_day_in_date_order() {
    let home = TempDir::new().expect("temp dir should be created");
    let output = dii(&home)
        .args(["score", "tests/fixtures/cronometer_daily.csv"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Source: Cronometer"));
    assert!(stdout.contains("## Average (2 days)"));
    assert!(stdout.contains("Sodium (mg)"));

    let first = stdout.find("### 2024-03-01").expect("first day section");
    let second = stdout.find("### 2024-03-02").expect("second day section");
    assert!(first < second);
}

#[test]
fn cronometer_json_keeps_blank_cells_absent() {
    let home = TempDir::new().expect("temp dir should be created");
    let report = score_json(
        &home,
        &["tests/fixtures/cronometer_daily.csv", "--top", "45"],
    );

    assert_eq!(report["source"], "cronometer");
    let days = report["days"].as_array().expect("days array");
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2024-03-01");

    // 2024-03-01 has no caffeine or vitamin D logged
    assert!(contributor(&days[0], "CAFFEINE").is_none());
    assert!(contributor(&days[0], "VITD").is_none());
    assert_eq!(days[0]["nutrients_scored"], 6);

    let energy = contributor(&days[1], "KCAL").expect("energy scored");
    assert_eq!(energy["intake"], 2350.0);
    let vitamin_d = contributor(&days[1], "VITD").expect("vitamin D scored");
    let intake = vitamin_d["intake"].as_f64().expect("numeric intake");
    assert!((intake - 10.0).abs() < 1e-9);
}

#[test]
fn myfitnesspal_meals_are_summed_per_day() {
    let home = TempDir::new().expect("temp dir should be created");
    let report = score_json(
        &home,
        &["tests/fixtures/myfitnesspal_meals.csv", "--top", "45"],
    );

    assert_eq!(report["source"], "myfitnesspal");
    let days = report["days"].as_array().expect("days array");
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2024-05-10");

    let energy = contributor(&days[0], "KCAL").expect("energy scored");
    assert_eq!(energy["intake"], 1000.0);
    let fiber = contributor(&days[0], "FIBER").expect("fiber scored");
    assert_eq!(fiber["intake"], 15.0);

    let unused = report["unused_columns"].as_array().expect("unused columns");
    assert!(unused.iter().any(|column| column == "Sodium (mg)"));
    assert!(!unused.iter().any(|column| column == "Meal"));
}

#[test]
fn latin1_note_cell_does_not_reject_the_export() {
    let home = TempDir::new().expect("temp dir should be created");
    let path = home.path().join("latin1.csv");
    let mut data = b"Date,Meal,Calories,Note\n2024-05-10,Breakfast,300,caf".to_vec();
    data.push(0xE9);
    data.extend_from_slice(b"\n2024-05-10,Dinner,700,\n");
    fs::write(&path, data).expect("csv should write");

    let report = score_json(&home, &[path.to_str().expect("utf-8 temp path")]);
    let days = report["days"].as_array().expect("days array");
    assert_eq!(days.len(), 1);
    let energy = contributor(&days[0], "KCAL").expect("energy scored");
    assert_eq!(energy["intake"], 1000.0);
}

#[test]
fn average_score_sums_per_nutrient_averages() {
    let home = TempDir::new().expect("temp dir should be created");
    let report = score_json(
        &home,
        &["tests/fixtures/myfitnesspal_meals.csv", "--top", "45"],
    );

    let contributors = report["average"]["contributors"]
        .as_array()
        .expect("average contributors");
    let sum: f64 = contributors
        .iter()
        .map(|entry| entry["weighted_score"].as_f64().expect("numeric score"))
        .sum();
    let average = report["average"]["score"].as_f64().expect("numeric average");
    assert!((sum - average).abs() < 1e-9);
    assert_eq!(report["average"]["days"], 2);
}

#[test]
fn unrecognized_header_is_rejected_with_expected_columns() {
    let home = TempDir::new().expect("temp dir should be created");
    dii(&home)
        .args(["score", "tests/fixtures/unknown.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized file format"))
        .stderr(predicate::str::contains("Date"));
}

#[test]
fn explicit_source_must_match_file() {
    let home = TempDir::new().expect("temp dir should be created");
    dii(&home)
        .args([
            "score",
            "tests/fixtures/cronometer_daily.csv",
            "--source",
            "myfitnesspal",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Meal"));
}

#[test]
fn header_only_file_has_no_usable_rows() {
    let home = TempDir::new().expect("temp dir should be created");
    let path = home.path().join("empty.csv");
    fs::write(&path, "Date,Energy (kcal)\n").expect("csv should write");

    dii(&home)
        .arg("score")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no usable rows"));
}

#[test]
fn config_file_sets_format_and_top() {
    let home = TempDir::new().expect("temp dir should be created");
    let config = home.path().join("custom.toml");
    fs::write(
        &config,
        r#"
[report]
format = "json"
top = 1
"#,
    )
    .expect("config should write");

    let output = dii(&home)
        .arg("score")
        .arg("tests/fixtures/myfitnesspal_meals.csv")
        .arg("--config")
        .arg(&config)
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");
    for day in report["days"].as_array().expect("days array") {
        assert_eq!(day["contributors"].as_array().map(Vec::len), Some(1));
    }
}

#[test]
fn invalid_config_is_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    let config = home.path().join("bad.toml");
    fs::write(
        &config,
        "[interpretation]\nanti_inflammatory_below = 3.0\npro_inflammatory_from = 1.0\n",
    )
    .expect("config should write");

    dii(&home)
        .arg("score")
        .arg("tests/fixtures/cronometer_daily.csv")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("anti_inflammatory_below"));
}

#[test]
fn global_config_is_picked_up_from_home() {
    let home = TempDir::new().expect("temp dir should be created");
    let global_dir = home.path().join(".config/dii");
    fs::create_dir_all(&global_dir).expect("global dir should create");
    fs::write(global_dir.join("config.toml"), "[report]\nformat = \"json\"\n")
        .expect("global config should write");

    let output = dii(&home)
        .args(["score", "tests/fixtures/cronometer_daily.csv"])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(report["source"], "cronometer");
}
