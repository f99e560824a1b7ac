use std::fs;
use std::path::PathBuf;
use cuke_report::commands::{execute_generate, validate_args, GenerateArgs};

const RESULTS: &str = r#"[
  {
    "keyword": "Feature",
    "name": "Search",
    "elements": [
      {
        "keyword": "Scenario",
        "name": "Find a product",
        "steps": [
          { "keyword": "Given ", "name": "the catalog", "result": { "status": "passed", "duration": 10 } },
          { "keyword": "Then ", "name": "it is listed", "result": { "status": "failed", "duration": 5 },
            "embeddings": [ { "mime_type": "image/png", "data": "UE5H" } ] }
        ]
      }
    ]
  },
  { "keyword": "Feature", "name": "Not started" }
]"#;

fn write_results(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("cucumber.json");
    fs::write(&path, RESULTS).unwrap();
    path
}

#[test]
fn test_validate_args_valid() {
    let args = GenerateArgs {
        input: Some(PathBuf::from("cucumber.json")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_missing_input() {
    let args = GenerateArgs {
        formats: vec!["html".to_string()],
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_generate_all_formats() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("e2e/output");
    let shots = dir.path().join("screenshots");

    let args = GenerateArgs {
        input: Some(write_results(dir.path())),
        formats: vec![
            "html".to_string(),
            "pdf".to_string(),
            "xlsx".to_string(),
            "json".to_string(),
        ],
        output_dir: Some(out.clone()),
        screenshots_dir: Some(shots.clone()),
        ..Default::default()
    };

    let outcome = execute_generate(args).unwrap();

    assert_eq!(
        outcome.written,
        vec![out.join("report.html"), out.join("report.xlsx"), out.join("report.json")]
    );
    for path in &outcome.written {
        assert!(path.exists(), "missing {}", path.display());
    }
    assert!(!out.join("report.pdf").exists());

    assert_eq!(outcome.screenshots, 1);
    assert_eq!(fs::read(shots.join("Find_a_product.png")).unwrap(), b"PNG");

    assert_eq!(outcome.report.suite.failed, 1);
    assert_eq!(outcome.report.suite.passed, 1);
    assert_eq!(outcome.report.suite.total_time, 15.0);
}

#[test]
fn test_generate_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_results(dir.path());
    let out = dir.path().join("reports");
    let shots = dir.path().join("shots");

    let config_path = dir.path().join("cuke-report.json");
    let config = serde_json::json!({
        "input": input,
        "format": ["xlsx", "unknown"],
        "output_dir": out,
        "screenshots_dir": shots,
    });
    fs::write(&config_path, config.to_string()).unwrap();

    let args = GenerateArgs {
        config_file: Some(config_path),
        ..Default::default()
    };

    let outcome = execute_generate(args).unwrap();

    assert_eq!(outcome.written, vec![out.join("report.xlsx")]);
    assert!(!out.join("report.html").exists());
}

#[test]
fn test_generate_twice_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let args = GenerateArgs {
        input: Some(write_results(dir.path())),
        formats: vec!["json".to_string()],
        output_dir: Some(dir.path().join("out")),
        screenshots_dir: Some(dir.path().join("shots")),
        ..Default::default()
    };

    let first = execute_generate(args.clone()).unwrap();
    let second = execute_generate(args).unwrap();

    assert_eq!(first.report.suite, second.report.suite);
    assert_eq!(first.report.features, second.report.features);
}
