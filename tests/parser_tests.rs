use std::fs;
use cuke_report::parser::{read_results, ResultStatus};

#[test]
fn test_read_results_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cucumber.json");
    fs::write(
        &path,
        r#"[{
            "id": "login",
            "uri": "features/login.feature",
            "keyword": "Feature",
            "name": "Login",
            "tags": [{"name": "@smoke", "line": 1}],
            "elements": [{
                "keyword": "Scenario",
                "type": "scenario",
                "name": "Valid user",
                "steps": [
                    {"keyword": "Given ", "name": "a user", "line": 4,
                     "result": {"status": "passed", "duration": 1500000}},
                    {"keyword": "Then ", "name": "welcome", "line": 5,
                     "result": {"status": "undefined"},
                     "embeddings": [{"mime_type": "image/png", "data": "UE5H"}]}
                ]
            }],
            "unknown_field": true
        }]"#,
    )
    .unwrap();

    let features = read_results(&path).unwrap();

    assert_eq!(features.len(), 1);
    let feature = &features[0];
    assert_eq!(feature.uri.as_deref(), Some("features/login.feature"));
    assert_eq!(feature.tags[0].name, "@smoke");

    let element = &feature.elements.as_ref().unwrap()[0];
    assert_eq!(element.kind.as_deref(), Some("scenario"));
    assert_eq!(element.steps.len(), 2);

    let first = element.steps[0].result.as_ref().unwrap();
    assert_eq!(first.duration, Some(1_500_000.0));
    assert_eq!(first.status(), ResultStatus::Passed);

    let second = &element.steps[1];
    assert_eq!(second.result.as_ref().unwrap().status(), ResultStatus::Undefined);
    assert_eq!(second.embeddings[0].data, "UE5H");
}

#[test]
fn test_read_results_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_results(dir.path().join("absent.json")).is_err());
}

#[test]
fn test_read_results_not_an_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cucumber.json");
    fs::write(&path, r#"{"name": "not a list"}"#).unwrap();

    assert!(read_results(&path).is_err());
}
