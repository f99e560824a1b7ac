//! Input schema for Cucumber JSON result documents.
//!
//! Only the fields the reports need are modelled. Everything is optional
//! on input: result documents come from many producers and the aggregator
//! is lenient by contract.

use serde::{Deserialize, Serialize};

/// Outcome of a single step, as classified for counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    Undefined,
}

impl ResultStatus {
    /// Classify a raw status string by exact equality.
    ///
    /// Anything that is not `passed`, `failed`, `undefined` or `pending`
    /// lands in `Skipped`, including an empty or misspelled status.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "passed" => Self::Passed,
            "failed" => Self::Failed,
            "undefined" => Self::Undefined,
            "pending" => Self::Pending,
            _ => Self::Skipped,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::Pending => "pending",
            Self::Undefined => "undefined",
        }
    }
}

/// A feature file and its scenarios
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub keyword: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Absent for features that never ran any scenario
    #[serde(default)]
    pub elements: Option<Vec<Element>>,
}

/// A scenario, scenario outline example or background
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub keyword: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// `scenario` or `background` in standard Cucumber output
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One executed (or not executed) step
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub keyword: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub line: Option<u32>,

    /// Free-form text attached to the step
    #[serde(default)]
    pub text: Option<String>,

    /// Steps without a result are not counted anywhere
    #[serde(default)]
    pub result: Option<StepResult>,

    #[serde(default)]
    pub embeddings: Vec<Embedding>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepResult {
    /// Raw status string, classified with [`ResultStatus::from_raw`].
    /// A null or non-string status is read as empty.
    #[serde(default, deserialize_with = "status::deserialize")]
    pub status: String,

    /// Duration in producer units (nanoseconds for standard Cucumber JSON)
    #[serde(default, deserialize_with = "duration::deserialize")]
    pub duration: Option<f64>,

    #[serde(default)]
    pub error_message: Option<String>,
}

impl StepResult {
    pub fn status(&self) -> ResultStatus {
        ResultStatus::from_raw(&self.status)
    }
}

/// Binary attachment, usually a base64-encoded screenshot
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedding {
    #[serde(default)]
    pub data: String,

    #[serde(default, alias = "mimeType")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,

    #[serde(default)]
    pub line: Option<u32>,
}

mod status {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(raw) => Ok(raw),
            _ => Ok(String::new()),
        }
    }
}

mod duration {
    use serde::{Deserialize, Deserializer};

    /// Accept integer or float durations; negative values become 0
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Number>::deserialize(deserializer)?;
        Ok(value.map(|number| {
            number
                .as_f64()
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(0.0)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_exact_match() {
        assert_eq!(ResultStatus::from_raw("passed"), ResultStatus::Passed);
        assert_eq!(ResultStatus::from_raw("failed"), ResultStatus::Failed);
        assert_eq!(ResultStatus::from_raw("undefined"), ResultStatus::Undefined);
        assert_eq!(ResultStatus::from_raw("pending"), ResultStatus::Pending);
        assert_eq!(ResultStatus::from_raw("skipped"), ResultStatus::Skipped);
    }

    #[test]
    fn test_status_catch_all() {
        assert_eq!(ResultStatus::from_raw("weirdstatus"), ResultStatus::Skipped);
        assert_eq!(ResultStatus::from_raw("Passed"), ResultStatus::Skipped);
        assert_eq!(ResultStatus::from_raw(" failed"), ResultStatus::Skipped);
        assert_eq!(ResultStatus::from_raw(""), ResultStatus::Skipped);
    }

    #[test]
    fn test_duration_forms() {
        let parse = |json: &str| serde_json::from_str::<StepResult>(json).unwrap().duration;

        assert_eq!(parse(r#"{"status":"passed","duration":1500}"#), Some(1500.0));
        assert_eq!(parse(r#"{"status":"passed","duration":2.6}"#), Some(2.6));
        assert_eq!(parse(r#"{"status":"passed","duration":-4}"#), Some(0.0));
        assert_eq!(parse(r#"{"status":"passed","duration":null}"#), None);
        assert_eq!(parse(r#"{"status":"passed"}"#), None);
    }

    #[test]
    fn test_missing_status_is_skipped() {
        let result: StepResult = serde_json::from_str(r#"{"duration":10}"#).unwrap();
        assert_eq!(result.status(), ResultStatus::Skipped);
    }

    #[test]
    fn test_non_string_status_is_skipped() {
        for json in [r#"{"status":null}"#, r#"{"status":3}"#, r#"{"status":{"x":1}}"#] {
            let result: StepResult = serde_json::from_str(json).unwrap();
            assert_eq!(result.status, "");
            assert_eq!(result.status(), ResultStatus::Skipped);
        }
    }

    #[test]
    fn test_element_type_field() {
        let element: Element =
            serde_json::from_str(r#"{"name":"Login","type":"scenario","steps":[]}"#).unwrap();
        assert_eq!(element.kind.as_deref(), Some("scenario"));
        assert!(element.steps.is_empty());
    }
}
