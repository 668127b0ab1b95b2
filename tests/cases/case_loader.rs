/// Merge case loader
///
/// Test data format: a JSON array mixing comment strings and case objects.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A merge invocation and its expected outcome
    MergeTest {
        args: Vec<String>,
        #[serde(default)]
        keywords: Vec<String>,
        #[serde(default)]
        policy: Option<String>,
        #[serde(default)]
        separator: Option<String>,
        #[serde(default)]
        expected: Option<String>,
        #[serde(default)]
        expected_prefix: Option<String>,
        #[serde(default)]
        expected_tail: Option<Vec<String>>,
        #[serde(default)]
        error: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failures: Vec<CaseFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct CaseFailure {
    pub case_num: usize,
    pub args: Vec<String>,
    pub expected: String,
    pub actual: String,
}

impl CaseResult {
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} passed, {} failed",
            self.passed,
            self.failures.len()
        );
        for failure in &self.failures {
            out.push_str(&format!(
                "\n  case #{} {:?}\n    expected: {}\n    actual:   {}",
                failure.case_num, failure.args, failure.expected, failure.actual
            ));
        }
        out
    }
}

/// Load the bundled merge cases
pub fn load_cases() -> Vec<TestCase> {
    let data = include_str!("../data/merge_cases.json");
    serde_json::from_str(data).unwrap_or_else(|e| panic!("invalid merge_cases.json: {e}"))
}
