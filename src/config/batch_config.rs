use crate::domain::model::ProblemKind;
use crate::utils::error::{ErrorCategory, Result, WarmupError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchInfo,
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
    pub stop_on_error: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    pub name: Option<String>,
    pub problem: ProblemKind,
    #[serde(default)]
    pub args: Vec<Value>,
    /// Value the task must produce.
    pub expect: Option<Value>,
    /// Failure kind the task must produce.
    pub expect_error: Option<ExpectedError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedError {
    Type,
    Range,
}

impl ExpectedError {
    pub fn matches(self, category: ErrorCategory) -> bool {
        matches!(
            (self, category),
            (ExpectedError::Type, ErrorCategory::Type)
                | (ExpectedError::Range, ErrorCategory::Range)
        )
    }
}

impl fmt::Display for ExpectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedError::Type => f.write_str("type"),
            ExpectedError::Range => f.write_str("range"),
        }
    }
}

impl TaskConfig {
    /// Explicit name, or `<problem>#<position>` when none is given.
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("{}#{}", self.problem, index + 1))
    }
}

impl BatchConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WarmupError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| {
            WarmupError::config_error("toml_parsing", format!("TOML parsing error: {}", e))
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn stop_on_error(&self) -> bool {
        self.batch.stop_on_error.unwrap_or(false)
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;

        if self.tasks.is_empty() {
            return Err(WarmupError::config_error(
                "tasks",
                "a batch needs at least one [[tasks]] entry",
            ));
        }

        for (index, task) in self.tasks.iter().enumerate() {
            if task.expect.is_some() && task.expect_error.is_some() {
                return Err(WarmupError::config_error(
                    &format!("tasks[{}]", index),
                    "`expect` and `expect_error` are mutually exclusive",
                ));
            }
        }

        Ok(())
    }
}
