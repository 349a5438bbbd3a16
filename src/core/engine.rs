use crate::config::batch_config::{BatchConfig, TaskConfig};
use crate::core::dispatch::solve;
use crate::domain::model::ProblemKind;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Produced what the task expected.
    Passed,
    /// Produced something other than what the task expected.
    Failed,
    /// Raised an error the task did not expect.
    Errored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReport {
    pub name: String,
    pub problem: ProblemKind,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub name: String,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub tasks: Vec<TaskReport>,
}

impl BatchReport {
    fn new(name: String) -> Self {
        Self {
            name,
            passed: 0,
            failed: 0,
            errored: 0,
            tasks: Vec::new(),
        }
    }

    fn record(&mut self, report: TaskReport) {
        match report.status {
            TaskStatus::Passed => self.passed += 1,
            TaskStatus::Failed => self.failed += 1,
            TaskStatus::Errored => self.errored += 1,
        }
        self.tasks.push(report);
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct BatchEngine {
    config: BatchConfig,
}

impl BatchEngine {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Runs every task in file order.
    ///
    /// Task failures end up in the report; only an invalid configuration
    /// makes the run itself fail.
    pub fn run(&self) -> Result<BatchReport> {
        self.config.validate()?;

        tracing::info!(
            "🚀 Running batch '{}' ({} tasks)",
            self.config.batch.name,
            self.config.tasks.len()
        );

        let mut report = BatchReport::new(self.config.batch.name.clone());
        for (index, task) in self.config.tasks.iter().enumerate() {
            let task_report = run_task(index, task);

            match task_report.status {
                TaskStatus::Passed => tracing::info!("✅ {} passed", task_report.name),
                TaskStatus::Failed => tracing::warn!(
                    "❌ {} failed: {}",
                    task_report.name,
                    task_report.error.as_deref().unwrap_or("unexpected output")
                ),
                TaskStatus::Errored => tracing::error!(
                    "💥 {} errored: {}",
                    task_report.name,
                    task_report.error.as_deref().unwrap_or("unknown error")
                ),
            }

            let stop = task_report.status != TaskStatus::Passed && self.config.stop_on_error();
            report.record(task_report);
            if stop {
                tracing::warn!("Stopping batch after first unsuccessful task");
                break;
            }
        }

        tracing::info!(
            "📊 Batch '{}' finished: {} passed, {} failed, {} errored",
            report.name,
            report.passed,
            report.failed,
            report.errored
        );

        Ok(report)
    }
}

fn run_task(index: usize, task: &TaskConfig) -> TaskReport {
    let name = task.display_name(index);
    let outcome = solve(task.problem, &task.args);

    let (status, output, error) = match (outcome, &task.expect, task.expect_error) {
        (Ok(value), _, Some(expected)) => (
            TaskStatus::Failed,
            Some(value),
            Some(format!("expected a {} error", expected)),
        ),
        (Err(e), _, Some(expected)) if expected.matches(e.category()) => {
            (TaskStatus::Passed, None, Some(e.to_string()))
        }
        (Err(e), _, Some(_)) => (TaskStatus::Failed, None, Some(e.to_string())),
        (Ok(value), Some(expected), None) if &value == expected => {
            (TaskStatus::Passed, Some(value), None)
        }
        (Ok(value), Some(expected), None) => (
            TaskStatus::Failed,
            Some(value),
            Some(format!("expected {}", expected)),
        ),
        (Ok(value), None, None) => (TaskStatus::Passed, Some(value), None),
        (Err(e), _, None) => (TaskStatus::Errored, None, Some(e.to_string())),
    };

    TaskReport {
        name,
        problem: task.problem,
        status,
        output,
        error,
    }
}
