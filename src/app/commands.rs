use crate::config::batch_config::BatchConfig;
use crate::config::cli::LocalStorage;
use crate::config::{parse_cli_argument, Command};
use crate::core::dispatch::solve;
use crate::core::engine::BatchEngine;
use crate::core::Storage;
use crate::domain::model::ProblemKind;
use crate::utils::error::{Result, WarmupError};
use std::io::Write;
use std::path::Path;

/// Exit code when every task passed.
pub const EXIT_OK: i32 = 0;
/// Exit code for type/range failures and failed batch tasks.
pub const EXIT_VALIDATION: i32 = 1;
/// Exit code for configuration and I/O failures.
pub const EXIT_ENVIRONMENT: i32 = 2;

pub fn exit_code(e: &WarmupError) -> i32 {
    if e.is_validation() {
        EXIT_VALIDATION
    } else {
        EXIT_ENVIRONMENT
    }
}

/// Runs one command, printing results to `out`. Returns the exit code for
/// runs that completed; errors are left to the caller to report.
pub fn run_command<W: Write>(command: Command, out: &mut W) -> Result<i32> {
    match command {
        Command::Solve { problem, args } => {
            let args: Vec<_> = args.iter().map(|raw| parse_cli_argument(raw)).collect();
            let value = solve(problem, &args)?;
            writeln!(out, "{}", value)?;
            Ok(EXIT_OK)
        }
        Command::Batch { config, report } => {
            tracing::info!("📁 Loading batch from: {}", config.display());
            let batch = BatchConfig::from_file(&config)?;
            let result = BatchEngine::new(batch).run()?;

            writeln!(
                out,
                "{}: {} passed, {} failed, {} errored",
                result.name, result.passed, result.failed, result.errored
            )?;

            if let Some(report_path) = report {
                let written = save_report(&report_path, &result.to_json()?)?;
                tracing::info!("📝 Report saved to: {}", written);
            }

            Ok(if result.is_success() {
                EXIT_OK
            } else {
                EXIT_VALIDATION
            })
        }
        Command::List => {
            for kind in ProblemKind::ALL {
                writeln!(
                    out,
                    "{:<14} {} ({})",
                    kind.name(),
                    kind.arity(),
                    kind.parameters().join(", ")
                )?;
            }
            Ok(EXIT_OK)
        }
    }
}

fn save_report(report_path: &Path, json: &str) -> Result<String> {
    let base = report_path
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let file_name = report_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| WarmupError::config_error("report", "report path must name a file"))?;

    LocalStorage::new(base).write_file(file_name, json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    fn run(command: Command) -> (Result<i32>, String) {
        let mut out = Vec::new();
        let result = run_command(command, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&WarmupError::type_error("a", "an integer", "a string")), 1);
        assert_eq!(exit_code(&WarmupError::range_error("n", 0, "must be positive")), 1);
        assert_eq!(exit_code(&WarmupError::config_error("tasks", "empty")), 2);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(exit_code(&WarmupError::IoError(io)), 2);
    }

    #[test]
    fn test_list_prints_every_problem() {
        let (result, output) = run(Command::List);
        assert_eq!(result.unwrap(), EXIT_OK);
        assert_eq!(output.lines().count(), ProblemKind::ALL.len());
        assert!(output.contains("number_system  2 (n, target_base)"));
        assert!(output.contains("tic_tac_toe    1 (field)"));
    }

    #[test]
    fn test_solve_parses_arguments() {
        let (result, output) = run(Command::Solve {
            problem: ProblemKind::NumberSystem,
            args: vec!["2.5".to_string(), "2".to_string()],
        });
        assert_eq!(result.unwrap(), EXIT_OK);
        assert_eq!(output, "\"10.1\"\n");

        let (_, output) = run(Command::Solve {
            problem: ProblemKind::Phone,
            args: vec!["8-800-555-35-35".to_string()],
        });
        assert_eq!(output, "true\n");
    }

    #[test]
    fn test_solve_failure_is_returned() {
        let (result, output) = run(Command::Solve {
            problem: ProblemKind::Fibonacci,
            args: vec!["0".to_string()],
        });
        let err = result.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Range);
        assert_eq!(exit_code(&err), EXIT_VALIDATION);
        assert!(output.is_empty());
    }
}
