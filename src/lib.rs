#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod problems;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{batch_config::BatchConfig, cli::LocalStorage};
pub use core::{
    dispatch::solve,
    engine::{BatchEngine, BatchReport, TaskStatus},
};
pub use domain::model::{Outcome, ProblemKind, Rgb};
pub use utils::error::{Result, WarmupError};
