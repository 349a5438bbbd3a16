use clap::Parser;
use warmup_problems::app::commands::{exit_code, run_command};
use warmup_problems::utils::logger::{self, LogFormat};
use warmup_problems::{CliConfig, WarmupError};

fn main() {
    let config = CliConfig::parse();

    let format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let mut stdout = std::io::stdout().lock();
    match run_command(config.command, &mut stdout) {
        Ok(code) => std::process::exit(code),
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &WarmupError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}
