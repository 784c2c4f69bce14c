use clap::Parser;
use keyword_variations::app::driver;
use keyword_variations::utils::logger;
use keyword_variations::CliConfig;
use std::io::IsTerminal;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting keyword-variations CLI");

    let stdin = std::io::stdin();
    let stdin_is_terminal = stdin.is_terminal();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = driver::run(&cli, stdin.lock(), stdin_is_terminal, &mut out).await {
        tracing::error!("❌ Run failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
