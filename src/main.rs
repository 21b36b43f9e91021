use clap::Parser;
use std::io;
use waitlist::utils::{logger, validation::Validate};
use waitlist::{CliConfig, Shell};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並合併配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(if e.is_config_error() { 1 } else { 2 });
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_level.as_deref());

    tracing::info!("Starting waitlist manager");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let shell = Shell::new(stdin.lock(), stdout.lock(), &config);

    match shell.run() {
        Ok(waitlist) => {
            tracing::info!("Session ended with {} customer(s) still waiting", waitlist.len());
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Session aborted: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }
}
