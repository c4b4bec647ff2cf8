use clap::Parser;
use library_console::domain::ports::ConfigProvider;
use library_console::utils::{logger, validation::Validate};
use library_console::{CliConfig, Messages, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 驗證並載入配置 (日誌尚未初始化，直接輸出到 stderr)
    let settings = match config.validate().and_then(|_| config.settings()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(
        settings.verbose(),
        settings.log_level(),
        settings.log_json(),
    );
    tracing::debug!("Resolved settings: {:?}", settings);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        Messages::new(settings.language()),
    );

    if let Err(e) = session.run() {
        tracing::error!("❌ Session aborted: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
    Ok(())
}
