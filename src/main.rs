use clap::Parser;
use palindromic_fuel::utils::error::{ErrorSeverity, FuelError};
use palindromic_fuel::utils::{logger, validation::Validate};
use palindromic_fuel::{CliConfig, FileConfig, LocalStorage, Mode, Runner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if let Err(e) = run(config).await {
        tracing::error!(
            "Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(config: CliConfig) -> Result<(), FuelError> {
    let file_config = match &config.config {
        Some(path) => {
            let file = FileConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let settings = config.settings(file_config.as_ref());
    let mode = Mode::from_cli(&config)?;

    if mode == Mode::Web {
        logger::init_server_logger(config.verbose, settings.json_logs);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    settings.validate()?;

    if mode == Mode::Web {
        return palindromic_fuel::api::start_server(settings).await;
    }

    let runner = Runner::new(LocalStorage::current_dir(), settings);
    let mut stdout = std::io::stdout().lock();
    runner.run(&mode, config.csv.as_deref(), &mut stdout).await
}
