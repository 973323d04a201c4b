use clap::Parser;
use cosmic_expansion::utils::{logger, validation::Validate};
use cosmic_expansion::{CliConfig, ExpansionPipeline, LocalStorage, SolverEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cosmic-expansion CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = ExpansionPipeline::new(storage, config);
    let engine = SolverEngine::new(pipeline);

    match engine.run() {
        Ok(report) => {
            println!("{}", report);
        }
        Err(e) => {
            tracing::error!(
                "Solver failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                cosmic_expansion::utils::error::ErrorSeverity::High => 1,
                cosmic_expansion::utils::error::ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
