use circle_calc::utils::{error::DemoError, logger, validation::Validate};
use circle_calc::{CliConfig, DemoEngine};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting circle-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let scenario = match config.resolve_scenario() {
        Ok(scenario) => scenario,
        Err(e) => fail(&e),
    };
    if let Err(e) = scenario.validate() {
        fail(&e);
    }

    let engine = DemoEngine::new(scenario);
    let report = engine.run();

    match report.render(config.format) {
        Ok(output) => println!("{}", output),
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &DemoError) -> ! {
    tracing::error!(
        "❌ circle-calc failed: {} (Severity: {:?})",
        e,
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
