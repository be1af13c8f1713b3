use clap::Parser;
use small_calc::utils::logger;
use small_calc::{CalcEngine, CliConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-calc CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let operation = config.operation();
    let engine = CalcEngine::new();

    match engine.run(&[operation]) {
        Ok(evaluations) => {
            let evaluation = &evaluations[0];
            if evaluation.valid {
                println!("✅ {} = {}", evaluation.op, evaluation.value);
            } else {
                println!(
                    "⚠️ {} rejected non-positive input, returned {}",
                    evaluation.op, evaluation.value
                );
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Calculation run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                small_calc::utils::error::ErrorSeverity::Low => 0,
                small_calc::utils::error::ErrorSeverity::Medium => 2,
                small_calc::utils::error::ErrorSeverity::High => 1,
                small_calc::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
