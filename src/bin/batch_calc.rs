use anyhow::Context;
use clap::Parser;
use small_calc::config::batch_config::BatchConfig;
use small_calc::utils::{logger, validation::Validate};
use small_calc::CalcEngine;

#[derive(Parser)]
#[command(name = "batch-calc")]
#[command(about = "Calculator batch runner with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "calc-batch.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - list operations without evaluating
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based batch calculator");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match BatchConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let operations = config
        .to_operations()
        .with_context(|| format!("converting operations from '{}'", args.config))?;

    if args.dry_run {
        println!(
            "Batch '{}' with {} operations:",
            config.batch.name,
            operations.len()
        );
        for operation in &operations {
            println!("  {} {:?}", operation.name(), operation.operands());
        }
        return Ok(());
    }

    let engine = match config.report_path() {
        Some(path) => CalcEngine::new_with_report(path.to_string()),
        None => CalcEngine::new(),
    };

    match engine.run(&operations) {
        Ok(evaluations) => {
            for evaluation in &evaluations {
                if evaluation.valid {
                    println!(
                        "  {} {:?} = {}",
                        evaluation.op, evaluation.operands, evaluation.value
                    );
                } else {
                    println!(
                        "  {} {:?} = {} (non-positive input)",
                        evaluation.op, evaluation.operands, evaluation.value
                    );
                }
            }
            println!("✅ Batch '{}' completed", config.batch.name);
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

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
