use clap::Parser;
use roman_minimizer::core::ConfigProvider;
use roman_minimizer::utils::error::ErrorSeverity;
use roman_minimizer::utils::{logger, validation::Validate};
use roman_minimizer::{
    CliConfig, LocalStorage, RomanError, SavingsEngine, SavingsPipeline, TomlConfig,
};

#[tokio::main]
async fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::debug!("CLI config: {:?}", args);

    let result = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => run(apply_overrides(config, &args)).await,
                Err(e) => Err(e),
            }
        }
        None => run(args.clone()).await,
    };

    match result {
        Ok(total) => println!("{}", total),
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

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
    }
}

/// 命令列參數優先於 TOML 設定
fn apply_overrides(mut config: TomlConfig, args: &CliConfig) -> TomlConfig {
    if let Some(input) = &args.input {
        config.set_input(input.clone());
    }
    if let Some(report) = &args.report {
        config.set_report(report.clone());
    }
    if let Some(format) = args.report_format {
        config.set_report_format(format);
    }
    if args.monitor {
        config.set_monitoring(true);
    }
    config
}

async fn run<C>(config: C) -> Result<i64, RomanError>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    let monitor_enabled = config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = SavingsPipeline::new(LocalStorage::default(), config);
    let engine = SavingsEngine::new_with_monitoring(pipeline, monitor_enabled);

    let report = engine.run().await?;
    Ok(report.total_saved)
}
