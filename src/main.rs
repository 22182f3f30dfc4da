use clap::Parser;
use record_analytics::core::engine::RunSummary;
use record_analytics::core::{ConfigProvider, DatasetSource};
use record_analytics::utils::error::{AnalyticsError, ErrorSeverity};
use record_analytics::utils::{logger, validation::Validate};
use record_analytics::{
    AnalyticsPipeline, CliConfig, CsvSource, LocalStorage, ReportEngine, SampleSource, TomlConfig,
};

fn main() {
    let mut config = CliConfig::parse();

    // Logging
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting record-analytics");

    // TOML file fills in whatever the command line left unset
    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        match TomlConfig::from_file(&path) {
            Ok(file) => config.merge_file(file),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        }
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = match config.data_dir().map(str::to_string) {
        Some(dir) => {
            tracing::info!("📂 Reading datasets from: {}", dir);
            run(CsvSource::new(dir), config)
        }
        None => run(SampleSource, config),
    };

    match result {
        Ok(summary) => {
            println!("{}", summary.report.render_text());
            for path in &summary.written {
                println!("📁 Output saved to: {}", path);
            }
            println!(
                "📊 Analyzed {} records in {:.2?}",
                summary.records, summary.elapsed
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Analytics run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(exit_code(&e));
        }
    }
}

fn run<S: DatasetSource>(source: S, config: CliConfig) -> Result<RunSummary, AnalyticsError> {
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = AnalyticsPipeline::new(source, storage, config);
    ReportEngine::new(pipeline).run()
}

fn exit_code(e: &AnalyticsError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
