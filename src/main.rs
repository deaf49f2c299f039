use clap::Parser;
use contact_form::adapters::{
    ConsoleSurface, JsonFileSink, ScriptedEvents, TokioScheduler, TracingSink,
};
use contact_form::core::engine::EngineReport;
use contact_form::domain::ports::ConfigProvider;
use contact_form::utils::{logger, validation::Validate};
use contact_form::{CliConfig, FormEngine, FormError, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting contact-form CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 讀取 TOML 配置（如果有指定），時間與交付設定以檔案為準
    let file_config = match &config.config {
        Some(path) => {
            let parsed = TomlConfig::from_file(path)?;
            parsed.validate()?;
            tracing::info!("📄 Loaded configuration '{}' from {}", parsed.form.name, path);
            Some(parsed)
        }
        None => None,
    };

    let result = match &file_config {
        Some(toml) => run_session(toml, &config).await,
        None => run_session(&config, &config).await,
    };

    match result {
        Ok(report) if report.rejected == 0 => {
            tracing::info!(
                "✅ Form session completed: {} submission(s) accepted",
                report.accepted
            );
            println!("✅ {} submission(s) accepted", report.accepted);
        }
        Ok(report) => {
            let e = FormError::SubmissionRejected {
                invalid_count: report.invalid_fields,
            };
            tracing::warn!(
                "❌ Submission not accepted: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            exit_by_severity(&e);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Form session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            exit_by_severity(&e);
        }
    }

    Ok(())
}

async fn run_session(
    provider: &impl ConfigProvider,
    cli: &CliConfig,
) -> contact_form::Result<EngineReport> {
    let events = ScriptedEvents::filled_form(&cli.name, &cli.email, &cli.subject, &cli.message);
    let surface = ConsoleSurface::new();
    let scheduler = TokioScheduler;

    match provider.output_path() {
        Some(path) => {
            let sink = JsonFileSink::new(path.to_string());
            FormEngine::with_config(events, surface, sink, scheduler, provider)
                .run()
                .await
        }
        None => {
            FormEngine::with_config(events, surface, TracingSink, scheduler, provider)
                .run()
                .await
        }
    }
}

// 根據錯誤嚴重程度決定退出碼
fn exit_by_severity(e: &FormError) {
    use contact_form::utils::error::ErrorSeverity;

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
