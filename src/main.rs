use anyhow::Context;
use clap::Parser;
use student_grades::utils::error::ErrorSeverity;
use student_grades::utils::{logger, validation::Validate};
use student_grades::{Action, CliConfig, Command, Settings, Shell};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置 (TOML + 命令列覆蓋)
    let settings = Settings::resolve(&cli).with_context(|| {
        format!(
            "failed to load configuration from '{}'",
            cli.config.as_deref().unwrap_or("<none>")
        )
    })?;

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting student-grades");
    tracing::debug!("Effective settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    let actions: &[Action] = match cli.command.unwrap_or(Command::Summary) {
        Command::Load => &[Action::LoadStudents],
        Command::Average => &[Action::ShowAverage],
        Command::Summary => &[Action::LoadStudents, Action::ShowAverage],
    };

    let shell = Shell::new(settings.source(), settings.format);
    let mut worst: Option<ErrorSeverity> = None;

    for &action in actions {
        match shell.run(action) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                tracing::error!(
                    "❌ {:?} failed: {} (Category: {:?}, Severity: {:?})",
                    action,
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                println!("{}", shell.render_failure(action, &e));
                worst = worst.max(Some(e.severity()));
            }
        }
    }

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match worst {
        None | Some(ErrorSeverity::Low) => 0, // 沒有學生資料只是提示
        Some(ErrorSeverity::Medium) => 2,
        Some(ErrorSeverity::High) => 1,
        Some(ErrorSeverity::Critical) => 3,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
