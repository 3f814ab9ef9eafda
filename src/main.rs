use clap::Parser;
use std::time::Duration;
use lesson_kit::core::{ChartDisplay, LessonId, RunPhase};
use lesson_kit::utils::error::ErrorSeverity;
use lesson_kit::utils::{logger, validation::Validate};
use lesson_kit::{
    CliConfig, Command, LessonCatalog, LessonConfig, LessonEngine, LessonError, StdoutConsole,
    TerminalDisplay,
};

// 單執行緒協作排程，asyncio 課程的兩個任務在同一執行緒上交錯
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置
    let mut config = match LessonConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    // 初始化日誌
    if config.logging.format == "json" {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }

    tracing::info!("Starting lesson-kit");
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let catalog = LessonCatalog::from_config(&config);
    let display = TerminalDisplay::new(
        config.display.mode,
        config.display.width,
        config.display.height,
    );
    let engine = LessonEngine::new_with_monitoring(display, cli.monitor);
    let mut console = StdoutConsole::new();

    let outcome = match cli.command {
        Command::List => {
            list_lessons(&catalog);
            Ok(())
        }
        Command::Examples { lesson } => {
            run_one(&engine, &catalog, lesson, RunPhase::Examples, &mut console).await
        }
        Command::Visuals { lesson } => {
            run_one(&engine, &catalog, lesson, RunPhase::Visuals, &mut console).await
        }
        Command::Run { lesson } => {
            run_one(&engine, &catalog, lesson, RunPhase::Both, &mut console).await
        }
        Command::All { with_visuals } => {
            let phase = if with_visuals {
                RunPhase::Both
            } else {
                RunPhase::Examples
            };
            engine
                .run_all(catalog.iter(), phase, &mut console)
                .await
                .map(|runs| {
                    let total: Duration = runs.iter().map(|run| run.duration).sum();
                    tracing::info!("✅ Completed {} lessons in {:?}", runs.len(), total);
                })
        }
    };

    if let Err(e) = outcome {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Lesson failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
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

async fn run_one<D: ChartDisplay>(
    engine: &LessonEngine<D>,
    catalog: &LessonCatalog,
    id: LessonId,
    phase: RunPhase,
    console: &mut StdoutConsole,
) -> Result<(), LessonError> {
    let lesson = catalog.get(id)?;
    let run = engine.run(lesson, phase, console).await?;
    tracing::debug!("⏱️ {} took {:?}", run.lesson, run.duration);
    if let Some(title) = run.chart_title {
        tracing::debug!("📈 Displayed chart: {}", title);
    }
    Ok(())
}

fn list_lessons(catalog: &LessonCatalog) {
    for lesson in catalog.iter() {
        let id = lesson.id();
        println!("{:02}  {:<14} {}", id.number(), id.slug(), id.title());
    }
}
