pub mod toml_config;

pub use toml_config::LessonConfig;

#[cfg(feature = "cli")]
use crate::domain::model::{DisplayMode, LessonId};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lesson-kit")]
#[command(about = "Runnable lessons: console demonstrations plus one chart per topic")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    /// Chart target: interactive, inline or json
    #[arg(long, global = true)]
    pub display: Option<DisplayMode>,

    /// Log output format: compact or json
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every lesson
    List,
    /// Run a lesson's console demonstrations
    Examples { lesson: LessonId },
    /// Show a lesson's chart
    Visuals { lesson: LessonId },
    /// Demonstrations followed by the chart
    Run { lesson: LessonId },
    /// Run every lesson in order
    All {
        #[arg(long, help = "Also show each lesson's chart")]
        with_visuals: bool,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋檔案設定
    pub fn apply_overrides(&self, config: &mut LessonConfig) {
        if let Some(mode) = self.display {
            config.display.mode = mode;
        }
        if self.verbose {
            config.logging.verbose = true;
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
    }
}
