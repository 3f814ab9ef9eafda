pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{
    console::{BufferConsole, StdoutConsole},
    display::TerminalDisplay,
};
pub use config::LessonConfig;
pub use core::{catalog::LessonCatalog, engine::LessonEngine};
pub use utils::error::{LessonError, Result};
