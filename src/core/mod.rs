pub mod catalog;
pub mod engine;

pub use crate::domain::model::{ChartSpec, DisplayMode, LessonId, RunPhase};
pub use crate::domain::ports::{ChartDisplay, Console, ExampleRunner, Lesson, VisualRunner};
pub use crate::utils::error::Result;
