use crate::domain::model::{ChartSpec, LessonId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 課程輸出的文字行
pub trait Console: Send {
    fn line(&mut self, text: &str);
}

#[async_trait]
pub trait ExampleRunner: Send + Sync {
    async fn run_examples(&self, console: &mut dyn Console) -> Result<()>;
}

pub trait VisualRunner: Send + Sync {
    fn build_chart(&self) -> Result<ChartSpec>;
}

pub trait Lesson: ExampleRunner + VisualRunner {
    fn id(&self) -> LessonId;
}

pub trait ChartDisplay: Send + Sync {
    fn show(&self, chart: &ChartSpec) -> Result<()>;
}
