use crate::core::{ChartDisplay, Console, Lesson, LessonId, RunPhase};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::time::Duration;
use tokio::time::Instant;

/// 單一課程執行結果
#[derive(Debug, Clone)]
pub struct LessonRun {
    pub lesson: LessonId,
    pub chart_title: Option<String>,
    pub duration: Duration,
}

pub struct LessonEngine<D: ChartDisplay> {
    display: D,
    monitor: SystemMonitor,
}

impl<D: ChartDisplay> LessonEngine<D> {
    pub fn new(display: D) -> Self {
        Self::new_with_monitoring(display, false)
    }

    pub fn new_with_monitoring(display: D, monitor_enabled: bool) -> Self {
        Self {
            display,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(
        &self,
        lesson: &dyn Lesson,
        phase: RunPhase,
        console: &mut dyn Console,
    ) -> Result<LessonRun> {
        let id = lesson.id();
        let start = Instant::now();
        tracing::info!("📚 Starting lesson {}", id);
        self.monitor.log_stats("Lesson started");

        if phase.includes_examples() {
            tracing::debug!("Running examples for {}", id.slug());
            lesson.run_examples(console).await?;
            self.monitor.log_stats("Examples completed");
        }

        let mut chart_title = None;
        if phase.includes_visuals() {
            tracing::debug!("Building chart for {}", id.slug());
            let chart = lesson.build_chart()?;
            self.display.show(&chart)?;
            self.monitor.log_stats("Visuals completed");
            chart_title = Some(chart.title);
        }

        let duration = start.elapsed();
        tracing::info!("✅ Lesson {} finished in {:?}", id, duration);
        self.monitor.log_final_stats();

        Ok(LessonRun {
            lesson: id,
            chart_title,
            duration,
        })
    }

    /// 依序執行多個課程，任一失敗即停止
    pub async fn run_all<'a, I>(
        &self,
        lessons: I,
        phase: RunPhase,
        console: &mut dyn Console,
    ) -> Result<Vec<LessonRun>>
    where
        I: IntoIterator<Item = &'a dyn Lesson>,
    {
        let mut runs = Vec::new();
        for lesson in lessons {
            console.line(&format!("=== {} ===", lesson.id()));
            runs.push(self.run(lesson, phase, console).await?);
        }
        Ok(runs)
    }
}
