use crate::domain::model::{Bar, ChartSpec, LessonId};
use crate::domain::ports::{Console, ExampleRunner, Lesson, VisualRunner};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

/// 帶標籤的工作單元，固定延遲後完成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkUnit {
    pub label: String,
    pub delay: Duration,
}

impl WorkUnit {
    pub fn new(label: impl Into<String>, delay: Duration) -> Self {
        Self {
            label: label.into(),
            delay,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GatherReport {
    /// 與參數順序一致，不受完成先後影響
    pub results: [String; 2],
    pub elapsed: Duration,
}

pub async fn work(unit: &WorkUnit) -> String {
    tracing::debug!("⏳ {} sleeping for {:?}", unit.label, unit.delay);
    tokio::time::sleep(unit.delay).await;
    format!("{} done after {}s", unit.label, unit.delay.as_secs_f64())
}

/// 同時等待兩個工作，耗時取決於較長的延遲
pub async fn gather(first: &WorkUnit, second: &WorkUnit) -> GatherReport {
    let start = Instant::now();
    let (a, b) = tokio::join!(work(first), work(second));
    GatherReport {
        results: [a, b],
        elapsed: start.elapsed(),
    }
}

// 超出 u64 的毫秒數取上限
fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone)]
pub struct AsyncioLesson {
    first: WorkUnit,
    second: WorkUnit,
}

impl AsyncioLesson {
    pub fn new(first: WorkUnit, second: WorkUnit) -> Self {
        Self { first, second }
    }
}

impl Default for AsyncioLesson {
    fn default() -> Self {
        Self::new(
            WorkUnit::new("A", Duration::from_secs(1)),
            WorkUnit::new("B", Duration::from_secs(2)),
        )
    }
}

#[async_trait]
impl ExampleRunner for AsyncioLesson {
    async fn run_examples(&self, console: &mut dyn Console) -> Result<()> {
        let report = gather(&self.first, &self.second).await;
        console.line(&format!(
            "{:?} elapsed: {:.2} s",
            report.results,
            report.elapsed.as_secs_f64()
        ));
        Ok(())
    }
}

impl VisualRunner for AsyncioLesson {
    fn build_chart(&self) -> Result<ChartSpec> {
        let first_ms = millis(self.first.delay);
        let second_ms = millis(self.second.delay);

        let bars = vec![
            Bar::new(self.first.label.as_str(), first_ms),
            Bar::new(self.second.label.as_str(), second_ms),
            Bar::new("sequential", first_ms.saturating_add(second_ms)),
            Bar::new("concurrent", first_ms.max(second_ms)),
        ];

        Ok(ChartSpec::bar("Sequential vs Concurrent Wait (ms)", bars).with_y_label("Milliseconds"))
    }
}

impl Lesson for AsyncioLesson {
    fn id(&self) -> LessonId {
        LessonId::Asyncio
    }
}
