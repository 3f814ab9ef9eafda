use crate::domain::model::{Bar, ChartSpec, LessonId};
use crate::domain::ports::{Console, ExampleRunner, Lesson, VisualRunner};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 帶提前跳出條件的迴圈結束方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopOutcome<T> {
    /// 所有元素走完且條件未觸發
    Exhausted,
    Broke(T),
}

/// 逐一走訪直到 `should_break` 成立；`Exhausted` 即迴圈的 else 分支
pub fn loop_else<I, F>(items: I, mut should_break: F) -> LoopOutcome<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    for item in items {
        if should_break(&item) {
            return LoopOutcome::Broke(item);
        }
    }
    LoopOutcome::Exhausted
}

/// 印出完成訊息時回傳 `true`
pub fn loop_else_demo(n: i64, console: &mut dyn Console) -> bool {
    // i == -1 永遠不成立，所以一定走到 else
    match loop_else(0..n, |i| *i == -1) {
        LoopOutcome::Exhausted => {
            console.line("Loop completed without break.");
            true
        }
        LoopOutcome::Broke(i) => {
            tracing::debug!("loop broke early at {}", i);
            false
        }
    }
}

pub fn even_squares(upper: i64) -> Vec<i64> {
    (0..upper).filter(|x| x % 2 == 0).map(|x| x * x).collect()
}

pub fn comprehensions(console: &mut dyn Console) -> Vec<i64> {
    let squares = even_squares(6);
    console.line(&format!("Even squares: {:?}", squares));
    squares
}

pub const BRANCH_COUNTS: [(&str, u64); 3] = [("if", 5), ("elif", 2), ("else", 3)];

#[derive(Debug, Default, Clone, Copy)]
pub struct ControlFlowLesson;

impl ControlFlowLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExampleRunner for ControlFlowLesson {
    async fn run_examples(&self, console: &mut dyn Console) -> Result<()> {
        loop_else_demo(5, console);
        comprehensions(console);
        Ok(())
    }
}

impl VisualRunner for ControlFlowLesson {
    fn build_chart(&self) -> Result<ChartSpec> {
        let bars = BRANCH_COUNTS
            .iter()
            .map(|(name, count)| Bar::new(*name, *count))
            .collect();
        Ok(ChartSpec::bar("Branching Blocks Example Counts", bars).with_y_label("Count"))
    }
}

impl Lesson for ControlFlowLesson {
    fn id(&self) -> LessonId {
        LessonId::ControlFlow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferConsole;
    use crate::domain::model::ChartKind;

    #[test]
    fn test_loop_else_demo_prints_notice_once() {
        for n in [0, 1, 5, 100] {
            let mut console = BufferConsole::new();
            assert!(loop_else_demo(n, &mut console));
            assert_eq!(console.count_matching("Loop completed without break."), 1);
            assert_eq!(console.lines().len(), 1);
        }
    }

    #[test]
    fn test_loop_else_reports_break_item() {
        assert_eq!(loop_else(0..10, |i| *i == 3), LoopOutcome::Broke(3));
        assert_eq!(loop_else(Vec::<i32>::new(), |_| true), LoopOutcome::Exhausted);
    }

    #[test]
    fn test_comprehensions_yield_even_squares() {
        let mut console = BufferConsole::new();
        assert_eq!(comprehensions(&mut console), vec![0, 4, 16]);
        assert_eq!(console.lines(), ["Even squares: [0, 4, 16]"]);
    }

    #[test]
    fn test_examples_run_in_order() {
        let mut console = BufferConsole::new();
        tokio_test::assert_ok!(tokio_test::block_on(
            ControlFlowLesson::new().run_examples(&mut console)
        ));
        assert_eq!(
            console.lines(),
            ["Loop completed without break.", "Even squares: [0, 4, 16]"]
        );
    }

    #[test]
    fn test_branch_chart_keeps_insertion_order() {
        let chart = ControlFlowLesson::new().build_chart().unwrap();
        let ChartKind::Bar { bars } = chart.kind else {
            panic!("expected bar chart");
        };
        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["if", "elif", "else"]);
        assert_eq!(chart.y_label.as_deref(), Some("Count"));
    }
}
