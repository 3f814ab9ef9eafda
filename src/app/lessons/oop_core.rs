use crate::domain::model::{ChartSpec, LessonId, Series};
use crate::domain::ports::{Console, ExampleRunner, Lesson, VisualRunner};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 同一 handle 建立的所有計數器共用的累計值
///
/// 使用原子操作，多執行緒遞增也安全
#[derive(Debug, Clone, Default)]
pub struct CounterClass {
    total: Arc<AtomicU64>,
}

impl CounterClass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::SeqCst)
    }

    fn record_increment(&self) {
        self.total.fetch_add(1, Ordering::SeqCst);
    }
}

pub trait Increment {
    fn inc(&mut self, console: &mut dyn Console);
    fn value(&self) -> u64;
}

#[derive(Debug, Clone)]
pub struct Counter {
    value: u64,
    class: CounterClass,
}

impl Counter {
    pub fn new(class: &CounterClass) -> Self {
        Self::with_start(class, 0)
    }

    pub fn with_start(class: &CounterClass, start: u64) -> Self {
        Self {
            value: start,
            class: class.clone(),
        }
    }
}

impl Increment for Counter {
    fn inc(&mut self, _console: &mut dyn Console) {
        self.value += 1;
        self.class.record_increment();
    }

    fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counter(value={})", self.value)
    }
}

/// 每次遞增都會印出通知，其餘交給 [`Counter`]
#[derive(Debug, Clone)]
pub struct LoudCounter {
    base: Counter,
}

impl LoudCounter {
    pub fn new(class: &CounterClass) -> Self {
        Self {
            base: Counter::new(class),
        }
    }

    pub fn with_start(class: &CounterClass, start: u64) -> Self {
        Self {
            base: Counter::with_start(class, start),
        }
    }
}

impl Increment for LoudCounter {
    fn inc(&mut self, console: &mut dyn Console) {
        self.base.inc(console);
        console.line("Incremented!");
    }

    fn value(&self) -> u64 {
        self.base.value()
    }
}

impl fmt::Display for LoudCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoudCounter(value={})", self.base.value)
    }
}

mod secret {
    pub struct Secret {
        pub public: String,
        pub(crate) protected: String,
        private: String,
    }

    impl Secret {
        pub fn new() -> Self {
            Self {
                public: "pub".to_string(),
                protected: "prot".to_string(),
                private: "priv".to_string(),
            }
        }

        pub fn reveal_private(&self) -> &str {
            &self.private
        }
    }

    impl Default for Secret {
        fn default() -> Self {
            Self::new()
        }
    }
}

pub use secret::Secret;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterReport {
    pub a_value: u64,
    pub b_value: u64,
    pub total: u64,
}

pub fn class_vs_instance(start: u64, console: &mut dyn Console) -> CounterReport {
    let class = CounterClass::new();

    let mut c = Counter::with_start(&class, start);
    c.inc(console);
    c.inc(console);
    console.line(&format!("{} total= {}", c, class.total()));

    let mut lc = LoudCounter::with_start(&class, start);
    lc.inc(console);
    console.line(&format!("{} total= {}", lc, class.total()));

    CounterReport {
        a_value: c.value(),
        b_value: lc.value(),
        total: class.total(),
    }
}

pub fn encapsulation_demo(console: &mut dyn Console) {
    let s = Secret::new();
    console.line(&format!("public: {}", s.public));
    console.line(&format!("_protected: {}", s.protected));
    console.line(&format!("private (via method): {}", s.reveal_private()));
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OopCoreLesson {
    start: u64,
}

impl OopCoreLesson {
    pub fn new(start: u64) -> Self {
        Self { start }
    }
}

#[async_trait]
impl ExampleRunner for OopCoreLesson {
    async fn run_examples(&self, console: &mut dyn Console) -> Result<()> {
        class_vs_instance(self.start, console);
        encapsulation_demo(console);
        Ok(())
    }
}

impl VisualRunner for OopCoreLesson {
    fn build_chart(&self) -> Result<ChartSpec> {
        // A 與 B 逐步遞增，total 為兩者之和
        let instance_a = [0, 1, 2, 3];
        let instance_b = [0, 1, 1, 2];
        let total: Vec<i64> = instance_a
            .iter()
            .zip(instance_b.iter())
            .map(|(a, b)| a + b)
            .collect();

        Ok(ChartSpec::line(
            "Instance vs Class Accumulation",
            vec![
                Series::indexed("A.value", &instance_a),
                Series::indexed("B.value", &instance_b),
                Series::indexed("Counter.total", &total),
            ],
        )
        .with_x_label("Step")
        .with_y_label("Value"))
    }
}

impl Lesson for OopCoreLesson {
    fn id(&self) -> LessonId {
        LessonId::OopCore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferConsole;
    use crate::domain::model::ChartKind;

    #[test]
    fn test_shared_total_sums_every_instance() {
        let mut console = BufferConsole::new();
        let report = class_vs_instance(0, &mut console);

        assert_eq!(
            report,
            CounterReport {
                a_value: 2,
                b_value: 1,
                total: 3,
            }
        );
        assert_eq!(
            console.lines(),
            [
                "Counter(value=2) total= 2",
                "Incremented!",
                "LoudCounter(value=1) total= 3",
            ]
        );
    }

    #[test]
    fn test_start_value_does_not_leak_into_total() {
        let mut console = BufferConsole::new();
        let report = class_vs_instance(10, &mut console);
        assert_eq!(report.a_value, 12);
        assert_eq!(report.b_value, 11);
        assert_eq!(report.total, 3);
    }

    #[test]
    fn test_separate_classes_do_not_share_totals() {
        let mut console = BufferConsole::new();
        let first = CounterClass::new();
        let second = CounterClass::new();

        Counter::new(&first).inc(&mut console);
        Counter::new(&second).inc(&mut console);

        assert_eq!(first.total(), 1);
        assert_eq!(second.total(), 1);
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_shared_total_across_threads() {
        let class = CounterClass::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let class = class.clone();
                std::thread::spawn(move || {
                    let mut console = BufferConsole::new();
                    let mut counter = Counter::new(&class);
                    for _ in 0..100 {
                        counter.inc(&mut console);
                    }
                    counter.value()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 100);
        }
        assert_eq!(class.total(), 400);
    }

    #[test]
    fn test_encapsulation_demo() {
        let mut console = BufferConsole::new();
        encapsulation_demo(&mut console);
        assert_eq!(
            console.lines(),
            ["public: pub", "_protected: prot", "private (via method): priv"]
        );
    }

    #[test]
    fn test_accumulation_chart_totals() {
        let chart = OopCoreLesson::default().build_chart().unwrap();
        let ChartKind::Line { series, legend } = chart.kind else {
            panic!("expected line chart");
        };
        assert!(legend);
        assert_eq!(series.len(), 3);
        assert_eq!(series[2].name, "Counter.total");
        let totals: Vec<f64> = series[2].points.iter().map(|(_, y)| *y).collect();
        assert_eq!(totals, vec![0.0, 2.0, 3.0, 5.0]);
    }
}
