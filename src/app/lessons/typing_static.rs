use crate::domain::model::{ChartSpec, LessonId, Series};
use crate::domain::ports::{Console, ExampleRunner, Lesson, VisualRunner};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 能將兩個整數相加的型別
pub trait Adder {
    fn add(&self, x: i64, y: i64) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IntAdder;

impl Adder for IntAdder {
    fn add(&self, x: i64, y: i64) -> i64 {
        x + y
    }
}

pub fn add_with(adder: &impl Adder, x: i64, y: i64) -> i64 {
    adder.add(x, y)
}

/// 單一值容器，取回的值與存入時相同
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedBox<T> {
    item: T,
}

impl<T> TypedBox<T> {
    pub fn new(item: T) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn into_inner(self) -> T {
        self.item
    }
}

pub fn sum_list(xs: &[i64]) -> i64 {
    xs.iter().sum()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TypingStaticLesson;

impl TypingStaticLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExampleRunner for TypingStaticLesson {
    async fn run_examples(&self, console: &mut dyn Console) -> Result<()> {
        console.line(&sum_list(&[1, 2, 3]).to_string());
        console.line(&add_with(&IntAdder, 2, 3).to_string());
        console.line(&TypedBox::<i64>::new(5).item().to_string());
        Ok(())
    }
}

impl VisualRunner for TypingStaticLesson {
    fn build_chart(&self) -> Result<ChartSpec> {
        let doubled: Vec<i64> = (0..=5).map(|x| add_with(&IntAdder, x, x)).collect();

        Ok(
            ChartSpec::line("Adder Contract Outputs", vec![Series::indexed("add(x, x)", &doubled)])
                .with_x_label("x")
                .with_y_label("add(x, x)"),
        )
    }
}

impl Lesson for TypingStaticLesson {
    fn id(&self) -> LessonId {
        LessonId::TypingStatic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferConsole;

    struct OffsetAdder(i64);

    impl Adder for OffsetAdder {
        fn add(&self, x: i64, y: i64) -> i64 {
            x + y + self.0
        }
    }

    #[test]
    fn test_any_adder_satisfies_the_contract() {
        assert_eq!(add_with(&IntAdder, 2, 3), 5);
        assert_eq!(add_with(&OffsetAdder(10), 2, 3), 15);

        let adders: Vec<Box<dyn Adder>> = vec![Box::new(IntAdder), Box::new(OffsetAdder(1))];
        let sums: Vec<i64> = adders.iter().map(|a| a.add(1, 1)).collect();
        assert_eq!(sums, vec![2, 3]);
    }

    #[test]
    fn test_typed_box_returns_item_unchanged() {
        assert_eq!(*TypedBox::new(5).item(), 5);
        assert_eq!(TypedBox::new("hello".to_string()).into_inner(), "hello");
    }

    #[test]
    fn test_sum_list() {
        assert_eq!(sum_list(&[1, 2, 3]), 6);
        assert_eq!(sum_list(&[]), 0);
    }

    #[tokio::test]
    async fn test_examples_print_expected_values() {
        let mut console = BufferConsole::new();
        TypingStaticLesson::new()
            .run_examples(&mut console)
            .await
            .unwrap();
        assert_eq!(console.lines(), ["6", "5", "5"]);
    }
}
