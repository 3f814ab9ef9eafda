use crate::domain::model::{Bar, ChartSpec, LessonId};
use crate::domain::ports::{Console, ExampleRunner, Lesson, VisualRunner};
use crate::utils::error::{LessonError, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// 布林轉換：零、空值與 null 為假
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for Value {
    fn truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}

impl Truthy for i64 {
    fn truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f64 {
    fn truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

// None 為假；Some 取決於內容
impl<T: Truthy> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::truthy)
    }
}

/// 字面值表示，例如 `None`、`'hi'`、`[0]`、`{'x': 1}`
pub fn repr(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(repr).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("'{}': {}", k, repr(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

/// 真值表的九個字面值，依顯示順序
pub fn truthiness_literals() -> Vec<Value> {
    vec![
        json!(0),
        json!(1),
        json!(""),
        json!("hi"),
        json!([]),
        json!([0]),
        json!({}),
        json!({"x": 1}),
        Value::Null,
    ]
}

pub fn truthiness_table() -> Vec<(String, bool)> {
    truthiness_literals()
        .iter()
        .map(|v| (repr(v), v.truthy()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityReport {
    pub a_eq_b: bool,
    pub a_is_b: bool,
    pub a_is_c: bool,
}

pub fn identity_vs_equality(console: &mut dyn Console) -> IdentityReport {
    let a = Rc::new(vec![1, 2, 3]);
    let b = Rc::new(vec![1, 2, 3]);
    let c = Rc::clone(&a);

    let report = IdentityReport {
        a_eq_b: a == b,
        a_is_b: Rc::ptr_eq(&a, &b),
        a_is_c: Rc::ptr_eq(&a, &c),
    };

    console.line(&format!("a == b: {}", report.a_eq_b));
    console.line(&format!("a is b: {}", report.a_is_b));
    console.line(&format!("a is c: {}", report.a_is_c));
    report
}

pub fn boolean_truthiness(console: &mut dyn Console) -> Vec<(String, bool)> {
    let table = truthiness_table();
    for (literal, truth) in &table {
        console.line(&format!("{:<8} => {}", literal, truth));
    }
    table
}

/// 固定長度序列，元素可讀不可改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenTuple<T, const N: usize>([T; N]);

impl<T, const N: usize> FrozenTuple<T, N> {
    pub fn new(items: [T; N]) -> Self {
        Self(items)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn try_set(&self, _index: usize, _value: T) -> Result<()> {
        Err(LessonError::ImmutabilityViolation {
            type_name: "tuple".to_string(),
        })
    }
}

pub fn immutability(console: &mut dyn Console) -> Result<()> {
    let t = FrozenTuple::new([1, 2, 3]);
    match t.try_set(0, 9) {
        Ok(()) => console.line(&format!("Tuple changed: {:?}", t.as_slice())),
        Err(e) if e.is_expected() => {
            console.line(&format!("Tuples are immutable: {}", e));
        }
        Err(other) => return Err(other),
    }
    Ok(())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DataTypesLesson;

impl DataTypesLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExampleRunner for DataTypesLesson {
    async fn run_examples(&self, console: &mut dyn Console) -> Result<()> {
        identity_vs_equality(console);
        boolean_truthiness(console);
        immutability(console)
    }
}

impl VisualRunner for DataTypesLesson {
    fn build_chart(&self) -> Result<ChartSpec> {
        let bars = truthiness_table()
            .into_iter()
            .map(|(label, truth)| Bar::new(label, u64::from(truth)))
            .collect();

        Ok(ChartSpec::bar("Truthiness of Common Python Values", bars)
            .with_y_label("Truth value (1=True, 0=False)"))
    }
}

impl Lesson for DataTypesLesson {
    fn id(&self) -> LessonId {
        LessonId::DataTypes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferConsole;
    use crate::domain::model::ChartKind;

    #[test]
    fn test_truthiness_table_matches_fixed_order() {
        let truths: Vec<bool> = truthiness_table().into_iter().map(|(_, t)| t).collect();
        assert_eq!(
            truths,
            vec![false, true, false, true, false, true, false, true, false]
        );
    }

    #[test]
    fn test_repr_of_literals() {
        let labels: Vec<String> = truthiness_table().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            labels,
            vec!["0", "1", "''", "'hi'", "[]", "[0]", "{}", "{'x': 1}", "None"]
        );
    }

    #[test]
    fn test_truthy_on_native_types() {
        assert!(!0i64.truthy());
        assert!(1i64.truthy());
        assert!(!"".truthy());
        assert!("hi".truthy());
        assert!(!Vec::<i32>::new().truthy());
        assert!(vec![0].truthy());
        assert!(!BTreeMap::<String, i32>::new().truthy());
        assert!(!None::<i64>.truthy());
        assert!(!Some(0i64).truthy());
        assert!(Some(String::from("x")).truthy());
        assert!(!0.0f64.truthy());
    }

    #[test]
    fn test_identity_vs_equality() {
        let mut console = BufferConsole::new();
        let report = identity_vs_equality(&mut console);

        assert_eq!(
            report,
            IdentityReport {
                a_eq_b: true,
                a_is_b: false,
                a_is_c: true,
            }
        );
        assert_eq!(
            console.lines(),
            ["a == b: true", "a is b: false", "a is c: true"]
        );
    }

    #[test]
    fn test_truthiness_lines_are_padded() {
        let mut console = BufferConsole::new();
        boolean_truthiness(&mut console);

        assert_eq!(console.lines().len(), 9);
        assert_eq!(console.lines()[0], "0        => false");
        assert_eq!(console.lines()[7], "{'x': 1} => true");
        assert_eq!(console.lines()[8], "None     => false");
    }

    #[test]
    fn test_frozen_tuple_rejects_assignment() {
        let t = FrozenTuple::new([1, 2, 3]);
        let err = t.try_set(0, 9).unwrap_err();

        assert!(matches!(err, LessonError::ImmutabilityViolation { .. }));
        assert_eq!(t.get(0), Some(&1));
        assert_eq!(t.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_immutability_error_is_caught_and_printed() {
        let mut console = BufferConsole::new();
        assert!(immutability(&mut console).is_ok());
        assert_eq!(
            console.lines(),
            ["Tuples are immutable: 'tuple' object does not support item assignment"]
        );
    }

    #[test]
    fn test_truthiness_chart_has_one_bar_per_literal() {
        let chart = DataTypesLesson::new().build_chart().unwrap();
        let ChartKind::Bar { bars } = chart.kind else {
            panic!("expected bar chart");
        };
        let heights: Vec<u64> = bars.iter().map(|b| b.value).collect();
        assert_eq!(heights, vec![0, 1, 0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(bars[8].label, "None");
    }
}
