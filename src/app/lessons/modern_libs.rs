use crate::domain::model::{ChartSpec, LessonId, Series};
use crate::domain::ports::{Console, ExampleRunner, Lesson, VisualRunner};
use crate::utils::error::{LessonError, Result};
use async_trait::async_trait;
use std::fmt;

/// 不可變的使用者記錄
///
/// 欄位私有且沒有 `&mut` API，重新賦值無法編譯：
///
/// ```compile_fail
/// let user = lesson_kit::app::lessons::modern_libs::User::new(1, "Aisha");
/// user.name = "Bob".to_string();
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct User {
    id: u64,
    name: String,
}

impl User {
    pub const FIELDS: [&'static str; 2] = ["id", "name"];

    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 回傳改名後的新記錄，原記錄不變
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: name.into(),
        }
    }

    /// 執行期的欄位賦值檢查，凍結記錄一律拒絕
    pub fn try_assign(&self, field: &str) -> Result<()> {
        if Self::FIELDS.contains(&field) {
            Err(LessonError::FrozenInstance {
                field: field.to_string(),
            })
        } else {
            Err(LessonError::UnknownField {
                type_name: "User".to_string(),
                field: field.to_string(),
            })
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(id={}, name='{}')", self.id, self.name)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ModernLibsLesson;

impl ModernLibsLesson {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExampleRunner for ModernLibsLesson {
    async fn run_examples(&self, console: &mut dyn Console) -> Result<()> {
        let u = User::new(1, "Aisha");
        console.line(&u.to_string());

        match u.try_assign("name") {
            Ok(()) => console.line("Record was modified"),
            Err(e) if e.is_expected() => {
                console.line(&format!("Cannot reassign: {}", e));
            }
            Err(other) => return Err(other),
        }
        Ok(())
    }
}

impl VisualRunner for ModernLibsLesson {
    fn build_chart(&self) -> Result<ChartSpec> {
        let points = (1..=5).map(|x: i64| (x as f64, (x * x) as f64)).collect();

        Ok(ChartSpec::line(
            "Example Visualization",
            vec![Series {
                name: "x^2".to_string(),
                points,
            }],
        )
        .with_x_label("x")
        .with_y_label("x^2"))
    }
}

impl Lesson for ModernLibsLesson {
    fn id(&self) -> LessonId {
        LessonId::ModernLibs
    }
}
