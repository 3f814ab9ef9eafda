use crate::utils::error::LessonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 課程代號，編號沿用原課程目錄 (03_data_types ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonId {
    DataTypes,
    ControlFlow,
    OopCore,
    TypingStatic,
    Asyncio,
    ModernLibs,
}

impl LessonId {
    pub const ALL: [LessonId; 6] = [
        LessonId::DataTypes,
        LessonId::ControlFlow,
        LessonId::OopCore,
        LessonId::TypingStatic,
        LessonId::Asyncio,
        LessonId::ModernLibs,
    ];

    pub fn number(self) -> u8 {
        match self {
            LessonId::DataTypes => 3,
            LessonId::ControlFlow => 5,
            LessonId::OopCore => 9,
            LessonId::TypingStatic => 12,
            LessonId::Asyncio => 13,
            LessonId::ModernLibs => 15,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            LessonId::DataTypes => "data-types",
            LessonId::ControlFlow => "control-flow",
            LessonId::OopCore => "oop-core",
            LessonId::TypingStatic => "typing-static",
            LessonId::Asyncio => "asyncio",
            LessonId::ModernLibs => "modern-libs",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LessonId::DataTypes => "Data Types & Immutability",
            LessonId::ControlFlow => "Control Flow",
            LessonId::OopCore => "OOP Core",
            LessonId::TypingStatic => "Typing & Static Analysis",
            LessonId::Asyncio => "Asynchronous Programming",
            LessonId::ModernLibs => "Modern Libraries",
        }
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {}", self.number(), self.title())
    }
}

impl FromStr for LessonId {
    type Err = LessonError;

    /// 接受 slug、兩位數編號或原目錄名稱，例如 `data-types`、`03`、`03_data_types`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        LessonId::ALL
            .into_iter()
            .find(|id| {
                let number = format!("{:02}", id.number());
                normalized == id.slug()
                    || normalized == number
                    || normalized == id.number().to_string()
                    || normalized == format!("{}-{}", number, id.slug())
            })
            .ok_or_else(|| LessonError::UnknownLesson {
                name: s.to_string(),
            })
    }
}

/// 單一課程要執行的階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Examples,
    Visuals,
    Both,
}

impl RunPhase {
    pub fn includes_examples(self) -> bool {
        matches!(self, RunPhase::Examples | RunPhase::Both)
    }

    pub fn includes_visuals(self) -> bool {
        matches!(self, RunPhase::Visuals | RunPhase::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// 進入終端替代畫面，按鍵後關閉
    #[default]
    Interactive,
    /// 直接把圖表印到 stdout
    Inline,
    /// 輸出圖表資料的 JSON
    Json,
}

impl DisplayMode {
    pub const NAMES: [&'static str; 3] = ["interactive", "inline", "json"];
}

impl FromStr for DisplayMode {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interactive" => Ok(DisplayMode::Interactive),
            "inline" => Ok(DisplayMode::Inline),
            "json" => Ok(DisplayMode::Json),
            other => Err(LessonError::InvalidConfigValueError {
                field: "display.mode".to_string(),
                value: other.to_string(),
                reason: format!("Valid values: {}", DisplayMode::NAMES.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: u64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// 以索引為 x 座標建立序列
    pub fn indexed(name: impl Into<String>, values: &[i64]) -> Self {
        Self {
            name: name.into(),
            points: values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v as f64))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartKind {
    Bar { bars: Vec<Bar> },
    Line { series: Vec<Series>, legend: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub kind: ChartKind,
}

impl ChartSpec {
    pub fn bar(title: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            title: title.into(),
            x_label: None,
            y_label: None,
            kind: ChartKind::Bar { bars },
        }
    }

    pub fn line(title: impl Into<String>, series: Vec<Series>) -> Self {
        let legend = series.len() > 1;
        Self {
            title: title.into(),
            x_label: None,
            y_label: None,
            kind: ChartKind::Line { series, legend },
        }
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// 所有折線點的 (min, max)，長條圖或空序列回傳 `None`
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let ChartKind::Line { series, .. } = &self.kind else {
            return None;
        };
        let mut points = series.iter().flat_map(|s| s.points.iter().copied());
        let (x0, y0) = points.next()?;
        let init = ([x0, x0], [y0, y0]);
        Some(points.fold(init, |([xmin, xmax], [ymin, ymax]), (x, y)| {
            ([xmin.min(x), xmax.max(x)], [ymin.min(y), ymax.max(y)])
        }))
    }
}
