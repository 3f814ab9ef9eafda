use crate::app::lessons::{
    AsyncioLesson, ControlFlowLesson, DataTypesLesson, ModernLibsLesson, OopCoreLesson,
    TypingStaticLesson,
};
use crate::config::LessonConfig;
use crate::core::{Lesson, LessonId};
use crate::utils::error::{LessonError, Result};

/// 依課程編號排序的課程清單
#[derive(Default)]
pub struct LessonCatalog {
    lessons: Vec<Box<dyn Lesson>>, // 使用 trait object 支持多態
}

impl LessonCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 依配置建立所有內建課程
    pub fn from_config(config: &LessonConfig) -> Self {
        let mut catalog = Self::new();
        catalog.add_lesson(Box::new(DataTypesLesson::new()));
        catalog.add_lesson(Box::new(ControlFlowLesson::new()));
        catalog.add_lesson(Box::new(OopCoreLesson::new(config.oop.start)));
        catalog.add_lesson(Box::new(TypingStaticLesson::new()));
        catalog.add_lesson(Box::new(AsyncioLesson::new(
            config.first_unit(),
            config.second_unit(),
        )));
        catalog.add_lesson(Box::new(ModernLibsLesson::new()));
        catalog
    }

    /// 同一編號的課程會被取代
    pub fn add_lesson(&mut self, lesson: Box<dyn Lesson>) {
        let id = lesson.id();
        self.lessons.retain(|existing| existing.id() != id);
        self.lessons.push(lesson);
        self.lessons.sort_by_key(|lesson| lesson.id());
    }

    pub fn get(&self, id: LessonId) -> Result<&dyn Lesson> {
        self.lessons
            .iter()
            .find(|lesson| lesson.id() == id)
            .map(|lesson| &**lesson)
            .ok_or_else(|| LessonError::UnknownLesson {
                name: id.slug().to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Lesson> {
        self.lessons.iter().map(|lesson| &**lesson)
    }

    pub fn ids(&self) -> Vec<LessonId> {
        self.iter().map(|lesson| lesson.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}
