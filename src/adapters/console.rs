use crate::domain::ports::Console;

/// 直接輸出到 stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn line(&mut self, text: &str) {
        tracing::trace!(target: "lesson_kit::console", "{}", text);
        println!("{}", text);
    }
}

/// 收集輸出行，測試時使用
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn count_matching(&self, needle: &str) -> usize {
        self.lines.iter().filter(|line| line.contains(needle)).count()
    }
}

impl Console for BufferConsole {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_console_collects_lines_in_order() {
        let mut console = BufferConsole::new();
        console.line("first");
        console.line("second first");

        assert_eq!(console.lines(), ["first", "second first"]);
        assert_eq!(console.count_matching("first"), 2);
        assert!(!console.contains("third"));
    }
}
