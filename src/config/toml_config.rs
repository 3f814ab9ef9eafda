use crate::app::lessons::asyncio::WorkUnit;
use crate::domain::model::DisplayMode;
use crate::utils::error::{LessonError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonConfig {
    pub display: DisplayConfig,
    pub asyncio: AsyncioConfig,
    pub oop: OopConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    pub width: u16,
    pub height: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            width: 80,
            height: 24,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkUnitConfig {
    pub label: String,
    pub delay_ms: u64,
}

impl WorkUnitConfig {
    pub fn to_work_unit(&self) -> WorkUnit {
        WorkUnit::new(self.label.clone(), Duration::from_millis(self.delay_ms))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsyncioConfig {
    pub first: WorkUnitConfig,
    pub second: WorkUnitConfig,
}

impl Default for AsyncioConfig {
    fn default() -> Self {
        Self {
            first: WorkUnitConfig {
                label: "A".to_string(),
                delay_ms: 1000,
            },
            second: WorkUnitConfig {
                label: "B".to_string(),
                delay_ms: 2000,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OopConfig {
    /// Counter 的起始值
    pub start: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            format: "compact".to_string(),
        }
    }
}

impl LessonConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 有路徑就讀檔，否則使用預設值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading lesson config from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LessonError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LESSON_DELAY_MS})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LessonError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn first_unit(&self) -> WorkUnit {
        self.asyncio.first.to_work_unit()
    }

    pub fn second_unit(&self) -> WorkUnit {
        self.asyncio.second.to_work_unit()
    }
}

impl Validate for LessonConfig {
    fn validate(&self) -> Result<()> {
        validate_range("display.width", self.display.width, 20, 400)?;
        validate_range("display.height", self.display.height, 8, 200)?;

        for (field, unit) in [
            ("asyncio.first", &self.asyncio.first),
            ("asyncio.second", &self.asyncio.second),
        ] {
            validate_non_empty_string(&format!("{}.label", field), &unit.label)?;
            validate_range(&format!("{}.delay_ms", field), unit.delay_ms, 0, 60_000)?;
        }

        validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = LessonConfig::from_toml_str("").unwrap();

        assert_eq!(config.display.mode, DisplayMode::Interactive);
        assert_eq!(config.display.width, 80);
        assert_eq!(config.first_unit().delay, Duration::from_secs(1));
        assert_eq!(config.second_unit().label, "B");
        assert_eq!(config.oop.start, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[display]
mode = "inline"

[asyncio.first]
label = "fetch"
delay_ms = 250

[oop]
start = 5
"#;

        let config = LessonConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.display.mode, DisplayMode::Inline);
        assert_eq!(config.display.height, 24);
        assert_eq!(config.first_unit(), WorkUnit::new("fetch", Duration::from_millis(250)));
        assert_eq!(config.second_unit().delay, Duration::from_secs(2));
        assert_eq!(config.oop.start, 5);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LESSON_KIT_TEST_LABEL", "from-env");

        let toml_content = r#"
[asyncio.second]
label = "${LESSON_KIT_TEST_LABEL}"
delay_ms = 10
"#;

        let config = LessonConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.asyncio.second.label, "from-env");

        std::env::remove_var("LESSON_KIT_TEST_LABEL");
    }

    #[test]
    fn test_unknown_display_mode_is_parse_error() {
        let result = LessonConfig::from_toml_str("[display]\nmode = \"window\"\n");
        assert!(matches!(result, Err(LessonError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[display]
width = 5

[logging]
format = "xml"
"#;
        let config = LessonConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(LessonError::InvalidConfigValueError { ref field, .. }) if field == "display.width"
        ));

        let mut config = LessonConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());

        let mut config = LessonConfig::default();
        config.asyncio.first.label = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[logging]\nverbose = true\nformat = \"json\"\n")
            .unwrap();

        let config = LessonConfig::load(Some(temp_file.path())).unwrap();
        assert!(config.logging.verbose);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = LessonConfig::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(LessonError::IoError(_))));
    }
}
