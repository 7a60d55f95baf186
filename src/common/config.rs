//! Конфигурация для sqllexer
//!
//! Предоставляет настройки лексера, формата вывода и логирования

use crate::common::constants::{DEFAULT_BATCH_SIZE, ENV_PREFIX, MAX_BATCH_SIZE};
use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Формат вывода токенов в CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Один токен на строку
    #[default]
    Text,
    /// JSON массив
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::configuration(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Основная конфигурация лексера
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Сколько символов сканер запрашивает у источника за один раз
    pub batch_size: usize,
    /// Не выдавать пробелы и комментарии
    pub skip_sundry: bool,
    /// Формат вывода
    pub output: OutputFormat,
    /// Логирование
    pub logging: LoggingConfig,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            skip_sundry: false,
            output: OutputFormat::Text,
            logging: LoggingConfig::default(),
        }
    }
}

impl LexerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LexerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения поверх значений по умолчанию
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    /// Применяет переменные окружения `SQLLEXER_*` к текущей конфигурации
    pub fn apply_env(mut self) -> Result<Self> {
        if let Some(value) = env_var("BATCH_SIZE") {
            self.batch_size = value.parse().map_err(|_| {
                Error::configuration(format!("invalid {}BATCH_SIZE '{}'", ENV_PREFIX, value))
            })?;
        }

        if let Some(value) = env_var("SKIP_SUNDRY") {
            self.skip_sundry = parse_flag(&value).ok_or_else(|| {
                Error::configuration(format!("invalid {}SKIP_SUNDRY '{}'", ENV_PREFIX, value))
            })?;
        }

        if let Some(value) = env_var("OUTPUT") {
            self.output = value.parse()?;
        }

        if let Some(value) = env_var("LOG_LEVEL") {
            self.logging.level = value;
        }

        self.validate()?;
        Ok(self)
    }

    /// Проверяет корректность значений
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::configuration("batch_size must be at least 1"));
        }
        if self.batch_size > MAX_BATCH_SIZE {
            return Err(Error::configuration(format!(
                "batch_size must not exceed {}",
                MAX_BATCH_SIZE
            )));
        }
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(Error::configuration(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(format!("{}{}", ENV_PREFIX, name)).ok()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
