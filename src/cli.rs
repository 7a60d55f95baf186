//! CLI интерфейс для sqllexer
//!
//! Разбор SQL файлов и стандартного ввода, статистика токенов, экранирование имён

use crate::common::{LexerConfig, OutputFormat};
use crate::lexer::{decode_name, encode_name, Lexer, TokenKind, TokenStream};
use anyhow::Context;
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Файл конфигурации, который ищется в текущей директории
const DEFAULT_CONFIG_FILE: &str = "sqllexer.toml";

/// sqllexer - лексический анализатор SQL без потерь
#[derive(Parser)]
#[command(name = "sqllexer")]
#[command(about = "sqllexer - lossless SQL tokenizer")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Разбить SQL на токены
    Tokenize {
        /// Входной файл; без него читается stdin
        file: Option<PathBuf>,

        /// Не выводить пробелы и комментарии
        #[arg(short, long)]
        skip_sundry: bool,

        /// Формат вывода (text, json)
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// Показать количество токенов каждого вида
    Stats {
        /// Входной файл; без него читается stdin
        file: Option<PathBuf>,

        /// Не учитывать пробелы и комментарии
        #[arg(short, long)]
        skip_sundry: bool,
    },

    /// Экранировать имя объекта
    Encode {
        /// Имя
        name: String,

        /// Использовать двойные кавычки вместо квадратных скобок
        #[arg(short, long)]
        quotes: bool,
    },

    /// Снять экранирование с имени объекта
    Decode {
        /// Экранированное имя
        name: String,
    },

    /// Управление конфигурацией
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Показать действующую конфигурацию
    Show,

    /// Записать конфигурацию по умолчанию в файл
    Init {
        /// Путь к файлу
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

impl Cli {
    /// Загружает конфигурацию: файл, затем переменные окружения, затем аргументы
    pub fn load_config(&self) -> anyhow::Result<LexerConfig> {
        let config = match &self.config {
            Some(path) => LexerConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    LexerConfig::from_file(default_path)?
                } else {
                    LexerConfig::default()
                }
            }
        };

        let mut config = config.apply_env()?;

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду, печатая результат в stdout
    pub fn execute(&self, config: LexerConfig) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute_to(config, &mut out)
    }

    /// Выполняет команду с выводом в `out`
    pub fn execute_to(&self, config: LexerConfig, out: &mut dyn Write) -> anyhow::Result<()> {
        match &self.command {
            Commands::Tokenize {
                file,
                skip_sundry,
                format,
            } => {
                let mut config = config;
                config.skip_sundry |= *skip_sundry;
                if let Some(format) = format {
                    config.output = format.parse()?;
                }
                let output = config.output;
                let stream = read_tokens(Lexer::new(config)?, file.as_deref())?;
                write_tokens(&stream, output, out)
            }
            Commands::Stats { file, skip_sundry } => {
                let mut config = config;
                config.skip_sundry |= *skip_sundry;
                let stream = read_tokens(Lexer::new(config)?, file.as_deref())?;
                write_stats(&stream, out)
            }
            Commands::Encode { name, quotes } => {
                writeln!(out, "{}", encode_name(name, *quotes))?;
                Ok(())
            }
            Commands::Decode { name } => {
                writeln!(out, "{}", decode_name(name))?;
                Ok(())
            }
            Commands::Config { action } => match action {
                ConfigCommands::Show => {
                    write!(out, "{}", toml::to_string_pretty(&config)?)?;
                    Ok(())
                }
                ConfigCommands::Init { path } => {
                    LexerConfig::default().to_file(path)?;
                    writeln!(out, "wrote {}", path.display())?;
                    Ok(())
                }
            },
        }
    }
}

/// Инициализирует логирование; `RUST_LOG`, если задан, важнее `level`
pub fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn read_tokens(lexer: Lexer, file: Option<&Path>) -> anyhow::Result<TokenStream> {
    let stream = match file {
        Some(path) => {
            let input =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            lexer.tokenize_reader(input)?
        }
        None => lexer.tokenize_reader(io::stdin().lock())?,
    };
    Ok(stream)
}

fn write_tokens(
    stream: &TokenStream,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for token in stream {
                writeln!(out, "{}\t{:?}", token.kind(), token.text())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, stream)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_stats(stream: &TokenStream, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut counts: IndexMap<TokenKind, usize> = IndexMap::new();
    let mut chars = 0;
    for token in stream {
        *counts.entry(token.kind()).or_insert(0) += 1;
        chars += token.text().chars().count();
    }

    for (kind, count) in &counts {
        writeln!(out, "{}\t{}", kind, count)?;
    }
    writeln!(out, "tokens\t{}", stream.len())?;
    writeln!(out, "chars\t{}", chars)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        cli.execute_to(LexerConfig::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sql_file(dir: &TempDir, sql: &str) -> String {
        let path = dir.path().join("input.sql");
        std::fs::write(&path, sql).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_cli_parsing() {
        let args = vec!["sqllexer", "--log-level", "debug", "tokenize", "-s"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(
            cli.command,
            Commands::Tokenize {
                skip_sundry: true,
                ..
            }
        ));
    }

    #[test]
    fn test_config_commands() {
        let args = vec!["sqllexer", "config", "init"];
        let cli = Cli::try_parse_from(args).unwrap();

        if let Commands::Config { action } = cli.command {
            match action {
                ConfigCommands::Init { path } => {
                    assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_FILE))
                }
                ConfigCommands::Show => panic!("Expected init command"),
            }
        } else {
            panic!("Expected config command");
        }
    }

    #[test]
    fn test_tokenize_text_output() {
        let dir = TempDir::new().unwrap();
        let path = sql_file(&dir, "SELECT 1");

        let output = run(&["sqllexer", "tokenize", path.as_str()]);
        assert_eq!(
            output,
            "Literal\t\"SELECT\"\nWhitespace\t\" \"\nLiteral\t\"1\"\n"
        );
    }

    #[test]
    fn test_tokenize_json_output() {
        let dir = TempDir::new().unwrap();
        let path = sql_file(&dir, "-- c\nx");

        let output = run(&["sqllexer", "tokenize", "--format", "json", path.as_str()]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["kind"], "LineComment");
        assert_eq!(value[0]["text"], "-- c\n");
        assert_eq!(value[1]["kind"], "Literal");
        assert_eq!(value[1]["text"], "x");
    }

    #[test]
    fn test_stats_output() {
        let dir = TempDir::new().unwrap();
        let path = sql_file(&dir, "a = b");

        let output = run(&["sqllexer", "stats", path.as_str()]);
        assert_eq!(
            output,
            "Literal\t2\nWhitespace\t2\nSymbol\t1\ntokens\t5\nchars\t5\n"
        );
    }

    #[test]
    fn test_encode_decode_commands() {
        assert_eq!(run(&["sqllexer", "encode", "A]B"]), "[A]]B]\n");
        assert_eq!(run(&["sqllexer", "encode", "--quotes", "A\"B"]), "\"A\"\"B\"\n");
        assert_eq!(run(&["sqllexer", "decode", "[A]]B]"]), "A]B\n");
    }

    #[test]
    fn test_missing_file_is_error() {
        let cli = Cli::try_parse_from(["sqllexer", "tokenize", "/nonexistent/input.sql"]).unwrap();
        let mut out = Vec::new();
        assert!(cli.execute_to(LexerConfig::default(), &mut out).is_err());
    }
}
