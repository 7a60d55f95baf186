//! Лексический анализатор SQL для sqllexer
//!
//! Преобразует SQL текст или символьный поток в последовательность токенов
//! без потерь: склейка текстов токенов дает исходный текст. Незакрытые
//! строки, комментарии и скобки не являются ошибкой и читаются до конца входа.

pub mod char_source;
pub mod classifier;
pub mod encode;
pub mod scanners;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

pub use char_source::{CharInput, CharSource, ReadInput, StrInput};
pub use encode::{decode_name, encode_name, encode_name_opt, quote_string};
pub use token::{Token, TokenKind, TokenStream};
pub use tokenizer::Tokenizer;

use crate::common::{Error, LexerConfig, Result};
use std::io::{BufReader, Read};

/// Настроенная точка входа лексера
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    config: LexerConfig,
}

impl Lexer {
    pub fn new(config: LexerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Потоковый лексер поверх строки
    pub fn tokens<'a>(&self, text: &'a str) -> Tokenizer<StrInput<'a>> {
        Tokenizer::new(
            CharSource::for_str(text),
            self.config.batch_size,
            self.config.skip_sundry,
        )
    }

    /// Потоковый лексер поверх байтового потока в UTF-8
    pub fn reader_tokens<R: Read>(&self, reader: R) -> Tokenizer<ReadInput<BufReader<R>>> {
        Tokenizer::new(
            CharSource::for_reader(reader),
            self.config.batch_size,
            self.config.skip_sundry,
        )
    }

    /// Разбирает строку целиком. Ошибок ввода-вывода здесь быть не может,
    /// но сигнатура общая с потоковым вариантом.
    pub fn tokenize_str(&self, text: &str) -> Result<TokenStream> {
        let stream = self.tokens(text).collect_stream()?;
        log::debug!(
            "tokenized {} chars into {} tokens",
            text.chars().count(),
            stream.len()
        );
        Ok(stream)
    }

    /// Читает поток до исчерпания и разбирает его
    pub fn tokenize_reader<R: Read>(&self, reader: R) -> Result<TokenStream> {
        let stream = self.reader_tokens(reader).collect_stream()?;
        log::debug!("tokenized stream into {} tokens", stream.len());
        Ok(stream)
    }
}

/// Разбирает текст; отсутствующий текст является ошибкой, пустой дает пустой результат
pub fn tokenize(text: Option<&str>, skip_sundry: bool) -> Result<TokenStream> {
    let text = text.ok_or_else(|| Error::invalid_argument("text is absent"))?;
    lexer_with(skip_sundry).tokenize_str(text)
}

/// Разбирает поток до исчерпания; отсутствующий поток является ошибкой
pub fn tokenize_reader<R: Read>(reader: Option<R>, skip_sundry: bool) -> Result<TokenStream> {
    let reader = reader.ok_or_else(|| Error::invalid_argument("reader is absent"))?;
    lexer_with(skip_sundry).tokenize_reader(reader)
}

fn lexer_with(skip_sundry: bool) -> Lexer {
    Lexer {
        config: LexerConfig {
            skip_sundry,
            ..LexerConfig::default()
        },
    }
}
