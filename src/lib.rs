//! sqllexer - лексический анализатор SQL без потерь
//!
//! Разбивает SQL текст или символьный поток на типизированные токены, сохраняя
//! каждый символ входа, включая ограничители и удвоенные escape-последовательности.
//! Поверх токенов нет парсера: некорректный ввод допускается, а не отвергается.

pub mod cli;
pub mod common;
pub mod lexer;

pub use common::error::{Error, Result};
pub use common::{LexerConfig, OutputFormat};
pub use lexer::{
    decode_name, encode_name, encode_name_opt, quote_string, tokenize, tokenize_reader, Lexer,
    Token, TokenKind, TokenStream, Tokenizer,
};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
