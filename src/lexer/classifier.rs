//! Классификация следующего токена по одному-двум символам предпросмотра
//!
//! Правила проверяются строго по порядку, первое совпавшее побеждает.

use crate::lexer::token::TokenKind;
use std::collections::HashSet;

lazy_static::lazy_static! {
    /// Составные операторы из двух символов
    static ref COMPOUND_OPERATORS: HashSet<(char, char)> = [
        ('+', '='),
        ('-', '='),
        ('*', '='),
        ('/', '='),
        ('%', '='),
        ('&', '='),
        ('|', '='),
        ('^', '='),
        ('>', '='),
        ('<', '='),
        ('<', '>'),
        ('!', '<'),
        ('!', '='),
        ('!', '>'),
        (':', ':'),
    ]
    .into_iter()
    .collect();
}

/// Одиночные символы-операторы
const SYMBOL_CHARS: &[char] = &[
    '+', '*', '%', '&', '|', '^', '~', '>', '<', '=', ',', '.', ';', '(', ')',
];

/// Символы, на которых обрывается литерал
const LITERAL_TERMINATORS: &[char] = &[
    '+', '-', '*', '/', '%', '&', '|', '^', '~', '>', '<', '!', '=', '\'', '"', ',', '.', ';',
    ':', '(', ')',
];

/// Пара символов является составным оператором
pub fn is_compound_operator(first: char, second: char) -> bool {
    COMPOUND_OPERATORS.contains(&(first, second))
}

pub fn is_symbol_char(ch: char) -> bool {
    SYMBOL_CHARS.contains(&ch)
}

pub fn is_literal_terminator(ch: char) -> bool {
    ch.is_whitespace() || LITERAL_TERMINATORS.contains(&ch)
}

/// Определяет вид токена по предпросмотру.
///
/// `lookahead` содержит один или два символа; пустой срез классифицируется
/// как литерал, но драйвер никогда его не передаёт.
pub fn classify(lookahead: &[char]) -> TokenKind {
    let (first, second) = match lookahead {
        [] => return TokenKind::Literal,
        [first] => (*first, None),
        [first, second, ..] => (*first, Some(*second)),
    };

    match (first, second) {
        ('-', Some('-')) => TokenKind::LineComment,
        ('-', _) => TokenKind::Symbol,
        ('/', Some('*')) => TokenKind::BlockComment,
        ('/', _) => TokenKind::Symbol,
        ('N', Some('\'')) => TokenKind::QuotedString,
        ('N', _) => TokenKind::Literal,
        ('"' | '\'', _) => TokenKind::QuotedString,
        ('[', _) => TokenKind::SquareString,
        (ch, _) if is_symbol_char(ch) => TokenKind::Symbol,
        (ch, Some(next)) if is_compound_operator(ch, next) => TokenKind::Symbol,
        (ch, _) if ch.is_whitespace() => TokenKind::Whitespace,
        _ => TokenKind::Literal,
    }
}
