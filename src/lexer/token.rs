//! Токены лексера sqllexer
//!
//! Токен хранит вид и точный фрагмент исходного текста, включая ограничители
//! и удвоенные escape-последовательности. Склейка текстов всех токенов
//! восстанавливает исходный текст без потерь.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Вид токена
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Whitespace,
    LineComment,
    BlockComment,
    Literal,
    Symbol,
    SquareString,
    QuotedString,
}

impl TokenKind {
    /// Все виды в порядке объявления
    pub const ALL: [TokenKind; 7] = [
        TokenKind::Whitespace,
        TokenKind::LineComment,
        TokenKind::BlockComment,
        TokenKind::Literal,
        TokenKind::Symbol,
        TokenKind::SquareString,
        TokenKind::QuotedString,
    ];

    /// Пробелы и комментарии не несут смысла и могут быть пропущены
    pub fn is_sundry(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "Whitespace",
            TokenKind::LineComment => "LineComment",
            TokenKind::BlockComment => "BlockComment",
            TokenKind::Literal => "Literal",
            TokenKind::Symbol => "Symbol",
            TokenKind::SquareString => "SquareString",
            TokenKind::QuotedString => "QuotedString",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Неизменяемый токен: вид и исходный текст
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Исходный текст токена без каких-либо преобразований
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn is_sundry(&self) -> bool {
        self.kind.is_sundry()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

/// Упорядоченная последовательность токенов в порядке исходного текста
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn from_vec(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    /// Склеивает тексты всех токенов
    pub fn to_source(&self) -> String {
        let capacity = self.tokens.iter().map(|t| t.text.len()).sum();
        let mut source = String::with_capacity(capacity);
        for token in &self.tokens {
            source.push_str(&token.text);
        }
        source
    }

    /// Токены, не являющиеся пробелами или комментариями
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_sundry())
    }
}

impl Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
