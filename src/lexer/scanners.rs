//! Сканеры токенов
//!
//! Каждый сканер получает уже прочитанный предпросмотр, возвращает в источник
//! то, что не относится к токену, дочитывает токен пакетами и возвращает
//! символы, прочитанные за его концом. В режиме отбрасывания источник
//! продвигается так же, но текст не собирается.

use crate::lexer::char_source::{CharInput, CharSource};
use crate::lexer::classifier::{is_compound_operator, is_literal_terminator};
use crate::lexer::token::TokenKind;
use std::io;

/// Решение сканера по очередному символу
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Символ принадлежит токену, читаем дальше
    Continue,
    /// Токен закончился перед символом
    StopBefore,
    /// Символ последний в токене
    StopAfter,
}

/// Накопитель текста токена; в режиме отбрасывания ничего не хранит
struct TextSink(Option<String>);

impl TextSink {
    fn new(discard: bool) -> Self {
        if discard {
            Self(None)
        } else {
            Self(Some(String::new()))
        }
    }

    fn push(&mut self, ch: char) {
        if let Some(text) = self.0.as_mut() {
            text.push(ch);
        }
    }

    fn extend(&mut self, chars: &[char]) {
        if let Some(text) = self.0.as_mut() {
            text.extend(chars);
        }
    }

    fn finish(self) -> Option<String> {
        self.0
    }
}

/// Набор сканеров с общим буфером пакетного чтения
pub struct Scanners {
    batch: Vec<char>,
}

impl Scanners {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch: vec!['\0'; batch_size.max(1)],
        }
    }

    /// Сканирует один токен вида `kind`.
    ///
    /// Возвращает `None` в режиме отбрасывания; источник в любом случае
    /// оказывается сразу за токеном.
    pub fn scan<I: CharInput>(
        &mut self,
        kind: TokenKind,
        source: &mut CharSource<I>,
        lookahead: &[char],
        discard: bool,
    ) -> io::Result<Option<String>> {
        debug_assert!(!lookahead.is_empty());
        let mut sink = TextSink::new(discard);

        match kind {
            TokenKind::Whitespace => self.scan_whitespace(source, lookahead, &mut sink)?,
            TokenKind::LineComment => self.scan_line_comment(source, lookahead, &mut sink)?,
            TokenKind::BlockComment => self.scan_block_comment(source, lookahead, &mut sink)?,
            TokenKind::SquareString => self.scan_square_string(source, lookahead, &mut sink)?,
            TokenKind::QuotedString => self.scan_quoted_string(source, lookahead, &mut sink)?,
            TokenKind::Literal => self.scan_literal(source, lookahead, &mut sink)?,
            TokenKind::Symbol => scan_symbol(source, lookahead, &mut sink),
        }

        Ok(sink.finish())
    }

    fn scan_whitespace<I: CharInput>(
        &mut self,
        source: &mut CharSource<I>,
        lookahead: &[char],
        sink: &mut TextSink,
    ) -> io::Result<()> {
        // Одиночный пробел перед значимым символом
        if let [ws, next] = lookahead {
            if ws.is_whitespace() && !next.is_whitespace() {
                sink.push(*ws);
                source.undo(&lookahead[1..]);
                return Ok(());
            }
        }

        source.undo(lookahead);
        self.consume_until(source, sink, |ch| {
            if ch.is_whitespace() {
                Step::Continue
            } else {
                Step::StopBefore
            }
        })
    }

    fn scan_line_comment<I: CharInput>(
        &mut self,
        source: &mut CharSource<I>,
        lookahead: &[char],
        sink: &mut TextSink,
    ) -> io::Result<()> {
        let (opener, rest) = split_opener(lookahead, 2);
        sink.extend(opener);
        source.undo(rest);

        // CRLF тоже заканчивается на '\n'
        self.consume_until(source, sink, |ch| {
            if ch == '\n' {
                Step::StopAfter
            } else {
                Step::Continue
            }
        })
    }

    fn scan_block_comment<I: CharInput>(
        &mut self,
        source: &mut CharSource<I>,
        lookahead: &[char],
        sink: &mut TextSink,
    ) -> io::Result<()> {
        let (opener, rest) = split_opener(lookahead, 2);
        sink.extend(opener);
        source.undo(rest);

        let mut after_star = false;
        self.consume_until(source, sink, |ch| {
            if after_star && ch == '/' {
                return Step::StopAfter;
            }
            after_star = ch == '*';
            Step::Continue
        })
    }

    fn scan_square_string<I: CharInput>(
        &mut self,
        source: &mut CharSource<I>,
        lookahead: &[char],
        sink: &mut TextSink,
    ) -> io::Result<()> {
        let (opener, rest) = split_opener(lookahead, 1);
        sink.extend(opener);
        source.undo(rest);
        self.consume_delimited(source, sink, ']')
    }

    fn scan_quoted_string<I: CharInput>(
        &mut self,
        source: &mut CharSource<I>,
        lookahead: &[char],
        sink: &mut TextSink,
    ) -> io::Result<()> {
        let (opener, rest, delimiter) = match lookahead {
            ['N', '\'', ..] => (&lookahead[..2], &lookahead[2..], '\''),
            [quote, ..] => (&lookahead[..1], &lookahead[1..], *quote),
            [] => return Ok(()),
        };
        sink.extend(opener);
        source.undo(rest);
        self.consume_delimited(source, sink, delimiter)
    }

    fn scan_literal<I: CharInput>(
        &mut self,
        source: &mut CharSource<I>,
        lookahead: &[char],
        sink: &mut TextSink,
    ) -> io::Result<()> {
        // Первый символ входит в литерал всегда, даже если это '!' или ':'
        let (first, rest) = split_opener(lookahead, 1);
        sink.extend(first);
        source.undo(rest);

        self.consume_until(source, sink, |ch| {
            if is_literal_terminator(ch) {
                Step::StopBefore
            } else {
                Step::Continue
            }
        })
    }

    /// Читает до неэкранированного `close`; удвоенный `close` экранирован.
    ///
    /// Решение по найденному `close` откладывается до следующего символа,
    /// состояние переживает границу пакетов.
    fn consume_delimited<I: CharInput>(
        &mut self,
        source: &mut CharSource<I>,
        sink: &mut TextSink,
        close: char,
    ) -> io::Result<()> {
        let mut closing = false;
        self.consume_until(source, sink, |ch| {
            if closing {
                if ch == close {
                    closing = false;
                    Step::Continue
                } else {
                    Step::StopBefore
                }
            } else {
                closing = ch == close;
                Step::Continue
            }
        })
    }

    /// Общий цикл пакетного чтения. Конец входа завершает токен без ошибки.
    fn consume_until<I, F>(
        &mut self,
        source: &mut CharSource<I>,
        sink: &mut TextSink,
        mut step: F,
    ) -> io::Result<()>
    where
        I: CharInput,
        F: FnMut(char) -> Step,
    {
        loop {
            let count = source.fill_remaining(&mut self.batch)?;
            if count == 0 {
                return Ok(());
            }

            for index in 0..count {
                match step(self.batch[index]) {
                    Step::Continue => {}
                    Step::StopBefore => {
                        sink.extend(&self.batch[..index]);
                        source.undo(&self.batch[index..count]);
                        return Ok(());
                    }
                    Step::StopAfter => {
                        sink.extend(&self.batch[..=index]);
                        source.undo(&self.batch[index + 1..count]);
                        return Ok(());
                    }
                }
            }

            sink.extend(&self.batch[..count]);
        }
    }
}

fn scan_symbol<I: CharInput>(source: &mut CharSource<I>, lookahead: &[char], sink: &mut TextSink) {
    let width = match lookahead {
        [first, second, ..] if is_compound_operator(*first, *second) => 2,
        _ => 1,
    };
    let (symbol, rest) = split_opener(lookahead, width);
    sink.extend(symbol);
    source.undo(rest);
}

fn split_opener(lookahead: &[char], width: usize) -> (&[char], &[char]) {
    lookahead.split_at(width.min(lookahead.len()))
}
