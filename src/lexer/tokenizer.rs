//! Драйвер лексера: предпросмотр, классификация, сканирование, сбор токенов

use crate::common::constants::LOOKAHEAD;
use crate::common::{Error, Result};
use crate::lexer::char_source::{CharInput, CharSource};
use crate::lexer::classifier::classify;
use crate::lexer::scanners::Scanners;
use crate::lexer::token::{Token, TokenStream};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Done,
}

/// Потоковый лексер: выдает токены по одному
pub struct Tokenizer<I> {
    source: CharSource<I>,
    scanners: Scanners,
    skip_sundry: bool,
    state: State,
    emitted: usize,
}

impl<I: CharInput> Tokenizer<I> {
    pub fn new(source: CharSource<I>, batch_size: usize, skip_sundry: bool) -> Self {
        Self {
            source,
            scanners: Scanners::new(batch_size),
            skip_sundry,
            state: State::Scanning,
            emitted: 0,
        }
    }

    /// Следующий токен или `None` после конца входа
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let mut lookahead = ['\0'; LOOKAHEAD];

        while self.state == State::Scanning {
            let count = match self.source.fill(&mut lookahead, LOOKAHEAD) {
                Ok(count) => count,
                Err(err) => {
                    self.state = State::Done;
                    return Err(Error::Io(err));
                }
            };
            if count == 0 {
                self.state = State::Done;
                log::debug!("tokenizer done, {} tokens emitted", self.emitted);
                break;
            }

            let peeked = &lookahead[..count];
            let kind = classify(peeked);
            let discard = self.skip_sundry && kind.is_sundry();

            let text = match self.scanners.scan(kind, &mut self.source, peeked, discard) {
                Ok(text) => text,
                Err(err) => {
                    self.state = State::Done;
                    return Err(Error::Io(err));
                }
            };

            if let Some(text) = text {
                if text.is_empty() {
                    self.state = State::Done;
                    return Err(Error::internal(format!("{} scanner consumed no input", kind)));
                }
                log::trace!("{} {:?}", kind, text);
                self.emitted += 1;
                return Ok(Some(Token::new(kind, text)));
            }
        }

        Ok(None)
    }

    /// Читает вход до конца и собирает все токены
    pub fn collect_stream(mut self) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(TokenStream::from_vec(tokens))
    }
}

impl<I: CharInput> Iterator for Tokenizer<I> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<I: CharInput> std::iter::FusedIterator for Tokenizer<I> {}
