//! Буферизованный источник символов с возвратом (push-back)
//!
//! Сканеры читают символы пакетами, а непотреблённый хвост последнего пакета
//! возвращают через [`CharSource::undo`]. Возвращённые символы выдаются
//! раньше любых новых символов входа, в исходном порядке.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Read};
use std::str::Chars;

/// Поставщик символов для [`CharSource`]
pub trait CharInput {
    /// Следующий символ или `None` в конце входа
    fn next_char(&mut self) -> io::Result<Option<char>>;
}

/// Вход из строки
pub struct StrInput<'a> {
    chars: Chars<'a>,
}

impl<'a> StrInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { chars: text.chars() }
    }
}

impl CharInput for StrInput<'_> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// Вход из байтового потока, декодируемого как UTF-8 по мере чтения
pub struct ReadInput<R> {
    reader: R,
}

impl<R: BufRead> ReadInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            let byte = match buf.first() {
                Some(&byte) => byte,
                None => return Ok(None),
            };
            self.reader.consume(1);
            return Ok(Some(byte));
        }
    }
}

impl<R: BufRead> CharInput for ReadInput<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        let first = match self.next_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };

        let width = utf8_width(first);
        if width == 0 {
            return Err(invalid_utf8(format!("unexpected byte 0x{:02x}", first)));
        }

        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            *slot = self
                .next_byte()?
                .ok_or_else(|| invalid_utf8("truncated sequence at end of stream"))?;
        }

        let decoded = std::str::from_utf8(&bytes[..width])
            .map_err(|e| invalid_utf8(e.to_string()))?;
        Ok(decoded.chars().next())
    }
}

/// Длина UTF-8 последовательности по ведущему байту; 0 для недопустимого байта
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn invalid_utf8(message: impl Into<String>) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid UTF-8: {}", message.into()),
    )
}

/// Источник символов с очередью возврата
pub struct CharSource<I> {
    input: I,
    /// Возвращённые символы, выдаются первыми
    pushed_back: VecDeque<char>,
    exhausted: bool,
}

impl<'a> CharSource<StrInput<'a>> {
    pub fn for_str(text: &'a str) -> Self {
        Self::new(StrInput::new(text))
    }
}

impl<R: Read> CharSource<ReadInput<BufReader<R>>> {
    /// Оборачивает поток; поток принадлежит вызывающему и освобождается вместе с источником
    pub fn for_reader(reader: R) -> Self {
        Self::new(ReadInput::new(BufReader::new(reader)))
    }
}

impl<I: CharInput> CharSource<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            pushed_back: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Выдает до `want` символов в `buf` (не больше его длины).
    ///
    /// Сначала опустошается очередь возврата, затем читается вход.
    /// Результат меньше запрошенного только в конце входа, 0 означает исчерпание.
    pub fn fill(&mut self, buf: &mut [char], want: usize) -> io::Result<usize> {
        let want = want.min(buf.len());
        let mut count = 0;

        while count < want {
            if let Some(ch) = self.pushed_back.pop_front() {
                buf[count] = ch;
                count += 1;
                continue;
            }

            if self.exhausted {
                break;
            }

            match self.input.next_char()? {
                Some(ch) => {
                    buf[count] = ch;
                    count += 1;
                }
                None => self.exhausted = true,
            }
        }

        Ok(count)
    }

    /// Заполняет буфер целиком (или до конца входа)
    pub fn fill_remaining(&mut self, buf: &mut [char]) -> io::Result<usize> {
        let len = buf.len();
        self.fill(buf, len)
    }

    /// Возвращает серию символов в начало потока.
    ///
    /// Следующее чтение выдаст ровно эту серию в том же порядке, до любых
    /// символов, возвращённых ранее, и до нового входа.
    pub fn undo(&mut self, chars: &[char]) {
        for &ch in chars.iter().rev() {
            self.pushed_back.push_front(ch);
        }
    }

    /// Количество символов в очереди возврата
    pub fn pending(&self) -> usize {
        self.pushed_back.len()
    }

    /// Вход исчерпан и очередь возврата пуста
    pub fn is_exhausted(&self) -> bool {
        self.exhausted && self.pushed_back.is_empty()
    }
}
