//! Чтение токенов из входного потока.
//!
//! Ввод — это поток токенов, разделённых пробельными символами, а не
//! построчный протокол: `10 + 5 q` в одной строке и те же токены на
//! отдельных строках эквивалентны.
//!
//! # Пример
//!
//! ```
//! use std::io::Cursor;
//! use accumulator_rs::token::TokenReader;
//!
//! let mut reader = TokenReader::new(Cursor::new("10  +\n5"));
//! assert_eq!(reader.next_token().unwrap().as_deref(), Some("10"));
//! assert_eq!(reader.next_token().unwrap().as_deref(), Some("+"));
//! assert_eq!(reader.next_token().unwrap().as_deref(), Some("5"));
//! assert_eq!(reader.next_token().unwrap(), None);
//! ```

use std::io::{self, BufRead};
use std::num::ParseFloatError;

use thiserror::Error;

/// Ошибка разбора числового токена.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number '{token}'")]
pub struct NumberError {
    /// Токен, который не удалось разобрать как число.
    pub token: String,
    /// Исходная ошибка разбора.
    pub source: ParseFloatError,
}

/// Разбирает токен как число с плавающей точкой.
///
/// # Ошибки
///
/// Возвращает [`NumberError`], если токен не является числом.
///
/// # Примеры
///
/// ```
/// use accumulator_rs::token::parse_number;
///
/// assert_eq!(parse_number("2.5").unwrap(), 2.5);
/// assert!(parse_number("abc").is_err());
/// ```
pub fn parse_number(token: &str) -> Result<f64, NumberError> {
    token.parse().map_err(|source| NumberError {
        token: token.to_string(),
        source,
    })
}

/// Читатель токенов, разделённых пробельными символами.
///
/// Работает поверх любого [`BufRead`]; границы строк значения не имеют.
pub struct TokenReader<R> {
    input: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Создаёт читатель поверх входного потока.
    pub const fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            pos: 0,
        }
    }

    /// Возвращает следующий токен или `None` в конце потока.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`io::Error`] при сбое чтения.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            if trimmed.is_empty() {
                self.line.clear();
                self.pos = 0;
                if self.input.read_line(&mut self.line)? == 0 {
                    return Ok(None);
                }
                continue;
            }

            let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
            let token = trimmed[..len].to_string();
            self.pos += len;
            return Ok(Some(token));
        }
    }
}
