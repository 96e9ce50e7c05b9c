//! # accumulator_rs
//!
//! Интерактивный консольный калькулятор с накоплением результата.
//!
//! Поддерживает:
//! - Числа с плавающей точкой (f64)
//! - Бинарные операции: `+`, `-`, `*`, `/`
//! - Выход по команде `q`
//!
//! Программа не разбирает выражения: она ведёт один аккумулятор и
//! применяет к нему операции строго по очереди, без приоритетов.
//! Ввод — поток токенов, разделённых пробельными символами; границы
//! строк значения не имеют.
//!
//! # Пример использования
//!
//! ```
//! use std::io::Cursor;
//! use accumulator_rs::Session;
//!
//! let mut output = Vec::new();
//! Session::new(Cursor::new("10 + 5 q"), &mut output).run().unwrap();
//!
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("Current result: 15"));
//! assert!(text.contains("Final result: 15"));
//! ```

pub mod operation;
pub mod token;

use std::io::{self, BufRead, Write};

use crate::operation::Command;
use crate::token::{parse_number, TokenReader};

/// Интерактивная сессия калькулятора поверх произвольных потоков.
///
/// Читает токены из `input`, пишет подсказки и результаты в `output`.
/// В [`run`] подставляются stdin/stdout процесса; тесты используют
/// [`io::Cursor`] и `Vec<u8>`.
pub struct Session<R, W> {
    tokens: TokenReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Создаёт сессию поверх заданных потоков.
    pub fn new(input: R, output: W) -> Self {
        Self {
            tokens: TokenReader::new(input),
            output,
        }
    }

    /// Запускает цикл калькулятора до команды `q` или конца ввода.
    ///
    /// Ошибки пользователя (незнакомый оператор, некорректное число,
    /// деление на ноль) сообщаются и не прерывают цикл; аккумулятор при
    /// этом не меняется.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`io::Error`] только при сбое самих потоков.
    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "Running Calculator (Rust)")?;

        let Some(mut acc) = self.read_number("Enter an initial value: ")? else {
            // Ввод закончился раньше, чем появилось первое число.
            writeln!(self.output, "Goodbye!")?;
            return Ok(());
        };

        loop {
            self.prompt("\nEnter operation (+, -, *, / or q to quit): ")?;
            let Some(token) = self.tokens.next_token()? else {
                break;
            };

            let op = match Command::parse(&token) {
                Some(Command::Quit) => break,
                Some(Command::Op(op)) => op,
                None => {
                    writeln!(self.output, "Invalid operation.")?;
                    continue;
                }
            };

            let Some(operand) = self.read_number("Enter next value: ")? else {
                break;
            };

            match op.apply(acc, operand) {
                Ok(value) => {
                    acc = value;
                    writeln!(self.output, "Current result: {value}")?;
                }
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }

        writeln!(self.output, "Final result: {acc}")?;
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Читает число, повторяя запрос до корректного ввода.
    /// `None` — конец потока.
    fn read_number(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            self.prompt(prompt)?;
            let Some(token) = self.tokens.next_token()? else {
                return Ok(None);
            };
            match parse_number(&token) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }
}

/// Запускает интерактивный калькулятор на stdin/stdout процесса.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run() -> io::Result<()> {
    Session::new(io::stdin().lock(), io::stdout().lock()).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transcript(input: &str) -> String {
        let mut output = Vec::new();
        Session::new(Cursor::new(input), &mut output)
            .run()
            .expect("сбой ввода-вывода в тесте");
        String::from_utf8(output).expect("вывод не в UTF-8")
    }

    #[test]
    fn exact_transcript() {
        let expected = "Running Calculator (Rust)\n\
            Enter an initial value: \
            \nEnter operation (+, -, *, / or q to quit): \
            Enter next value: \
            Current result: 15\n\
            \nEnter operation (+, -, *, / or q to quit): \
            Final result: 15\n\
            Goodbye!\n";
        assert_eq!(transcript("10\n+ 5\nq\n"), expected);
    }

    #[test]
    fn eof_before_initial_value() {
        let text = transcript("");
        assert!(text.contains("Goodbye!"));
        assert!(!text.contains("Final result"));
    }

    #[test]
    fn eof_after_initial_value_acts_like_quit() {
        let text = transcript("42");
        assert!(text.contains("Final result: 42"));
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[test]
    fn eof_instead_of_operand_acts_like_quit() {
        let text = transcript("42 +");
        assert!(text.contains("Final result: 42"));
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[test]
    fn invalid_number_is_reported_and_reread() {
        let text = transcript("foo 10 + bar 5 q");
        assert!(text.contains("Error: invalid number 'foo'"));
        assert!(text.contains("Error: invalid number 'bar'"));
        assert!(text.contains("Final result: 15"));
    }

    struct BrokenReader;

    impl io::Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "обрыв потока"))
        }
    }

    #[test]
    fn io_error_propagates() {
        let mut output = Vec::new();
        let result = Session::new(io::BufReader::new(BrokenReader), &mut output).run();
        assert!(result.is_err());
    }
}
