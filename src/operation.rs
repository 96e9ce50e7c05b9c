//! Арифметические операции над аккумулятором.
//!
//! Каждая операция применяется к паре (аккумулятор, операнд) и возвращает
//! новое значение аккумулятора. Деление — вещественное.
//!
//! # Примеры
//!
//! ```
//! use accumulator_rs::operation::{BinaryOp, EvalError};
//!
//! assert_eq!(BinaryOp::Add.apply(10.0, 5.0), Ok(15.0));
//! assert_eq!(BinaryOp::Div.apply(7.0, 2.0), Ok(3.5));
//! assert_eq!(BinaryOp::Div.apply(1.0, 0.0), Err(EvalError::DivisionByZero));
//! ```

use thiserror::Error;

/// Ошибки при применении операции.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Деление на ноль.
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

/// Бинарные операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Вещественное деление.
    Div,
}

impl BinaryOp {
    /// Сопоставляет символ оператора с операцией.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Применяет операцию к аккумулятору и операнду.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`EvalError::DivisionByZero`] при делении на ноль.
    pub fn apply(self, acc: f64, operand: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(acc + operand),
            Self::Sub => Ok(acc - operand),
            Self::Mul => Ok(acc * operand),
            Self::Div => {
                // Делением на ноль считается только операнд, точно равный
                // 0.0 (в том числе -0.0).
                if operand == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(acc / operand)
                }
            }
        }
    }
}

/// Команда одного цикла: операция или выход.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Применить арифметическую операцию.
    Op(BinaryOp),
    /// Завершить работу (`q`).
    Quit,
}

impl Command {
    /// Разбирает токен оператора.
    ///
    /// Токен должен состоять ровно из одного символа: `+`, `-`, `*`, `/`
    /// или `q`. Всё остальное — не команда.
    ///
    /// # Примеры
    ///
    /// ```
    /// use accumulator_rs::operation::{BinaryOp, Command};
    ///
    /// assert_eq!(Command::parse("+"), Some(Command::Op(BinaryOp::Add)));
    /// assert_eq!(Command::parse("q"), Some(Command::Quit));
    /// assert_eq!(Command::parse("Q"), None);
    /// assert_eq!(Command::parse("+5"), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let symbol = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        if symbol == 'q' {
            return Some(Self::Quit);
        }
        BinaryOp::from_symbol(symbol).map(Self::Op)
    }
}
