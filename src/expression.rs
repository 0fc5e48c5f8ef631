//! Бинарный оператор и его вычисление над целыми числами.
//!
//! Поддерживаются `+`, `-`, `*` и целочисленное `/` с отбрасыванием
//! дробной части (округление к нулю).
//!
//! # Примеры
//!
//! ```
//! use roman_calculator::expression::Operator;
//!
//! let op: Operator = "/".parse().unwrap();
//! assert_eq!(op.apply(10, 3), Ok(3));
//! assert_eq!(op.apply(-7, 2), Ok(-3));
//! ```

use std::{fmt::Display, str::FromStr};

use crate::error::InvalidExpression;

/// Бинарные операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Целочисленное деление.
    Div,
}

impl Operator {
    /// Символ оператора.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Применить операцию к операндам.
    ///
    /// # Ошибки
    ///
    /// - [`InvalidExpression::DivisionByZero`] при делении на ноль.
    /// - [`InvalidExpression::Overflow`] при переполнении.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, InvalidExpression> {
        match self {
            Self::Add => left.checked_add(right).ok_or(InvalidExpression::Overflow),
            Self::Sub => left.checked_sub(right).ok_or(InvalidExpression::Overflow),
            Self::Mul => left.checked_mul(right).ok_or(InvalidExpression::Overflow),
            Self::Div => {
                if right == 0 {
                    Err(InvalidExpression::DivisionByZero)
                } else {
                    left.checked_div(right).ok_or(InvalidExpression::Overflow)
                }
            }
        }
    }
}

impl FromStr for Operator {
    type Err = InvalidExpression;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            other => Err(InvalidExpression::UnsupportedOperation(other.to_owned())),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
