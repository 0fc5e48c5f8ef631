//! Ошибка вычисления выражения.
//!
//! Все отказы конвейера сообщаются одним типом [`InvalidExpression`];
//! вариант служит дискриминантом, а `Display` даёт нейтральное сообщение.
//! Локализованный текст для пользователя формирует оболочка
//! ([`crate::shell`]).

use thiserror::Error;

use crate::numeral::NumeralSystem;

/// Некорректное выражение.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidExpression {
    /// Ввод не состоит ровно из трёх полей.
    #[error("bad format")]
    BadFormat {
        /// Сколько полей найдено.
        found: usize,
    },

    /// Оба операнда одновременно римские и арабские.
    #[error("cannot mix roman and arabic")]
    MixedNumerals,

    /// Операнды в разных системах счисления или не распознаны.
    #[error("bad numeral format")]
    BadNumeralFormat,

    /// Операнд вне диапазона 1..10.
    #[error("out of range 1..10")]
    OutOfRange {
        /// Система, в которой записаны операнды.
        system: NumeralSystem,
    },

    /// Неизвестный оператор.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Римский результат меньше единицы.
    #[error("non-positive roman result")]
    NonPositiveRoman,

    /// Деление на ноль.
    #[error("division by zero")]
    DivisionByZero,

    /// Целочисленное переполнение.
    #[error("arithmetic overflow")]
    Overflow,

    /// Число не записывается римскими цифрами.
    #[error("no roman numeral for {0}")]
    RomanUnrepresentable(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_language_neutral() {
        assert_eq!(InvalidExpression::BadFormat { found: 1 }.to_string(), "bad format");
        assert_eq!(
            InvalidExpression::MixedNumerals.to_string(),
            "cannot mix roman and arabic"
        );
        assert_eq!(
            InvalidExpression::BadNumeralFormat.to_string(),
            "bad numeral format"
        );
        assert_eq!(
            InvalidExpression::OutOfRange {
                system: NumeralSystem::Roman
            }
            .to_string(),
            "out of range 1..10"
        );
        assert_eq!(
            InvalidExpression::UnsupportedOperation("%".into()).to_string(),
            "unsupported operation: %"
        );
        assert_eq!(
            InvalidExpression::NonPositiveRoman.to_string(),
            "non-positive roman result"
        );
    }
}
