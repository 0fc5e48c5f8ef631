//! # roman_calculator
//!
//! Консольный калькулятор одного бинарного выражения вида `a op b`.
//!
//! Поддерживает:
//! - Арабские операнды `1`..`10` и римские `I`..`X` (без смешивания)
//! - Операции: `+`, `-`, `*`, `/` (целочисленное деление)
//! - Результат в той же системе счисления, что и операнды
//!
//! # Пример использования
//!
//! ```
//! use roman_calculator::calculate;
//!
//! assert_eq!(calculate("5 + 3").unwrap(), "8");
//! assert_eq!(calculate("IV * II").unwrap(), "VIII");
//! assert!(calculate("5 + III").is_err());
//! ```

pub mod error;
pub mod expression;
pub mod logger;
pub mod numeral;
pub mod shell;
pub mod token;

pub use error::InvalidExpression;
pub use numeral::NumeralSystem;
pub use shell::run;

use expression::Operator;

/// Допустимый диапазон значений операндов.
pub const OPERAND_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Вычисляет строковое выражение и возвращает результат в системе
/// счисления операндов.
///
/// Проверки выполняются строго по порядку: формат, система счисления,
/// диапазон операндов, оператор, знак римского результата.
///
/// # Ошибки
///
/// Возвращает [`InvalidExpression`] при первой неудавшейся проверке.
///
/// # Примеры
///
/// ```
/// use roman_calculator::{calculate, InvalidExpression};
///
/// assert_eq!(calculate("X - I").unwrap(), "IX");
/// assert_eq!(calculate("10 / 3").unwrap(), "3");
/// assert_eq!(calculate("I - V"), Err(InvalidExpression::NonPositiveRoman));
/// ```
pub fn calculate(expression: &str) -> Result<String, InvalidExpression> {
    let triple = token::split(expression)?;
    let system = numeral::detect(triple.left, triple.right)?;
    tracing::debug!(?triple, %system, "expression tokenized");

    let result = match system {
        NumeralSystem::Arabic => calculate_arabic(triple.left, triple.operator, triple.right),
        NumeralSystem::Roman => calculate_roman(triple.left, triple.operator, triple.right),
    };

    match &result {
        Ok(value) => tracing::debug!(%value, "expression evaluated"),
        Err(err) => tracing::debug!(%err, "expression rejected"),
    }
    result
}

fn calculate_arabic(left: &str, operator: &str, right: &str) -> Result<String, InvalidExpression> {
    let out_of_range = InvalidExpression::OutOfRange {
        system: NumeralSystem::Arabic,
    };
    // слишком длинная запись заведомо больше 10
    let a: i64 = left.parse().map_err(|_| out_of_range.clone())?;
    let b: i64 = right.parse().map_err(|_| out_of_range.clone())?;
    check_range(a, b, out_of_range)?;

    let op: Operator = operator.parse()?;
    tracing::debug!(a, %op, b, "arabic operands");
    Ok(op.apply(a, b)?.to_string())
}

fn calculate_roman(left: &str, operator: &str, right: &str) -> Result<String, InvalidExpression> {
    let out_of_range = InvalidExpression::OutOfRange {
        system: NumeralSystem::Roman,
    };
    let a = numeral::roman_to_int(left).unwrap_or(0);
    let b = numeral::roman_to_int(right).unwrap_or(0);
    check_range(a, b, out_of_range)?;

    let op: Operator = operator.parse()?;
    tracing::debug!(a, %op, b, "roman operands");
    let result = op.apply(a, b)?;
    if result < 1 {
        return Err(InvalidExpression::NonPositiveRoman);
    }
    numeral::int_to_roman(result)
}

fn check_range(a: i64, b: i64, err: InvalidExpression) -> Result<(), InvalidExpression> {
    if OPERAND_RANGE.contains(&a) && OPERAND_RANGE.contains(&b) {
        Ok(())
    } else {
        Err(err)
    }
}
