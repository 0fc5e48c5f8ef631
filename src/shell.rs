//! Интерактивная оболочка: приглашение, чтение одной строки, вывод.
//!
//! Все тексты для пользователя живут здесь, ядро ([`crate::calculate`])
//! от языка не зависит.

use std::io::{self, BufRead, Write};

use crate::{InvalidExpression, NumeralSystem, calculate};

/// Приглашение к вводу.
pub const PROMPT: &str = "Введите выражение (например, 5 + 3 или IV * II):";

/// Локализованное описание ошибки.
#[must_use]
pub fn describe(error: &InvalidExpression) -> String {
    match error {
        InvalidExpression::BadFormat { .. } => {
            "Неверный формат ввода. Используйте формат: a + b.".to_owned()
        }
        InvalidExpression::MixedNumerals => "Нельзя смешивать римские и арабские числа.".to_owned(),
        InvalidExpression::BadNumeralFormat => "Неверный формат чисел.".to_owned(),
        InvalidExpression::OutOfRange {
            system: NumeralSystem::Arabic,
        } => "Числа должны быть в диапазоне от 1 до 10 включительно.".to_owned(),
        InvalidExpression::OutOfRange {
            system: NumeralSystem::Roman,
        } => "Римские числа должны быть в диапазоне от I до X включительно.".to_owned(),
        InvalidExpression::UnsupportedOperation(op) => format!("Неподдерживаемая операция: {op}"),
        InvalidExpression::NonPositiveRoman => {
            "Результат работы с римскими числами должен быть положительным.".to_owned()
        }
        InvalidExpression::DivisionByZero => "Деление на ноль.".to_owned(),
        InvalidExpression::Overflow => "Переполнение.".to_owned(),
        InvalidExpression::RomanUnrepresentable(n) => {
            format!("Результат {n} нельзя записать римскими цифрами.")
        }
    }
}

/// Строка ответа на одно выражение.
#[must_use]
pub fn render(expression: &str) -> String {
    match calculate(expression) {
        Ok(value) => format!("Результат: {value}"),
        Err(err) => format!("Ошибка: {}", describe(&err)),
    }
}

/// Выводит приглашение, читает одну строку и печатает результат.
///
/// Конец ввода без строки равносилен пустой строке.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run_with<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        tracing::debug!("stdin closed before a line was read");
    }

    writeln!(output, "{}", render(&line))?;
    output.flush()
}

/// Запускает одно вычисление на stdin/stdout.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run() -> io::Result<()> {
    run_with(io::stdin().lock(), io::stdout().lock())
}
