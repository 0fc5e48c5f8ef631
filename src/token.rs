//! Разбиение строки выражения на поля.
//!
//! Выражение обрезается по краям и делится на поля по последовательностям
//! пробельных символов. Корректное выражение содержит ровно три поля:
//! операнд, оператор и операнд.
//!
//! # Пример
//!
//! ```
//! use roman_calculator::token::{split, Triple};
//!
//! let triple = split("  IV  *\tII ").unwrap();
//! assert_eq!(triple, Triple { left: "IV", operator: "*", right: "II" });
//! ```

use crate::error::InvalidExpression;

/// Три поля выражения.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Triple<'a> {
    /// Левый операнд.
    pub left: &'a str,
    /// Оператор.
    pub operator: &'a str,
    /// Правый операнд.
    pub right: &'a str,
}

/// Разделитель полей: пробел, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
#[must_use]
pub const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Итератор по полям входной строки.
///
/// Пустая строка (или строка из одних разделителей) даёт одно пустое поле.
pub struct Fields<'a> {
    input: &'a str,
    emitted: bool,
}

impl<'a> Fields<'a> {
    /// Создаёт итератор, предварительно обрезав разделители по краям.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.trim_matches(is_separator),
            emitted: false,
        }
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let byte_len: usize = self
            .input
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum();

        let (consumed, rest) = self.input.split_at(byte_len);
        self.input = rest;
        consumed
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.input.is_empty() && self.emitted {
            return None;
        }
        self.emitted = true;

        let field = self.advance_while(|c| !is_separator(c));
        self.advance_while(is_separator);
        Some(field)
    }
}

/// Делит выражение на три поля.
///
/// # Ошибки
///
/// [`InvalidExpression::BadFormat`], если полей не ровно три.
pub fn split(input: &str) -> Result<Triple<'_>, InvalidExpression> {
    let fields: Vec<&str> = Fields::new(input).collect();

    match fields.as_slice() {
        &[left, operator, right] => Ok(Triple {
            left,
            operator,
            right,
        }),
        other => Err(InvalidExpression::BadFormat { found: other.len() }),
    }
}
