//! Системы счисления операндов и преобразования римских чисел.
//!
//! Операнд считается римским, если он в точности совпадает с одной из
//! десяти записей `I`..`X`, и арабским, если состоит из одной или более
//! ASCII-цифр.
//!
//! # Пример
//!
//! ```
//! use roman_calculator::numeral::{self, NumeralSystem};
//!
//! assert_eq!(numeral::detect("IV", "II"), Ok(NumeralSystem::Roman));
//! assert_eq!(numeral::roman_to_int("IX"), Some(9));
//! assert_eq!(numeral::int_to_roman(24).unwrap(), "XXIV");
//! ```

use std::fmt::Display;

use crate::error::InvalidExpression;

/// Допустимые римские операнды; индекс + 1 равен значению.
pub const ROMAN_OPERANDS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Наибольшее число, записываемое римскими цифрами.
pub const ROMAN_MAX: i64 = 3999;

const ROMAN_DIGITS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Система счисления операнда.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralSystem {
    /// Десятичные цифры.
    Arabic,
    /// Римские цифры `I`..`X`.
    Roman,
}

impl Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => write!(f, "arabic"),
            Self::Roman => write!(f, "roman"),
        }
    }
}

/// Совпадает ли строка с одной из записей `I`..`X`.
#[must_use]
pub fn is_roman(s: &str) -> bool {
    ROMAN_OPERANDS.iter().any(|&r| r == s)
}

/// Состоит ли строка из одной или более ASCII-цифр.
#[must_use]
pub fn is_arabic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Определяет общую систему счисления двух операндов.
///
/// # Ошибки
///
/// - [`InvalidExpression::MixedNumerals`], если оба операнда подходят под
///   обе системы сразу (по построению недостижимо).
/// - [`InvalidExpression::BadNumeralFormat`], если системы различаются или
///   операнд не распознан.
pub fn detect(left: &str, right: &str) -> Result<NumeralSystem, InvalidExpression> {
    let roman = is_roman(left) && is_roman(right);
    let arabic = is_arabic(left) && is_arabic(right);

    match (roman, arabic) {
        (true, true) => Err(InvalidExpression::MixedNumerals),
        (true, false) => Ok(NumeralSystem::Roman),
        (false, true) => Ok(NumeralSystem::Arabic),
        (false, false) => Err(InvalidExpression::BadNumeralFormat),
    }
}

/// Значение римского операнда `I`..`X`.
///
/// Возвращает `None` для любой другой строки.
#[must_use]
pub fn roman_to_int(s: &str) -> Option<i64> {
    ROMAN_OPERANDS
        .iter()
        .position(|&r| r == s)
        .and_then(|i| i64::try_from(i + 1).ok())
}

/// Записывает число римскими цифрами по стандартным правилам.
///
/// # Ошибки
///
/// [`InvalidExpression::RomanUnrepresentable`], если число вне `1..=3999`.
pub fn int_to_roman(mut value: i64) -> Result<String, InvalidExpression> {
    if !(1..=ROMAN_MAX).contains(&value) {
        return Err(InvalidExpression::RomanUnrepresentable(value));
    }

    let mut out = String::new();
    for &(weight, digits) in &ROMAN_DIGITS {
        while value >= weight {
            out.push_str(digits);
            value -= weight;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roman_operands_are_whole_and_case_sensitive() {
        for r in ROMAN_OPERANDS {
            assert!(is_roman(r), "{r}");
        }
        assert!(!is_roman("iv"));
        assert!(!is_roman("XI"));
        assert!(!is_roman("IIII"));
        assert!(!is_roman(" I"));
        assert!(!is_roman(""));
    }

    #[test]
    fn arabic_is_ascii_digits_only() {
        assert!(is_arabic("7"));
        assert!(is_arabic("007"));
        assert!(is_arabic("12345678901234567890"));
        assert!(!is_arabic(""));
        assert!(!is_arabic("-1"));
        assert!(!is_arabic("+1"));
        assert!(!is_arabic("1.0"));
        // арабско-индийская цифра не считается
        assert!(!is_arabic("\u{0663}"));
    }

    #[test]
    fn detect_systems() {
        assert_eq!(detect("5", "3"), Ok(NumeralSystem::Arabic));
        assert_eq!(detect("IV", "II"), Ok(NumeralSystem::Roman));
        assert_eq!(detect("IV", "3"), Err(InvalidExpression::BadNumeralFormat));
        assert_eq!(detect("5", "III"), Err(InvalidExpression::BadNumeralFormat));
        assert_eq!(detect("a", "b"), Err(InvalidExpression::BadNumeralFormat));
        assert_eq!(detect("XI", "I"), Err(InvalidExpression::BadNumeralFormat));
    }

    #[test]
    fn roman_operand_values() {
        let values: Vec<_> = ROMAN_OPERANDS.iter().map(|r| roman_to_int(r)).collect();
        assert_eq!(values, (1..=10).map(Some).collect::<Vec<_>>());
        assert_eq!(roman_to_int("XI"), None);
    }

    #[test]
    fn int_to_roman_standard_rules() {
        assert_eq!(int_to_roman(1).unwrap(), "I");
        assert_eq!(int_to_roman(4).unwrap(), "IV");
        assert_eq!(int_to_roman(9).unwrap(), "IX");
        assert_eq!(int_to_roman(13).unwrap(), "XIII");
        assert_eq!(int_to_roman(21).unwrap(), "XXI");
        assert_eq!(int_to_roman(22).unwrap(), "XXII");
        assert_eq!(int_to_roman(24).unwrap(), "XXIV");
        assert_eq!(int_to_roman(49).unwrap(), "XLIX");
        assert_eq!(int_to_roman(90).unwrap(), "XC");
        assert_eq!(int_to_roman(100).unwrap(), "C");
        assert_eq!(int_to_roman(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn int_to_roman_agrees_with_operand_table() {
        for (i, r) in ROMAN_OPERANDS.iter().enumerate() {
            assert_eq!(int_to_roman(i as i64 + 1).unwrap(), *r);
        }
    }

    #[test]
    fn int_to_roman_rejects_unrepresentable() {
        assert_eq!(int_to_roman(0), Err(InvalidExpression::RomanUnrepresentable(0)));
        assert_eq!(
            int_to_roman(-3),
            Err(InvalidExpression::RomanUnrepresentable(-3))
        );
        assert_eq!(
            int_to_roman(4000),
            Err(InvalidExpression::RomanUnrepresentable(4000))
        );
    }
}
