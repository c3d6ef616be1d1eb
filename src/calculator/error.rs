//! Calculator error taxonomy and its display text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language used for error text shown on the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Stable name of each failure class, used in JSON output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    InvalidFormat,
    UnknownOperator,
    DivisionByZero,
    Unclassified,
}

/// Errors raised while evaluating an expression.
///
/// Variants are listed in precedence order: when several could apply,
/// the evaluator reports the earliest one.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum CalcError {
    /// The input does not contain a single decimal digit.
    #[error("input contains no digits")]
    InvalidInput,

    /// The input is not `<number><operator><number>`.
    #[error("input is not a single binary expression")]
    InvalidFormat,

    /// The operator symbol has no operation bound to it.
    #[error("unknown operator '{0}'")]
    UnknownOperator(char),

    /// Division with a divisor equal to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Anything else, e.g. an operand that could not be parsed
    /// or a result that is not finite.
    #[error("calculation failed: {0}")]
    Unclassified(String),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput => ErrorKind::InvalidInput,
            Self::InvalidFormat => ErrorKind::InvalidFormat,
            Self::UnknownOperator(_) => ErrorKind::UnknownOperator,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::Unclassified(_) => ErrorKind::Unclassified,
        }
    }

    /// The fixed text shown on the display for this error.
    pub fn message(&self, locale: Locale) -> &'static str {
        self.kind().message(locale)
    }
}

impl ErrorKind {
    pub fn message(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Self::InvalidInput) => "error: invalid input",
            (Locale::En, Self::InvalidFormat) => "error: invalid format",
            (Locale::En, Self::UnknownOperator) => "error: invalid operator",
            (Locale::En, Self::DivisionByZero) => "error: division by zero",
            (Locale::En, Self::Unclassified) => "error: invalid calculation",
            (Locale::Zh, Self::InvalidInput) => "错误: 无效输入",
            (Locale::Zh, Self::InvalidFormat) => "错误: 格式无效",
            (Locale::Zh, Self::UnknownOperator) => "错误: 无效运算符",
            (Locale::Zh, Self::DivisionByZero) => "错误: 除数不能为0",
            (Locale::Zh, Self::Unclassified) => "错误: 无效计算",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_messages() {
        assert_eq!(CalcError::InvalidInput.message(Locale::En), "error: invalid input");
        assert_eq!(CalcError::InvalidFormat.message(Locale::En), "error: invalid format");
        assert_eq!(
            CalcError::UnknownOperator('%').message(Locale::En),
            "error: invalid operator"
        );
        assert_eq!(
            CalcError::DivisionByZero.message(Locale::En),
            "error: division by zero"
        );
        assert_eq!(
            CalcError::Unclassified("boom".into()).message(Locale::En),
            "error: invalid calculation"
        );
    }

    #[test]
    fn test_chinese_messages() {
        assert_eq!(CalcError::InvalidInput.message(Locale::Zh), "错误: 无效输入");
        assert_eq!(CalcError::DivisionByZero.message(Locale::Zh), "错误: 除数不能为0");
    }

    #[test]
    fn test_locale_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }
        let w: Wrapper = toml::from_str("locale = \"zh\"").unwrap();
        assert_eq!(w.locale, Locale::Zh);
    }
}
