//! Expression evaluation and result formatting.
//!
//! [`EvaluationService`] is the entry point used by the keypad and the CLI:
//! it turns the raw display buffer into the text that replaces it.

use serde::Serialize;

use super::detection::parse_expression;
use super::error::{CalcError, ErrorKind, Locale};
use super::factory::OperationFactory;

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    /// The expression produced a finite number.
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display.
        display: String,
    },
    /// The expression was rejected or could not be computed.
    Error {
        /// The original expression.
        expression: String,
        /// Which failure class was hit.
        kind: ErrorKind,
        /// Error message to display.
        message: String,
    },
}

impl Evaluation {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display, .. } => display,
            Self::Error { message, .. } => message,
        }
    }
}

/// Stateless evaluator for single-operator expressions.
///
/// Cheap to copy and safe to share between threads; every call is
/// independent of the ones before it.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvaluationService {
    factory: OperationFactory,
    locale: Locale,
}

impl EvaluationService {
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            factory: OperationFactory,
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Evaluate `raw` and return the text to show on the display.
    ///
    /// Never fails: errors are rendered as their fixed message.
    pub fn evaluate(&self, raw: &str) -> String {
        if raw.is_empty() {
            return "0".to_string();
        }
        match self.try_evaluate(raw) {
            Ok(value) => format_value(value),
            Err(e) => e.message(self.locale).to_string(),
        }
    }

    /// Like [`evaluate`](Self::evaluate) but keeps the value and error class.
    pub fn evaluate_detailed(&self, raw: &str) -> Evaluation {
        let expression = raw.to_string();
        if raw.is_empty() {
            return Evaluation::Success {
                expression,
                value: 0.0,
                display: "0".to_string(),
            };
        }
        match self.try_evaluate(raw) {
            Ok(value) => Evaluation::Success {
                expression,
                display: format_value(value),
                value,
            },
            Err(e) => Evaluation::Error {
                expression,
                kind: e.kind(),
                message: e.message(self.locale).to_string(),
            },
        }
    }

    /// Parse, resolve and apply, returning the raw number.
    ///
    /// Empty input is the caller's concern and reports
    /// [`CalcError::InvalidInput`] here.
    pub fn try_evaluate(&self, raw: &str) -> Result<f64, CalcError> {
        let result = self.compute(raw);
        match &result {
            Ok(value) => tracing::debug!(input = raw, value, "evaluated expression"),
            Err(e) => tracing::debug!(input = raw, error = %e, "evaluation failed"),
        }
        result
    }

    /// An infinite or NaN result has no numeric text to show, so it is
    /// reported as [`CalcError::Unclassified`] instead of `inf`.
    fn compute(&self, raw: &str) -> Result<f64, CalcError> {
        let parsed = parse_expression(raw)?;
        let operation = self.factory.resolve(parsed.operator)?;
        let value = operation.apply(parsed.left, parsed.right)?;

        if !value.is_finite() {
            return Err(CalcError::Unclassified(format!(
                "result of {raw:?} is not finite"
            )));
        }
        Ok(value)
    }
}

/// Format a number for the display.
///
/// Whole numbers drop the fractional part entirely; everything else uses
/// the shortest representation that reads back as the same `f64`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0, which would otherwise print as "-0".
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
