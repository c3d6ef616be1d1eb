//! Calculator core for evaluating single-operator expressions.
//!
//! This module provides functionality to:
//! - Validate and parse `<number><op><number>` input
//! - Resolve operator symbols to arithmetic operations
//! - Evaluate expressions and format results for the display

mod detection;
mod error;
mod evaluation;
mod factory;
mod operation;

pub use detection::{ParsedExpression, contains_digit, parse_expression};
pub use error::{CalcError, ErrorKind, Locale};
pub use evaluation::{Evaluation, EvaluationService, format_value};
pub use factory::OperationFactory;
pub use operation::Operation;

/// Evaluate `raw` with English error text.
pub fn evaluate(raw: &str) -> String {
    EvaluationService::default().evaluate(raw)
}
