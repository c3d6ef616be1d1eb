//! Operator symbol to [`Operation`] lookup.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::error::CalcError;
use super::operation::Operation;

lazy_static! {
    /// Symbol table shared by every lookup.
    static ref OPERATIONS: HashMap<char, Operation> = Operation::ALL
        .iter()
        .map(|&op| (op.symbol(), op))
        .collect();
}

/// Resolves operator symbols to operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct OperationFactory;

impl OperationFactory {
    /// Look up the operation for `symbol`.
    ///
    /// Returns [`CalcError::UnknownOperator`] for anything outside `+ - * /`.
    pub fn resolve(&self, symbol: char) -> Result<Operation, CalcError> {
        OPERATIONS
            .get(&symbol)
            .copied()
            .ok_or(CalcError::UnknownOperator(symbol))
    }
}
