use thiserror::Error;

use crate::field::FieldKind;

/// Why an expression was rejected.
///
/// Malformed syntax and out-of-range values are reported the same way; only the
/// offending field is named.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    #[error("cron expression is empty")]
    Empty,

    #[error("cron expression must have exactly {expected} fields, got {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {field} field '{value}'")]
    InvalidField { field: FieldKind, value: String },
}
