//! `cronguard-core` — cron schedule expression validation.
//!
//! Accepts the standard 5-field form (minute hour day-of-month month day-of-week)
//! and the extended 6-field form with a leading seconds field. Validation is a pure
//! predicate: no scheduling, no time zones, no `@daily`-style macros.
//!
//! ```
//! use cronguard_core::{is_cron, is_extended_cron, CronOptions};
//!
//! assert!(is_cron("0 0 1 JAN *", CronOptions::default()));
//! assert!(!is_cron("0 0 1 JAN *", CronOptions::default().with_alias(false)));
//! assert!(is_extended_cron("*/10 * * * * *"));
//! ```

pub mod cron_expression;
pub mod error;
pub mod expression;
pub mod field;
pub mod options;

pub use cron_expression::CronExpression;
pub use error::CronError;
pub use expression::{
    check, field_specs, is_cron, is_cron_value, is_extended_cron, is_standard_cron,
};
pub use field::{validate_field, FieldKind, FieldSpec};
pub use options::CronOptions;
