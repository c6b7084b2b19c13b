//! Whole-expression validation.
//!
//! Splits an expression on whitespace, checks the field count against the active
//! layout and hands each field to [`validate_field`] in order, stopping at the
//! first failure.

use serde_json::Value;
use tracing::debug;

use crate::error::CronError;
use crate::field::{
    validate_field, FieldSpec, DAY_OF_MONTH, DAY_OF_WEEK, HOUR, MINUTE, MONTH, SECOND,
};
use crate::options::CronOptions;

static STANDARD_FIELDS: [FieldSpec; 5] = [MINUTE, HOUR, DAY_OF_MONTH, MONTH, DAY_OF_WEEK];

static EXTENDED_FIELDS: [FieldSpec; 6] = [SECOND, MINUTE, HOUR, DAY_OF_MONTH, MONTH, DAY_OF_WEEK];

/// Positional field layout for the given options.
pub fn field_specs(options: CronOptions) -> &'static [FieldSpec] {
    if options.seconds {
        &EXTENDED_FIELDS
    } else {
        &STANDARD_FIELDS
    }
}

/// Validate `expr`, reporting the first field that fails.
pub fn check(expr: &str, options: CronOptions) -> Result<(), CronError> {
    split_fields(expr, options).map(|_| ())
}

pub(crate) fn split_fields(expr: &str, options: CronOptions) -> Result<Vec<&str>, CronError> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Err(CronError::Empty);
    }

    let parts: Vec<&str> = expr.split_whitespace().collect();
    let expected = options.field_count();
    if parts.len() != expected {
        debug!(expected, found = parts.len(), "Cron expression has wrong field count");
        return Err(CronError::FieldCount {
            expected,
            found: parts.len(),
        });
    }

    for (part, spec) in parts.iter().zip(field_specs(options)) {
        if !validate_field(part, spec, options.alias) {
            debug!(field = %spec.kind, value = %part, "Cron field rejected");
            return Err(CronError::InvalidField {
                field: spec.kind,
                value: (*part).to_string(),
            });
        }
    }

    Ok(parts)
}

/// Whether `expr` is a valid cron expression under `options`.
pub fn is_cron(expr: &str, options: CronOptions) -> bool {
    check(expr, options).is_ok()
}

/// 5-field check: minute hour day-of-month month day-of-week.
pub fn is_standard_cron(expr: &str) -> bool {
    is_cron(expr, CronOptions::standard())
}

/// 6-field check with a leading seconds field.
pub fn is_extended_cron(expr: &str) -> bool {
    is_cron(expr, CronOptions::extended())
}

/// Like [`is_cron`] for a value of unknown kind; anything but a JSON string is invalid.
pub fn is_cron_value(value: &Value, options: CronOptions) -> bool {
    match value {
        Value::String(expr) => is_cron(expr, options),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;
    use serde_json::json;

    #[test]
    fn scenarios() {
        let standard = CronOptions::standard();
        assert!(is_cron("* * * * *", standard));
        assert!(!is_cron("60 * * * *", standard));
        assert!(is_cron("0 0 1 JAN *", standard));
        assert!(!is_cron("0 0 1 JAN *", standard.with_alias(false)));
        assert!(!is_cron("* * * * * *", standard));
        assert!(is_cron("* * * * * *", CronOptions::extended()));
        assert!(!is_cron("30-15 * * * *", standard));
    }

    #[test]
    fn field_count_is_exact() {
        assert!(!is_standard_cron("* * * *"));
        assert!(!is_standard_cron("* * * * * *"));
        assert!(!is_extended_cron("* * * * *"));
        assert!(!is_extended_cron("* * * * * * *"));
        assert_eq!(
            check("* * * *", CronOptions::standard()),
            Err(CronError::FieldCount { expected: 5, found: 4 })
        );
    }

    #[test]
    fn layout_matches_field_count() {
        for options in [CronOptions::standard(), CronOptions::extended()] {
            assert_eq!(field_specs(options).len(), options.field_count());
        }
        assert_eq!(
            check("* * * * *", CronOptions::extended()),
            Err(CronError::FieldCount { expected: 6, found: 5 })
        );
    }

    #[test]
    fn empty_and_blank_input_fails() {
        for expr in ["", " ", "\t\n", "   \r\n  "] {
            assert!(!is_standard_cron(expr), "{expr:?}");
            assert!(!is_extended_cron(expr), "{expr:?}");
        }
        assert_eq!(check("  ", CronOptions::standard()), Err(CronError::Empty));
    }

    #[test]
    fn surrounding_and_inner_whitespace_is_tolerated() {
        assert!(is_standard_cron("  0 12 * * MON-FRI  "));
        assert!(is_standard_cron("0\t12  *\n* 1-5"));
    }

    #[test]
    fn reports_first_failing_field() {
        let err = check("0 24 32 * *", CronOptions::standard()).unwrap_err();
        assert_eq!(
            err,
            CronError::InvalidField {
                field: FieldKind::Hour,
                value: "24".to_string(),
            }
        );
    }

    #[test]
    fn seconds_field_is_checked_first() {
        let err = check("60 0 0 1 1 0", CronOptions::extended()).unwrap_err();
        assert!(matches!(err, CronError::InvalidField { field: FieldKind::Second, .. }));
        assert!(is_extended_cron("*/15 0 0 1 1 0"));
        assert!(is_extended_cron("0 30 9 ? * MON-FRI"));
    }

    #[test]
    fn realistic_expressions() {
        for expr in [
            "*/5 * * * *",
            "0 0 * * 0",
            "0 0 * * 7",
            "15 14 1 * *",
            "0 22 * * 1-5",
            "23 0-20/2 * * *",
            "5 4 * * sun",
            "0 0,12 1 */2 *",
            "0 9 ? * MON,WED,FRI",
            "0 0 1 jan-jun ?",
        ] {
            assert!(is_standard_cron(expr), "{expr}");
        }
        for expr in ["0 0 0 * *", "* * * 13 *", "* * * * 8", "* * * * MON-SUN/2", "@daily"] {
            assert!(!is_standard_cron(expr), "{expr}");
        }
    }

    #[test]
    fn aliases_can_be_disabled() {
        let no_alias = CronOptions::standard().with_alias(false);
        assert!(!is_cron("0 0 * * MON", no_alias));
        assert!(!is_cron("0 0 * JAN-MAR *", no_alias));
        assert!(is_cron("0 0 * 1-3 1", no_alias));
    }

    #[test]
    fn non_string_values_fail() {
        let opts = CronOptions::default();
        for value in [
            json!(null),
            json!(5),
            json!(true),
            json!(["* * * * *"]),
            json!({"cron": "* * * * *"}),
        ] {
            assert!(!is_cron_value(&value, opts), "{value}");
        }
        assert!(is_cron_value(&json!("* * * * *"), opts));
    }

    #[test]
    fn repeated_calls_agree() {
        let expr = "0 0 1 JAN *";
        let first = is_standard_cron(expr);
        assert!(!is_standard_cron("garbage"));
        assert_eq!(first, is_standard_cron(expr));
    }
}
