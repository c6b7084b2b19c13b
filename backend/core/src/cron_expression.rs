//! A cron expression that is known to be valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CronError;
use crate::expression::{field_specs, split_fields};
use crate::field::FieldKind;
use crate::options::CronOptions;

/// Validated cron expression, normalized to single-space separated fields.
///
/// Only constructible through validation, so holders never need to re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CronExpression {
    expr: String,
    seconds: bool,
}

impl CronExpression {
    /// Validate `expr` under `options`; the options decide between 5 and 6 fields.
    pub fn parse(expr: &str, options: CronOptions) -> Result<Self, CronError> {
        let parts = split_fields(expr, options)?;
        Ok(Self {
            expr: parts.join(" "),
            seconds: options.seconds,
        })
    }

    /// Parse with aliases enabled, choosing the layout from the field count.
    fn detect(expr: &str) -> Result<Self, CronError> {
        let options = if expr.split_whitespace().count() == 6 {
            CronOptions::extended()
        } else {
            CronOptions::standard()
        };
        Self::parse(expr, options)
    }

    pub fn as_str(&self) -> &str {
        &self.expr
    }

    pub fn has_seconds(&self) -> bool {
        self.seconds
    }

    /// Each field paired with its position.
    pub fn fields(&self) -> impl Iterator<Item = (FieldKind, &str)> + '_ {
        let options = CronOptions {
            seconds: self.seconds,
            ..CronOptions::default()
        };
        field_specs(options)
            .iter()
            .map(|spec| spec.kind)
            .zip(self.expr.split(' '))
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::detect(s)
    }
}

impl TryFrom<&str> for CronExpression {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::detect(value)
    }
}

impl TryFrom<String> for CronExpression {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::detect(&value)
    }
}

impl From<CronExpression> for String {
    fn from(value: CronExpression) -> Self {
        value.expr
    }
}

impl AsRef<str> for CronExpression {
    fn as_ref(&self) -> &str {
        &self.expr
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_whitespace() {
        let expr =
            CronExpression::parse("  0\t12   * *  MON-FRI ", CronOptions::standard()).unwrap();
        assert_eq!(expr.as_str(), "0 12 * * MON-FRI");
        assert!(!expr.has_seconds());
    }

    #[test]
    fn parse_respects_options() {
        assert!(CronExpression::parse("* * * * * *", CronOptions::standard()).is_err());
        assert!(CronExpression::parse("* * * * *", CronOptions::extended()).is_err());
        let err = CronExpression::parse("0 0 1 JAN *", CronOptions::standard().with_alias(false))
            .unwrap_err();
        assert!(matches!(err, CronError::InvalidField { field: FieldKind::Month, .. }));
    }

    #[test]
    fn from_str_detects_layout() {
        let standard: CronExpression = "*/5 * * * *".parse().unwrap();
        assert!(!standard.has_seconds());
        let extended: CronExpression = "0 */5 * * * *".parse().unwrap();
        assert!(extended.has_seconds());
        assert!("* * * *".parse::<CronExpression>().is_err());
        assert!(CronExpression::try_from("60 * * * *").is_err());
    }

    #[test]
    fn fields_are_labelled() {
        let expr: CronExpression = "30 0 12 1 JAN ?".parse().unwrap();
        let fields: Vec<_> = expr.fields().collect();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0], (FieldKind::Second, "30"));
        assert_eq!(fields[4], (FieldKind::Month, "JAN"));
        assert_eq!(fields[5], (FieldKind::DayOfWeek, "?"));
    }

    #[test]
    fn serde_round_trip() {
        let expr: CronExpression = "0 0 * * 1-5".parse().unwrap();
        let json = serde_json::to_string(&expr).unwrap();
        assert_eq!(json, r#""0 0 * * 1-5""#);
        let back: CronExpression = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);

        let extended: CronExpression = serde_json::from_str(r#""0 0 0 * * *""#).unwrap();
        assert!(extended.has_seconds());
        assert!(serde_json::from_str::<CronExpression>(r#""0 0 0 * * * *""#).is_err());
        assert!(serde_json::from_str::<CronExpression>("42").is_err());
    }
}
