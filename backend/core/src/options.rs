//! Validation options: field layout and alias policy.

use serde::{Deserialize, Serialize};

/// Options for a validation call.
///
/// `seconds` is exact rather than permissive: with it set only 6-field expressions
/// are accepted, without it only 5-field ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CronOptions {
    /// Expect a leading seconds field.
    pub seconds: bool,
    /// Accept 3-letter month and weekday names.
    pub alias: bool,
}

impl Default for CronOptions {
    fn default() -> Self {
        Self {
            seconds: false,
            alias: true,
        }
    }
}

impl CronOptions {
    /// The 5-field layout (minute hour day-of-month month day-of-week).
    pub fn standard() -> Self {
        Self::default()
    }

    /// The 6-field layout with a leading seconds field.
    pub fn extended() -> Self {
        Self {
            seconds: true,
            ..Self::default()
        }
    }

    pub fn with_alias(self, alias: bool) -> Self {
        Self { alias, ..self }
    }

    /// Number of whitespace-separated fields this layout requires.
    pub fn field_count(&self) -> usize {
        if self.seconds {
            6
        } else {
            5
        }
    }
}
