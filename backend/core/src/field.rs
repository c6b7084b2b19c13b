//! Per-field grammar and range validation.
//!
//! A field is a comma-separated list of terms. A term is `*`, a number `N`, or a
//! range `N-M`, each optionally followed by `/STEP`. Fields that allow it also take
//! a bare `?`, and month and day-of-week take 3-letter names (`JAN`, `MON-FRI`)
//! when aliasing is enabled.
//!
//! The shape of a term is matched with an anchored pattern; bounds, range order
//! and step limits are checked separately against the field's [`FieldSpec`].

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// `*` or `N` or `N-M`, then an optional `/STEP`. ASCII digits only.
static NUMERIC_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\*|([0-9]+)(?:-([0-9]+))?)(?:/([0-9]+))?$").unwrap()
});

/// Anything that looks like `ABC` or `ABC-DEF`.
static ALIAS_TERM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]{3})(?:-([A-Za-z]{3}))?$").unwrap());

const MONTH_ALIASES: &[&str] = &[
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const WEEKDAY_ALIASES: &[&str] = &["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Position of a field within a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Second => "second",
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day-of-month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day-of-week",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one field position: bounds, `?` legality and names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub min: u32,
    pub max: u32,
    pub allow_question_mark: bool,
    /// Ordered 3-letter names; the first one stands for `min`.
    pub aliases: Option<&'static [&'static str]>,
}

pub const SECOND: FieldSpec = FieldSpec {
    kind: FieldKind::Second,
    min: 0,
    max: 59,
    allow_question_mark: false,
    aliases: None,
};

pub const MINUTE: FieldSpec = FieldSpec {
    kind: FieldKind::Minute,
    min: 0,
    max: 59,
    allow_question_mark: false,
    aliases: None,
};

pub const HOUR: FieldSpec = FieldSpec {
    kind: FieldKind::Hour,
    min: 0,
    max: 23,
    allow_question_mark: false,
    aliases: None,
};

pub const DAY_OF_MONTH: FieldSpec = FieldSpec {
    kind: FieldKind::DayOfMonth,
    min: 1,
    max: 31,
    allow_question_mark: true,
    aliases: None,
};

pub const MONTH: FieldSpec = FieldSpec {
    kind: FieldKind::Month,
    min: 1,
    max: 12,
    allow_question_mark: false,
    aliases: Some(MONTH_ALIASES),
};

/// 0 and 7 are both Sunday; both are accepted as-is.
pub const DAY_OF_WEEK: FieldSpec = FieldSpec {
    kind: FieldKind::DayOfWeek,
    min: 0,
    max: 7,
    allow_question_mark: true,
    aliases: Some(WEEKDAY_ALIASES),
};

impl FieldSpec {
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Look up a 3-letter name, ignoring ASCII case.
    pub fn resolve_alias(&self, token: &str) -> Option<u32> {
        let aliases = self.aliases?;
        aliases
            .iter()
            .position(|alias| alias.eq_ignore_ascii_case(token))
            .map(|index| self.min + index as u32)
    }

    fn bounded(&self, literal: &str) -> Result<u32, &'static str> {
        let value = parse_number(literal)?;
        if self.contains(value) {
            Ok(value)
        } else {
            Err("value out of range")
        }
    }
}

/// Validate one field's text against `spec`.
///
/// `alias_enabled` gates name lookup; with it off, names are rejected rather than
/// reinterpreted. Every comma-separated term must pass on its own.
pub fn validate_field(text: &str, spec: &FieldSpec, alias_enabled: bool) -> bool {
    text.split(',').all(|term| match check_term(term.trim(), spec, alias_enabled) {
        Ok(()) => true,
        Err(reason) => {
            trace!(field = %spec.kind, term, reason, "Rejected cron term");
            false
        }
    })
}

fn check_term(term: &str, spec: &FieldSpec, alias_enabled: bool) -> Result<(), &'static str> {
    if term.is_empty() {
        return Err("empty term");
    }
    if term == "?" {
        return if spec.allow_question_mark {
            Ok(())
        } else {
            Err("'?' not allowed in this field")
        };
    }

    // Name-shaped terms never fall through to numeric parsing.
    if alias_enabled && spec.aliases.is_some() {
        if let Some(caps) = ALIAS_TERM.captures(term) {
            return check_alias_term(&caps, spec);
        }
    }

    let caps = NUMERIC_TERM
        .captures(term)
        .ok_or("does not match term grammar")?;

    if let Some(start) = caps.get(1) {
        let start = spec.bounded(start.as_str())?;
        if let Some(end) = caps.get(2) {
            let end = spec.bounded(end.as_str())?;
            if end < start {
                return Err("range end before start");
            }
        }
    }

    if let Some(step) = caps.get(3) {
        let step = parse_number(step.as_str())?;
        if step == 0 || step > spec.max {
            return Err("step out of range");
        }
    }

    Ok(())
}

fn check_alias_term(caps: &Captures<'_>, spec: &FieldSpec) -> Result<(), &'static str> {
    let start = spec.resolve_alias(&caps[1]).ok_or("unknown name")?;
    if let Some(end) = caps.get(2) {
        let end = spec.resolve_alias(end.as_str()).ok_or("unknown name")?;
        if end < start {
            return Err("range end before start");
        }
    }
    Ok(())
}

fn parse_number(literal: &str) -> Result<u32, &'static str> {
    literal.parse::<u32>().map_err(|_| "number too large")
}
