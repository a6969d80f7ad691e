//! Field kinds and textual format checks

use regex::Regex;
use std::sync::OnceLock;

/// Cap for short text fields (names, phones, ids, dates)
pub const MAX_FIELD_LENGTH: usize = 200;

/// Cap for long text fields (addresses, duties, free-text descriptions)
pub const MAX_LONG_FIELD_LENGTH: usize = 1000;

/// Semantic kind of a form field, which decides its length cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Short text, capped at [`MAX_FIELD_LENGTH`]
    Short,
    /// Long text, capped at [`MAX_LONG_FIELD_LENGTH`]
    Long,
    /// Single-character enum code
    Code,
    /// `YYYY-MM-DD` date, stored as short text
    Date,
    /// Day of month as 1-2 digit text
    DayOfMonth,
}

impl FieldKind {
    /// Maximum number of characters kept after trimming
    pub fn max_length(self) -> usize {
        match self {
            FieldKind::Short | FieldKind::Date => MAX_FIELD_LENGTH,
            FieldKind::Long => MAX_LONG_FIELD_LENGTH,
            FieldKind::Code => 1,
            FieldKind::DayOfMonth => 2,
        }
    }
}

/// Purely syntactic format checks
///
/// Digits are ASCII `0-9` only; fullwidth and other Unicode digits fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// 15 digits, or 17 digits plus a digit/X/x checksum
    IdentityNumber,
    /// Four-digit year, two-digit month and day, hyphen separated
    Date,
    /// One or two digits
    DayOfMonth,
}

impl FieldFormat {
    /// Check a value against this format
    pub fn matches(self, value: &str) -> bool {
        match self {
            FieldFormat::IdentityNumber => identity_regex().is_match(value),
            FieldFormat::Date => date_regex().is_match(value),
            FieldFormat::DayOfMonth => day_regex().is_match(value),
        }
    }
}

fn identity_regex() -> &'static Regex {
    static ID_REGEX: OnceLock<Regex> = OnceLock::new();
    ID_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{15}|[0-9]{17}[0-9Xx])$").expect("valid identity regex")
    })
}

fn date_regex() -> &'static Regex {
    static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    DATE_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex")
    })
}

fn day_regex() -> &'static Regex {
    static DAY_REGEX: OnceLock<Regex> = OnceLock::new();
    DAY_REGEX.get_or_init(|| Regex::new(r"^[0-9]{1,2}$").expect("valid day regex"))
}
