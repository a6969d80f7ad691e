//! Reusable field validators
//!
//! Validators take an already normalized value and return the user-facing
//! message when the value breaks the rule.

use crate::core::field::FieldFormat;

/// Validator: value must be non-empty
pub fn required(label: &'static str) -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    move |value: &str| {
        if value.is_empty() {
            Err(format!("{}不能为空", label))
        } else {
            Ok(())
        }
    }
}

/// Validator: identity number in one of its two shapes, empty is rejected too
pub fn identity_number() -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    |value: &str| {
        if FieldFormat::IdentityNumber.matches(value) {
            Ok(())
        } else {
            Err("身份证号格式不正确".to_string())
        }
    }
}

/// Validator: optional `YYYY-MM-DD` date, empty passes
pub fn date_format(
    label: &'static str,
) -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    move |value: &str| {
        if value.is_empty() || FieldFormat::Date.matches(value) {
            Ok(())
        } else {
            Err(format!("{} 格式应为 YYYY-MM-DD", label))
        }
    }
}

/// Validator: day of month, pattern first then range
pub fn day_of_month() -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    |value: &str| {
        if !FieldFormat::DayOfMonth.matches(value) {
            return Err("发薪日应为1-31数字".to_string());
        }
        match value.parse::<u8>() {
            Ok(day) if (1..=31).contains(&day) => Ok(()),
            _ => Err("发薪日应在1-31之间".to_string()),
        }
    }
}

/// Validator: value required only while `active` holds
pub fn required_when(
    active: bool,
    message: &'static str,
) -> impl Fn(&[&str]) -> Result<(), String> + Send + Sync + Clone {
    move |values: &[&str]| {
        if active && values.iter().any(|v| v.is_empty()) {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}
