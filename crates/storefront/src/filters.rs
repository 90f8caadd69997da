//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Renders a badge count, capping large numbers.
///
/// Usage in templates: `{{ cart.item_count|badge_count }}`
#[askama::filter_fn]
pub fn badge_count(count: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = count.to_string();
    Ok(match raw.parse::<u64>() {
        Ok(n) if n > 99 => "99+".to_string(),
        _ => raw,
    })
}
