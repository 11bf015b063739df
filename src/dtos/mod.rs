pub mod dashboard;
pub mod financial;
pub mod notification;
pub mod order;
pub mod partner;
pub mod product;
pub mod settings;
pub mod user;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// Reads a `?status=`-style filter. Absent, blank and `all` mean "no filter".
pub fn parse_enum_filter<T: DeserializeOwned>(
    raw: Option<&str>,
    field: &str,
) -> Result<Option<T>, AppError> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => serde_json::from_value(Value::String(value.to_string()))
            .map(Some)
            .map_err(|_| AppError::validation(format!("Unknown {field} '{value}'"))),
    }
}

/// Case-insensitive substring match; a blank needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
