use std::panic::Location;

use chrono::Local;

use crate::fields::{FieldError, Fields};

const DATE_FORMAT: &str = "%Y/%m/%d";
const TIME_FORMAT: &str = "%H:%M:%S%.6f";

/// Renders a field set as the line payload: `key: value` pairs joined with a
/// single space, keys in map order. Integers print in decimal, booleans as
/// `true`/`false`, strings verbatim. Fails on an empty map and writes nothing.
pub fn render_fields(fields: &Fields) -> Result<String, FieldError> {
    if fields.is_empty() {
        return Err(FieldError::EmptyPayload);
    }

    let mut payload = String::new();
    for (key, value) in fields {
        if !payload.is_empty() {
            payload.push(' ');
        }
        payload.push_str(key);
        payload.push_str(": ");
        payload.push_str(&value.to_string());
    }

    Ok(payload)
}

/// Per-level metadata detail: whether the line carries a calendar date and
/// whether the call site is reported as the full path or its final element.
#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    pub date: bool,
    pub long_path: bool,
}

pub(crate) fn format_line(
    prefix: &str,
    style: LineStyle,
    location: &Location<'_>,
    payload: &str,
) -> String {
    let now = Local::now();
    let stamp = if style.date {
        format!("{} {}", now.format(DATE_FORMAT), now.format(TIME_FORMAT))
    } else {
        now.format(TIME_FORMAT).to_string()
    };

    let file = location.file();
    let path = if style.long_path {
        file
    } else {
        file.rsplit(['/', '\\']).next().unwrap_or(file)
    };

    format!("{}{} {}:{}: {}", prefix, stamp, path, location.line(), payload)
}
