use once_cell::sync::Lazy;
use regex::Regex;

use crate::page::UNITS_PER_ROW;

// Same shape browsers accept for <input type="email">.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

pub fn rows_to_units(rows: u16) -> u32 {
    rows as u32 * UNITS_PER_ROW
}

pub fn units_to_rows(units: u32) -> u16 {
    (units / UNITS_PER_ROW).min(u16::MAX as u32) as u16
}
