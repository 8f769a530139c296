//! Timestamp normalization for the date shapes the two sources emit.
//!
//! Step 1 is a day-first parse across the delimited formats both systems
//! use. Step 2 handles the one known free-text shape, the localized
//! `"<dia> de <mês>. de <ano>[ <hora>]"` form the Grid export produces.
//! Every failure degrades to `None`; nothing here raises to the caller.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 7] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// The twelve regional month abbreviations, mapped by three-letter prefix.
const MONTH_ABBREVIATIONS: [(&str, u32); 12] = [
    ("jan", 1),
    ("fev", 2),
    ("mar", 3),
    ("abr", 4),
    ("mai", 5),
    ("jun", 6),
    ("jul", 7),
    ("ago", 8),
    ("set", 9),
    ("out", 10),
    ("nov", 11),
    ("dez", 12),
];

/// Parses a raw date value into a timestamp, or `None` when no attempt
/// succeeds.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_day_first(trimmed).or_else(|| parse_localized_text(trimmed))
}

/// Day-first parse across the delimited formats, dates defaulting to
/// midnight.
fn parse_day_first(value: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Parses the localized free-text shape, e.g. `"17 de dez. de 2025"` or
/// `"17 de dez. de 2025 14:46:02"`.
///
/// Connectives and punctuation are stripped, the remaining tokens are
/// read as day / month-abbreviation / year / optional time. An
/// unrecognized month abbreviation falls back to month 01 rather than
/// failing; a missing time defaults to midnight.
fn parse_localized_text(value: &str) -> Option<NaiveDateTime> {
    let cleaned = value.to_lowercase().replace('.', "");
    let tokens: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|token| *token != "de")
        .collect();
    if tokens.len() < 3 {
        return None;
    }

    let day: u32 = tokens[0].parse().ok()?;
    let month = month_number(tokens[1]);
    let year: i32 = tokens[2].parse().ok()?;
    let time = match tokens.get(3) {
        Some(token) => parse_time(token)?,
        None => NaiveTime::from_hms_opt(0, 0, 0)?,
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(NaiveDateTime::new(date, time))
}

fn month_number(token: &str) -> u32 {
    let prefix: String = token.chars().take(3).collect();
    MONTH_ABBREVIATIONS
        .iter()
        .find(|(abbreviation, _)| *abbreviation == prefix)
        .map(|(_, number)| *number)
        .unwrap_or(1)
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(token, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(token, "%H:%M"))
        .ok()
}
