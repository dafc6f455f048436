// src/feed/coerce.rs

use crate::domain::Inspection;
use crate::errors::FieldError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Date/time patterns seen in feeds, most common first.
const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d-%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d-%H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y%m%d-%H:%M:%S",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%d/%m/%Y"];

static INSPECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(\d{1,2}-[a-z]{3}-\d{4})\s+(\d{1,2}):(\d{2})\s*([ap]m)\s+to\s+(\d{1,2}):(\d{2})\s*([ap]m)\s*$",
    )
    .expect("inspection pattern is valid")
});

/// Trimmed text, `None` when absent or blank.
pub fn text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn decimal(field: &'static str, value: &str) -> Result<Decimal, FieldError> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '$'))
        .collect();

    Decimal::from_str(&cleaned).map_err(|_| FieldError::InvalidDecimal {
        field,
        value: value.to_string(),
    })
}

pub fn optional_decimal(field: &'static str, value: Option<&str>) -> Result<Option<Decimal>, FieldError> {
    text(value).map(|v| decimal(field, &v)).transpose()
}

/// Whole counts such as bedrooms. A trailing ".0" is accepted.
pub fn count(field: &'static str, value: Option<&str>) -> Result<Option<u8>, FieldError> {
    let Some(raw) = text(value) else {
        return Ok(None);
    };
    let invalid = || FieldError::InvalidNumber {
        field,
        value: raw.clone(),
    };

    let number = decimal(field, &raw).map_err(|_| invalid())?;
    if !number.fract().is_zero() {
        return Err(invalid());
    }
    number.to_u8().map(Some).ok_or_else(invalid)
}

/// `1/0`, `yes/no`, `true/false`, case-insensitive.
pub fn flag(field: &'static str, value: &str) -> Result<bool, FieldError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "y" => Ok(true),
        "0" | "no" | "false" | "n" => Ok(false),
        _ => Err(FieldError::InvalidFlag {
            field,
            value: value.to_string(),
        }),
    }
}

/// A flag that defaults to `default` when absent or blank.
pub fn optional_flag(field: &'static str, value: Option<&str>, default: bool) -> Result<bool, FieldError> {
    match text(value) {
        Some(v) => flag(field, &v),
        None => Ok(default),
    }
}

/// Tries the known patterns in order, then a lenient generic parse.
pub fn date_time(field: &'static str, value: &str) -> Result<NaiveDateTime, FieldError> {
    let value = value.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    // Lenient fallback for anything carrying an offset.
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .map(|dt| dt.naive_utc())
        .map_err(|_| FieldError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

pub fn optional_date_time(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDateTime>, FieldError> {
    text(value).map(|v| date_time(field, &v)).transpose()
}

fn clock(hour: &str, minute: &str, meridiem: &str, raw: &str) -> Result<NaiveTime, FieldError> {
    let invalid = || FieldError::InvalidInspection(raw.to_string());
    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) {
        return Err(invalid());
    }

    let hour = match (hour, meridiem.eq_ignore_ascii_case("pm")) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// `21-Dec-2009 11:00am to 1:00pm`. Blank text is not an inspection.
pub fn inspection(value: &str) -> Result<Option<Inspection>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let invalid = || FieldError::InvalidInspection(value.to_string());
    let captures = INSPECTION.captures(value).ok_or_else(invalid)?;

    let date = NaiveDate::parse_from_str(&captures[1], "%d-%b-%Y").map_err(|_| invalid())?;
    let opens = clock(&captures[2], &captures[3], &captures[4], value)?;
    let closes = clock(&captures[5], &captures[6], &captures[7], value)?;

    Ok(Some(Inspection {
        opens_on: date.and_time(opens),
        closes_on: date.and_time(closes),
    }))
}

/// Image ids are letters: 'm' is the main image (order 1), then a, b, c...
/// map to 2, 3, 4...
pub fn image_order(id: &str) -> Result<u32, FieldError> {
    let mut chars = id.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            let c = c.to_ascii_uppercase();
            if c == 'M' {
                Ok(1)
            } else {
                Ok(u32::from(c) - u32::from('A') + 2)
            }
        }
        _ => Err(FieldError::InvalidMediaId(id.to_string())),
    }
}

/// Builds the street number from the optional lot and sub numbers.
///
/// "12" / "39" / "" gives "LOT 12 39"; "32" / "2" / "39" gives "LOT 32 2/39".
pub fn street_number(
    lot_number: Option<&str>,
    sub_number: Option<&str>,
    street_number: Option<&str>,
) -> Option<String> {
    let lot = text(lot_number).map(|lot| {
        if lot.to_ascii_lowercase().contains("lot") {
            lot
        } else {
            format!("LOT {lot}")
        }
    });

    let prefix = match (lot, text(sub_number)) {
        (Some(lot), Some(sub)) => Some(format!("{lot} {sub}")),
        (lot, sub) => lot.or(sub),
    };

    match (prefix, text(street_number)) {
        (Some(prefix), Some(number)) => Some(format!("{prefix}/{number}")),
        (prefix, number) => prefix.or(number),
    }
}

/// "AU" when absent; AU/AUS/AUSTRALIA and NZ/NEW ZEALAND otherwise.
pub fn country_code(value: Option<&str>) -> Result<String, FieldError> {
    let Some(raw) = text(value) else {
        return Ok("AU".to_string());
    };

    match raw.to_ascii_uppercase().as_str() {
        "AU" | "AUS" | "AUSTRALIA" => Ok("AU".to_string()),
        "NZ" | "NEW ZEALAND" => Ok("NZ".to_string()),
        _ => Err(FieldError::UnrecognizedCountry(raw)),
    }
}

/// Whole dollars with thousands separators: 580000 -> "$580,000".
pub fn currency(amount: Decimal) -> String {
    let whole = amount.round().abs().to_u128().unwrap_or_default().to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount.is_sign_negative() && !amount.round().is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
