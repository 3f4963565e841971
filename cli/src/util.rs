// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Parses a decimal currency amount such as `12.50` into cents.
pub fn parse_amount(s: &str) -> Result<i64, String> {
    let invalid = || format!("Invalid amount: {s}. Expected a decimal such as 12.50");

    let s = s.trim();
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || frac.len() > 2 || !all_digits(whole) || !all_digits(frac) {
        return Err(invalid());
    }

    let whole: i64 = whole.parse().map_err(|_| invalid())?;
    let frac: i64 = format!("{frac:0<2}").parse().map_err(|_| invalid())?;
    whole
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(frac))
        .ok_or_else(invalid)
}

/// Formats cents as a dollar amount with thousands separators, e.g. `$1,095.00`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}${grouped}.{:02}", abs % 100)
}

/// Parses a `YYYY-MM-DD` date into milliseconds since the epoch, at midnight UTC.
pub fn parse_date(s: &str) -> Result<i64, String> {
    let date: Date = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid date: {s}. Expected format: YYYY-MM-DD"))?;
    let zoned = date
        .to_zoned(TimeZone::UTC)
        .map_err(|e| format!("Invalid date: {s}: {e}"))?;
    Ok(zoned.timestamp().as_millisecond())
}

/// Formats milliseconds since the epoch as a UTC date.
pub fn format_date(ms: i64) -> String {
    match Timestamp::from_millisecond(ms) {
        Ok(t) => t.to_zoned(TimeZone::UTC).date().to_string(),
        Err(_) => ms.to_string(),
    }
}

/// Milliseconds since the epoch, now.
pub fn now_millis() -> i64 {
    Timestamp::now().as_millisecond()
}
