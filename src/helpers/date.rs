//! Date helper functions

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

use crate::error::Error;

/// Moment.js-style pattern for the short "May 13, 2019" form
pub const DEFAULT_DATE_FORMAT: &str = "MMM D, YYYY";

/// Format a date in the abbreviated "Mon D, YYYY" form
///
/// # Examples
/// ```ignore
/// short_date(&date) // -> "May 13, 2019"
/// ```
pub fn short_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// A Moment.js-style date pattern checked against chrono
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    chrono_format: String,
}

impl DateFormat {
    /// Convert and check a Moment.js-style pattern such as `MMM D, YYYY`.
    ///
    /// Patterns that need time-of-day or timezone fields are rejected, since
    /// page dates are plain calendar dates.
    pub fn parse(pattern: &str) -> Result<Self, Error> {
        let chrono_format =
            moment_to_chrono_format(pattern).map_err(|token| Error::InvalidDateFormat {
                format: pattern.to_string(),
                reason: format!("unsupported token `{}`", token),
            })?;

        if StrftimeItems::new(&chrono_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::InvalidDateFormat {
                format: pattern.to_string(),
                reason: "unsupported format specifier".to_string(),
            });
        }

        let mut sample = String::new();
        if write!(sample, "{}", NaiveDate::MIN.format(&chrono_format)).is_err() {
            return Err(Error::InvalidDateFormat {
                format: pattern.to_string(),
                reason: "pattern needs time or timezone fields".to_string(),
            });
        }

        Ok(Self {
            pattern: pattern.to_string(),
            chrono_format,
        })
    }

    /// The pattern as written in the configuration
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, date: &NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.chrono_format)).is_err() {
            tracing::warn!(
                "Date format `{}` failed on {}, using short form",
                self.pattern,
                date
            );
            return short_date(date);
        }
        out
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
            chrono_format: "%b %-d, %Y".to_string(),
        }
    }
}

/// Moment.js tokens and their chrono equivalents. Longer tokens come first
/// so `MMMM` wins over `MMM`, `MM` and `M`.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DDDD", "%j"),
    ("DDD", "%-j"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("HH", "%H"),
    ("H", "%-H"),
    ("hh", "%I"),
    ("h", "%-I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("SSS", "%3f"),
    ("ZZ", "%z"),
    ("A", "%p"),
];

/// Convert a Moment.js format to a chrono format. Text in `[brackets]` is
/// copied literally. Any other letter must start a known token; the first
/// unknown one is returned as the error.
fn moment_to_chrono_format(format: &str) -> Result<String, char> {
    let mut result = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'scan: while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(end) = rest.find(']') {
                push_literal(&mut result, &rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        for (from, to) in TOKENS {
            if let Some(after) = rest.strip_prefix(from) {
                result.push_str(to);
                rest = after;
                continue 'scan;
            }
        }

        if c.is_ascii_alphabetic() {
            return Err(c);
        }

        push_literal(&mut result, &rest[..c.len_utf8()]);
        rest = &rest[c.len_utf8()..];
    }

    Ok(result)
}

fn push_literal(out: &mut String, literal: &str) {
    for c in literal.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(&date(2019, 5, 13)), "May 13, 2019");
        assert_eq!(short_date(&date(2024, 1, 5)), "Jan 5, 2024");
    }

    #[test]
    fn test_default_matches_short_date() {
        let parsed = DateFormat::parse(DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(parsed, DateFormat::default());
        assert_eq!(parsed.format(&date(2019, 5, 13)), "May 13, 2019");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD").unwrap(), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("MMMM D, YYYY").unwrap(), "%B %-d, %Y");
        assert_eq!(moment_to_chrono_format("HH:mm:ss").unwrap(), "%H:%M:%S");
        assert_eq!(moment_to_chrono_format("[Posted] D/M").unwrap(), "Posted %-d/%-m");
        assert_eq!(moment_to_chrono_format("100%").unwrap(), "100%%");
        assert_eq!(moment_to_chrono_format("MMM Do"), Err('o'));
    }

    #[test]
    fn test_custom_format() {
        let format = DateFormat::parse("dddd, MMMM D YYYY").unwrap();
        assert_eq!(format.format(&date(2019, 5, 13)), "Monday, May 13 2019");
        assert_eq!(format.pattern(), "dddd, MMMM D YYYY");
    }

    #[test]
    fn test_day_of_year() {
        let format = DateFormat::parse("DDD").unwrap();
        assert_eq!(format.format(&date(2019, 5, 13)), "133");
        assert_eq!(format.format(&date(2019, 1, 2)), "2");
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        let err = DateFormat::parse("MMM Do, YYYY").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDateFormat {
                format: "MMM Do, YYYY".to_string(),
                reason: "unsupported token `o`".to_string(),
            }
        );
        assert!(DateFormat::parse("[Week of] MMM D").is_ok());
    }

    #[test]
    fn test_rejects_time_fields() {
        let err = DateFormat::parse("YYYY-MM-DD HH:mm").unwrap_err();
        assert!(matches!(err, Error::InvalidDateFormat { .. }));
    }
}
