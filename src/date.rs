//! Daily-note date classification
//!
//! A link target counts as a date when its filename (extension
//! stripped) matches the active naming convention. With a configured
//! convention the match is a strict chrono parse against that format
//! and nothing else; without one, the fixed `YYYY-MM-DD` shape applies.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

/// Fallback pattern when the host has no daily-note configuration
const DEFAULT_FORMAT: &str = "%Y-%m-%d";

static DAILY_RE: OnceLock<Regex> = OnceLock::new();

fn daily_re() -> &'static Regex {
    DAILY_RE.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("daily-note pattern is valid")
    })
}

/// A link target classified as a calendar day.
///
/// `text` is the normalized token as it appears inside wikilinks
/// (target path with the `.md` extension stripped); two targets that
/// normalize to the same text are the same date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateToken {
    pub text: String,
    pub date: NaiveDate,
}

impl DateToken {
    /// Strictly after `today`, at day granularity. Today itself is not
    /// future.
    pub fn is_future(&self, today: NaiveDate) -> bool {
        self.date > today
    }
}

/// Classify a link-target path against the active naming convention.
///
/// A trailing `.md` extension is stripped first; unresolved link
/// targets usually carry none. With `format` configured the stem must
/// parse strictly under it (no fallback to the default shape — the
/// convention decides what counts as a date at all). Without one, the
/// stem must match the literal `YYYY-MM-DD` shape and name a real
/// calendar day.
pub fn classify_as_date(path: &str, format: Option<&str>) -> Option<DateToken> {
    let stem = path.strip_suffix(".md").unwrap_or(path);

    let date = match format {
        Some(fmt) => NaiveDate::parse_from_str(stem, fmt).ok()?,
        None => {
            if !daily_re().is_match(stem) {
                return None;
            }
            NaiveDate::parse_from_str(stem, DEFAULT_FORMAT).ok()?
        }
    };

    Some(DateToken {
        text: stem.to_string(),
        date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_classify_default_convention() {
        let token = classify_as_date("2099-12-31.md", None).unwrap();
        assert_eq!(token.text, "2099-12-31");
        assert_eq!(token.date, day(2099, 12, 31));

        // Unresolved targets come without an extension
        let token = classify_as_date("2099-12-31", None).unwrap();
        assert_eq!(token.text, "2099-12-31");
    }

    #[test]
    fn test_classify_rejects_non_dates() {
        assert_eq!(classify_as_date("meeting-notes.md", None), None);
        assert_eq!(classify_as_date("2099-12.md", None), None);
        assert_eq!(classify_as_date("x2099-12-31.md", None), None);
        // Shape matches but no such calendar day
        assert_eq!(classify_as_date("2099-13-41.md", None), None);
    }

    #[test]
    fn test_classify_configured_convention() {
        let fmt = Some("%d.%m.%Y");
        let token = classify_as_date("31.12.2099.md", fmt).unwrap();
        assert_eq!(token.text, "31.12.2099");
        assert_eq!(token.date, day(2099, 12, 31));

        // The configured format replaces the default shape entirely
        assert_eq!(classify_as_date("2099-12-31.md", fmt), None);
    }

    #[test]
    fn test_classify_strict_no_trailing_input() {
        assert_eq!(classify_as_date("2099-12-31-extra", None), None);
        assert_eq!(classify_as_date("2099-12-31 notes", Some("%Y-%m-%d")), None);
    }

    #[test]
    fn test_is_future_day_granularity() {
        let today = day(2024, 6, 1);

        let past = classify_as_date("2024-01-01", None).unwrap();
        let same = classify_as_date("2024-06-01", None).unwrap();
        let next = classify_as_date("2024-06-02", None).unwrap();

        assert!(!past.is_future(today));
        assert!(!same.is_future(today));
        assert!(next.is_future(today));
    }
}
