use chrono::{DateTime, NaiveDate, Utc};

/// Calendar date layouts, picked from a language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// 6/9/2024
    #[default]
    MonthDayYear,
    /// 09/06/2024
    DayMonthYear,
    /// 09.06.2024
    DayMonthYearDotted,
    /// 2024-06-09
    YearMonthDay,
}

impl DateStyle {
    /// Best match for an `Accept-Language` header or a POSIX `LANG` value
    /// such as `pt_BR.UTF-8`. Only the first listed language counts.
    pub fn from_language_tag(tag: &str) -> Self {
        let first = tag
            .split(',')
            .next()
            .unwrap_or("")
            .split(';')
            .next()
            .unwrap_or("")
            .split('.')
            .next()
            .unwrap_or("")
            .trim()
            .replace('_', "-")
            .to_ascii_lowercase();

        let mut parts = first.split('-');
        let language = parts.next().unwrap_or("");
        let region = parts.next().unwrap_or("");

        match language {
            "" | "c" | "posix" => DateStyle::MonthDayYear,
            "en" if region.is_empty() || region == "us" => DateStyle::MonthDayYear,
            "zh" | "ja" | "ko" | "sv" | "lt" | "hu" => DateStyle::YearMonthDay,
            "de" | "ru" | "pl" | "cs" | "fi" | "nb" | "da" | "tr" | "uk" => {
                DateStyle::DayMonthYearDotted
            }
            _ => DateStyle::DayMonthYear,
        }
    }

    pub fn format(self, date: NaiveDate) -> String {
        let pattern = match self {
            DateStyle::MonthDayYear => "%-m/%-d/%Y",
            DateStyle::DayMonthYear => "%d/%m/%Y",
            DateStyle::DayMonthYearDotted => "%d.%m.%Y",
            DateStyle::YearMonthDay => "%Y-%m-%d",
        };
        date.format(pattern).to_string()
    }

    /// Render a GitHub timestamp as a calendar date. Anything that isn't
    /// RFC 3339 is shown as-is.
    pub fn format_timestamp(self, timestamp: &str) -> String {
        match DateTime::parse_from_rfc3339(timestamp) {
            Ok(dt) => self.format(dt.with_timezone(&Utc).date_naive()),
            Err(_) => timestamp.to_string(),
        }
    }
}
