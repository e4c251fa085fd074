use chrono::{Duration, NaiveDate, Utc};

/// How far back a push still counts as recent activity.
pub const RECENCY_DAYS: i64 = 7;

pub const PUSHED_QUALIFIER: &str = "pushed:>";

pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// The cutoff date as GitHub expects it in a qualifier, `YYYY-MM-DD`.
pub fn recency_cutoff(today: NaiveDate) -> String {
    (today - Duration::days(RECENCY_DAYS))
        .format("%Y-%m-%d")
        .to_string()
}

/// Append the recency qualifier to the user's query. The raw text is kept
/// as-is; encoding happens when the request URL is built.
pub fn augment(raw: &str, today: NaiveDate) -> String {
    format!("{} {}{}", raw, PUSHED_QUALIFIER, recency_cutoff(today))
}
