use chrono::{DateTime, Local, TimeZone, Utc};
use shared::{CreatedAt, MatchId};

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const UNKNOWN: &str = "unknown";
/// Largest distance from the epoch a JS `Date` accepts, in milliseconds.
const MAX_MILLIS: f64 = 8.64e15;

pub fn match_id(id: Option<&MatchId>) -> String {
    id.map(MatchId::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Renders a creation time the way a browser's `toLocaleString` would for
/// en-US, in the local time zone. Values that do not parse are shown raw.
pub fn created_at(created_at: Option<&CreatedAt>) -> String {
    created_at_in(created_at, &Local)
}

pub fn created_at_in<Tz>(created_at: Option<&CreatedAt>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match created_at {
        Some(CreatedAt::Millis(millis)) => match DateTime::from_timestamp_millis(*millis) {
            Some(utc) => display(utc, tz),
            None => millis.to_string(),
        },
        Some(CreatedAt::FractionalMillis(millis)) => {
            match (millis.is_finite() && millis.abs() <= MAX_MILLIS)
                .then(|| DateTime::from_timestamp_millis(millis.trunc() as i64))
                .flatten()
            {
                Some(utc) => display(utc, tz),
                None => millis.to_string(),
            }
        }
        Some(CreatedAt::Text(text)) => DateTime::parse_from_rfc2822(text)
            .or_else(|_| DateTime::parse_from_rfc3339(text))
            .map(|parsed| display(parsed.with_timezone(&Utc), tz))
            .unwrap_or_else(|_| text.clone()),
        None => UNKNOWN.to_string(),
    }
}

fn display<Tz>(utc: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}
