use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::Serialize;

use super::error::ScheduleError;
use super::pairing::{comparable, Pairing};
use super::ScheduleConfig;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):00\s?([ap])\.?m\.?$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub title: String,
}

/// One concrete meeting instance. Status and id are attached downstream
/// (see `assign::Assigner`), not here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingOccurrence {
    pub title: String,
    pub description: String,
    pub classification: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub all_day: bool,
    pub time_notes: String,
    pub location: Location,
    pub links: Vec<Link>,
    pub source: String,
    /// IANA name of the agency's local timezone; `start` is local to it.
    pub timezone: &'static str,
}

/// Build occurrences from pairings, lazily and in date-token order.
/// Malformed-token policy is applied by the caller (the pipeline), which is
/// the only place that knows whether to skip or abort.
pub fn assemble<'a>(
    pairings: Vec<Pairing<'a>>,
    source_url: &'a str,
    config: &'a ScheduleConfig,
    reference: NaiveDate,
) -> impl Iterator<Item = Result<MeetingOccurrence, ScheduleError>> + 'a {
    pairings
        .into_iter()
        .map(move |p| build_occurrence(&p, source_url, config, reference))
}

fn build_occurrence(
    pairing: &Pairing<'_>,
    source_url: &str,
    config: &ScheduleConfig,
    reference: NaiveDate,
) -> Result<MeetingOccurrence, ScheduleError> {
    let nominal = comparable(pairing.date)?;
    let date = resolve_year(
        nominal.month(),
        nominal.day(),
        reference,
        config.rollover_grace_days,
    )
    .ok_or_else(|| ScheduleError::DateParse {
        token: pairing.date.text.clone(),
    })?;
    let time = parse_time(&pairing.group.time)?;

    Ok(MeetingOccurrence {
        title: pairing.group.title.clone(),
        description: String::new(),
        classification: config.classification.to_string(),
        start: NaiveDateTime::new(date, time),
        end: None,
        all_day: false,
        time_notes: String::new(),
        location: config.location.clone(),
        links: vec![Link {
            href: String::new(),
            title: String::new(),
        }],
        source: source_url.to_string(),
        timezone: config.timezone,
    })
}

/// The document never states a year. Policy: use the reference year, rolling
/// to the following year when the resulting date falls more than
/// `grace_days` before the reference date.
fn resolve_year(month: u32, day: u32, reference: NaiveDate, grace_days: i64) -> Option<NaiveDate> {
    let candidate = NaiveDate::from_ymd_opt(reference.year(), month, day)?;
    if candidate < reference - Duration::days(grace_days) {
        NaiveDate::from_ymd_opt(reference.year() + 1, month, day)
    } else {
        Some(candidate)
    }
}

/// Parse the cleaned 12-hour time string ("10:00a.m.", "2:00 pm", ...).
fn parse_time(raw: &str) -> Result<NaiveTime, ScheduleError> {
    let err = || ScheduleError::TimeParse {
        token: raw.to_string(),
    };
    let caps = TIME_RE.captures(raw.trim()).ok_or_else(err)?;
    let hour: u32 = caps[1].parse().map_err(|_| err())?;
    let hour24 = match (&caps[2], hour) {
        (_, 0) | (_, 13..) => return Err(err()),
        ("a", 12) => 0,
        ("a", h) => h,
        ("p", 12) => 12,
        ("p", h) => h + 12,
        _ => return Err(err()),
    };
    NaiveTime::from_hms_opt(hour24, 0, 0).ok_or_else(err)
}

// ── Tests ──
