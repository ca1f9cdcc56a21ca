pub mod assemble;
pub mod assign;
pub mod error;
pub mod pairing;
pub mod patterns;

use chrono::NaiveDate;
use tracing::{info, warn};

pub use assemble::{Location, MeetingOccurrence};
pub use error::ScheduleError;

/// What to do with a token that matched a pattern but does not resolve to a
/// real date or time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Drop that one pairing with a warning and keep going (default).
    SkipWithWarning,
    /// Fail the whole document on the first bad token.
    Abort,
}

/// Static per-agency context plus the two policy knobs.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub location: Location,
    pub classification: &'static str,
    pub timezone: &'static str,
    pub rollover_grace_days: i64,
    pub recovery: RecoveryPolicy,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            location: Location {
                name: "Cape Cod Conference Room".to_string(),
                address: "111 E. Wacker, 11th floor boardroom, Chicago, IL 60601".to_string(),
            },
            classification: "Board",
            timezone: "America/Chicago",
            rollover_grace_days: 30,
            recovery: RecoveryPolicy::SkipWithWarning,
        }
    }
}

/// Full pipeline for one document: two pattern scans → pairing → assembly.
///
/// `reference` anchors year resolution (normally today in agency-local
/// terms); injecting it keeps the pipeline deterministic under test.
pub fn extract_schedule(
    text: &str,
    source_url: &str,
    config: &ScheduleConfig,
    reference: NaiveDate,
) -> Result<Vec<MeetingOccurrence>, ScheduleError> {
    let dates = patterns::extract_dates(text);
    if dates.is_empty() {
        return Err(ScheduleError::ExtractionEmpty { stream: "date" });
    }
    let groups = patterns::extract_groups(text);
    if groups.is_empty() {
        return Err(ScheduleError::ExtractionEmpty {
            stream: "name/time group",
        });
    }
    info!(
        "Extracted {} date tokens and {} name/time groups",
        dates.len(),
        groups.len()
    );

    let pairings = pairing::pair(&dates, &groups, config.recovery)?;

    let mut occurrences = Vec::with_capacity(pairings.len());
    for built in assemble::assemble(pairings, source_url, config, reference) {
        match built {
            Ok(occurrence) => occurrences.push(occurrence),
            Err(err) => match config.recovery {
                RecoveryPolicy::Abort => return Err(err),
                RecoveryPolicy::SkipWithWarning => warn!("skipping occurrence: {}", err),
            },
        }
    }

    info!("Assembled {} meeting occurrences", occurrences.len());
    Ok(occurrences)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 6).unwrap()
    }

    fn fixture() -> String {
        std::fs::read_to_string("tests/fixtures/schedule.txt").unwrap()
    }

    const SOURCE: &str = "https://example.org/meeting-dates.pdf";

    #[test]
    fn fixture_end_to_end() {
        let occurrences =
            extract_schedule(&fixture(), SOURCE, &ScheduleConfig::default(), reference()).unwrap();

        assert_eq!(occurrences.len(), 9);

        let board: Vec<_> = occurrences
            .iter()
            .filter(|o| o.title == "BOARD MEETING")
            .collect();
        let audit: Vec<_> = occurrences
            .iter()
            .filter(|o| o.title == "AUDIT COMMITTEE")
            .collect();
        assert_eq!(board.len(), 6);
        assert_eq!(audit.len(), 3);

        assert!(board.iter().all(|o| o.start.format("%H:%M").to_string() == "10:00"));
        assert!(audit.iter().all(|o| o.start.format("%H:%M").to_string() == "09:00"));

        // first board meeting: January 16th of the reference year
        assert_eq!(
            occurrences[0].start,
            NaiveDate::from_ymd_opt(2026, 1, 16)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
        assert!(occurrences.iter().all(|o| o.source == SOURCE));
    }

    #[test]
    fn pipeline_is_idempotent() {
        let config = ScheduleConfig::default();
        let first = extract_schedule(&fixture(), SOURCE, &config, reference()).unwrap();
        let second = extract_schedule(&fixture(), SOURCE, &config, reference()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn empty_date_stream_is_an_error_not_an_empty_result() {
        let err = extract_schedule(
            "BOARD MEETING (10:00a.m.) but no dates here",
            SOURCE,
            &ScheduleConfig::default(),
            reference(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::ExtractionEmpty { stream: "date" }
        ));
    }

    #[test]
    fn empty_group_stream_is_an_error() {
        let err = extract_schedule(
            "January 16th February 20th",
            SOURCE,
            &ScheduleConfig::default(),
            reference(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::ExtractionEmpty {
                stream: "name/time group"
            }
        ));
    }

    #[test]
    fn occurrences_preserve_date_token_order() {
        let occurrences =
            extract_schedule(&fixture(), SOURCE, &ScheduleConfig::default(), reference()).unwrap();
        let board_starts: Vec<_> = occurrences
            .iter()
            .filter(|o| o.title == "BOARD MEETING")
            .map(|o| o.start)
            .collect();
        assert!(board_starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn serializes_with_the_published_field_names() {
        let occurrences =
            extract_schedule(&fixture(), SOURCE, &ScheduleConfig::default(), reference()).unwrap();
        let json = serde_json::to_value(&occurrences[0]).unwrap();
        for field in [
            "title",
            "description",
            "classification",
            "start",
            "end",
            "all_day",
            "time_notes",
            "location",
            "links",
            "source",
            "timezone",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["location"]["name"], "Cape Cod Conference Room");
    }
}
