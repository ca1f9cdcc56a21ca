use chrono::NaiveDate;
use tracing::warn;

use super::error::ScheduleError;
use super::patterns::{DateToken, NameTimeGroup};
use super::RecoveryPolicy;

/// All tokens are compared inside one nominal year so only month/day
/// ordering matters. 2000 is a leap year, so February 29th stays comparable.
const NOMINAL_YEAR: i32 = 2000;

/// One date token bound to the group active at that point in the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing<'a> {
    pub group: &'a NameTimeGroup,
    pub date: &'a DateToken,
}

/// Resolve a date token to its month/day value in the nominal year.
pub(crate) fn comparable(token: &DateToken) -> Result<NaiveDate, ScheduleError> {
    let stripped = token.text.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let with_year = format!("{} {}", stripped.trim(), NOMINAL_YEAR);
    NaiveDate::parse_from_str(&with_year, "%B %d %Y")
        .or_else(|_| NaiveDate::parse_from_str(&with_year, "%b %d %Y"))
        .map_err(|_| ScheduleError::DateParse {
            token: token.text.clone(),
        })
}

/// Walk the date tokens in document order, assigning each to the current
/// group. The source table lists each meeting type's dates as an increasing
/// run, so a non-increasing step is the row-transition signal: it advances
/// the group cursor, which only ever moves forward.
///
/// Runs out of groups ⇒ `PairingExhausted` at the offending index. A token
/// that matched the pattern but is not a real calendar date is skipped with
/// a warning, or aborts under `RecoveryPolicy::Abort`.
pub fn pair<'a>(
    dates: &'a [DateToken],
    groups: &'a [NameTimeGroup],
    policy: RecoveryPolicy,
) -> Result<Vec<Pairing<'a>>, ScheduleError> {
    if groups.is_empty() {
        return Err(ScheduleError::ExtractionEmpty {
            stream: "name/time group",
        });
    }

    let mut cursor = 0usize;
    let mut previous: Option<NaiveDate> = None;
    let mut pairings = Vec::with_capacity(dates.len());

    for (i, date) in dates.iter().enumerate() {
        let value = match comparable(date) {
            Ok(value) => value,
            Err(err) => match policy {
                RecoveryPolicy::Abort => return Err(err),
                RecoveryPolicy::SkipWithWarning => {
                    warn!("skipping date token {:?}: {}", date.text, err);
                    continue;
                }
            },
        };

        if previous.is_some_and(|prev| value < prev) {
            cursor += 1;
            if cursor >= groups.len() {
                return Err(ScheduleError::PairingExhausted { date_index: i });
            }
        }

        pairings.push(Pairing {
            group: &groups[cursor],
            date,
        });
        previous = Some(value);
    }

    Ok(pairings)
}

// ── Tests ──
