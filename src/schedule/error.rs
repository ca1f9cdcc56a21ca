use thiserror::Error;

/// Failures while turning extracted schedule text into occurrences.
///
/// `ExtractionEmpty` and `PairingExhausted` are fatal to the document;
/// `DateParse`/`TimeParse` are recoverable under the default policy
/// (see `RecoveryPolicy`).
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no {stream} tokens found in document text")]
    ExtractionEmpty { stream: &'static str },

    #[error("date decrease at token index {date_index} with no group left to assign")]
    PairingExhausted { date_index: usize },

    #[error("date token {token:?} does not resolve to a calendar date")]
    DateParse { token: String },

    #[error("time token {token:?} does not resolve to a time of day")]
    TimeParse { token: String },
}
