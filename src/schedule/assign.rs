use serde::Serialize;

use super::assemble::MeetingOccurrence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Tentative,
    Confirmed,
    Cancelled,
    Passed,
}

/// Downstream collaborator that stamps status and a stable id onto a
/// fully-formed occurrence. This crate hands occurrences off; it never
/// implements the policy itself.
pub trait Assigner {
    fn status(&self, occurrence: &MeetingOccurrence) -> Status;
    fn id(&self, occurrence: &MeetingOccurrence) -> String;
}

// ── Tests ──
