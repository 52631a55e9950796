use crate::{StatusEntry, SubmissionPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Prepend the entry to the persisted history.
    PersistStatus(StatusEntry),
    /// Post the payload; the driver answers with `Msg::SubmissionFinished`.
    SendSubmission(SubmissionPayload),
    /// Remove the persisted history key entirely.
    ClearPersistedHistory,
}
