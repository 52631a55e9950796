use crate::{Platform, StatusEntry};

/// The current time rendered both ways the form needs it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Moment {
    /// ISO-8601 in UTC, e.g. `2024-05-01T12:30:00.000Z`. Goes into the payload.
    pub iso8601: String,
    /// Local, human-readable. Goes into status entries.
    pub display: String,
}

/// How the outbound request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    /// Human-readable failure, e.g. `HTTP 500: Internal Server Error`.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the video URL field.
    UrlEdited(String),
    /// User edited the hashtags field; the stored value is normalized.
    HashtagsEdited(String),
    /// User edited the description field.
    DescriptionEdited(String),
    /// User checked or unchecked a platform box.
    PlatformToggled { platform: Platform, checked: bool },
    /// User pressed submit.
    SubmitRequested { submission_id: String, now: Moment },
    /// The outbound request for `submission_id` resolved.
    SubmissionFinished {
        submission_id: String,
        outcome: SubmissionOutcome,
        now: Moment,
    },
    /// Restore history loaded from storage at startup (newest first).
    RestoreHistory(Vec<StatusEntry>),
    /// User clicked "clear history".
    ClearHistoryClicked,
}
