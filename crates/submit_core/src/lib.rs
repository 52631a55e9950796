//! Submitter core: pure form state machine, input normalization and view-model helpers.
mod effect;
mod hashtags;
mod msg;
mod payload;
mod platform;
mod state;
mod status;
mod update;
mod url_check;
mod view_model;

pub use effect::Effect;
pub use hashtags::format_hashtags;
pub use msg::{Moment, Msg, SubmissionOutcome};
pub use payload::SubmissionPayload;
pub use platform::{Platform, UnknownPlatform};
pub use state::{AppState, FormFields, SubmitPhase};
pub use status::{StatusEntry, StatusKind, StatusLog, STATUS_LOG_CAPACITY};
pub use update::update;
pub use url_check::{check_url, is_valid_url, UrlIndicator, INVALID_URL_MESSAGE};
pub use view_model::{
    AppViewModel, StatusRowView, SubmitButtonView, SUBMITTING_LABEL, SUBMIT_LABEL,
};
