use crate::{Platform, StatusKind, UrlIndicator};

pub const SUBMIT_LABEL: &str = "Submit Video";
pub const SUBMITTING_LABEL: &str = "Submitting...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub video_url: String,
    pub hashtags: String,
    pub description: String,
    pub selected_platforms: Vec<Platform>,
    pub url_indicator: UrlIndicator,
    pub url_error: Option<String>,
    pub submit_button: SubmitButtonView,
    /// Newest first.
    pub statuses: Vec<StatusRowView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonView {
    pub enabled: bool,
    pub label: &'static str,
    pub spinner: bool,
}

impl SubmitButtonView {
    pub(crate) fn for_busy(busy: bool) -> Self {
        if busy {
            Self {
                enabled: false,
                label: SUBMITTING_LABEL,
                spinner: true,
            }
        } else {
            Self::default()
        }
    }
}

impl Default for SubmitButtonView {
    fn default() -> Self {
        Self {
            enabled: true,
            label: SUBMIT_LABEL,
            spinner: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRowView {
    pub kind: StatusKind,
    pub timestamp: String,
    pub message: String,
}
