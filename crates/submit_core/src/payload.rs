use serde::{Deserialize, Serialize};

use crate::Platform;

/// JSON body posted to the submission endpoint. Built once per attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub video_url: String,
    pub platforms: Vec<Platform>,
    pub hashtags: String,
    pub description: String,
    pub timestamp: String,
    pub submission_id: String,
}

impl SubmissionPayload {
    /// Platform ids joined for status messages, e.g. `youtube, tiktok`.
    pub fn platform_list(&self) -> String {
        self.platforms
            .iter()
            .map(|p| p.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
