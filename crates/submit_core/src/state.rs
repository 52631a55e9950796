use std::collections::BTreeSet;

use crate::view_model::{AppViewModel, StatusRowView, SubmitButtonView};
use crate::{Platform, StatusEntry, StatusLog, UrlIndicator};

/// Editable form contents. `Default` is the freshly reset form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub video_url: String,
    pub platforms: BTreeSet<Platform>,
    pub hashtags: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting {
        submission_id: String,
        platforms: Vec<Platform>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    form: FormFields,
    url_indicator: UrlIndicator,
    phase: SubmitPhase,
    log: StatusLog,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting { .. })
    }

    pub fn history(&self) -> &StatusLog {
        &self.log
    }

    pub fn view(&self) -> AppViewModel {
        let busy = self.is_submitting();
        AppViewModel {
            video_url: self.form.video_url.clone(),
            hashtags: self.form.hashtags.clone(),
            description: self.form.description.clone(),
            selected_platforms: self.form.platforms.iter().copied().collect(),
            url_indicator: self.url_indicator,
            url_error: self.url_indicator.error_message().map(ToOwned::to_owned),
            submit_button: SubmitButtonView::for_busy(busy),
            statuses: self
                .log
                .iter()
                .map(|entry| StatusRowView {
                    kind: entry.kind,
                    timestamp: entry.timestamp.clone(),
                    message: entry.message.clone(),
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Forces the submit control back to idle without recording an outcome.
    ///
    /// Used by drivers when a submission is abandoned before it resolved.
    pub fn release_submit(&mut self) -> bool {
        if self.is_submitting() {
            self.phase = SubmitPhase::Idle;
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn form_mut(&mut self) -> &mut FormFields {
        &mut self.form
    }

    pub(crate) fn set_url_indicator(&mut self, indicator: UrlIndicator) {
        self.url_indicator = indicator;
    }

    pub(crate) fn set_phase(&mut self, phase: SubmitPhase) {
        self.phase = phase;
    }

    pub(crate) fn record(&mut self, entry: StatusEntry) {
        self.log.push(entry);
        self.mark_dirty();
    }

    pub(crate) fn replace_history(&mut self, log: StatusLog) {
        self.log = log;
        self.mark_dirty();
    }

    pub(crate) fn reset_form(&mut self) {
        self.form = FormFields::default();
        self.url_indicator = UrlIndicator::Neutral;
        self.mark_dirty();
    }
}
