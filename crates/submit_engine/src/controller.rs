use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use submit_core::{
    update, AppState, AppViewModel, Effect, Msg, Platform, StatusEntry, SubmissionOutcome,
    SubmissionPayload, UrlIndicator,
};
use submit_logging::{submit_debug, submit_info, submit_warn};

use crate::{Clock, FailureKind, SendError, StatusStore, SubmissionIds, Transport};

/// Drives the form state machine and executes its effects.
///
/// History is restored from the store on construction. Every status entry the
/// state machine records is appended to the store as well, so the rendered
/// history and the persisted copy move together.
pub struct SubmissionController {
    state: AppState,
    transport: Arc<dyn Transport>,
    store: StatusStore,
    clock: Arc<dyn Clock>,
    ids: SubmissionIds,
    observer: Option<Box<dyn FnMut(&AppViewModel) + Send>>,
}

impl SubmissionController {
    pub fn new(transport: Arc<dyn Transport>, store: StatusStore, clock: Arc<dyn Clock>) -> Self {
        let history = store.load();
        let mut controller = Self {
            state: AppState::new(),
            transport,
            store,
            clock,
            ids: SubmissionIds::new(),
            observer: None,
        };
        controller.dispatch(Msg::RestoreHistory(history));
        controller
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Calls `observer` with a fresh view after every change.
    ///
    /// Once set, the observer owns the dirty flag: `consume_dirty` reports
    /// nothing new.
    pub fn set_observer(&mut self, observer: impl FnMut(&AppViewModel) + Send + 'static) {
        self.observer = Some(Box::new(observer));
        self.notify();
    }

    /// Whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn edit_url(&mut self, raw: &str) -> UrlIndicator {
        self.dispatch(Msg::UrlEdited(raw.to_string()));
        self.state.view().url_indicator
    }

    /// Stores the hashtags in normalized form and returns them.
    pub fn edit_hashtags(&mut self, raw: &str) -> String {
        self.dispatch(Msg::HashtagsEdited(raw.to_string()));
        self.state.form().hashtags.clone()
    }

    pub fn edit_description(&mut self, text: &str) {
        self.dispatch(Msg::DescriptionEdited(text.to_string()));
    }

    pub fn set_platform(&mut self, platform: Platform, checked: bool) {
        self.dispatch(Msg::PlatformToggled { platform, checked });
    }

    pub fn clear_history(&mut self) {
        self.dispatch(Msg::ClearHistoryClicked);
    }

    /// Validates the form, posts it and records the outcome.
    ///
    /// Returns the last status entry recorded by this attempt. The submit
    /// control is back to idle when this returns, and also if the returned
    /// future is dropped before completion.
    pub async fn submit(&mut self) -> Option<StatusEntry> {
        let submission_id = self.ids.next_id();
        let now = self.clock.now();
        let effects = self.dispatch(Msg::SubmitRequested { submission_id, now });
        let Some(payload) = effects.into_iter().find_map(|effect| match effect {
            Effect::SendSubmission(payload) => Some(payload),
            _ => None,
        }) else {
            submit_debug!("Submit rejected before sending");
            return self.state.history().latest().cloned();
        };

        {
            // The scope is thread-local, so it must not be held across an await.
            let _scope = submit_logging::enter_submission(&payload.submission_id);
            submit_info!(
                "Sending {} to {}",
                payload.video_url,
                payload.platform_list()
            );
        }

        let outcome = self.send_guarded(&payload).await;
        {
            let _scope = submit_logging::enter_submission(&payload.submission_id);
            match &outcome {
                SubmissionOutcome::Delivered => submit_info!("Submission delivered"),
                SubmissionOutcome::Failed(reason) => {
                    submit_warn!("Submission failed: {}", reason)
                }
            }
        }

        let now = self.clock.now();
        self.dispatch(Msg::SubmissionFinished {
            submission_id: payload.submission_id,
            outcome,
            now,
        });
        self.state.history().latest().cloned()
    }

    async fn send_guarded(&mut self, payload: &SubmissionPayload) -> SubmissionOutcome {
        let transport = Arc::clone(&self.transport);
        let guard = SubmitGuard::new(&mut self.state);
        let result = AssertUnwindSafe(transport.send(payload))
            .catch_unwind()
            .await;
        guard.disarm();

        match result {
            Ok(Ok(receipt)) => {
                let _scope = submit_logging::enter_submission(&payload.submission_id);
                submit_debug!("Endpoint answered {} with {}", receipt.status, receipt.body);
                SubmissionOutcome::Delivered
            }
            Ok(Err(err)) => SubmissionOutcome::Failed(err.to_string()),
            Err(panic) => {
                let err = SendError::new(FailureKind::Internal, panic_message(panic.as_ref()));
                SubmissionOutcome::Failed(err.to_string())
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.notify();

        let mut pending = Vec::new();
        for effect in effects {
            match effect {
                Effect::PersistStatus(entry) => self.store.append(&entry),
                Effect::ClearPersistedHistory => self.store.clear(),
                Effect::SendSubmission(_) => pending.push(effect),
            }
        }
        pending
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            if self.state.consume_dirty() {
                observer(&self.state.view());
            }
        }
    }
}

/// Returns the submit control to idle unless disarmed.
struct SubmitGuard<'a> {
    state: &'a mut AppState,
    armed: bool,
}

impl<'a> SubmitGuard<'a> {
    fn new(state: &'a mut AppState) -> Self {
        Self { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if self.armed && self.state.release_submit() {
            submit_warn!("Submission abandoned before completion; submit control released");
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(text) = panic.downcast_ref::<&str>() {
        format!("internal error: {text}")
    } else if let Some(text) = panic.downcast_ref::<String>() {
        format!("internal error: {text}")
    } else {
        "internal error".to_string()
    }
}
