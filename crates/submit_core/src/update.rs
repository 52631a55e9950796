use crate::{
    check_url, format_hashtags, AppState, Effect, Moment, Msg, StatusEntry, StatusKind, StatusLog,
    SubmissionOutcome, SubmissionPayload, SubmitPhase, UrlIndicator, INVALID_URL_MESSAGE,
};

const MISSING_URL_MESSAGE: &str = "Please enter a video URL";
const MISSING_PLATFORM_MESSAGE: &str = "Please select at least one platform";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlEdited(raw) => {
            state.set_url_indicator(check_url(&raw));
            state.form_mut().video_url = raw;
            state.mark_dirty();
            Vec::new()
        }
        Msg::HashtagsEdited(raw) => {
            state.form_mut().hashtags = format_hashtags(&raw);
            state.mark_dirty();
            Vec::new()
        }
        Msg::DescriptionEdited(text) => {
            state.form_mut().description = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::PlatformToggled { platform, checked } => {
            let platforms = &mut state.form_mut().platforms;
            let changed = if checked {
                platforms.insert(platform)
            } else {
                platforms.remove(&platform)
            };
            if changed {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SubmitRequested { submission_id, now } => {
            // A second submit while one is in flight is rejected outright.
            if state.is_submitting() {
                return (state, Vec::new());
            }
            begin_submission(&mut state, submission_id, now)
        }
        Msg::SubmissionFinished {
            submission_id,
            outcome,
            now,
        } => {
            let in_flight = match state.phase() {
                SubmitPhase::Submitting {
                    submission_id: current,
                    platforms,
                } if *current == submission_id => Some(platforms.clone()),
                _ => None,
            };
            // Stale or unknown completions leave the state untouched.
            let Some(platforms) = in_flight else {
                return (state, Vec::new());
            };
            state.set_phase(SubmitPhase::Idle);
            state.mark_dirty();

            let entry = match outcome {
                SubmissionOutcome::Delivered => {
                    state.reset_form();
                    let names = platforms
                        .iter()
                        .map(|p| p.id())
                        .collect::<Vec<_>>()
                        .join(", ");
                    StatusEntry::new(
                        StatusKind::Success,
                        format!("Successfully submitted to {names}"),
                        now.display,
                    )
                }
                SubmissionOutcome::Failed(reason) => StatusEntry::new(
                    StatusKind::Error,
                    format!("Failed to submit: {reason}"),
                    now.display,
                ),
            };
            vec![record(&mut state, entry)]
        }
        Msg::RestoreHistory(entries) => {
            state.replace_history(StatusLog::from_newest_first(entries));
            Vec::new()
        }
        Msg::ClearHistoryClicked => {
            state.replace_history(StatusLog::new());
            vec![Effect::ClearPersistedHistory]
        }
    };

    (state, effects)
}

fn begin_submission(state: &mut AppState, submission_id: String, now: Moment) -> Vec<Effect> {
    let indicator = check_url(&state.form().video_url);
    state.set_url_indicator(indicator);
    state.mark_dirty();

    let rejection = match indicator {
        UrlIndicator::Neutral => Some(MISSING_URL_MESSAGE),
        UrlIndicator::Invalid => Some(INVALID_URL_MESSAGE),
        UrlIndicator::Valid if state.form().platforms.is_empty() => Some(MISSING_PLATFORM_MESSAGE),
        UrlIndicator::Valid => None,
    };
    if let Some(message) = rejection {
        let entry = StatusEntry::new(StatusKind::Error, message, now.display);
        return vec![record(state, entry)];
    }

    let form = state.form();
    let payload = SubmissionPayload {
        video_url: form.video_url.trim().to_string(),
        platforms: form.platforms.iter().copied().collect(),
        hashtags: format_hashtags(&form.hashtags),
        description: form.description.clone(),
        timestamp: now.iso8601,
        submission_id: submission_id.clone(),
    };

    state.set_phase(SubmitPhase::Submitting {
        submission_id,
        platforms: payload.platforms.clone(),
    });
    let pending = StatusEntry::new(
        StatusKind::Pending,
        format!("Submitting video: {}", payload.video_url),
        now.display,
    );
    vec![record(state, pending), Effect::SendSubmission(payload)]
}

fn record(state: &mut AppState, entry: StatusEntry) -> Effect {
    state.record(entry.clone());
    Effect::PersistStatus(entry)
}
