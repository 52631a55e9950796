use std::io::IsTerminal;

use owo_colors::OwoColorize;
use submit_core::{AppViewModel, StatusKind, StatusRowView, UrlIndicator};

pub const EMPTY_HISTORY: &str = "No submissions yet";

/// Full history, newest first.
pub fn render_history(view: &AppViewModel) -> Vec<String> {
    if view.statuses.is_empty() {
        return vec![EMPTY_HISTORY.to_string()];
    }
    view.statuses.iter().map(format_status_row).collect()
}

pub fn format_status_row(row: &StatusRowView) -> String {
    format!(
        "[{kind:<7}] {timestamp} | {message}",
        kind = row.kind,
        timestamp = row.timestamp,
        message = row.message
    )
}

/// Inline feedback for the URL field, if any.
pub fn render_url_feedback(view: &AppViewModel) -> Option<String> {
    match view.url_indicator {
        UrlIndicator::Invalid => view.url_error.clone(),
        UrlIndicator::Neutral | UrlIndicator::Valid => None,
    }
}

/// Turns successive views into the lines that changed since the previous one.
#[derive(Debug, Default)]
pub struct LiveRenderer {
    last_label: Option<&'static str>,
    last_top: Option<StatusRowView>,
    last_len: usize,
}

impl LiveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first view only primes the renderer; history already on screen is not repeated.
    pub fn lines_for(&mut self, view: &AppViewModel) -> Vec<String> {
        let mut lines = Vec::new();
        let primed = self.last_label.is_some();

        let label = view.submit_button.label;
        if primed && self.last_label != Some(label) && view.submit_button.spinner {
            lines.push(format!("... {label}"));
        }
        self.last_label = Some(label);

        let top = view.statuses.first().cloned();
        let grew = view.statuses.len() != self.last_len || top != self.last_top;
        if primed && grew {
            if let Some(row) = &top {
                lines.push(format_status_row(row));
            }
        }
        self.last_top = top;
        self.last_len = view.statuses.len();

        lines
    }
}

pub fn print_lines(lines: &[String]) {
    let color = std::io::stdout().is_terminal();
    for line in lines {
        if color {
            println!("{}", paint(line));
        } else {
            println!("{line}");
        }
    }
}

fn paint(line: &str) -> String {
    if line.starts_with(&format!("[{:<7}]", StatusKind::Success)) {
        line.green().to_string()
    } else if line.starts_with(&format!("[{:<7}]", StatusKind::Error)) {
        line.red().to_string()
    } else if line.starts_with(&format!("[{:<7}]", StatusKind::Pending)) {
        line.yellow().to_string()
    } else {
        line.dimmed().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use submit_core::{update, AppState, Moment, Msg, Platform, StatusEntry};

    use super::*;

    fn row(kind: StatusKind, message: &str) -> StatusRowView {
        StatusRowView {
            kind,
            timestamp: "5/1/2024, 12:00:00 PM".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_history_shows_placeholder() {
        assert_eq!(render_history(&AppViewModel::default()), vec![EMPTY_HISTORY]);
    }

    #[test]
    fn rows_are_aligned_by_kind() {
        let view = AppViewModel {
            statuses: vec![row(StatusKind::Success, "done"), row(StatusKind::Error, "bad")],
            ..AppViewModel::default()
        };
        assert_eq!(
            render_history(&view),
            vec![
                "[success] 5/1/2024, 12:00:00 PM | done",
                "[error  ] 5/1/2024, 12:00:00 PM | bad",
            ]
        );
    }

    #[test]
    fn url_feedback_only_for_invalid_input() {
        let (state, _) = update(AppState::new(), Msg::UrlEdited("nope".to_string()));
        assert_eq!(
            render_url_feedback(&state.view()).as_deref(),
            Some("Please enter a valid URL")
        );
        let (state, _) = update(state, Msg::UrlEdited(String::new()));
        assert_eq!(render_url_feedback(&state.view()), None);
    }

    #[test]
    fn live_renderer_reports_busy_and_new_entries() {
        let (state, _) = update(
            AppState::new(),
            Msg::RestoreHistory(vec![StatusEntry::new(StatusKind::Success, "old", "t0")]),
        );
        let (state, _) = update(state, Msg::UrlEdited("https://example.com/v".to_string()));
        let (state, _) = update(
            state,
            Msg::PlatformToggled {
                platform: Platform::Twitter,
                checked: true,
            },
        );

        let mut renderer = LiveRenderer::new();
        assert!(renderer.lines_for(&state.view()).is_empty());

        let (state, _) = update(
            state,
            Msg::SubmitRequested {
                submission_id: "id".to_string(),
                now: Moment {
                    iso8601: "2024-05-01T12:00:00.000Z".to_string(),
                    display: "t1".to_string(),
                },
            },
        );
        assert_eq!(
            renderer.lines_for(&state.view()),
            vec![
                "... Submitting...".to_string(),
                "[pending] t1 | Submitting video: https://example.com/v".to_string(),
            ]
        );
        assert!(renderer.lines_for(&state.view()).is_empty());
    }
}
