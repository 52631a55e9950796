use url::Url;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// Feedback state for the video URL field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlIndicator {
    /// Untouched or blank field; nothing to flag yet.
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl UrlIndicator {
    pub fn error_message(self) -> Option<&'static str> {
        match self {
            UrlIndicator::Invalid => Some(INVALID_URL_MESSAGE),
            UrlIndicator::Neutral | UrlIndicator::Valid => None,
        }
    }
}

/// Classifies raw field input. Surrounding whitespace is ignored.
pub fn check_url(input: &str) -> UrlIndicator {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return UrlIndicator::Neutral;
    }
    match Url::parse(trimmed) {
        // Relative references never parse. Scheme-plus-path forms (`mailto:`, `foo:/bar`)
        // lack the `//authority` part.
        Ok(url) if url.has_authority() => UrlIndicator::Valid,
        _ => UrlIndicator::Invalid,
    }
}

/// Blank input counts as valid so an untouched field is not flagged.
pub fn is_valid_url(input: &str) -> bool {
    check_url(input) != UrlIndicator::Invalid
}
