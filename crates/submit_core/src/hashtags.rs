/// Normalizes free text into space-separated `#tag` tokens.
///
/// Tokens are split on runs of whitespace (U+FEFF included) and commas. A token
/// already starting with `#` keeps only `[A-Za-z0-9_#]`; any other token keeps
/// `[A-Za-z0-9_]` and gains a leading `#`. Tokens that end up as a bare `#` are
/// dropped. The output is a fixed point: formatting it again yields the same string.
pub fn format_hashtags(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 1);
    for raw in input
        .split(|c: char| c.is_whitespace() || c == '\u{feff}' || c == ',')
        .filter(|token| !token.is_empty())
    {
        let tag = clean_token(raw);
        if tag.len() <= 1 {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&tag);
    }
    out
}

fn clean_token(raw: &str) -> String {
    let keep_hash = raw.starts_with('#');
    let mut tag = String::with_capacity(raw.len() + 1);
    if !keep_hash {
        tag.push('#');
    }
    tag.extend(
        raw.chars()
            .filter(|&c| c.is_ascii_alphanumeric() || c == '_' || (keep_hash && c == '#')),
    );
    tag
}
