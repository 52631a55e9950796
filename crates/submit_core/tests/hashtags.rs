use submit_core::format_hashtags;

#[test]
fn mixed_separators_and_punctuation_are_normalized() {
    assert_eq!(format_hashtags("go viral, #fun!!"), "#go #viral #fun");
}

#[test]
fn byte_order_mark_separates_tokens() {
    assert_eq!(format_hashtags("a\u{feff}b"), "#a #b");
    assert_eq!(format_hashtags("\u{feff}#tag\u{feff}"), "#tag");
}

#[test]
fn bare_hash_is_dropped() {
    assert_eq!(format_hashtags("#"), "");
    assert_eq!(format_hashtags("# , !!! #"), "");
}

#[test]
fn empty_and_separator_only_input_yields_empty() {
    assert_eq!(format_hashtags(""), "");
    assert_eq!(format_hashtags(" ,, \t\n ,"), "");
}

#[test]
fn existing_hash_tokens_keep_inner_hashes() {
    assert_eq!(format_hashtags("#a#b c#d"), "#a#b #cd");
}

#[test]
fn underscores_and_digits_survive() {
    assert_eq!(format_hashtags("summer_2024,,best-day"), "#summer_2024 #bestday");
}

#[test]
fn non_ascii_letters_are_stripped() {
    assert_eq!(format_hashtags("café #naïve ü"), "#caf #nave");
}

#[test]
fn formatting_is_idempotent() {
    let inputs = [
        "go viral, #fun!!",
        "#",
        "##",
        "  #a#b  c#d,e  ",
        "tab\tseparated\nlines",
        "emoji 🎉 party",
        "",
        ",#x,,y,",
    ];
    for input in inputs {
        let once = format_hashtags(input);
        assert_eq!(format_hashtags(&once), once, "input: {input:?}");
    }
}
