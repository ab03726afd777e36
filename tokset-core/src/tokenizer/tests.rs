use super::*;

fn drain(mut tokenizer: Tokenizer) -> Vec<String> {
    let mut out = Vec::new();
    while tokenizer.has_more_tokens() {
        out.push(tokenizer.next_token().unwrap());
    }
    out
}

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(drain(Tokenizer::new("a b  c")), vec!["a", "b", "c"]);
}

#[test]
fn test_mixed_whitespace_delimiters() {
    let tokens = drain(Tokenizer::new(" one\ttwo\r\nthree \n"));
    assert_eq!(tokens, vec!["one", "two", "three"]);
}

#[test]
fn test_form_feed_is_not_a_default_delimiter() {
    let tokens = drain(Tokenizer::new("a\u{000C}b c"));
    assert_eq!(tokens, vec!["a\u{000C}b", "c"]);
}

#[test]
fn test_input_without_delimiters_is_one_token() {
    let mut tokenizer = Tokenizer::new("standalone");
    assert!(tokenizer.has_more_tokens());
    assert_eq!(tokenizer.next_token().unwrap(), "standalone");
    assert!(!tokenizer.has_more_tokens());
    assert_eq!(tokenizer.next_token(), Err(SupportError::Exhausted));
}

#[test]
fn test_empty_input_yields_nothing() {
    let mut tokenizer = Tokenizer::new("");
    assert!(!tokenizer.has_more_tokens());
    assert_eq!(tokenizer.token_count(), 0);
    assert_eq!(tokenizer.next_token(), Err(SupportError::Exhausted));

    let mut retaining = Tokenizer::with_options("", ",", true);
    assert!(!retaining.has_more_tokens());
    assert_eq!(retaining.next_token(), Err(SupportError::Exhausted));
}

#[test]
fn test_only_delimiters_consuming_mode() {
    let mut tokenizer = Tokenizer::new(" \t \n");
    assert!(!tokenizer.has_more_tokens());
    assert_eq!(tokenizer.token_count(), 0);
    assert_eq!(tokenizer.next_token(), Err(SupportError::Exhausted));
}

#[test]
fn test_only_delimiters_retaining_mode() {
    let tokens = drain(Tokenizer::with_options(" \t ", DelimiterSet::default(), true));
    assert_eq!(tokens, vec![" ", "\t", " "]);
}

#[test]
fn test_retaining_mode_does_not_coalesce() {
    let tokens = drain(Tokenizer::with_options("a,b,,c", ",", true));
    assert_eq!(tokens, vec!["a", ",", "b", ",", ",", "c"]);
}

#[test]
fn test_retaining_mode_leading_and_trailing_delimiters() {
    let tokens = drain(Tokenizer::with_options(";x;", ";", true));
    assert_eq!(tokens, vec![";", "x", ";"]);
}

#[test]
fn test_retaining_mode_without_delimiters_present() {
    let tokens = drain(Tokenizer::with_options("abc", ",", true));
    assert_eq!(tokens, vec!["abc"]);
}

#[test]
fn test_retaining_mode_exhaustion() {
    let mut tokenizer = Tokenizer::with_options("k=v", "=", true);
    assert_eq!(tokenizer.token_count(), 3);
    assert_eq!(tokenizer.next_token().unwrap(), "k");
    assert_eq!(tokenizer.next_token().unwrap(), "=");
    assert_eq!(tokenizer.next_token().unwrap(), "v");
    assert!(!tokenizer.has_more_tokens());
    assert_eq!(tokenizer.next_token(), Err(SupportError::Exhausted));
}

#[test]
fn test_retaining_mode_leaves_source_untouched() {
    let mut tokenizer = Tokenizer::with_options("a b", " ", true);
    tokenizer.next_token().unwrap();
    tokenizer.next_token().unwrap();
    assert_eq!(tokenizer.source(), "a b");
}

#[test]
fn test_retaining_mode_ignores_new_delimiters() {
    let mut tokenizer = Tokenizer::with_options("a b,c", " ", true);
    assert_eq!(tokenizer.next_token_with(",").unwrap(), "a");
    assert_eq!(tokenizer.delimiters().as_chars(), &[',']);
    assert_eq!(drain(tokenizer), vec![" ", "b,c"]);
}

#[test]
fn test_count_tracks_last_split() {
    let mut tokenizer = Tokenizer::new("a b  c");
    assert_eq!(tokenizer.token_count(), 3);

    tokenizer.next_token().unwrap();
    assert_eq!(tokenizer.token_count(), 2);

    tokenizer.next_token().unwrap();
    tokenizer.next_token().unwrap();
    assert_eq!(tokenizer.token_count(), 0);
}

#[test]
fn test_source_shrinks_as_tokens_are_consumed() {
    let mut tokenizer = Tokenizer::new("  alpha  beta gamma ");
    assert_eq!(tokenizer.next_token().unwrap(), "alpha");
    assert_eq!(tokenizer.source(), "beta gamma ");
    assert_eq!(tokenizer.next_token().unwrap(), "beta");
    assert_eq!(tokenizer.source(), "gamma ");
    assert_eq!(tokenizer.next_token().unwrap(), "gamma");
    assert_eq!(tokenizer.source(), "");
    assert!(!tokenizer.has_more_tokens());
}

#[test]
fn test_recurring_token_text() {
    let mut tokenizer = Tokenizer::new("ab a b ab");
    assert_eq!(tokenizer.next_token().unwrap(), "ab");
    assert_eq!(tokenizer.source(), "a b ab");
    assert_eq!(tokenizer.next_token().unwrap(), "a");
    assert_eq!(tokenizer.source(), "b ab");
    assert_eq!(drain(tokenizer), vec!["b", "ab"]);
}

#[test]
fn test_next_token_with_switches_delimiters() {
    let mut tokenizer = Tokenizer::new("key=value pair");
    assert_eq!(tokenizer.next_token_with("=").unwrap(), "key");
    assert_eq!(tokenizer.source(), "value pair");
    assert_eq!(tokenizer.next_token_with(" ").unwrap(), "value");
    assert_eq!(tokenizer.next_token().unwrap(), "pair");
    assert!(!tokenizer.has_more_tokens());
}

#[test]
fn test_next_token_with_after_exhaustion() {
    let mut tokenizer = Tokenizer::new("x");
    tokenizer.next_token().unwrap();
    assert_eq!(tokenizer.next_token_with(","), Err(SupportError::Exhausted));
}

#[test]
fn test_empty_delimiter_set() {
    let tokens = drain(Tokenizer::with_delimiters("a b,c", DelimiterSet::empty()));
    assert_eq!(tokens, vec!["a b,c"]);
}

#[test]
fn test_multibyte_characters() {
    assert_eq!(drain(Tokenizer::new("αβ γ")), vec!["αβ", "γ"]);

    let tokens = drain(Tokenizer::with_options("東京・大阪", "・", true));
    assert_eq!(tokens, vec!["東京", "・", "大阪"]);
}

#[test]
fn test_iterator_matches_manual_drain() {
    let collected: Vec<String> = Tokenizer::with_delimiters("1;2;;3", ";").collect();
    assert_eq!(collected, drain(Tokenizer::with_delimiters("1;2;;3", ";")));
}

#[test]
fn test_tokenize_helper() {
    assert_eq!(tokenize("p|q", "|", false), vec!["p", "q"]);
    assert_eq!(tokenize("p|q", "|", true), vec!["p", "|", "q"]);
}

#[test]
fn test_accessors() {
    let tokenizer = Tokenizer::with_options("x", ",", true);
    assert!(tokenizer.retains_delimiters());
    assert_eq!(tokenizer.delimiters(), &DelimiterSet::from(","));
    assert!(!Tokenizer::new("x").retains_delimiters());
}
