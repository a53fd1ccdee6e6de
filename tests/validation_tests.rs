use tldr_page::validation::{
    MIN_WORDS_FOR_SUMMARY, Rejection, TextStats, contains_vowel, validate,
};

#[test]
fn test_empty_and_whitespace_are_empty() {
    assert_eq!(validate(""), Err(Rejection::Empty));
    assert_eq!(validate("   \n\t  "), Err(Rejection::Empty));
}

#[test]
fn test_fewer_than_ten_words_is_too_short() {
    // Nine ordinary words
    let text = "nine words only here in this short test sentence";
    assert_eq!(validate(text), Err(Rejection::TooShort));

    // Gibberish that is also short reports TooShort, not Nonsensical
    assert_eq!(validate("zzz xqw brr"), Err(Rejection::TooShort));

    // A single long word
    assert_eq!(validate("supercalifragilisticexpialidocious"), Err(Rejection::TooShort));
}

#[test]
fn test_ten_ordinary_words_are_accepted() {
    let text = "the quick brown fox jumps over lazy dog again now";
    assert_eq!(validate(text), Ok(()));

    let stats = TextStats::from_text(text);
    assert_eq!(stats.word_count, 10);
    assert_eq!(stats.vowelless_count, 0);
    assert_eq!(stats.total_chars, 40);
}

#[test]
fn test_single_letters_are_nonsensical() {
    // a, e, i carry vowels; the other seven do not
    let text = "a b c d e f g h i j";
    let stats = TextStats::from_text(text);
    assert_eq!(stats.vowelless_count, 7);
    assert_eq!(validate(text), Err(Rejection::Nonsensical));
}

#[test]
fn test_half_vowelless_words_is_nonsensical() {
    let text = "rhythm psst nth brr hmm apple orange banana grape melon";
    assert!((TextStats::from_text(text).vowelless_ratio() - 0.5).abs() < f64::EPSILON);
    assert_eq!(validate(text), Err(Rejection::Nonsensical));
}

#[test]
fn test_vowelless_ratio_at_threshold_is_accepted() {
    // 4 of 10 is exactly 40%, which is allowed
    let text = "rhythm psst nth hmm apple orange banana grape melon lemon";
    assert!((TextStats::from_text(text).vowelless_ratio() - 0.4).abs() < f64::EPSILON);
    assert_eq!(validate(text), Ok(()));
}

#[test]
fn test_short_average_word_length_is_nonsensical() {
    // Every word has a vowel but the average length is 2.0
    let text = "an be do go he if in is it me";
    let stats = TextStats::from_text(text);
    assert_eq!(stats.vowelless_count, 0);
    assert!((stats.avg_word_len() - 2.0).abs() < f64::EPSILON);
    assert_eq!(validate(text), Err(Rejection::Nonsensical));
}

#[test]
fn test_average_word_length_at_threshold_is_accepted() {
    // 5 * 2 + 5 * 3 = 25 characters over 10 words
    let text = "ab ab ab ab ab abc abc abc abc abc";
    assert!((TextStats::from_text(text).avg_word_len() - 2.5).abs() < f64::EPSILON);
    assert_eq!(validate(text), Ok(()));
}

#[test]
fn test_punctuation_is_kept_on_words() {
    assert!(!contains_vowel("Mr."));
    assert!(contains_vowel("I"));
    assert!(contains_vowel("APPLE!"));

    // Trailing punctuation counts toward the character total
    let stats = TextStats::from_text("hi, there.");
    assert_eq!(stats.total_chars, 9);
}

#[test]
fn test_any_whitespace_separates_words() {
    let text = "the\tquick\nbrown  fox\r\njumps over lazy dog again now";
    assert_eq!(TextStats::from_text(text).word_count, 10);
    assert_eq!(validate(text), Ok(()));
}

#[test]
fn test_validation_is_repeatable() {
    for text in ["", "too short", "a b c d e f g h i j", "the quick brown fox jumps over lazy dog again now"] {
        assert_eq!(validate(text), validate(text));
    }
}

#[test]
fn test_rejection_messages() {
    assert!(Rejection::Empty.user_message().contains("cannot be empty"));
    assert!(
        Rejection::TooShort
            .user_message()
            .contains(&MIN_WORDS_FOR_SUMMARY.to_string())
    );
    let nonsense = Rejection::Nonsensical.user_message();
    assert!(nonsense.contains("nonsensical"));
    // The message never says which heuristic fired
    assert!(!nonsense.contains("vowel"));
    assert!(!nonsense.contains("length"));
}
