/// Minimum number of whitespace-separated words worth summarizing
pub const MIN_WORDS_FOR_SUMMARY: usize = 10;

/// Average word length below which text is treated as noise
pub const MIN_AVG_WORD_LENGTH: f64 = 2.5;

/// Share of words allowed to have no vowel at all ("rhythm", "Mr.", ...)
pub const MAX_VOWELLESS_WORD_RATIO: f64 = 0.40;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Why submitted text was not sent to the summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    TooShort,
    Nonsensical,
}

impl Rejection {
    #[must_use]
    pub fn user_message(self) -> String {
        match self {
            Rejection::Empty => {
                "The text field cannot be empty. Please enter some text to summarize.".to_string()
            }
            Rejection::TooShort => format!(
                "Please enter at least {MIN_WORDS_FOR_SUMMARY} words to get a reliable summary."
            ),
            Rejection::Nonsensical => "The text appears to be nonsensical. \
                Please enter meaningful content to summarize."
                .to_string(),
        }
    }
}

/// Word-level counts the heuristics are computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStats {
    pub word_count: usize,
    pub vowelless_count: usize,
    pub total_chars: usize,
}

impl TextStats {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut stats = TextStats {
            word_count: 0,
            vowelless_count: 0,
            total_chars: 0,
        };

        for word in text.split_whitespace() {
            stats.word_count += 1;
            stats.total_chars += word.chars().count();
            if !contains_vowel(word) {
                stats.vowelless_count += 1;
            }
        }

        stats
    }

    #[must_use]
    pub fn vowelless_ratio(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.vowelless_count as f64 / self.word_count as f64
    }

    #[must_use]
    pub fn avg_word_len(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.total_chars as f64 / self.word_count as f64
    }

    #[must_use]
    pub fn looks_nonsensical(&self) -> bool {
        self.vowelless_ratio() > MAX_VOWELLESS_WORD_RATIO
            || self.avg_word_len() < MIN_AVG_WORD_LENGTH
    }
}

/// True when the lowercased word holds at least one of a, e, i, o, u.
/// Punctuation is left in place.
#[must_use]
pub fn contains_vowel(word: &str) -> bool {
    word.chars()
        .flat_map(char::to_lowercase)
        .any(|c| VOWELS.contains(&c))
}

/// Checks whether text is worth a summarizer call.
///
/// The checks run in a fixed order and stop at the first failure: emptiness,
/// minimum word count, then the vowel-ratio and average-length heuristics,
/// which share a single opaque `Nonsensical` outcome.
pub fn validate(text: &str) -> Result<(), Rejection> {
    if text.trim().is_empty() {
        return Err(Rejection::Empty);
    }

    let stats = TextStats::from_text(text);

    if stats.word_count < MIN_WORDS_FOR_SUMMARY {
        return Err(Rejection::TooShort);
    }

    if stats.looks_nonsensical() {
        return Err(Rejection::Nonsensical);
    }

    Ok(())
}
