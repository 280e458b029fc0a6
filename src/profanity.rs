//! Deny-list profanity filter.
//!
//! Each root word compiles to one case-insensitive pattern in which common
//! leetspeak substitutions are accepted (`sh1t`, `a$$`, `@ss`). A match only
//! counts when it stands alone as a word: the characters on either side must
//! not be letters, digits or `_`. The boundary is checked by hand rather than
//! with `\b`, because `\b` never fires next to the symbol substitutions.
//!
//! The word list is configuration (`[contact] profanity_words`); the built-in
//! list is [`DEFAULT_WORDS`].

use regex::Regex;

pub const DEFAULT_WORDS: &[&str] = &[
    "fuck", "shit", "ass", "bitch", "bastard", "damn", "cunt", "dick", "piss",
];

#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    patterns: Vec<Regex>,
}

impl ProfanityFilter {
    /// Build a filter from root words. Blank entries are skipped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref().trim().to_lowercase();
                (!w.is_empty()).then(|| word_pattern(&w))
            })
            .collect();
        Self { patterns }
    }

    pub fn contains_profanity(&self, text: &str) -> bool {
        self.patterns
            .iter()
            .any(|re| next_word_match(re, text, 0).is_some())
    }

    /// Every offending token, lower-cased, de-duplicated, in the order first seen.
    pub fn profanity_matches(&self, text: &str) -> Vec<String> {
        let mut found: Vec<(usize, String)> = Vec::new();
        for re in &self.patterns {
            let mut start = 0;
            while let Some((s, e)) = next_word_match(re, text, start) {
                found.push((s, text[s..e].to_lowercase()));
                start = e;
            }
        }
        found.sort_by_key(|(pos, _)| *pos);

        let mut matches: Vec<String> = Vec::new();
        for (_, token) in found {
            if !matches.contains(&token) {
                matches.push(token);
            }
        }
        matches
    }
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}

fn word_pattern(word: &str) -> Regex {
    let mut pattern = String::from("(?i)");
    for c in word.chars() {
        match c {
            'a' => pattern.push_str("[a@4]"),
            'i' => pattern.push_str("[i1!]"),
            'o' => pattern.push_str("[o0]"),
            'e' => pattern.push_str("[e3]"),
            's' => pattern.push_str(r"[s$5]"),
            't' => pattern.push_str("[t7]"),
            other => pattern.push_str(&regex::escape(&other.to_string())),
        }
    }
    // Every piece is a literal or a fixed character class.
    Regex::new(&pattern).expect("escaped word pattern must compile")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Next match at or after `start` that is not glued to surrounding word characters.
fn next_word_match(re: &Regex, text: &str, mut start: usize) -> Option<(usize, usize)> {
    while start <= text.len() {
        let m = re.find_at(text, start)?;
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        if !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char) {
            return Some((m.start(), m.end()));
        }
        // Retry one character past the rejected match start.
        start = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
    }
    None
}
