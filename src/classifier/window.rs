use crate::types::RawMatch;

/// Number of characters kept on each side of a span
pub const WINDOW_CHARS: usize = 48;

/// A word next to a span, with its end offset relative to the text after the span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowWord<'a> {
    pub text: &'a str,
    pub end: usize,
}

/// The text immediately around a numeric span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    /// Text before the span, at most [`WINDOW_CHARS`] characters
    pub before: &'a str,
    /// Text after the span, at most [`WINDOW_CHARS`] characters
    pub after: &'a str,
}

impl<'a> Window<'a> {
    pub fn around(text: &'a str, raw: &RawMatch<'_>) -> Self {
        let before = &text[..raw.start];
        let after = &text[raw.end..];

        let before_start = before
            .char_indices()
            .rev()
            .take(WINDOW_CHARS)
            .last()
            .map_or(0, |(i, _)| i);
        let after_end = after
            .char_indices()
            .nth(WINDOW_CHARS)
            .map_or(after.len(), |(i, _)| i);

        Self {
            before: &before[before_start..],
            after: &after[..after_end],
        }
    }

    /// The token following the span, skipping whitespace
    ///
    /// A token is either a unit sign (`%`, `€`, `$`) or a word made of
    /// letters and inner hyphens.
    pub fn next_word(&self) -> Option<WindowWord<'a>> {
        word_at_start(self.after, 0)
    }

    /// The word following a period that directly follows the span (`1. Januar`)
    pub fn word_after_period(&self) -> Option<WindowWord<'a>> {
        self.after
            .strip_prefix('.')
            .and_then(|rest| word_at_start(rest, 1))
    }

    /// Whether the span is directly followed by a period
    pub fn followed_by_period(&self) -> bool {
        self.after.starts_with('.')
    }

    /// The word directly preceding the span, separated only by whitespace
    pub fn previous_word(&self) -> Option<&'a str> {
        trailing_word(self.before.trim_end())
    }

    /// An abbreviation with a period directly preceding the span (`Jan. 2024`)
    pub fn previous_abbreviation(&self) -> Option<&'a str> {
        self.before
            .trim_end()
            .strip_suffix('.')
            .and_then(trailing_word)
    }
}

fn word_at_start(text: &str, base: usize) -> Option<WindowWord<'_>> {
    let trimmed = text.trim_start();
    let start = text.len() - trimmed.len();

    let mut chars = trimmed.char_indices();
    let (_, first) = chars.next()?;
    if matches!(first, '%' | '€' | '$') {
        let end = start + first.len_utf8();
        return Some(WindowWord {
            text: &text[start..end],
            end: base + end,
        });
    }
    if !first.is_alphabetic() {
        return None;
    }

    let mut len = first.len_utf8();
    for (i, c) in chars {
        if c.is_alphabetic() {
            len = i + c.len_utf8();
        } else if c != '-' {
            break;
        }
    }
    Some(WindowWord {
        text: &text[start..start + len],
        end: base + start + len,
    })
}

fn trailing_word(text: &str) -> Option<&str> {
    let word_start = text
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphabetic())
        .last()
        .map(|(i, _)| i)?;
    Some(&text[word_start..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::NumberLexer;

    fn window_of<'a>(text: &'a str, literal: &str) -> Window<'a> {
        let raw = NumberLexer::new(text)
            .find(|m| m.literal == literal)
            .expect("literal should be lexed");
        Window::around(text, &raw)
    }

    #[test]
    fn test_next_word() {
        let window = window_of("25 Prozent der Leute", "25");
        let word = window.next_word().unwrap();
        assert_eq!(word.text, "Prozent");
        assert_eq!(&window.after[..word.end], " Prozent");
    }

    #[test]
    fn test_unit_signs() {
        let window = window_of("nur 10% davon", "10");
        let word = window.next_word().unwrap();
        assert_eq!(word.text, "%");
        assert_eq!(word.end, 1);
        assert_eq!(window_of("5 €", "5").next_word().unwrap().text, "€");
    }

    #[test]
    fn test_hyphenated_words_and_punctuation() {
        assert_eq!(
            window_of("300 US-Dollar", "300").next_word().unwrap().text,
            "US-Dollar"
        );
        assert_eq!(
            window_of("es waren 300 Menschen.", "300")
                .next_word()
                .unwrap()
                .text,
            "Menschen"
        );
        assert!(window_of("es waren 300.", "300").next_word().is_none());
    }

    #[test]
    fn test_word_after_period() {
        let text = "am 1. Januar 2024";
        let window = window_of(text, "1");
        assert!(window.followed_by_period());
        let word = window.word_after_period().unwrap();
        assert_eq!(word.text, "Januar");
        assert_eq!(&window.after[..word.end], ". Januar");
    }

    #[test]
    fn test_previous_words() {
        let window = window_of("Im Jahr 2025 gab es", "2025");
        assert_eq!(window.previous_word(), Some("Jahr"));
        assert_eq!(window.previous_abbreviation(), None);

        let window = window_of("seit Jan. 2024", "2024");
        assert_eq!(window.previous_word(), None);
        assert_eq!(window.previous_abbreviation(), Some("Jan"));

        assert_eq!(window_of("2024 begann", "2024").previous_word(), None);
    }

    #[test]
    fn test_window_is_bounded() {
        let text = format!("{} 7 {}", "ä".repeat(200), "ö".repeat(200));
        let window = window_of(&text, "7");
        assert_eq!(window.before.chars().count(), WINDOW_CHARS);
        assert_eq!(window.after.chars().count(), WINDOW_CHARS);
    }
}
