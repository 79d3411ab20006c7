//! Keyword emphasis for chat transcript messages.
//!
//! A message is split into [`Segment`]s: runs of plain text and runs that
//! matched a keyword. Matching is ASCII case-insensitive and whole-word
//! ("completed" does not contain the keyword "complete"), while the segment keeps the
//! message's own casing. Segments borrow from the input, so concatenating
//! their text reproduces the message byte for byte.
//!
//! ```
//! use mindful::highlight::{highlight, Segment, SegmentsExt};
//!
//! let segments = highlight("TODO: finish the task");
//! assert_eq!(segments[0], Segment::Emphasis("TODO"));
//! assert_eq!(segments.concat_text(), "TODO: finish the task");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

/// Keywords emphasized in transcript messages.
pub const DEFAULT_KEYWORDS: &[&str] = &["notion", "task", "complete", "done", "todo", "database"];

static DEFAULT_HIGHLIGHTER: Lazy<KeywordHighlighter> = Lazy::new(KeywordHighlighter::default);

/// A span of a message, tagged with how it should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment<'a> {
    /// Ordinary text
    Plain(&'a str),
    /// A keyword match, in the message's original casing
    Emphasis(&'a str),
}

impl<'a> Segment<'a> {
    /// The span's text.
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Plain(text) | Segment::Emphasis(text) => text,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, Segment::Emphasis(_))
    }
}

/// Helpers over a segmented message.
pub trait SegmentsExt {
    /// Join every segment's text in order.
    fn concat_text(&self) -> String;
}

impl SegmentsExt for [Segment<'_>] {
    fn concat_text(&self) -> String {
        self.iter().map(Segment::text).collect()
    }
}

/// Splits messages around a fixed keyword vocabulary.
#[derive(Debug, Clone)]
pub struct KeywordHighlighter {
    /// `None` when the vocabulary is empty; nothing ever matches.
    pattern: Option<Regex>,
}

impl KeywordHighlighter {
    /// Build a highlighter for `keywords`.
    ///
    /// Keywords are matched literally (regex metacharacters are escaped).
    /// Blank entries are ignored. Word characters are ASCII `[A-Za-z0-9_]`
    /// and case folding is ASCII-only for ASCII keywords, so `todoé` still
    /// emphasizes `todo` while `taſk` never matches `task`.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .map(|k| keyword_alternative(&k))
            .collect();

        if alternatives.is_empty() {
            return Self { pattern: None };
        }

        let source = format!(
            "{}(?:{}){}",
            WORD_BOUNDARY,
            alternatives.join("|"),
            WORD_BOUNDARY
        );
        // Escaped literals joined by `|` always form a valid pattern.
        let pattern = Regex::new(&source).ok();
        if pattern.is_none() {
            tracing::warn!("Keyword pattern failed to compile: {}", source);
        }
        Self { pattern }
    }

    /// Segment `text` into plain and emphasized spans.
    ///
    /// Empty input yields no segments; input without matches yields a single
    /// plain segment. Matches are found left to right without overlap.
    pub fn highlight<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut builder = SegmentBuilder::new(text);

        if let Some(pattern) = &self.pattern {
            for m in pattern.find_iter(text) {
                builder.push_plain(builder.cursor..m.start());
                builder.push_emphasis(m.range());
            }
        }
        builder.push_plain(builder.cursor..text.len());

        builder.finish()
    }
}

impl Default for KeywordHighlighter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

/// Boundary between an ASCII word character and anything else.
const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// One escaped, case-insensitive alternative of the keyword pattern.
fn keyword_alternative(keyword: &str) -> String {
    let escaped = regex::escape(keyword);
    if keyword.is_ascii() {
        format!("(?i-u:{})", escaped)
    } else {
        // ASCII mode rejects non-ASCII literals.
        format!("(?i:{})", escaped)
    }
}

/// Segment `text` using the default keyword vocabulary.
pub fn highlight(text: &str) -> Vec<Segment<'_>> {
    DEFAULT_HIGHLIGHTER.highlight(text)
}

/// Accumulates byte ranges and merges neighbours of the same kind.
struct SegmentBuilder<'a> {
    text: &'a str,
    cursor: usize,
    spans: Vec<(bool, Range<usize>)>,
}

impl<'a> SegmentBuilder<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            cursor: 0,
            spans: Vec::new(),
        }
    }

    fn push_plain(&mut self, range: Range<usize>) {
        self.push(false, range);
    }

    fn push_emphasis(&mut self, range: Range<usize>) {
        self.push(true, range);
    }

    fn push(&mut self, emphasized: bool, range: Range<usize>) {
        self.cursor = self.cursor.max(range.end);
        if range.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some((kind, last)) if *kind == emphasized && last.end == range.start => {
                last.end = range.end;
            }
            _ => self.spans.push((emphasized, range)),
        }
    }

    fn finish(self) -> Vec<Segment<'a>> {
        let text = self.text;
        self.spans
            .into_iter()
            .map(|(emphasized, range)| {
                let slice = &text[range];
                if emphasized {
                    Segment::Emphasis(slice)
                } else {
                    Segment::Plain(slice)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(highlight("").is_empty());
    }

    #[test]
    fn test_no_match_passthrough() {
        assert_eq!(highlight("hello world"), vec![Segment::Plain("hello world")]);
    }

    #[test]
    fn test_whole_word_only() {
        assert_eq!(
            highlight("I completed the task"),
            vec![Segment::Plain("I completed the "), Segment::Emphasis("task")]
        );
        assert_eq!(
            highlight("multitasking notional todos"),
            vec![Segment::Plain("multitasking notional todos")]
        );
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(
            highlight("TODO: finish"),
            vec![Segment::Emphasis("TODO"), Segment::Plain(": finish")]
        );
        assert_eq!(
            highlight("Notion DataBase"),
            vec![
                Segment::Emphasis("Notion"),
                Segment::Plain(" "),
                Segment::Emphasis("DataBase")
            ]
        );
    }

    #[test]
    fn test_adjacent_keywords() {
        let segments = highlight("task todo");
        assert_eq!(
            segments,
            vec![
                Segment::Emphasis("task"),
                Segment::Plain(" "),
                Segment::Emphasis("todo")
            ]
        );
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        assert_eq!(
            highlight("(done), task-list"),
            vec![
                Segment::Plain("("),
                Segment::Emphasis("done"),
                Segment::Plain("), "),
                Segment::Emphasis("task"),
                Segment::Plain("-list"),
            ]
        );
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(
            highlight("task_1 done2 todo"),
            vec![Segment::Plain("task_1 done2 "), Segment::Emphasis("todo")]
        );
    }

    #[test]
    fn test_round_trip_on_assorted_inputs() {
        let inputs = [
            "",
            " ",
            "done",
            "  done  ",
            "Done.Done,done;DONE",
            "Ünïcödé task ✓ complete 🎉",
            "line one\ntask\r\nline three todo\t",
            "notionnotion notion",
        ];
        for input in inputs {
            let segments = highlight(input);
            assert_eq!(segments.concat_text(), input, "round trip for {:?}", input);
            assert!(segments.iter().all(|s| !s.text().is_empty()));
            for pair in segments.windows(2) {
                assert_ne!(
                    pair[0].is_emphasized(),
                    pair[1].is_emphasized(),
                    "adjacent segments of the same kind in {:?}",
                    input
                );
            }
        }
    }

    #[test]
    fn test_custom_vocabulary_escapes_metacharacters() {
        let highlighter = KeywordHighlighter::new(["c++", "to-do"]);
        assert_eq!(
            highlighter.highlight("learn c++ today"),
            vec![Segment::Plain("learn c++ today")]
        );
        assert_eq!(
            highlighter.highlight("my to-do list"),
            vec![
                Segment::Plain("my "),
                Segment::Emphasis("to-do"),
                Segment::Plain(" list")
            ]
        );
    }

    #[test]
    fn test_empty_vocabulary_never_matches() {
        let highlighter = KeywordHighlighter::new(Vec::<String>::new());
        assert_eq!(
            highlighter.highlight("task done"),
            vec![Segment::Plain("task done")]
        );
        let blank = KeywordHighlighter::new(["", "  "]);
        assert_eq!(blank.highlight("x"), vec![Segment::Plain("x")]);
        assert!(blank.highlight("").is_empty());
    }

    #[test]
    fn test_builder_coalesces_touching_spans() {
        let mut builder = SegmentBuilder::new("abcdef");
        builder.push_emphasis(0..2);
        builder.push_emphasis(2..4);
        builder.push_plain(4..4);
        builder.push_plain(4..6);
        assert_eq!(
            builder.finish(),
            vec![Segment::Emphasis("abcd"), Segment::Plain("ef")]
        );
    }

    #[test]
    fn test_non_ascii_letters_are_not_word_characters() {
        assert_eq!(
            highlight("todoé"),
            vec![Segment::Emphasis("todo"), Segment::Plain("é")]
        );
        assert_eq!(
            highlight("étask"),
            vec![Segment::Plain("é"), Segment::Emphasis("task")]
        );
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        // KELVIN SIGN and LONG S fold to k and s under Unicode rules
        assert_eq!(highlight("tas\u{212A}"), vec![Segment::Plain("tas\u{212A}")]);
        assert_eq!(highlight("ta\u{17F}k"), vec![Segment::Plain("ta\u{17F}k")]);
        assert_eq!(highlight("TaSk"), vec![Segment::Emphasis("TaSk")]);
    }

    #[test]
    fn test_non_ascii_custom_keyword() {
        let highlighter = KeywordHighlighter::new(["méditation"]);
        assert_eq!(
            highlighter.highlight("Une MÉDITATION calme"),
            vec![
                Segment::Plain("Une "),
                Segment::Emphasis("MÉDITATION"),
                Segment::Plain(" calme")
            ]
        );
    }

    #[test]
    fn test_segment_serializes_tagged() {
        let json = serde_json::to_string(&highlight("done!")).unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"emphasis","text":"done"},{"kind":"plain","text":"!"}]"#
        );
    }
}
