#![deny(missing_docs)]
//! Sentence-boundary re-chunker for streamed model output.
//!
//! A text-generation service emits a few characters at a time. Forwarding
//! those raw deltas makes for a jittery client experience, so the gateway
//! accumulates them and re-emits complete sentences, falling back to
//! length-bounded fragments when the model rambles without punctuation.
//!
//! The boundary heuristic is deliberately naive: a terminator character
//! (`.`, `!`, `?`) followed by optional whitespace. It will split before
//! trailing abbreviations ("Dr."), which is accepted behavior. No NLP.

use std::sync::LazyLock;

use regex::Regex;

/// Longest fragment emitted without a sentence terminator, in characters.
///
/// When the buffer grows past this without punctuation, it is split at the
/// last space at or before this index, or mid-word if there is no space.
pub const MAX_FRAGMENT_CHARS: usize = 80;

/// A sentence terminator, optionally followed by whitespace. The whitespace
/// is consumed by the split so it never leads the next fragment.
static TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s*").expect("valid terminator regex"));

/// Accumulates streamed text deltas and drains complete sentences.
///
/// One chunker owns one buffer for the lifetime of one request; there is no
/// state shared across requests. Feed deltas with [`push`], which returns the
/// fragments ready to emit, and call [`finish`] at end-of-stream to flush any
/// trailing partial sentence.
///
/// The concatenation of everything returned, in order, equals the
/// concatenation of everything pushed, modulo whitespace trimmed at the
/// emission boundaries.
///
/// [`push`]: SentenceChunker::push
/// [`finish`]: SentenceChunker::finish
#[derive(Debug, Default)]
pub struct SentenceChunker {
    buffer: String,
}

impl SentenceChunker {
    /// Create a chunker with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a delta and return every fragment that became ready.
    ///
    /// A fragment is ready when the buffer contains a sentence terminator, or
    /// when it exceeds [`MAX_FRAGMENT_CHARS`] characters without one. Returned
    /// fragments are trimmed and never empty.
    pub fn push(&mut self, delta: &str) -> Vec<String> {
        if delta.is_empty() {
            return Vec::new();
        }
        self.buffer.push_str(delta);
        self.drain_ready()
    }

    /// Flush the trailing partial sentence at end-of-stream.
    ///
    /// Returns `None` when the buffer holds nothing but whitespace. The
    /// chunker is empty afterwards either way.
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.buffer);
        let rest = rest.trim();
        if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }
    }

    fn drain_ready(&mut self) -> Vec<String> {
        let mut ready = Vec::new();
        loop {
            let cut = if let Some(found) = TERMINATOR.find(&self.buffer) {
                found.end()
            } else if let Some(cut) = self.overflow_cut() {
                cut
            } else {
                break;
            };

            let tail = self.buffer.split_off(cut);
            let head = std::mem::replace(&mut self.buffer, tail);
            // Leading whitespace of the remainder sits at an emission
            // boundary; trailing whitespace does not and must survive so the
            // next delta concatenates correctly.
            let keep = self.buffer.len() - self.buffer.trim_start().len();
            self.buffer.drain(..keep);

            let head = head.trim();
            if !head.is_empty() {
                ready.push(head.to_string());
            }
        }
        ready
    }

    /// Byte offset to split an over-long terminator-free buffer at, or `None`
    /// if the buffer is still within bounds.
    fn overflow_cut(&self) -> Option<usize> {
        let mut space_at = None;
        let mut hard_cut = None;
        for (char_idx, (byte_idx, ch)) in self.buffer.char_indices().enumerate() {
            if char_idx > MAX_FRAGMENT_CHARS {
                break;
            }
            if char_idx == MAX_FRAGMENT_CHARS {
                hard_cut = Some(byte_idx);
            }
            if ch == ' ' {
                space_at = Some(byte_idx);
            }
        }
        // hard_cut is set only when a character exists past index 80, i.e.
        // the buffer is longer than MAX_FRAGMENT_CHARS.
        let hard_cut = hard_cut?;
        Some(space_at.unwrap_or(hard_cut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_all(chunker: &mut SentenceChunker, deltas: &[&str]) -> Vec<String> {
        let mut out = Vec::new();
        for delta in deltas {
            out.extend(chunker.push(delta));
        }
        out.extend(chunker.finish());
        out
    }

    #[test]
    fn sentence_split_across_deltas() {
        let mut chunker = SentenceChunker::new();
        let out = drain_all(&mut chunker, &["Hello wor", "ld. How are", " you?"]);
        assert_eq!(out, vec!["Hello world.", "How are you?"]);
    }

    #[test]
    fn no_input_emits_nothing() {
        let mut chunker = SentenceChunker::new();
        assert!(chunker.push("").is_empty());
        assert!(chunker.finish().is_none());
    }

    #[test]
    fn whitespace_only_buffer_is_not_flushed() {
        let mut chunker = SentenceChunker::new();
        assert!(chunker.push("   \n ").is_empty());
        assert!(chunker.finish().is_none());
    }

    #[test]
    fn exclamation_and_question_terminate() {
        let mut chunker = SentenceChunker::new();
        let out = drain_all(&mut chunker, &["Wow! Really? Yes."]);
        assert_eq!(out, vec!["Wow!", "Really?", "Yes."]);
    }

    #[test]
    fn partial_sentence_waits_for_more_input() {
        let mut chunker = SentenceChunker::new();
        assert!(chunker.push("The scan shows").is_empty());
        let out = chunker.push(" no fracture.");
        assert_eq!(out, vec!["The scan shows no fracture."]);
    }

    #[test]
    fn trailing_partial_sentence_flushes_at_finish() {
        let mut chunker = SentenceChunker::new();
        let out = chunker.push("First part done. And then some");
        assert_eq!(out, vec!["First part done."]);
        assert_eq!(chunker.finish(), Some("And then some".to_string()));
    }

    #[test]
    fn long_run_without_terminator_splits_at_spaces() {
        let word = "lung ";
        let text = word.repeat(40); // 200 characters, no terminator
        let mut chunker = SentenceChunker::new();
        let out = drain_all(&mut chunker, &[&text]);
        assert!(out.len() > 1);
        for fragment in &out {
            assert!(
                fragment.chars().count() <= MAX_FRAGMENT_CHARS,
                "fragment too long: {fragment:?}"
            );
            assert!(!fragment.contains("lunglung"), "split mid-sequence: {fragment:?}");
        }
    }

    #[test]
    fn long_run_without_spaces_splits_mid_word() {
        let text = "x".repeat(200);
        let mut chunker = SentenceChunker::new();
        let out = chunker.push(&text);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].chars().count(), MAX_FRAGMENT_CHARS);
        assert_eq!(out[1].chars().count(), MAX_FRAGMENT_CHARS);
        assert_eq!(chunker.finish(), Some("x".repeat(40)));
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let text = "é".repeat(200);
        let mut chunker = SentenceChunker::new();
        let out = chunker.push(&text);
        assert_eq!(out.len(), 2);
        for fragment in &out {
            assert_eq!(fragment.chars().count(), MAX_FRAGMENT_CHARS);
        }
        assert_eq!(chunker.finish(), Some("é".repeat(40)));
    }

    #[test]
    fn exactly_eighty_chars_is_not_split() {
        let text = "y".repeat(MAX_FRAGMENT_CHARS);
        let mut chunker = SentenceChunker::new();
        assert!(chunker.push(&text).is_empty());
        assert_eq!(chunker.finish(), Some(text));
    }

    #[test]
    fn abbreviation_splits_early() {
        // Known naive-heuristic behavior: "Dr." terminates a sentence.
        let mut chunker = SentenceChunker::new();
        let out = drain_all(&mut chunker, &["Ask Dr. Smith about it."]);
        assert_eq!(out, vec!["Ask Dr.", "Smith about it."]);
    }

    #[test]
    fn terminator_whitespace_is_consumed_by_the_split() {
        let mut chunker = SentenceChunker::new();
        let out = chunker.push("One.   Two starts here");
        assert_eq!(out, vec!["One."]);
        assert_eq!(chunker.finish(), Some("Two starts here".to_string()));
    }

    #[test]
    fn concatenation_matches_input_modulo_boundary_whitespace() {
        let deltas = ["The X-ray looks ", "clear. No fracture", " was found! Follow", " up in a week."];
        let mut chunker = SentenceChunker::new();
        let out = drain_all(&mut chunker, &deltas);
        let rejoined = out.join(" ");
        let original = deltas.concat();
        // Compare word streams: trimming only ever removes whitespace.
        assert_eq!(
            rejoined.split_whitespace().collect::<Vec<_>>(),
            original.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn terminator_beyond_length_bound_still_wins() {
        // 94 characters with the only period at the end: the terminator
        // branch takes precedence, so the whole sentence goes out as one
        // fragment even though it exceeds the length bound.
        let text = format!("{}woo.", "ha ".repeat(30));
        let mut chunker = SentenceChunker::new();
        let out = chunker.push(&text);
        assert_eq!(out, vec![text]);
        assert!(chunker.finish().is_none());
    }
}
