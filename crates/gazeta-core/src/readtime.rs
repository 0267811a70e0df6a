//! Reading-time estimation over content blocks.

use std::sync::LazyLock;

use regex::Regex;

use crate::richtext::{self, ContentBlock};

/// Assumed reading speed, words per minute.
const WORDS_PER_MINUTE: i64 = 200;

/// Delimiter class for body tokenization: whitespace, punctuation, digits.
static WORD_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[!@#$%^&*(),:;"'¨<>/\[\]{}=?+\d\s.-]+"#).expect("delimiter regex is valid")
});

/// Estimate how many minutes a post takes to read.
///
/// Per block, words are counted as the heading split on single spaces plus
/// the plain-text body split on [`WORD_DELIMITERS`]. Splitting the body
/// leaves an empty trailing token when the text ends in a delimiter; one
/// token per block is discounted to compensate. The adjusted total is
/// divided by 200 words per minute and rounded up, floored at zero.
///
/// A tokenizer that dropped empty segments instead of discounting one per
/// block would count bodies that end mid-word slightly differently; the
/// arithmetic here is kept stable so published estimates do not shift.
pub fn estimate_minutes(blocks: &[ContentBlock]) -> u32 {
    if blocks.is_empty() {
        return 0;
    }

    let mut words: i64 = 0;
    for block in blocks {
        words += block.heading.split(' ').count() as i64;
        let body_text = richtext::as_text(&block.body);
        words += WORD_DELIMITERS.split(&body_text).count() as i64;
    }
    words -= blocks.len() as i64;

    if words <= 0 {
        return 0;
    }
    (words as u64).div_ceil(WORDS_PER_MINUTE as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::{NodeKind, RichNode};

    fn block(heading: &str, body_text: &str) -> ContentBlock {
        ContentBlock {
            heading: heading.to_string(),
            body: vec![RichNode {
                kind: NodeKind::Paragraph,
                text: body_text.to_string(),
                spans: Vec::new(),
            }],
        }
    }

    #[test]
    fn empty_blocks_take_zero_minutes() {
        assert_eq!(estimate_minutes(&[]), 0);
    }

    #[test]
    fn short_block_rounds_up_to_one_minute() {
        // heading "Intro" = 1, body "Hello world" = 2, minus 1 per block = 2
        let blocks = vec![block("Intro", "Hello world")];
        assert_eq!(estimate_minutes(&blocks), 1);
    }

    #[test]
    fn trailing_punctuation_adds_the_discounted_empty_token() {
        // body splits to ["Hello", "world", ""] = 3, heading = 1, minus 1 = 3
        let blocks = vec![block("Intro", "Hello world.")];
        assert_eq!(estimate_minutes(&blocks), 1);
    }

    #[test]
    fn heading_only_block_counts_heading_words() {
        let blocks = vec![block("Um titulo com cinco palavras", "")];
        // heading = 5, empty body = 1 token, minus 1 = 5
        assert_eq!(estimate_minutes(&blocks), 1);
    }

    #[test]
    fn word_count_crosses_minute_boundary() {
        // 201 body words, no trailing delimiter: 201 + 1 heading - 1 = 201
        let body = vec!["palavra"; 201].join(" ");
        let blocks = vec![block("A", &body)];
        assert_eq!(estimate_minutes(&blocks), 2);
    }

    #[test]
    fn exact_multiple_of_reading_speed() {
        // 200 body words + 1 heading - 1 = 200 -> exactly one minute
        let body = vec!["palavra"; 200].join(" ");
        let blocks = vec![block("A", &body)];
        assert_eq!(estimate_minutes(&blocks), 1);
    }

    #[test]
    fn digits_and_punctuation_are_delimiters() {
        // "v1.2 do app" -> ["v", "do", "app"] plus trailing behavior:
        // splits to ["v", "do", "app"] = 3, heading = 1, minus 1 = 3
        let blocks = vec![block("A", "v1.2 do app")];
        assert_eq!(estimate_minutes(&blocks), 1);
    }

    #[test]
    fn totals_accumulate_across_blocks() {
        // two blocks of 150 body words each: 2*150 + 2*1 - 2 = 300 -> 2 min
        let body = vec!["palavra"; 150].join(" ");
        let blocks = vec![block("A", &body), block("B", &body)];
        assert_eq!(estimate_minutes(&blocks), 2);
    }

    #[test]
    fn aggregate_never_goes_negative() {
        // three blocks of empty heading and body: (1 + 1 - 1) each = 3,
        // clamps into a single minute instead of anything negative
        let blocks: Vec<ContentBlock> = (0..3).map(|_| block("", "")).collect();
        assert_eq!(estimate_minutes(&blocks), 1);
    }
}
