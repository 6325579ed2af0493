//! Break iterator example: sentence boundaries and word counting.

use icu::locale::langid;
use icu::segmenter::options::{SentenceBreakOptions, WordBreakOptions};
use icu::segmenter::{SentenceSegmenter, WordSegmenter};
use uniprobe_format::console_println;

use crate::config::Section;
use crate::driver::Driver;
use crate::error::ProbeError;

/// Mixed English and Chinese text with ASCII and fullwidth terminators.
pub const SAMPLE: &str = "Hello, world! This is a test. How are you? 你好，世界！这是一个测试。";

/// Split `text` into sentences (each keeps its trailing whitespace).
pub fn sentences(text: &str) -> Result<Vec<&str>, ProbeError> {
    let mut options = SentenceBreakOptions::default();
    let content_locale = langid!("en-US");
    options.content_locale = Some(&content_locale);
    let segmenter = SentenceSegmenter::try_new(options)
        .map_err(|err| ProbeError::library("sentence segmenter", err))?;
    let segmenter = segmenter.as_borrowed();

    let breakpoints: Vec<usize> = segmenter.segment_str(text).collect();
    Ok(breakpoints
        .windows(2)
        .map(|pair| &text[pair[0]..pair[1]])
        .collect())
}

/// Text up to and including the first `.`; empty when there is none.
#[must_use]
pub fn first_sentence(text: &str) -> &str {
    let end = text.find('.').map_or(0, |at| at + 1);
    &text[..end]
}

/// Count word-like segments, skipping whitespace and punctuation.
pub fn count_words(text: &str) -> Result<usize, ProbeError> {
    let mut options = WordBreakOptions::default();
    let content_locale = langid!("en-US");
    options.content_locale = Some(&content_locale);
    let segmenter = WordSegmenter::try_new_auto(options)
        .map_err(|err| ProbeError::library("word segmenter", err))?;
    let segmenter = segmenter.as_borrowed();

    let mut breaks = segmenter.segment_str(text);
    // The first boundary is the start of text and closes no segment.
    let _ = breaks.next();
    let mut count = 0;
    while breaks.next().is_some() {
        if breaks.is_word_like() {
            count += 1;
        }
    }
    Ok(count)
}

pub fn run(driver: &mut Driver) -> Result<(), ProbeError> {
    driver.header(Section::Segment)?;

    let found = sentences(SAMPLE)?;
    console_println!(driver.console(), "Sentence boundaries:")?;
    for (index, sentence) in found.iter().enumerate() {
        console_println!(driver.console(), "  Sentence {}", index + 1)?;
        console_println!(driver.console(), "    {}", sentence)?;
    }

    let words = count_words(first_sentence(SAMPLE))?;
    console_println!(driver.console(), "Words in first sentence: {}", words)?;
    Ok(())
}
