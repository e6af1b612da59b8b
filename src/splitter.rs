//! Long-sentence splitting.
//!
//! Both simplifier branches finish by breaking overly long sentences into
//! shorter ones: Arabic-script text at secondary pause marks, Roman text at
//! commas. Short input always passes through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

/// Script-branch text shorter than this many chars is never split
pub const SCRIPT_SPLIT_THRESHOLD: usize = 150;

/// Roman-branch text shorter than this many chars is never split
pub const ROMAN_SPLIT_THRESHOLD: usize = 120;

/// The full stop used to join script-branch parts (U+06D4)
pub const SENTENCE_MARK: char = '۔';

/// Pause marks tried in order when splitting script text: the Arabic comma,
/// then the Arabic semicolon
const SECONDARY_MARKS: &[char] = &['،', '؛'];

/// A script-branch part must be longer than this (trimmed) for the split to
/// be accepted
const MIN_SCRIPT_PART_CHARS: usize = 10;

/// A Roman-branch part must be longer than this (trimmed) to survive
const MIN_ROMAN_PART_CHARS: usize = 5;

static COMMA_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*").expect("Invalid regex"));

/// Uppercase the first character of a string, leaving the rest unchanged
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split long Arabic-script text at secondary pause marks.
///
/// Tries each secondary mark in order. The first one that divides the text
/// into parts which are all longer than the minimum wins; the parts are
/// rejoined with the full stop. If no mark qualifies, the text is returned
/// unchanged.
pub fn split_long_script(text: &str) -> String {
    if text.chars().count() < SCRIPT_SPLIT_THRESHOLD {
        return text.to_string();
    }

    for &mark in SECONDARY_MARKS {
        if !text.contains(mark) {
            continue;
        }

        let parts: Vec<&str> = text.split(mark).collect();
        if parts.len() > 1
            && parts
                .iter()
                .all(|p| p.trim().chars().count() > MIN_SCRIPT_PART_CHARS)
        {
            let joined = parts
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join(&format!(" {} ", SENTENCE_MARK));
            return format!("{}{}", joined, SENTENCE_MARK);
        }
    }

    text.to_string()
}

/// Split long Roman text at commas.
///
/// Parts at or below the minimum length are dropped; the survivors are
/// capitalized and rejoined as sentences. If nothing survives, the text is
/// returned unchanged.
pub fn split_long_roman(text: &str) -> String {
    if text.chars().count() < ROMAN_SPLIT_THRESHOLD {
        return text.to_string();
    }

    let parts: Vec<&str> = COMMA_SPLIT.split(text).collect();
    if parts.len() < 2 {
        return text.to_string();
    }

    let sentences: Vec<String> = parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty() && p.chars().count() > MIN_ROMAN_PART_CHARS)
        .map(capitalize_first)
        .collect();

    if sentences.is_empty() {
        return text.to_string();
    }

    format!("{}.", sentences.join(". "))
}
