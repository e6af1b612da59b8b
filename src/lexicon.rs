//! Embedded replacement tables and marker-word lists.
//!
//! All rule data ships inside the binary via `include_str!`. The script
//! tables keep their file order because replacements apply sequentially and
//! earlier entries may rewrite text that later entries would have matched.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Urdu simplifications, applied in order
static URDU_REPLACEMENTS_TSV: &str = include_str!("data/urdu_replacements.tsv");

/// Shahmukhi Punjabi simplifications, applied in order before the Urdu table
static PUNJABI_REPLACEMENTS_TSV: &str = include_str!("data/punjabi_replacements.tsv");

/// Roman Urdu / English simplifications, matched per whole token
static ROMAN_REPLACEMENTS_TSV: &str = include_str!("data/roman_replacements.tsv");

/// Words that mark romanized Urdu
static ROMAN_URDU_MARKERS_TXT: &str = include_str!("data/roman_urdu_markers.txt");

/// Words that mark romanized Punjabi
static ROMAN_PUNJABI_MARKERS_TXT: &str = include_str!("data/roman_punjabi_markers.txt");

static URDU_REPLACEMENTS: Lazy<Vec<(String, String)>> =
    Lazy::new(|| parse_replacements(URDU_REPLACEMENTS_TSV));

static PUNJABI_REPLACEMENTS: Lazy<Vec<(String, String)>> =
    Lazy::new(|| parse_replacements(PUNJABI_REPLACEMENTS_TSV));

/// Roman keys are unique whole tokens, so lookup order does not matter and
/// a map is safe here
static ROMAN_REPLACEMENTS: Lazy<HashMap<String, String>> =
    Lazy::new(|| parse_replacements(ROMAN_REPLACEMENTS_TSV).into_iter().collect());

static ROMAN_URDU_MARKERS: Lazy<HashSet<String>> =
    Lazy::new(|| parse_markers(ROMAN_URDU_MARKERS_TXT));

static ROMAN_PUNJABI_MARKERS: Lazy<HashSet<String>> =
    Lazy::new(|| parse_markers(ROMAN_PUNJABI_MARKERS_TXT));

/// Parse a two-column TSV, skipping comments and blank lines
fn parse_replacements(tsv: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for line in tsv.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut cols = line.split('\t');
        if let (Some(from), Some(to)) = (cols.next(), cols.next()) {
            pairs.push((from.to_string(), to.to_string()));
        }
    }

    pairs
}

/// Parse a word-per-line list, skipping comments and blank lines
fn parse_markers(txt: &str) -> HashSet<String> {
    txt.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// The ordered Urdu replacement table
pub fn urdu_replacements() -> &'static [(String, String)] {
    &URDU_REPLACEMENTS
}

/// The ordered Punjabi replacement table
pub fn punjabi_replacements() -> &'static [(String, String)] {
    &PUNJABI_REPLACEMENTS
}

/// Look up the Roman replacement for a lowercase token stem
pub fn roman_replacement(key: &str) -> Option<&'static str> {
    ROMAN_REPLACEMENTS.get(key).map(String::as_str)
}

/// Check whether a lowercase token marks romanized Urdu
pub fn is_roman_urdu_marker(token: &str) -> bool {
    ROMAN_URDU_MARKERS.contains(token)
}

/// Check whether a lowercase token marks romanized Punjabi
pub fn is_roman_punjabi_marker(token: &str) -> bool {
    ROMAN_PUNJABI_MARKERS.contains(token)
}
