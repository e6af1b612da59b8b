//! Language identification for Urdu, Punjabi, Roman Urdu and English.
//!
//! Detection is rule based and runs in a fixed order: Arabic-script ratio
//! first, then Gurmukhi presence, then marker-word ratios over Latin
//! tokens. Each rule that fires returns immediately.

use std::collections::HashSet;

use log::debug;
use unicode_normalization::UnicodeNormalization;

use crate::language::{Detection, Language};
use crate::lexicon;
use crate::script::ScriptProfile;

/// An Arabic-script share above this classifies the text as Urdu
const ARABIC_MAJORITY: f64 = 0.5;

/// Marker-word share above this counts as a real signal
const MARKER_RATIO_FLOOR: f64 = 0.1;

/// Confidence assigned to text containing Gurmukhi characters
const GURMUKHI_CONFIDENCE: f64 = 0.9;

/// Rule-based language detector
pub struct LanguageDetector;

impl LanguageDetector {
    /// Create a new detector
    pub fn new() -> Self {
        LanguageDetector
    }

    /// Detect the language of `text` and return it with a confidence score
    pub fn detect(&self, text: &str) -> Detection {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Detection::unknown();
        }

        // Compose combining sequences so character counts and the Urdu
        // marks are stable across input sources
        let normalized: String = trimmed.nfc().collect();
        let profile = ScriptProfile::new(&normalized);
        if profile.is_empty() {
            return Detection::unknown();
        }

        let arabic_ratio = profile.arabic_ratio();
        if arabic_ratio > ARABIC_MAJORITY {
            // Shahmukhi Punjabi lands here as well; there is no reliable
            // character-level signal separating it from Urdu
            let detection = if profile.has_urdu_marks() {
                Detection::new(Language::Urdu, (arabic_ratio + 0.1).min(0.95))
            } else {
                Detection::new(Language::Urdu, arabic_ratio)
            };
            debug!("arabic ratio {:.2} -> {}", arabic_ratio, detection);
            return detection;
        }

        if profile.has_gurmukhi() {
            debug!("gurmukhi characters -> punjabi");
            return Detection::new(Language::Punjabi, GURMUKHI_CONFIDENCE);
        }

        self.classify_roman(&normalized)
    }

    /// Classify Latin-script text by marker-word ratios over the unique
    /// lowercase tokens
    fn classify_roman(&self, text: &str) -> Detection {
        let lowered = text.to_lowercase();
        let tokens: HashSet<&str> = lowered.split_whitespace().collect();
        if tokens.is_empty() {
            return Detection::unknown();
        }

        let urdu_hits = tokens
            .iter()
            .filter(|t| lexicon::is_roman_urdu_marker(t))
            .count();
        let punjabi_hits = tokens
            .iter()
            .filter(|t| lexicon::is_roman_punjabi_marker(t))
            .count();

        let total = tokens.len() as f64;
        let urdu_ratio = urdu_hits as f64 / total;
        let punjabi_ratio = punjabi_hits as f64 / total;
        debug!(
            "{} unique tokens, {} urdu markers, {} punjabi markers",
            tokens.len(),
            urdu_hits,
            punjabi_hits
        );

        if punjabi_ratio > urdu_ratio && punjabi_ratio > MARKER_RATIO_FLOOR {
            return Detection::new(Language::Punjabi, (punjabi_ratio * 2.0).min(0.8));
        }

        if urdu_ratio > MARKER_RATIO_FLOOR || urdu_hits >= 2 {
            return Detection::new(Language::RomanUrdu, (urdu_ratio * 2.0 + 0.3).min(0.85));
        }

        if urdu_hits > 0 || punjabi_hits > 0 {
            return Detection::new(Language::RomanUrdu, 0.5);
        }

        Detection::new(Language::English, 0.7)
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the language of a piece of text
///
/// Convenience wrapper around [`LanguageDetector::detect`].
pub fn detect_language(text: &str) -> Detection {
    LanguageDetector::new().detect(text)
}

/// Human-facing name for a language
pub fn language_display_name(language: Language) -> &'static str {
    language.display_name()
}
