//! Language labels and detection results.
//!
//! A `Language` is one of the five classes the detector can assign, and a
//! `Detection` pairs the assigned class with a confidence score.

use serde::{Deserialize, Serialize};

/// The language classes assigned by the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Urdu in Arabic script
    Urdu,
    /// Punjabi, either Gurmukhi script or romanized
    Punjabi,
    /// Urdu written in Latin letters
    RomanUrdu,
    /// English
    English,
    /// Empty input or no usable signal
    #[default]
    Unknown,
}

impl Language {
    /// Stable lowercase code for this language
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Urdu => "urdu",
            Language::Punjabi => "punjabi",
            Language::RomanUrdu => "roman_urdu",
            Language::English => "english",
            Language::Unknown => "unknown",
        }
    }

    /// Parse a code produced by `as_str`
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "urdu" => Some(Language::Urdu),
            "punjabi" => Some(Language::Punjabi),
            "roman_urdu" => Some(Language::RomanUrdu),
            "english" => Some(Language::English),
            "unknown" => Some(Language::Unknown),
            _ => None,
        }
    }

    /// Human-facing label, in the native script where one applies
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Urdu => "اردو (Urdu)",
            Language::Punjabi => "پنجابی (Punjabi)",
            Language::RomanUrdu => "Roman Urdu",
            Language::English => "English",
            Language::Unknown => "Unknown",
        }
    }

    /// Whether the simplifier rewrites this language with substring tables
    /// rather than token lookup
    pub fn uses_script_rules(&self) -> bool {
        matches!(self, Language::Urdu | Language::Punjabi)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of language detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// The assigned language
    pub language: Language,
    /// Confidence in [0.0, 1.0]
    pub confidence: f64,
}

impl Detection {
    /// Create a detection result
    pub fn new(language: Language, confidence: f64) -> Self {
        Detection {
            language,
            confidence,
        }
    }

    /// The result for empty or unclassifiable input
    pub fn unknown() -> Self {
        Detection {
            language: Language::Unknown,
            confidence: 0.0,
        }
    }
}

impl std::fmt::Display for Detection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2})", self.language, self.confidence)
    }
}
