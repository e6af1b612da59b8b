//! # aasaan-rs
//!
//! Rule-based language identification and text simplification for Urdu,
//! Punjabi and Roman Urdu, with English as the fallback class.
//!
//! Detection works from script ratios (Arabic script, Gurmukhi) and marker
//! words for romanized text. Simplification rewrites complex vocabulary
//! with embedded replacement tables and splits overly long sentences.
//! Everything runs offline; all rule data is compiled into the binary.
//!
//! ## Quick Start
//!
//! ```rust
//! use aasaan_rs::{detect_language, simplify_text, Language};
//!
//! let detection = detect_language("Main kal aapke ghar aaunga");
//! assert_eq!(detection.language, Language::RomanUrdu);
//!
//! let simple = simplify_text("This is information about education");
//! assert_eq!(simple, "This is jaankari about parhai");
//! ```
//!
//! ## Reusable instances
//!
//! ```rust
//! use aasaan_rs::{LanguageDetector, OfflineSimplifier};
//!
//! let detector = LanguageDetector::new();
//! let simplifier = OfflineSimplifier::new();
//!
//! let detection = detector.detect("میں نے آج ایک کتاب پڑھی");
//! println!("{} ({:.2})", detection.language.display_name(), detection.confidence);
//! println!("{}", simplifier.simplify("یہ کتاب بہترین ہے"));
//! ```
//!
//! ## Python Bindings
//!
//! This library can be compiled as a Python extension module via the
//! `python` feature. See the README for details.

pub mod detector;
pub mod language;
pub mod lexicon;
pub mod script;
pub mod simplifier;
pub mod splitter;

// Python bindings (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use detector::{detect_language, language_display_name, LanguageDetector};
pub use language::{Detection, Language};
pub use script::{script_class, ScriptClass, ScriptProfile};
pub use simplifier::{simplify_text, OfflineSimplifier};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
