//! Python bindings for aasaan-rs using PyO3
//!
//! This module provides Python-compatible wrappers around the language
//! detector and the offline simplifier.

use pyo3::prelude::*;

use crate::detector::{detect_language, LanguageDetector as RustLanguageDetector};
use crate::language::{Detection as RustDetection, Language};
use crate::simplifier::{simplify_text, OfflineSimplifier as RustOfflineSimplifier};

/// A Python-compatible detection result
#[pyclass(name = "Detection")]
#[derive(Clone)]
pub struct PyDetection {
    #[pyo3(get)]
    pub language: String,
    #[pyo3(get)]
    pub confidence: f64,
    #[pyo3(get)]
    pub display_name: String,
}

impl From<RustDetection> for PyDetection {
    fn from(d: RustDetection) -> Self {
        PyDetection {
            language: d.language.as_str().to_string(),
            confidence: d.confidence,
            display_name: d.language.display_name().to_string(),
        }
    }
}

#[pymethods]
impl PyDetection {
    fn __repr__(&self) -> String {
        format!(
            "Detection('{}', confidence={:.2})",
            self.language, self.confidence
        )
    }

    fn __str__(&self) -> String {
        self.language.clone()
    }
}

/// Language detector for Urdu, Punjabi, Roman Urdu and English
///
/// Example:
///     >>> from aasaan_rs import LanguageDetector
///     >>> detector = LanguageDetector()
///     >>> d = detector.detect("Main kal aapke ghar aaunga")
///     >>> print(d.language, d.confidence)
#[pyclass(name = "LanguageDetector")]
pub struct PyLanguageDetector {
    detector: RustLanguageDetector,
}

#[pymethods]
impl PyLanguageDetector {
    #[new]
    fn new() -> Self {
        PyLanguageDetector {
            detector: RustLanguageDetector::new(),
        }
    }

    /// Detect the language of a piece of text
    ///
    /// Args:
    ///     text: The text to classify
    ///
    /// Returns:
    ///     A Detection with language, confidence and display_name
    fn detect(&self, text: &str) -> PyDetection {
        self.detector.detect(text).into()
    }

    fn __repr__(&self) -> String {
        "LanguageDetector()".to_string()
    }
}

/// Offline rule-based simplifier
///
/// Example:
///     >>> from aasaan_rs import OfflineSimplifier
///     >>> simplifier = OfflineSimplifier()
///     >>> simplifier.simplify("This is information about education")
///     'This is jaankari about parhai'
#[pyclass(name = "OfflineSimplifier")]
pub struct PyOfflineSimplifier {
    simplifier: RustOfflineSimplifier,
}

#[pymethods]
impl PyOfflineSimplifier {
    #[new]
    fn new() -> Self {
        PyOfflineSimplifier {
            simplifier: RustOfflineSimplifier::new(),
        }
    }

    /// Simplify a piece of text using the embedded rule tables
    ///
    /// Args:
    ///     text: The text to simplify
    ///
    /// Returns:
    ///     The simplified text
    fn simplify(&self, text: &str) -> String {
        self.simplifier.simplify(text)
    }

    /// The offline simplifier is always available
    fn is_available(&self) -> bool {
        self.simplifier.is_available()
    }

    fn __repr__(&self) -> String {
        "OfflineSimplifier()".to_string()
    }
}

/// Detect the language of a piece of text
///
/// This is a convenience function equivalent to LanguageDetector().detect()
///
/// Args:
///     text: The text to classify
///
/// Returns:
///     A Detection object
#[pyfunction]
fn detect(text: &str) -> PyDetection {
    detect_language(text).into()
}

/// Simplify a piece of text using the offline rules
///
/// This is a convenience function equivalent to OfflineSimplifier().simplify()
///
/// Args:
///     text: The text to simplify
///
/// Returns:
///     The simplified text
#[pyfunction]
fn simplify(text: &str) -> String {
    simplify_text(text)
}

/// Get the display name for a language code
///
/// Args:
///     code: A code such as "urdu" or "roman_urdu"
///
/// Returns:
///     The human-facing name, e.g. "اردو (Urdu)"
#[pyfunction]
fn language_name(code: &str) -> PyResult<String> {
    match Language::from_code(code) {
        Some(lang) => Ok(lang.display_name().to_string()),
        None => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "unknown language code: {}",
            code
        ))),
    }
}

/// Create the Python module
#[pymodule]
fn aasaan_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDetection>()?;
    m.add_class::<PyLanguageDetector>()?;
    m.add_class::<PyOfflineSimplifier>()?;
    m.add_function(wrap_pyfunction!(detect, m)?)?;
    m.add_function(wrap_pyfunction!(simplify, m)?)?;
    m.add_function(wrap_pyfunction!(language_name, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
