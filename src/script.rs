//! Character classification for the scripts the detector cares about.
//!
//! Classifies each character as Arabic-script, Gurmukhi, Latin, whitespace
//! or other, and aggregates the counts for a whole string into a
//! `ScriptProfile` that the detector reads its ratios from.

/// Script class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScriptClass {
    /// Arabic script, including presentation forms. Covers Urdu and
    /// Shahmukhi Punjabi.
    Arabic,
    /// Gurmukhi script (Punjabi)
    Gurmukhi,
    /// Latin letters
    Latin,
    /// Whitespace
    Whitespace,
    /// Everything else (digits, punctuation, other scripts)
    #[default]
    Other,
}

/// Characters that occur in Urdu but not in standard Arabic or Persian
/// orthography: ṭe, ḍal, ṛe, baṛi ye and baṛi ye with hamza.
const URDU_MARKS: &[char] = &['\u{0679}', '\u{0688}', '\u{0691}', '\u{06D2}', '\u{06D3}'];

/// Check whether a character belongs to the Arabic script ranges used by
/// the detector
pub fn is_arabic_script(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)        // Arabic
        || ('\u{0750}'..='\u{077F}').contains(&c) // Arabic Supplement
        || ('\u{FB50}'..='\u{FDFF}').contains(&c) // Presentation Forms-A
        || ('\u{FE70}'..='\u{FEFF}').contains(&c) // Presentation Forms-B
}

/// Check whether a character is in the Gurmukhi block
pub fn is_gurmukhi(c: char) -> bool {
    ('\u{0A00}'..='\u{0A7F}').contains(&c)
}

/// Check whether a character is one of the Urdu-distinguishing marks
pub fn is_urdu_mark(c: char) -> bool {
    URDU_MARKS.contains(&c)
}

/// Get the script class of a character
pub fn script_class(c: char) -> ScriptClass {
    if c.is_whitespace() {
        return ScriptClass::Whitespace;
    }

    if is_arabic_script(c) {
        return ScriptClass::Arabic;
    }

    if is_gurmukhi(c) {
        return ScriptClass::Gurmukhi;
    }

    // Basic Latin letters + Latin-1 Supplement + Latin Extended-A
    if c.is_ascii_alphabetic() || ('\u{00C0}'..='\u{017F}').contains(&c) {
        return ScriptClass::Latin;
    }

    ScriptClass::Other
}

/// Aggregate script counts for a string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptProfile {
    /// Non-whitespace characters
    pub total: usize,
    /// Arabic-script characters
    pub arabic: usize,
    /// Gurmukhi characters
    pub gurmukhi: usize,
    /// Latin letters
    pub latin: usize,
    /// Urdu-distinguishing marks (subset of `arabic`)
    pub urdu_marks: usize,
}

impl ScriptProfile {
    /// Build a profile in a single pass over the characters
    pub fn new(text: &str) -> Self {
        let mut profile = ScriptProfile::default();

        for c in text.chars() {
            match script_class(c) {
                ScriptClass::Whitespace => continue,
                ScriptClass::Arabic => profile.arabic += 1,
                ScriptClass::Gurmukhi => profile.gurmukhi += 1,
                ScriptClass::Latin => profile.latin += 1,
                ScriptClass::Other => {}
            }
            if is_urdu_mark(c) {
                profile.urdu_marks += 1;
            }
            profile.total += 1;
        }

        profile
    }

    /// Share of non-whitespace characters that are Arabic script, 0.0 for
    /// empty input
    pub fn arabic_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.arabic as f64 / self.total as f64
    }

    /// Whether any Gurmukhi character was seen
    pub fn has_gurmukhi(&self) -> bool {
        self.gurmukhi > 0
    }

    /// Whether any Urdu-distinguishing mark was seen
    pub fn has_urdu_marks(&self) -> bool {
        self.urdu_marks > 0
    }

    /// Check if no non-whitespace character was seen
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_chars() {
        assert_eq!(script_class('م'), ScriptClass::Arabic);
        assert_eq!(script_class('ک'), ScriptClass::Arabic);
        assert_eq!(script_class('؟'), ScriptClass::Arabic); // Arabic question mark
        assert_eq!(script_class('۔'), ScriptClass::Arabic); // Arabic full stop
        assert_eq!(script_class('\u{FB56}'), ScriptClass::Arabic); // peh presentation form
    }

    #[test]
    fn test_gurmukhi_chars() {
        assert_eq!(script_class('ਤ'), ScriptClass::Gurmukhi);
        assert_eq!(script_class('ਪ'), ScriptClass::Gurmukhi);
        assert_eq!(script_class('ੀ'), ScriptClass::Gurmukhi);
    }

    #[test]
    fn test_latin_chars() {
        assert_eq!(script_class('a'), ScriptClass::Latin);
        assert_eq!(script_class('Z'), ScriptClass::Latin);
        assert_eq!(script_class('é'), ScriptClass::Latin);
    }

    #[test]
    fn test_whitespace_and_other() {
        assert_eq!(script_class(' '), ScriptClass::Whitespace);
        assert_eq!(script_class('\t'), ScriptClass::Whitespace);
        assert_eq!(script_class('5'), ScriptClass::Other);
        assert_eq!(script_class('!'), ScriptClass::Other);
        assert_eq!(script_class('日'), ScriptClass::Other);
    }

    #[test]
    fn test_urdu_marks() {
        for c in ['ٹ', 'ڈ', 'ڑ', 'ے', 'ۓ'] {
            assert!(is_urdu_mark(c), "{} should be an Urdu mark", c);
            assert_eq!(script_class(c), ScriptClass::Arabic);
        }
        // Common to Urdu and Arabic, not distinguishing
        assert!(!is_urdu_mark('م'));
        assert!(!is_urdu_mark('ا'));
    }

    #[test]
    fn test_profile_pure_urdu() {
        let p = ScriptProfile::new("میں نے پڑھی");
        assert_eq!(p.total, 9);
        assert_eq!(p.arabic, 9);
        assert_eq!(p.gurmukhi, 0);
        assert_eq!(p.urdu_marks, 2); // ے and ڑ
        assert_eq!(p.arabic_ratio(), 1.0);
    }

    #[test]
    fn test_profile_mixed() {
        let p = ScriptProfile::new("hello دنیا");
        assert_eq!(p.total, 9);
        assert_eq!(p.latin, 5);
        assert_eq!(p.arabic, 4);
        assert!((p.arabic_ratio() - 4.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_profile_empty() {
        let p = ScriptProfile::new("");
        assert!(p.is_empty());
        assert_eq!(p.arabic_ratio(), 0.0);

        let ws = ScriptProfile::new("   \n\t");
        assert!(ws.is_empty());
        assert_eq!(ws.arabic_ratio(), 0.0);
    }

    #[test]
    fn test_profile_gurmukhi() {
        let p = ScriptProfile::new("ਹਾਲ ਹੈ?");
        assert!(p.has_gurmukhi());
        assert_eq!(p.gurmukhi, 5);
        // ? is neither script
        assert_eq!(p.total, 6);
    }
}
