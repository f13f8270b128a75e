//! Language detection built on whatlang.
//!
//! whatlang's trigram detection is deterministic, so repeated runs over
//! identical input always produce identical guesses.

use whatlang::Lang;

/// Thin wrapper around whatlang providing a confidence threshold and a
/// "same language as target" helper.
///
/// A threshold of zero or below disables detection: every text is treated
/// as not being in the target language, so translation is always attempted.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    target_language: String,
    threshold: f64,
}

impl LanguageDetector {
    pub fn new(target_language: impl Into<String>, threshold: f64) -> Self {
        Self {
            target_language: target_language.into(),
            threshold,
        }
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Detect the language of `text`, returning `(language_code, confidence)`.
    ///
    /// Empty or whitespace-only text is vacuously in the target language
    /// with full confidence. When whatlang yields no candidate, the target
    /// language is returned with zero confidence so the threshold check
    /// biases toward translating rather than silently skipping.
    pub fn detect(&self, text: &str) -> (String, f64) {
        let cleaned = text.trim();
        if cleaned.is_empty() {
            return (self.target_language.clone(), 1.0);
        }

        match whatlang::detect(cleaned) {
            Some(info) => (iso639_1(info.lang()).to_string(), info.confidence()),
            None => (self.target_language.clone(), 0.0),
        }
    }

    /// Returns true if `text` is in the target language with confidence at
    /// or above the threshold. Always false when the threshold is <= 0.
    pub fn is_target_language(&self, text: &str) -> bool {
        if self.threshold <= 0.0 {
            return false;
        }

        let (lang, confidence) = self.detect(text);
        lang == self.target_language && confidence >= self.threshold
    }
}

/// Map whatlang's ISO 639-3 language to the two-letter ISO 639-1 code used
/// for target-language comparison. Unmapped languages keep the raw code.
fn iso639_1(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Rus => "ru",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Nld => "nl",
        Lang::Tur => "tr",
        Lang::Pol => "pl",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Ell => "el",
        Lang::Heb => "he",
        Lang::Hun => "hu",
        Lang::Ron => "ro",
        Lang::Bul => "bg",
        Lang::Ces => "cs",
        Lang::Ukr => "uk",
        Lang::Vie => "vi",
        Lang::Ind => "id",
        Lang::Tha => "th",
        l => l.code(),
    }
}
