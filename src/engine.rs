//! Core translation engine: selects fields, decides per field whether a
//! translation is needed, invokes the backend, and rewrites records.

use crate::config::Config;
use crate::detect::LanguageDetector;
use crate::selector::select_fields;
use crate::translate::{create_translator, Translate};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// One dataset element: a string-keyed JSON object.
pub type Record = Map<String, Value>;

/// Translation engine which:
/// - Selects fields using glob patterns.
/// - Optionally performs language detection to skip fields already in the
///   target language.
/// - Preserves originals with a configurable prefix.
/// - Marks records with a translation status field.
pub struct TranslatorEngine {
    translator: Box<dyn Translate>,
    detector: Option<LanguageDetector>,
    target_language: String,
    field_patterns: Vec<String>,
    marker_field: String,
    original_prefix: String,
    show_progress: bool,
}

impl TranslatorEngine {
    pub fn new(translator: Box<dyn Translate>, target_language: impl Into<String>) -> Self {
        Self {
            translator,
            detector: None,
            target_language: target_language.into(),
            field_patterns: vec!["*".to_string()],
            marker_field: "wasTranslated".to_string(),
            original_prefix: "original_".to_string(),
            show_progress: false,
        }
    }

    /// Build an engine from configuration, selecting the translation
    /// backend and wiring up the language detector.
    pub fn from_config(config: &Config) -> Self {
        let detector = LanguageDetector::new(
            config.target_language.clone(),
            config.detect_language_threshold,
        );

        Self::new(create_translator(config), config.target_language.clone())
            .with_detector(detector)
            .with_field_patterns(config.field_patterns_to_translate.clone())
            .with_marker_field(config.translation_marker_field.clone())
            .with_original_prefix(config.original_value_field_prefix.clone())
    }

    pub fn with_detector(mut self, detector: LanguageDetector) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn with_field_patterns(mut self, patterns: Vec<String>) -> Self {
        self.field_patterns = patterns;
        self
    }

    /// Set the marker field name. An empty name disables marking.
    pub fn with_marker_field(mut self, name: impl Into<String>) -> Self {
        self.marker_field = name.into();
        self
    }

    /// Set the original-value field prefix. An empty prefix disables
    /// original preservation.
    pub fn with_original_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.original_prefix = prefix.into();
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn backend_name(&self) -> &'static str {
        self.translator.name()
    }

    fn should_translate(&self, value: Option<&Value>) -> bool {
        let value = match value {
            Some(Value::Null) | None => return false,
            Some(v) => v,
        };

        let text = value_text(value);
        if text.trim().is_empty() {
            return false;
        }

        match &self.detector {
            Some(detector) => !detector.is_target_language(&text),
            None => true,
        }
    }

    /// Translate a single string, applying the deterministic placeholder
    /// fallback when the backend fails. Backend errors never propagate;
    /// worst case the field carries the bracketed-tag placeholder.
    async fn translate_text(&self, text: &str) -> String {
        match self.translator.translate(text, &self.target_language).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Falling back to placeholder translation: {}", e);
                format!("[{}] {}", self.target_language, text)
            }
        }
    }

    /// Translate a single record according to configuration.
    ///
    /// All field values are read from the input record, so a rewrite of one
    /// field never affects the evaluation of another. The marker field is
    /// set to true whenever the translate path was taken for at least one
    /// field, even if the backend fell back to the placeholder.
    pub async fn translate_record(&self, record: &Record) -> Record {
        let mut out = record.clone();
        let candidates = select_fields(record, &self.field_patterns);
        let mut translated_any = false;

        for field in candidates {
            let original_value = record.get(&field);
            if !self.should_translate(original_value) {
                continue;
            }
            // should_translate rejected None and Null above.
            let original_value = original_value.cloned().unwrap_or(Value::Null);

            let translated = self.translate_text(&value_text(&original_value)).await;
            out.insert(field.clone(), Value::String(translated));
            if !self.original_prefix.is_empty() {
                out.insert(format!("{}{}", self.original_prefix, field), original_value);
            }
            translated_any = true;
        }

        if !self.marker_field.is_empty() {
            out.insert(self.marker_field.clone(), Value::Bool(translated_any));
        }

        out
    }

    /// Translate a dataset record by record, preserving order. Records are
    /// independent: no state is shared across them beyond the engine
    /// configuration.
    pub async fn translate_dataset(&self, records: &[Record]) -> Vec<Record> {
        let progress = if self.show_progress {
            let pb = ProgressBar::new(records.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:40.green} {pos}/{len} records")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            Some(pb)
        } else {
            None
        };

        let mut result = Vec::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            debug!("Translating record {}", idx);
            result.push(self.translate_record(record).await);
            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        result
    }
}

/// String form of a JSON value: strings verbatim, everything else as its
/// compact JSON serialization.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::MockTranslator;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    fn mock_engine() -> TranslatorEngine {
        TranslatorEngine::new(Box::new(MockTranslator), "en")
            .with_detector(LanguageDetector::new("en", 0.7))
            .with_field_patterns(vec!["*text".to_string()])
    }

    #[tokio::test]
    async fn test_translate_record_translates_and_marks() {
        let engine = mock_engine();
        let item = record(json!({
            "id": 1,
            "text": "Auf Wiedersehen.",
            "note": "German farewell example"
        }));

        let out = engine.translate_record(&item).await;
        assert_eq!(out["id"], json!(1));
        assert_eq!(out["note"], json!("German farewell example"));
        assert_eq!(out["text"], json!("[en] Auf Wiedersehen."));
        assert_eq!(out["original_text"], json!("Auf Wiedersehen."));
        assert_eq!(out["wasTranslated"], json!(true));
    }

    #[tokio::test]
    async fn test_translate_record_skips_null_and_blank_fields() {
        let engine = mock_engine();
        let item = record(json!({"text": null, "subtext": "   "}));

        let out = engine.translate_record(&item).await;
        assert_eq!(out["text"], json!(null));
        assert_eq!(out["subtext"], json!("   "));
        assert_eq!(out["wasTranslated"], json!(false));
        assert!(!out.contains_key("original_text"));
        assert!(!out.contains_key("original_subtext"));
    }

    #[tokio::test]
    async fn test_translate_record_skips_target_language_text() {
        let engine = TranslatorEngine::new(Box::new(MockTranslator), "en")
            .with_detector(LanguageDetector::new("en", 0.5))
            .with_field_patterns(vec!["text".to_string()]);
        let item = record(json!({
            "text": "This is a plain English sentence that detection should recognize."
        }));

        let out = engine.translate_record(&item).await;
        assert_eq!(
            out["text"],
            json!("This is a plain English sentence that detection should recognize.")
        );
        assert_eq!(out["wasTranslated"], json!(false));
        assert!(!out.contains_key("original_text"));
    }

    #[tokio::test]
    async fn test_threshold_zero_translates_even_target_language() {
        let engine = TranslatorEngine::new(Box::new(MockTranslator), "en")
            .with_detector(LanguageDetector::new("en", 0.0))
            .with_field_patterns(vec!["text".to_string()]);
        let item = record(json!({"text": "Already English."}));

        let out = engine.translate_record(&item).await;
        assert_eq!(out["text"], json!("[en] Already English."));
        assert_eq!(out["wasTranslated"], json!(true));
    }

    #[tokio::test]
    async fn test_non_string_values_use_json_form() {
        let engine = TranslatorEngine::new(Box::new(MockTranslator), "en")
            .with_field_patterns(vec!["count".to_string()]);
        let item = record(json!({"count": 42}));

        let out = engine.translate_record(&item).await;
        assert_eq!(out["count"], json!("[en] 42"));
        assert_eq!(out["original_count"], json!(42));
    }

    #[tokio::test]
    async fn test_empty_marker_field_disables_marking() {
        let engine = mock_engine().with_marker_field("");
        let item = record(json!({"text": "Hallo Welt."}));

        let out = engine.translate_record(&item).await;
        assert!(!out.contains_key("wasTranslated"));
        assert_eq!(out["text"], json!("[en] Hallo Welt."));
    }

    #[tokio::test]
    async fn test_empty_prefix_disables_original_preservation() {
        let engine = mock_engine().with_original_prefix("");
        let item = record(json!({"text": "Hallo Welt."}));

        let out = engine.translate_record(&item).await;
        assert_eq!(out["text"], json!("[en] Hallo Welt."));
        assert!(!out.contains_key("original_text"));
        assert_eq!(out["wasTranslated"], json!(true));
    }

    #[tokio::test]
    async fn test_custom_marker_and_prefix_names() {
        let engine = mock_engine()
            .with_marker_field("translated")
            .with_original_prefix("pre_");
        let item = record(json!({"text": "Hallo Welt."}));

        let out = engine.translate_record(&item).await;
        assert_eq!(out["translated"], json!(true));
        assert_eq!(out["pre_text"], json!("Hallo Welt."));
    }

    #[tokio::test]
    async fn test_translate_dataset_preserves_length_and_order() {
        let engine = mock_engine();
        let items = vec![
            record(json!({"id": 1, "text": "Auf Wiedersehen."})),
            record(json!({"id": 2, "text": "Bonjour tout le monde"})),
            record(json!({"id": 3})),
        ];

        let out = engine.translate_dataset(&items).await;
        assert_eq!(out.len(), 3);
        for (i, rec) in out.iter().enumerate() {
            assert_eq!(rec["id"], items[i]["id"]);
            assert!(rec.contains_key("wasTranslated"));
        }
        assert_eq!(out[0]["text"], json!("[en] Auf Wiedersehen."));
        assert_eq!(out[1]["text"], json!("[en] Bonjour tout le monde"));
    }

    #[tokio::test]
    async fn test_input_record_is_not_mutated() {
        let engine = mock_engine();
        let item = record(json!({"text": "Auf Wiedersehen."}));
        let snapshot = item.clone();

        let _ = engine.translate_record(&item).await;
        assert_eq!(item, snapshot);
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("abc")), "abc");
        assert_eq!(value_text(&json!(7)), "7");
        assert_eq!(value_text(&json!({"a": 1})), "{\"a\":1}");
    }
}
