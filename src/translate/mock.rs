//! Deterministic placeholder translation for testing and cost-free runs.

use crate::error::Result;
use crate::translate::Translate;
use async_trait::async_trait;

/// Translator that wraps the input in a language-tag prefix instead of
/// calling any external service: `"Hallo"` becomes `"[en] Hallo"`.
///
/// The output has the same shape as a real translation, so downstream
/// consumers never need to special-case mock versus real mode.
pub struct MockTranslator;

#[async_trait]
impl Translate for MockTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        Ok(format!("[{}] {}", target_lang, text))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
