use crate::config::Config;
use crate::error::Result;
use async_trait::async_trait;

pub mod google;
pub mod mock;

pub use google::GoogleTranslator;
pub use mock::MockTranslator;

#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String>;
    fn name(&self) -> &'static str;
}

/// Select a translation backend from the configuration.
///
/// Mock mode or a missing API key yields the deterministic mock backend,
/// so runs without credentials still produce well-formed output.
pub fn create_translator(config: &Config) -> Box<dyn Translate> {
    if config.mock_mode || config.api_key.is_empty() {
        Box::new(MockTranslator)
    } else {
        Box::new(GoogleTranslator::new(config.api_key.clone()))
    }
}
