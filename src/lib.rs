pub mod config;
pub mod dataset;
pub mod detect;
pub mod engine;
pub mod error;
pub mod selector;
pub mod translate;

pub use config::Config;
pub use detect::LanguageDetector;
pub use engine::{Record, TranslatorEngine};
pub use error::{Result, YadtError};
