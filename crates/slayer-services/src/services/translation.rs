//! Chapter title translation.

use anyhow::Result;
use async_trait::async_trait;

const TRANSLATED_MARKER: &str = "[مترجم]";

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String>;
}

/// Translator that only prefixes the text with the "translated" marker.
#[derive(Debug, Clone, Default)]
pub struct MarkerTranslator;

impl MarkerTranslator {
    pub fn new() -> Self {
        MarkerTranslator
    }
}

#[async_trait]
impl Translator for MarkerTranslator {
    async fn translate(&self, text: &str, _target_lang: &str) -> Result<String> {
        Ok(format!("{} {}", TRANSLATED_MARKER, text))
    }
}

/// Translate `text`, falling back to the original when the translator fails.
pub async fn translate_or_original(
    translator: &dyn Translator,
    text: &str,
    target_lang: &str,
) -> String {
    match translator.translate(text, target_lang).await {
        Ok(translated) => translated,
        Err(e) => {
            tracing::warn!(error = %e, target_lang, "Translation failed, keeping original text");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(&self, _text: &str, _target_lang: &str) -> Result<String> {
            Err(anyhow::anyhow!("quota exceeded"))
        }
    }

    #[tokio::test]
    async fn test_marker_translator_prefixes() {
        let translated = MarkerTranslator::new()
            .translate("The Beginning", "ar")
            .await
            .unwrap();
        assert_eq!(translated, "[مترجم] The Beginning");
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_original() {
        let text = translate_or_original(&FailingTranslator, "The Beginning", "ar").await;
        assert_eq!(text, "The Beginning");
    }
}
