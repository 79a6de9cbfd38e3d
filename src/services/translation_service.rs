use futures::future::join_all;
use reqwest::Client;
use sha2::{Digest, Sha256};
use crate::config::constants::SUPPORTED_TARGET_LANGUAGES;
use crate::enums::service_error::ServiceError;
use crate::structs::config::translation_config::TranslationConfig;
use crate::structs::translation::deepl_request::{DeepLRequest, DeepLResponse};
use crate::structs::translation::translation_result::TranslationResult;

pub fn content_hash(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}

pub struct TranslationService {
    api_key: String,
    client: Client,
    config: TranslationConfig,
}

impl TranslationService {
    pub fn new(api_key: String, config: TranslationConfig) -> Self {
        Self {
            api_key,
            client: Client::new(),
            config,
        }
    }

    pub fn normalize_target(target_lang: &str) -> Result<String, ServiceError> {
        let target = target_lang.trim().to_uppercase();
        if SUPPORTED_TARGET_LANGUAGES.contains(&target.as_str()) {
            Ok(target)
        } else {
            Err(ServiceError::InvalidRequest(format!("Unsupported target language: {}", target_lang)))
        }
    }

    fn build_request(&self, text: &str, target_lang: String) -> DeepLRequest {
        let source_lang = Some(self.config.source_lang.clone()).filter(|lang| !lang.is_empty());
        DeepLRequest {
            text: vec![text.to_string()],
            target_lang,
            source_lang,
        }
    }

    pub async fn translate(&self, content_key: &str, text: &str, target_lang: &str) -> Result<TranslationResult, ServiceError> {
        let target_lang = Self::normalize_target(target_lang)?;
        if text.trim().is_empty() {
            return Err(ServiceError::InvalidRequest(format!("Nothing to translate for {}", content_key)));
        }

        let url = format!("{}/v2/translate", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&self.build_request(text, target_lang.clone()))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ServiceError::from_status(status.as_u16(), error_text));
        }

        let body: DeepLResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::SerializationError(e.to_string()))?;

        Self::result_from_response(content_key, text, target_lang, body)
    }

    /// Translates independent entries concurrently; results keep input order.
    pub async fn translate_many(
        &self,
        entries: &[(String, String)],
        target_lang: &str,
    ) -> Vec<Result<TranslationResult, ServiceError>> {
        join_all(
            entries
                .iter()
                .map(|(key, text)| self.translate(key, text, target_lang)),
        )
        .await
    }

    fn result_from_response(
        content_key: &str,
        source_text: &str,
        target_lang: String,
        body: DeepLResponse,
    ) -> Result<TranslationResult, ServiceError> {
        let translation = body
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::SerializationError("No translation in response".to_string()))?;

        log::debug!(
            "🌐 Translated {} ({} -> {})",
            content_key,
            translation.detected_source_language.as_deref().unwrap_or("?"),
            target_lang
        );

        Ok(TranslationResult {
            content_key: content_key.to_string(),
            target_lang,
            translated_text: translation.text,
            content_hash: content_hash(source_text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_sha256() {
        assert_eq!(
            content_hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_ne!(content_hash("Merhaba"), content_hash("Merhaba!"));
    }

    #[test]
    fn normalizes_target_language() {
        assert_eq!(TranslationService::normalize_target(" en ").unwrap(), "EN");
        assert!(matches!(
            TranslationService::normalize_target("klingon"),
            Err(ServiceError::InvalidRequest(_))
        ));
    }

    #[test]
    fn builds_result_from_response() {
        let body: DeepLResponse = serde_json::from_str(
            r#"{"translations":[{"detected_source_language":"TR","text":"Our services"}]}"#,
        )
        .unwrap();

        let result = TranslationService::result_from_response("hero.title", "Hizmetlerimiz", "EN".to_string(), body).unwrap();
        assert_eq!(result.translated_text, "Our services");
        assert_eq!(result.content_key, "hero.title");
        assert_eq!(result.content_hash, content_hash("Hizmetlerimiz"));
    }

    #[test]
    fn empty_response_is_an_error() {
        let body: DeepLResponse = serde_json::from_str(r#"{"translations":[]}"#).unwrap();
        assert!(TranslationService::result_from_response("k", "t", "EN".to_string(), body).is_err());
    }

    #[test]
    fn request_carries_source_language() {
        let service = TranslationService::new("key".to_string(), TranslationConfig::default());
        let json = serde_json::to_value(service.build_request("Merhaba", "EN".to_string())).unwrap();
        assert_eq!(json["source_lang"], "TR");
        assert_eq!(json["text"][0], "Merhaba");
    }

    #[tokio::test]
    async fn rejects_bad_input_before_any_request() {
        let service = TranslationService::new("key".to_string(), TranslationConfig::default());
        let results = service
            .translate_many(
                &[
                    ("a".to_string(), "Merhaba".to_string()),
                    ("b".to_string(), "Dünya".to_string()),
                ],
                "xx",
            )
            .await;

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| matches!(r, Err(ServiceError::InvalidRequest(_)))));
    }
}
