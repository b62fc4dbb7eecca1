use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{
    Client,
    Url,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::DictionaryEntry;
use crate::core::WizardError;

pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionarySettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for DictionarySettings {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: 10 }
    }
}

/// Anything that can answer a definition request for a single word.
pub trait DefinitionSource: Send + Sync {
    fn lookup<'a>(
        &'a self,
        word: &'a str,
    ) -> BoxFuture<'a, Result<Vec<DictionaryEntry>, WizardError>>;
}

#[derive(Debug, Clone)]
pub struct DictionaryClient {
    client: Client,
    base_url: Url,
}

impl DictionaryClient {
    pub fn new(settings: &DictionarySettings) -> Result<Self, WizardError> {
        let mut base = settings.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let base_url =
            Url::parse(&base).map_err(|e| WizardError::InvalidUrl(format!("{base}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(WizardError::InvalidUrl(base));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .build()
            .map_err(|e| WizardError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Endpoint for `word`, with the word encoded as a single path segment.
    pub fn entry_url(&self, word: &str) -> Result<Url, WizardError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| WizardError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }

    pub async fn fetch(&self, word: &str) -> Result<Vec<DictionaryEntry>, WizardError> {
        let url = self.entry_url(word)?;
        log::debug!("Looking up \"{}\" at {}", word, url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("Dictionary returned {} for \"{}\"", status, word);
            return Err(WizardError::DefinitionNotFound(word.to_string()));
        }

        let entries: Vec<DictionaryEntry> = response.json().await?;
        if entries.is_empty() {
            return Err(WizardError::DefinitionNotFound(word.to_string()));
        }

        Ok(entries)
    }
}

impl DefinitionSource for DictionaryClient {
    fn lookup<'a>(
        &'a self,
        word: &'a str,
    ) -> BoxFuture<'a, Result<Vec<DictionaryEntry>, WizardError>> {
        Box::pin(self.fetch(word))
    }
}
