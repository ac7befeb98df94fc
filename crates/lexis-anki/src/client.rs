use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

/// Audio AnkiConnect downloads and embeds into the listed fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioAttachment {
    pub url: String,
    pub filename: String,
    pub fields: Vec<String>,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    /// Create a deck, returning its id (existing decks are left untouched)
    pub async fn create_deck(&self, deck: &str) -> Result<u64> {
        let response: AnkiResponse<u64> = self.invoke("createDeck", json!({ "deck": deck })).await?;
        response.into_result()
    }

    /// Add a note to Anki
    pub async fn add_note(
        &self,
        deck: &str,
        model: &str,
        front: &str,
        back: &str,
        audio: Option<AudioAttachment>,
    ) -> Result<u64> {
        let mut note = json!({
            "deckName": deck,
            "modelName": model,
            "fields": {
                "Front": front,
                "Back": back
            },
            "tags": ["lexis"]
        });
        if let Some(audio) = audio {
            note["audio"] = json!([audio]);
        }

        let response: AnkiResponse<u64> = self.invoke("addNote", json!({ "note": note })).await?;
        response.into_result()
    }

    /// Write the deck as a package file at `path`
    pub async fn export_package(&self, deck: &str, path: &Path) -> Result<bool> {
        let params = json!({
            "deck": deck,
            "path": path.display().to_string(),
            "includeSched": false
        });

        let response: AnkiResponse<bool> = self.invoke("exportPackage", params).await?;
        response.into_result()
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")
    }
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result.context("AnkiConnect returned null result")
    }
}
