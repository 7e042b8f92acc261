use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::config::RegistryConfig;
use crate::domain::DesignCode;
use crate::error::RegistryError;
use crate::registry::{RegistryLookup, RegistryRecord};

const API_KEY_HEADER: &str = "USPTO-API-KEY";

pub struct UsptoRegistryClient {
    base_url: String,
    api_key: String,
    http: HttpClient,
}

impl UsptoRegistryClient {
    pub fn new(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let http = HttpClient::builder()
            .build()
            .map_err(RegistryError::ClientBuild)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
            http,
        })
    }

    fn design_url(&self, code: DesignCode) -> String {
        format!("{}/{}/info", self.base_url, code)
    }
}

#[async_trait]
impl RegistryLookup for UsptoRegistryClient {
    async fn lookup(&self, code: DesignCode) -> Result<Option<RegistryRecord>, RegistryError> {
        let transport = |source: reqwest::Error| RegistryError::Transport {
            code: code.to_string(),
            source,
        };

        let response = self
            .http
            .get(self.design_url(code))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            tracing::debug!(%code, status = response.status().as_u16(), "No registry result");
            return Ok(None);
        }

        let body = response.text().await.map_err(transport)?;
        Ok(Some(RegistryRecord::new(code, body)))
    }
}
