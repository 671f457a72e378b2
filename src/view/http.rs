//! HTTP view loader.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, StatusCode};
use url::Url;

use crate::view::loader::ViewLoader;
use crate::view::types::{content_type_for, LoadError, View};

/// Fetches view modules relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpViewLoader {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpViewLoader {
    /// Create a loader rooted at `base_url`.
    ///
    /// A trailing slash is added so modules resolve beneath the base.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self {
            base_url: Url::parse(&base)?,
            client: reqwest::Client::new(),
        })
    }

    /// Use a preconfigured client (proxy, TLS, headers).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn module_url(&self, module: &str) -> Result<Url, LoadError> {
        if module.is_empty() || module.starts_with('/') || module.contains("://") {
            return Err(LoadError::InvalidModule(module.to_string()));
        }
        let url = self
            .base_url
            .join(module)
            .map_err(|_| LoadError::InvalidModule(module.to_string()))?;
        if !url.as_str().starts_with(self.base_url.as_str()) {
            return Err(LoadError::InvalidModule(module.to_string()));
        }
        Ok(url)
    }
}

#[async_trait]
impl ViewLoader for HttpViewLoader {
    async fn load(&self, module: &str) -> Result<View, LoadError> {
        let url = self.module_url(module)?;
        tracing::debug!(url = %url, "Fetching view module");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Http(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LoadError::Missing(module.to_string()));
        }
        if !status.is_success() {
            return Err(LoadError::Http(format!("upstream returned {}", status)));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| content_type_for(module).to_string());

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Http(e.to_string()))?;

        Ok(View::new(module, content_type, body.to_vec()))
    }
}
