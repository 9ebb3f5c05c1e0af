//! Persona catalog over HTTP.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use debate_core::ports::PersonaCatalogPort;
use debate_types::{
    DebateError, Result,
    config::ClientConfig,
    persona::{Persona, PersonaCatalog},
};

pub struct HttpPersonaCatalog {
    url: String,
}

impl HttpPersonaCatalog {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            url: config.catalog_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl PersonaCatalogPort for HttpPersonaCatalog {
    async fn fetch_personas(&self) -> Result<Vec<Persona>> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| DebateError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(DebateError::Catalog(format!("HTTP {}: {}", status, text)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DebateError::Network(e.to_string()))?;
        parse_catalog(&body)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogBody {
    Wrapped(PersonaCatalog),
    Bare(Vec<Persona>),
}

/// Accepts both `{ "personas": [...] }` and a bare array.
pub fn parse_catalog(body: &str) -> Result<Vec<Persona>> {
    let parsed: CatalogBody =
        serde_json::from_str(body).map_err(|e| DebateError::Catalog(e.to_string()))?;
    Ok(match parsed {
        CatalogBody::Wrapped(catalog) => catalog.personas,
        CatalogBody::Bare(personas) => personas,
    })
}
