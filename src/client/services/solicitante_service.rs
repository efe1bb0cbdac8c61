use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::client::services::response_parser::{parse_detail_response, parse_search_response};
use crate::common::error::LookupError;
use crate::common::models::{SolicitanteDetalle, SolicitanteId, SolicitanteResumen};

const SEARCH_PATH: &str = "api/buscar-solicitantes/";

/// Lookup backend used by the search widget.
#[async_trait]
pub trait SolicitanteApi: Send + Sync {
    /// Free-text search. The caller has already trimmed and length-checked `query`.
    async fn buscar(&self, query: &str) -> Result<Vec<SolicitanteResumen>, LookupError>;

    /// Full record of one solicitante.
    async fn obtener(&self, id: SolicitanteId) -> Result<SolicitanteDetalle, LookupError>;
}

/// `SolicitanteApi` over the retiros HTTP endpoints.
#[derive(Debug, Clone)]
pub struct HttpSolicitanteApi {
    base: Url,
    client: Client,
}

impl HttpSolicitanteApi {
    pub fn new(base: Url) -> Self {
        Self::with_client(base, Client::new())
    }

    pub fn with_client(mut base: Url, client: Client) -> Self {
        // join() replaces the last segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { base, client }
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn search_url(&self, query: &str) -> Result<Url, LookupError> {
        let mut url = self
            .base
            .join(SEARCH_PATH)
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    pub fn detail_url(&self, id: SolicitanteId) -> Result<Url, LookupError> {
        self.base
            .join(&format!("api/solicitante/{}/", id))
            .map_err(|e| LookupError::Transport(e.to_string()))
    }

    // Error payloads come with 404/500 status, so the body is read whatever the status.
    async fn get_body(&self, url: Url) -> Result<String, LookupError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            log::warn!("retiros server answered {} ({} bytes)", status, body.len());
        }
        Ok(body)
    }
}

#[async_trait]
impl SolicitanteApi for HttpSolicitanteApi {
    async fn buscar(&self, query: &str) -> Result<Vec<SolicitanteResumen>, LookupError> {
        let body = self.get_body(self.search_url(query)?).await?;
        let results = parse_search_response(&body)?;
        log::info!("search {:?} -> {} results", query, results.len());
        Ok(results)
    }

    async fn obtener(&self, id: SolicitanteId) -> Result<SolicitanteDetalle, LookupError> {
        let body = self.get_body(self.detail_url(id)?).await?;
        parse_detail_response(&body)
    }
}
