use crate::config::Config;
use crate::error::ComicError;
use crate::models::{Comic, parse_comic};
use log::{debug, info};
use reqwest::{Client as HttpClient, Response, StatusCode};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    base_url: String,
}

impl Client {
    /// Create a client against the base URL and timeout in `config`.
    pub fn new(config: &Config) -> Result<Self, ComicError> {
        Self::with_timeout(&config.api_base_url, config.timeout)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ComicError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        let base_url = base_url.into();
        info!("Initialized comic API client for {}", base_url);
        Ok(Self { http, base_url })
    }

    /// Fetch and parse `/{page_no}/info.0.json`.
    pub async fn fetch_comic(&self, page_no: u32) -> Result<Comic, ComicError> {
        let path = format!("/{page_no}/info.0.json");
        debug!("Fetching comic page {}", page_no);
        let body = self.get_text(path).await?;
        parse_comic(&body)
    }

    async fn get_text(&self, path: String) -> Result<String, ComicError> {
        let response = self.get(path).await?;
        response.text().await.map_err(ComicError::from)
    }

    async fn get(&self, path: String) -> Result<Response, ComicError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET request to {}", url);
        let response = self.http.get(url).send().await?;
        debug!("Received status {}", response.status());
        handle_status(response.status())?;
        Ok(response)
    }
}

fn handle_status(status: StatusCode) -> Result<(), ComicError> {
    if status.is_client_error() || status.is_server_error() {
        return Err(ComicError::Status(status));
    }
    Ok(())
}
