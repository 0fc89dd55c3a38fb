// src/core/net.rs
// Blocking fetch of rendered wiki HTML through the MediaWiki parse API.

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::FetchOptions;
use crate::error::{Error, Result};

/// Anything that can hand back the raw markup of a page.
pub trait DocumentSource {
    fn fetch_document(&self, page: &str) -> Result<String>;
}

/// `GET {api}?action=parse&page=..&prop=text&format=json`
pub struct WikiClient {
    agent: ureq::Agent,
    api_url: String,
}

#[derive(Deserialize)]
struct Envelope {
    parse: Option<Parsed>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Parsed {
    text: ParsedText,
}

#[derive(Deserialize)]
struct ParsedText {
    #[serde(rename = "*")]
    html: String,
}

#[derive(Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

impl WikiClient {
    pub fn new(opts: &FetchOptions) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(opts.timeout)
            .user_agent(&opts.user_agent)
            .build();
        Self { agent, api_url: opts.api_url.clone() }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl DocumentSource for WikiClient {
    fn fetch_document(&self, page: &str) -> Result<String> {
        debug!(api = %self.api_url, page, "requesting parsed page");

        let resp = self
            .agent
            .get(&self.api_url)
            .query("action", "parse")
            .query("page", page)
            .query("prop", "text")
            .query("format", "json")
            .call()?;

        let envelope: Envelope = resp
            .into_json()
            .map_err(|e| Error::FetchFailed(format!("unreadable API response: {e}")))?;

        if let Some(err) = envelope.error {
            return Err(Error::FetchFailed(format!("API error {}: {}", err.code, err.info)));
        }
        let html = envelope
            .parse
            .map(|p| p.text.html)
            .ok_or_else(|| Error::FetchFailed("response has no parse.text".into()))?;

        info!(page, bytes = html.len(), "fetched page");
        Ok(html)
    }
}
