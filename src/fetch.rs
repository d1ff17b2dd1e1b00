//! Downloading hosted survey exports.
//!
//! Survey platforms commonly serve exports from a signed URL; the CLI
//! accepts one anywhere it accepts a file path. The client sits behind a
//! trait so transports can be swapped in tests.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Request, Response};

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

/// Plain unauthenticated [`reqwest`] transport.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}

/// Downloads the export at `url` and returns its raw bytes.
pub async fn fetch_export<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = Request::new(
        reqwest::Method::GET,
        url.parse()
            .with_context(|| format!("invalid export URL '{url}'"))?,
    );

    let resp = client.execute(req).await?;
    if !resp.status().is_success() {
        anyhow::bail!("export download failed with status {}", resp.status());
    }

    Ok(resp.bytes().await?.to_vec())
}
