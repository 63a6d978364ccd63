use super::trickplay_source::{TrickplayManifest, TrickplaySource};
use crate::config::TrickplayConfig;
use crate::errors::{StreamError, TrickplayError, TrickplayResult};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, RequestBuilder, Response};
use std::sync::atomic::{AtomicU64, Ordering};

const TOKEN_HEADER: &str = "X-Emby-Token";

/// Fetches trickplay resources from a media server
#[derive(Debug)]
pub struct HttpTrickplaySource {
    base_url: String,
    client: Client,
    access_token: Option<String>,
    http_request_count: AtomicU64,
    http_request_bytes_read: AtomicU64,
}

impl HttpTrickplaySource {
    pub fn new(base_url: impl Into<String>, config: &TrickplayConfig) -> TrickplayResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(|e| StreamError::new(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            access_token: config.access_token.clone(),
            http_request_count: AtomicU64::new(0),
            http_request_bytes_read: AtomicU64::new(0),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Http request count function.
    pub fn http_request_count(&self) -> u64 {
        self.http_request_count.load(Ordering::Relaxed)
    }

    /// Http request bytes read function.
    pub fn http_request_bytes_read(&self) -> u64 {
        self.http_request_bytes_read.load(Ordering::Relaxed)
    }

    /// Print stats function.
    pub fn print_stats(&self) {
        let bytes = self.http_request_bytes_read();
        info!("📊 Trickplay Download Statistics:");
        info!("   🔢 HTTP Requests: {}", self.http_request_count());
        info!(
            "   📥 Total Downloaded: {} bytes ({:.2} KB, {:.2} MB)",
            bytes,
            bytes as f64 / 1024.0,
            bytes as f64 / 1024.0 / 1024.0
        );
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, url: &str) -> RequestBuilder {
        debug!("GET {}", url);
        let builder = self.client.get(url);
        match &self.access_token {
            Some(token) => builder.header(TOKEN_HEADER, token),
            None => builder,
        }
    }

    async fn send(&self, url: &str) -> TrickplayResult<Response> {
        let response = self.request(url).send().await?;
        self.http_request_count.fetch_add(1, Ordering::Relaxed);

        if !response.status().is_success() {
            return Err(TrickplayError::Stream(StreamError::new(format!(
                "HTTP error: {} for {}",
                response.status(),
                url
            ))));
        }
        Ok(response)
    }

    async fn get_bytes(&self, url: &str) -> TrickplayResult<Vec<u8>> {
        let bytes = self.send(url).await?.bytes().await?;
        self.http_request_bytes_read
            .fetch_add(bytes.len() as u64, Ordering::Relaxed);
        Ok(bytes.to_vec())
    }
}

/// Download a whole resource from an absolute URL, requested exactly as given.
pub async fn fetch_url(url: &str, config: &TrickplayConfig) -> TrickplayResult<Vec<u8>> {
    let source = HttpTrickplaySource::new(String::new(), config)?;
    source.get_bytes(url).await
}

#[async_trait]
impl TrickplaySource for HttpTrickplaySource {
    async fn fetch_manifest(&self, item_id: &str) -> TrickplayResult<TrickplayManifest> {
        let url = self.endpoint(&format!("/Trickplay/{}/GetManifest", item_id));
        let bytes = self.get_bytes(&url).await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            StreamError::new(format!("Invalid trickplay manifest for {}: {}", item_id, e)).into()
        })
    }

    async fn fetch_bif(&self, item_id: &str, width: u32) -> TrickplayResult<Vec<u8>> {
        let url = self.endpoint(&format!("/Trickplay/{}/{}/GetBIF", item_id, width));
        self.get_bytes(&url).await
    }

    async fn fetch_tile_sheet(
        &self,
        item_id: &str,
        width: u32,
        index: u32,
    ) -> TrickplayResult<Vec<u8>> {
        let url = self.endpoint(&format!(
            "/Videos/{}/Trickplay/{}/{}.jpg",
            item_id, width, index
        ));
        self.get_bytes(&url).await
    }

    fn print_stats(&self) {
        HttpTrickplaySource::print_stats(self)
    }
    fn http_request_count(&self) -> u64 {
        HttpTrickplaySource::http_request_count(self)
    }
    fn http_request_bytes_read(&self) -> u64 {
        HttpTrickplaySource::http_request_bytes_read(self)
    }
}
