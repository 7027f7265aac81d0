use futures_util::StreamExt;
use pipeline_logging::pipeline_debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;

use crate::{FailureKind, SearchError, SearchHit, SearchOutcome, SearchSettings};

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError>;
}

/// Talks to the remote `POST /api/search` endpoint.
#[derive(Debug, Clone)]
pub struct ReqwestSearchClient {
    settings: SearchSettings,
    endpoint: Url,
    client: reqwest::Client,
}

impl ReqwestSearchClient {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let endpoint = Url::parse(&settings.base_url)
            .and_then(|base| base.join(&settings.search_path))
            .map_err(|err| SearchError::new(FailureKind::InvalidEndpoint, err.to_string()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            endpoint,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, SearchError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl SearchClient for ReqwestSearchClient {
    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        if query.trim().is_empty() {
            return Ok(SearchOutcome::Cleared);
        }

        pipeline_debug!("POST {} query_len={}", self.endpoint, query.len());
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(query.to_owned())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = self.read_body(response).await?;
        decode_hits(&body)
    }
}

/// Decodes `[[fullIdentifier, label], ...]`. Row limits are the endpoint's
/// business; every decoded row is kept.
fn decode_hits(body: &[u8]) -> Result<SearchOutcome, SearchError> {
    let pairs: Vec<(String, String)> = serde_json::from_slice(body)
        .map_err(|err| SearchError::new(FailureKind::Decode, err.to_string()))?;

    if pairs.is_empty() {
        return Ok(SearchOutcome::NoMatches);
    }

    let hits = pairs
        .into_iter()
        .map(|(full_identifier, label)| SearchHit {
            full_identifier,
            label,
        })
        .collect();
    Ok(SearchOutcome::Matches(hits))
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
