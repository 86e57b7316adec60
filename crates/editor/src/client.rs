//! HTTP client for the design service (`/api/designs`).

use serde::de::DeserializeOwned;
use shared::Design;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("design service returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Thin async wrapper over the design REST endpoints
#[derive(Debug, Clone)]
pub struct DesignClient {
    http: reqwest::Client,
    base_url: String,
}

impl DesignClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn designs_url(&self) -> String {
        format!("{}/api/designs", self.base_url)
    }

    fn design_url(&self, id: i64) -> String {
        format!("{}/api/designs/{id}", self.base_url)
    }

    pub async fn list(&self) -> Result<Vec<Design>, ClientError> {
        let resp = self.http.get(self.designs_url()).send().await?;
        decode(resp).await
    }

    pub async fn get(&self, id: i64) -> Result<Design, ClientError> {
        let resp = self.http.get(self.design_url(id)).send().await?;
        decode(resp).await
    }

    pub async fn create(&self, design: &Design) -> Result<Design, ClientError> {
        let resp = self.http.post(self.designs_url()).json(design).send().await?;
        decode(resp).await
    }

    pub async fn update(&self, id: i64, design: &Design) -> Result<Design, ClientError> {
        let resp = self.http.put(self.design_url(id)).json(design).send().await?;
        decode(resp).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let resp = self.http.delete(self.design_url(id)).send().await?;
        check(resp).await.map(|_| ())
    }
}

async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::error!(status = status.as_u16(), "design service error: {body}");
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    Ok(check(resp).await?.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let c = DesignClient::new("http://localhost:5000/");
        assert_eq!(c.base_url(), "http://localhost:5000");
        assert_eq!(c.designs_url(), "http://localhost:5000/api/designs");
        assert_eq!(c.design_url(42), "http://localhost:5000/api/designs/42");
    }

    #[tokio::test]
    async fn test_unreachable_service_reports_error() {
        let c = DesignClient::new("http://127.0.0.1:9");
        let err = c.get(1).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
