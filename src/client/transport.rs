//! HTTP transport shared by every resource handle

use std::time::Duration;

use log::{debug, trace};
use reqwest::multipart::Form;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use super::auth::AuthHeader;
use super::verify::{Messages, status_error, verify};
use crate::error::{ApiError, Result};

/// Default Nessus management port
pub const DEFAULT_PORT: u16 = 8834;

const USER_AGENT: &str = concat!("nessus6/", env!("CARGO_PKG_VERSION"));

/// Where the Nessus server lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `https://{host}:{port}`
    Host { host: String, port: u16 },
    /// A full base URL, used verbatim
    Url(String),
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: Option<u16>) -> Self {
        Endpoint::Host {
            host: host.into(),
            port: port.unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Endpoint::Url(url.into())
    }

    pub fn base_url(&self) -> String {
        match self {
            Endpoint::Host { host, port } => format!("https://{}:{}", host, port),
            Endpoint::Url(url) => url.trim_end_matches('/').to_string(),
        }
    }
}

/// Transport settings
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Accept the self-signed certificate Nessus ships with
    pub accept_invalid_certs: bool,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Request body variants
pub(crate) enum Body<'a, B: Serialize + ?Sized> {
    Empty,
    Json(&'a B),
}

/// HTTP plumbing: base URL, the reqwest client and the auth header
pub struct Transport {
    http: HttpClient,
    base_url: String,
    auth: RwLock<Option<AuthHeader>>,
}

impl Transport {
    pub fn new(endpoint: &Endpoint, options: &ClientOptions) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: endpoint.base_url(),
            auth: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the header attached to subsequent requests
    pub async fn set_auth(&self, header: Option<AuthHeader>) {
        *self.auth.write().await = header;
    }

    pub async fn auth(&self) -> Option<AuthHeader> {
        self.auth.read().await.clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let builder = self.http.request(method, &url);
        match self.auth.read().await.as_ref() {
            Some(header) => builder.header(header.name(), header.value()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(ApiError::from)?;
        debug!("-> {}", response.status());
        Ok(response)
    }

    async fn read_text(response: Response) -> Result<(StatusCode, String)> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;
        trace!("response body: {}", text);
        Ok((status, text))
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Body<'_, B>,
        messages: &Messages,
    ) -> Result<Value> {
        let mut builder = self.request(method, path).await;
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Body::Json(payload) = body {
            builder = builder.json(payload);
        }

        let (status, text) = Self::read_text(self.send(builder).await?).await?;
        verify(status, &text, messages)
    }

    /// Issue a request and return the raw status and body without verifying
    pub async fn raw(&self, method: Method, path: &str) -> Result<(StatusCode, String)> {
        let builder = self.request(method, path).await;
        Self::read_text(self.send(builder).await?).await
    }

    pub async fn get(&self, path: &str, messages: &Messages) -> Result<Value> {
        self.get_query(path, &[], messages).await
    }

    pub async fn get_query(
        &self,
        path: &str,
        query: &[(&str, String)],
        messages: &Messages,
    ) -> Result<Value> {
        self.execute::<()>(Method::GET, path, query, Body::Empty, messages)
            .await
    }

    /// GET a file body; non-200 statuses are mapped like JSON calls
    pub async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, String)],
        messages: &Messages,
    ) -> Result<Vec<u8>> {
        let mut builder = self.request(Method::GET, path).await;
        if !query.is_empty() {
            builder = builder.query(query);
        }

        let response = self.send(builder).await?;
        let status = response.status();
        if status != StatusCode::OK {
            let (_, text) = Self::read_text(response).await?;
            return Err(status_error(status, &text, messages).into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;
        Ok(bytes.to_vec())
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        messages: &Messages,
    ) -> Result<Value> {
        self.execute(Method::POST, path, &[], Body::Json(body), messages)
            .await
    }

    pub async fn post_empty(&self, path: &str, messages: &Messages) -> Result<Value> {
        self.execute::<()>(Method::POST, path, &[], Body::Empty, messages)
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        messages: &Messages,
    ) -> Result<Value> {
        self.execute(Method::PUT, path, &[], Body::Json(body), messages)
            .await
    }

    pub async fn put_empty(&self, path: &str, messages: &Messages) -> Result<Value> {
        self.execute::<()>(Method::PUT, path, &[], Body::Empty, messages)
            .await
    }

    pub async fn delete(&self, path: &str, messages: &Messages) -> Result<Value> {
        self.execute::<()>(Method::DELETE, path, &[], Body::Empty, messages)
            .await
    }

    /// POST a multipart form
    pub async fn post_multipart(
        &self,
        path: &str,
        form: Form,
        messages: &Messages,
    ) -> Result<Value> {
        let builder = self.request(Method::POST, path).await.multipart(form);
        let (status, text) = Self::read_text(self.send(builder).await?).await?;
        verify(status, &text, messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_default_port() {
        let endpoint = Endpoint::new("10.0.0.5", None);
        assert_eq!(endpoint.base_url(), "https://10.0.0.5:8834");
    }

    #[test]
    fn test_endpoint_custom_port() {
        let endpoint = Endpoint::new("nessus.local", Some(443));
        assert_eq!(endpoint.base_url(), "https://nessus.local:443");
    }

    #[test]
    fn test_endpoint_url_trims_slash() {
        let endpoint = Endpoint::url("http://127.0.0.1:1234/");
        assert_eq!(endpoint.base_url(), "http://127.0.0.1:1234");
    }

    #[test]
    fn test_url_join() {
        let transport =
            Transport::new(&Endpoint::url("http://localhost:8834"), &ClientOptions::default())
                .unwrap();
        assert_eq!(transport.url("scans/5"), "http://localhost:8834/scans/5");
        assert_eq!(transport.url("/session"), "http://localhost:8834/session");
    }

    #[tokio::test]
    async fn test_auth_header_roundtrip() {
        let transport =
            Transport::new(&Endpoint::new("localhost", None), &ClientOptions::default()).unwrap();
        assert!(transport.auth().await.is_none());

        transport
            .set_auth(Some(AuthHeader::Token("abc".to_string())))
            .await;
        assert_eq!(
            transport.auth().await,
            Some(AuthHeader::Token("abc".to_string()))
        );

        transport.set_auth(None).await;
        assert!(transport.auth().await.is_none());
    }
}
