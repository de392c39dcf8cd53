use async_trait::async_trait;
use thiserror::Error;

/// HTTP headers represented as key/value pairs.
///
/// Header names are treated case-insensitively by helper functions.
pub type HttpHeaders = Vec<(String, String)>;

/// A minimal HTTP GET request.
///
/// The GitHub explorer API surface is read-only, so the transport only
/// models GET: a URL plus request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: HttpHeaders,
}

/// A minimal HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        header_get(&self.headers, name)
    }
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("http transport error: {0}")]
    Transport(String),

    #[error("no mock response registered for {url}")]
    NoMockResponse { url: String },
}

/// Transport boundary for all HTTP I/O.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Get the first header value matching `name` (case-insensitive).
#[must_use]
pub fn header_get<'a>(headers: &'a HttpHeaders, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub mod reqwest_transport {
    use super::*;

    use std::time::Duration as StdDuration;

    /// A real HTTP transport backed by reqwest.
    #[derive(Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new(client: reqwest::Client) -> Self {
            Self { client }
        }

        pub fn with_timeout(timeout: StdDuration) -> Result<Self, HttpError> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| HttpError::Transport(e.to_string()))?;
            Ok(Self { client })
        }
    }

    #[async_trait]
    impl HttpTransport for ReqwestTransport {
        async fn get(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            let mut builder = self.client.get(&request.url);
            for (k, v) in request.headers {
                builder = builder.header(&k, &v);
            }

            let resp = builder
                .send()
                .await
                .map_err(|e| HttpError::Transport(e.to_string()))?;

            let status = resp.status().as_u16();
            let mut headers: HttpHeaders = Vec::new();
            for (name, value) in resp.headers().iter() {
                headers.push((
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                ));
            }

            let body = resp
                .bytes()
                .await
                .map_err(|e| HttpError::Transport(e.to_string()))?
                .to_vec();

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}

// ---------- Test-only mock transport ----------

#[cfg(test)]
use std::collections::{HashMap, VecDeque};
#[cfg(test)]
use std::sync::{Arc, Mutex};

/// In-memory mock transport.
///
/// Designed for unit tests: no sockets, no loopback HTTP servers.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[cfg(test)]
#[derive(Default)]
struct MockTransportInner {
    routes: HashMap<String, VecDeque<HttpResponse>>,
    requests: Vec<HttpRequest>,
}

#[cfg(test)]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for a URL.
    ///
    /// If multiple responses are registered for the same URL, they are
    /// returned in FIFO order.
    pub fn push_response(&self, url: impl Into<String>, response: HttpResponse) {
        let mut inner = self
            .inner
            .lock()
            .expect("mock transport lock should not be poisoned");
        inner.routes.entry(url.into()).or_default().push_back(response);
    }

    /// Register a 200 response with a JSON body.
    pub fn push_json(&self, url: impl Into<String>, body: &str) {
        self.push_response(
            url,
            HttpResponse {
                status: 200,
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: body.as_bytes().to_vec(),
            },
        );
    }

    /// Register a non-2xx response with a GitHub-style error payload.
    pub fn push_error(&self, url: impl Into<String>, status: u16, message: &str) {
        self.push_response(
            url,
            HttpResponse {
                status,
                headers: Vec::new(),
                body: format!("{{\"message\":\"{message}\"}}").into_bytes(),
            },
        );
    }

    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        let inner = self
            .inner
            .lock()
            .expect("mock transport lock should not be poisoned");
        inner.requests.clone()
    }
}

#[cfg(test)]
#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut inner = self
            .inner
            .lock()
            .expect("mock transport lock should not be poisoned");

        let url = request.url.clone();
        inner.requests.push(request);

        match inner.routes.get_mut(&url).and_then(|q| q.pop_front()) {
            Some(resp) => Ok(resp),
            None => Err(HttpError::NoMockResponse { url }),
        }
    }
}
