use crate::core::config::{ClientConfig, ConfigError};
use crate::core::errors::RestError;
use crate::core::kernel::codec::EncodedBody;
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tracing::{instrument, trace};

/// A fully described HTTP request, ready to hand to a send primitive.
///
/// Every client operation builds exactly one of these per call. The fields
/// are public so request hooks can adjust anything, including the method and
/// body, before the request goes out.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Absolute target URL.
    pub url: String,
    /// HTTP method.
    pub method: Method,
    /// Header name/value pairs, applied in order.
    pub headers: Vec<(String, String)>,
    /// Request body bytes, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a request for `url` with no headers and no body.
    pub fn new(url: String, method: Method) -> Self {
        Self {
            url,
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Append a header pair.
    pub fn header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }
}

/// A complete response as received from the wire: status, headers and body
/// bytes, with no interpretation applied.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Response header name/value pairs, in wire order.
    pub headers: Vec<(String, String)>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// The body interpreted as UTF-8, lossily.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// The narrow boundary to the machinery that actually performs network I/O:
/// send one request, collect one complete response.
///
/// Connection pooling, TLS and DNS live behind implementations of this
/// trait. Everything above it (validation, transformation, resource
/// semantics) is pure and can be tested against an in-memory implementation.
#[async_trait]
pub trait HttpSend: Send + Sync {
    /// Send a request and collect the complete response.
    ///
    /// Non-success status codes are not errors at this level; the response
    /// is returned as-is and acceptance is decided by the transport's
    /// validation hook.
    ///
    /// # Errors
    /// Returns [`RestError::Transport`] when the exchange fails at the
    /// connection level (DNS, refused connection, timeout).
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, RestError>;
}

/// [`HttpSend`] implementation using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestHttp {
    client: Client,
}

impl ReqwestHttp {
    /// Create a sender with a connection pool configured from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                ConfigError::InvalidConfiguration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttp {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, RestError> {
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        trace!("Response body: {}", String::from_utf8_lossy(&body));

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Hook mutating a request descriptor after construction, immediately before
/// send. Runs last, so whatever it sets wins.
pub type RequestHook = dyn Fn(&mut HttpRequest) + Send + Sync;

/// Response acceptance policy. Returning an error fails the whole operation.
pub type ValidateHook = dyn Fn(&RawResponse) -> Result<(), RestError> + Send + Sync;

/// Pure rewrite applied to accepted responses before decoding.
pub type TransformHook = dyn Fn(RawResponse) -> RawResponse + Send + Sync;

/// Default acceptance policy: any status in `[200, 300)` passes, anything
/// else becomes [`RestError::Status`] carrying the code and body text.
fn accept_success(response: &RawResponse) -> Result<(), RestError> {
    if (200..300).contains(&response.status) {
        Ok(())
    } else {
        Err(RestError::Status {
            code: response.status,
            body: response.body_text().into_owned(),
        })
    }
}

/// A send primitive wrapped with response policy.
///
/// The transport runs the fixed pipeline every operation shares: send the
/// request, validate the response, transform it. Validation always happens
/// first; a rejected response is never transformed. Both hooks are set when
/// the transport is built and stay fixed for its lifetime, so concurrent
/// calls all see the same policy.
pub struct Transport<H = ReqwestHttp> {
    http: H,
    pub(crate) validate: Arc<ValidateHook>,
    pub(crate) transform: Arc<TransformHook>,
}

impl<H: Clone> Clone for Transport<H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            validate: Arc::clone(&self.validate),
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<H> std::fmt::Debug for Transport<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport").finish_non_exhaustive()
    }
}

impl<H: HttpSend> Transport<H> {
    /// Wrap a send primitive with default policy: statuses in `[200, 300)`
    /// accepted, responses passed through unchanged.
    pub fn new(http: H) -> Self {
        Self {
            http,
            validate: Arc::new(accept_success),
            transform: Arc::new(|response| response),
        }
    }

    /// Replace the response acceptance policy.
    pub fn with_validator(
        mut self,
        validate: impl Fn(&RawResponse) -> Result<(), RestError> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Arc::new(validate);
        self
    }

    /// Replace the response transformation. The transform sees only
    /// responses the validation policy accepted.
    pub fn with_transform(
        mut self,
        transform: impl Fn(RawResponse) -> RawResponse + Send + Sync + 'static,
    ) -> Self {
        self.transform = Arc::new(transform);
        self
    }

    /// Build a request descriptor for one operation.
    ///
    /// When a body is present its declared content type becomes the
    /// `Content-Type` header. The `configure` hook runs after everything
    /// else and may override any part of the request.
    pub fn build_request(
        &self,
        url: String,
        method: Method,
        body: Option<EncodedBody>,
        configure: &RequestHook,
    ) -> HttpRequest {
        let mut request = HttpRequest::new(url, method);
        if let Some(body) = body {
            request.header("Content-Type", body.content_type);
            request.body = Some(body.bytes);
        }
        configure(&mut request);
        request
    }

    /// Send a caller-built request through the validate/transform pipeline.
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn execute(&self, request: HttpRequest) -> Result<RawResponse, RestError> {
        let response = self.http.send(request).await?;
        (self.validate)(&response)?;
        Ok((self.transform)(response))
    }

    /// Run the full pipeline for one operation: build the request, send it,
    /// validate the response, transform it.
    pub async fn perform(
        &self,
        url: String,
        method: Method,
        body: Option<EncodedBody>,
        configure: &RequestHook,
    ) -> Result<RawResponse, RestError> {
        let request = self.build_request(url, method, body, configure);
        self.execute(request).await
    }
}
