//! Transport kernel - the request/response machinery every client shares.
//!
//! The kernel contains no resource semantics, only transport. It is built
//! from three pieces:
//!
//! - [`HttpSend`]: the narrow seam to the machinery that performs one
//!   network exchange. [`ReqwestHttp`] is the production implementation;
//!   tests swap in in-memory fakes.
//! - [`Transport`]: response policy around a sender. It runs the fixed
//!   pipeline every operation shares (build, send, validate, transform) and
//!   owns the two replaceable response hooks.
//! - [`BodyCodec`]: the serialization seam turning typed values into
//!   request bodies and response bodies back into typed values.
//!   [`JsonCodec`] is the default.
//!
//! # Raw requests
//!
//! The typed clients cover collection and item traffic; anything else can go
//! through the transport directly and still benefit from the same response
//! policy:
//!
//! ```rust,no_run
//! use restkit::core::kernel::{HttpRequest, ReqwestHttp, Transport};
//! use restkit::ClientConfig;
//! use reqwest::Method;
//!
//! # async fn example() -> Result<(), restkit::RestError> {
//! let config = ClientConfig::new("https://api.example.com".to_string());
//! let transport = Transport::new(ReqwestHttp::new(&config)?);
//!
//! let request = HttpRequest::new("https://api.example.com/health".to_string(), Method::GET);
//! let response = transport.execute(request).await?;
//! assert_eq!(response.status, 200);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod http;

// Re-export key types for convenience
pub use codec::{BodyCodec, EncodedBody, JsonCodec};
pub use http::{
    HttpRequest, HttpSend, RawResponse, ReqwestHttp, RequestHook, Transport, TransformHook,
    ValidateHook,
};
