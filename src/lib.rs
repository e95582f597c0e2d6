//! Typed, resource-oriented access to REST-like JSON APIs.
//!
//! The crate splits the usual hand-rolled API client into replaceable
//! pieces:
//!
//! - a transport kernel ([`core::kernel`]) that sends one request and
//!   applies response policy (validate, then transform),
//! - routing ([`Router`]) that turns resource types and identifiers into
//!   request URLs,
//! - typed clients ([`ResourceClient`], [`PaginatedClient`]) exposing CRUD
//!   and page access for any type implementing [`Resource`].
//!
//! Declaring a resource is one derive and one empty impl:
//!
//! ```rust,no_run
//! use restkit::{IdentifiedResource, Resource, ResourceClient};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Article {
//!     id: u64,
//!     title: String,
//! }
//!
//! impl Resource for Article {}
//!
//! impl IdentifiedResource for Article {
//!     type Id = u64;
//!
//!     fn id(&self) -> &Self::Id {
//!         &self.id
//!     }
//! }
//!
//! # async fn example() -> Result<(), restkit::RestError> {
//! let client = ResourceClient::new("https://api.example.com".to_string())?;
//!
//! let articles: Vec<Article> = client.all(None).await?;
//! let one: Article = client.find(&42, None).await?;
//! let updated = client.update(&one, None).await?;
//! client.delete(&updated, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod core;

pub use clients::paginated::{Paginated, PaginatedClient};
pub use clients::resource::{ResourceClient, ResourceClientBuilder};
pub use core::config::ClientConfig;
pub use core::errors::RestError;
pub use core::router::{BasicRouter, PrefixRouter, Router, RouterExt};
pub use core::traits::{IdentifiedResource, Resource};
