use crate::core::traits::{derived_path, IdentifiedResource, Resource};

/// Strategy turning resource types and identifiers into request URLs.
///
/// Implementations must be deterministic and free of side effects: the same
/// inputs always produce the same URL, and computing a URL never touches the
/// network or any mutable state. The provided methods implement the default
/// convention (`{base}/{path}` and `{base}/{path}/{id}`); custom routers
/// usually only override [`Router::collection`].
///
/// A router can be installed per client or passed per call; a per-call
/// router applies to that one request only.
pub trait Router: Send + Sync {
    /// URL of the collection at `path`, relative to `base_url`.
    ///
    /// A trailing slash on `base_url` is tolerated and does not double up.
    fn collection(&self, base_url: &str, path: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    }

    /// URL of the item identified by `id` within the collection at `path`.
    fn item(&self, base_url: &str, path: &str, id: &str) -> String {
        format!("{}/{}", self.collection(base_url, path), id)
    }
}

/// Typed URL derivations available on every [`Router`], including trait
/// objects.
pub trait RouterExt: Router {
    /// Collection URL for a resource type.
    fn url_for<R: Resource>(&self, base_url: &str) -> String {
        self.collection(base_url, &R::path())
    }

    /// Item URL for a resource type and an identifier.
    fn url_for_id<R: IdentifiedResource>(&self, base_url: &str, id: &R::Id) -> String {
        self.item(base_url, &R::path(), &id.to_string())
    }

    /// Item URL for a resource instance, using its own identifier.
    fn url_for_resource<R: IdentifiedResource>(&self, base_url: &str, resource: &R) -> String {
        self.url_for_id::<R>(base_url, resource.id())
    }

    /// Collection URL for an arbitrary type, deriving the path from the type
    /// name exactly like the [`Resource::path`] default does.
    ///
    /// Useful for request shapes that are serialized but never fetched, so
    /// they implement neither `Resource` nor `Deserialize`.
    fn url_for_type<T>(&self, base_url: &str) -> String {
        self.collection(base_url, &derived_path(std::any::type_name::<T>()))
    }
}

impl<T: Router + ?Sized> RouterExt for T {}

/// The default convention router: `{base}/{path}` and `{base}/{path}/{id}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRouter;

impl Router for BasicRouter {}

/// Router that mounts every collection under a fixed prefix, such as an API
/// version segment: `{base}/{prefix}/{path}`.
#[derive(Debug, Clone)]
pub struct PrefixRouter {
    prefix: String,
}

impl PrefixRouter {
    /// Create a router inserting `prefix` between the base URL and every
    /// path. Leading and trailing slashes on the prefix are ignored.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_matches('/').to_string(),
        }
    }
}

impl Router for PrefixRouter {
    fn collection(&self, base_url: &str, path: &str) -> String {
        format!("{}/{}/{}", base_url.trim_end_matches('/'), self.prefix, path)
    }
}
