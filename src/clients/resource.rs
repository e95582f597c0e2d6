use crate::core::config::ClientConfig;
use crate::core::errors::RestError;
use crate::core::kernel::codec::{BodyCodec, JsonCodec};
use crate::core::kernel::http::{
    HttpRequest, HttpSend, RawResponse, ReqwestHttp, RequestHook, Transport, TransformHook,
    ValidateHook,
};
use crate::core::router::{BasicRouter, Router, RouterExt};
use crate::core::traits::{IdentifiedResource, Resource};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Builder for [`ResourceClient`] instances.
///
/// Collects routing, codec and hook choices, then builds the client in one
/// step. Everything set here is fixed for the client's lifetime.
pub struct ResourceClientBuilder<C = JsonCodec> {
    config: ClientConfig,
    router: Arc<dyn Router>,
    codec: C,
    update_method: Method,
    request_hook: Arc<RequestHook>,
    validate: Option<Arc<ValidateHook>>,
    transform: Option<Arc<TransformHook>>,
}

impl ResourceClientBuilder {
    /// Create a builder with the given configuration and defaults: the
    /// convention router, the JSON codec, PUT updates, no hooks.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            router: Arc::new(BasicRouter),
            codec: JsonCodec,
            update_method: Method::PUT,
            request_hook: Arc::new(|_| {}),
            validate: None,
            transform: None,
        }
    }
}

impl<C: BodyCodec> ResourceClientBuilder<C> {
    /// Replace the default router for every operation of the built client.
    pub fn with_router(mut self, router: impl Router + 'static) -> Self {
        self.router = Arc::new(router);
        self
    }

    /// Set the HTTP method used by update operations. PUT is the default;
    /// PATCH is the usual alternative.
    pub fn with_update_method(mut self, method: Method) -> Self {
        self.update_method = method;
        self
    }

    /// Swap the body codec.
    pub fn with_codec<D: BodyCodec>(self, codec: D) -> ResourceClientBuilder<D> {
        ResourceClientBuilder {
            config: self.config,
            router: self.router,
            codec,
            update_method: self.update_method,
            request_hook: self.request_hook,
            validate: self.validate,
            transform: self.transform,
        }
    }

    /// Hook run on every request descriptor after the client has finished
    /// building it. It runs last, so whatever it sets wins, including the
    /// method, headers and body.
    pub fn with_request_hook(
        mut self,
        hook: impl Fn(&mut HttpRequest) + Send + Sync + 'static,
    ) -> Self {
        self.request_hook = Arc::new(hook);
        self
    }

    /// Replace the response acceptance policy. The default accepts statuses
    /// in `[200, 300)` and rejects everything else with
    /// [`RestError::Status`].
    pub fn with_validator(
        mut self,
        validate: impl Fn(&RawResponse) -> Result<(), RestError> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Arc::new(validate));
        self
    }

    /// Set a pure rewrite applied to accepted responses before decoding,
    /// for servers that wrap payloads in envelopes or pad them.
    pub fn with_transform(
        mut self,
        transform: impl Fn(RawResponse) -> RawResponse + Send + Sync + 'static,
    ) -> Self {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// Build the client over a reqwest connection pool.
    ///
    /// # Errors
    /// Returns [`RestError::Config`] when the HTTP client cannot be
    /// constructed from the configuration.
    pub fn build(self) -> Result<ResourceClient<ReqwestHttp, C>, RestError> {
        let http = ReqwestHttp::new(&self.config)?;
        Ok(self.assemble(http))
    }

    /// Build the client around a caller-supplied send primitive. Intended
    /// for in-memory fakes in tests and for alternative HTTP backends.
    pub fn build_with<H: HttpSend>(self, http: H) -> ResourceClient<H, C> {
        self.assemble(http)
    }

    fn assemble<H: HttpSend>(self, http: H) -> ResourceClient<H, C> {
        let mut transport = Transport::new(http);
        if let Some(validate) = self.validate {
            transport.validate = validate;
        }
        if let Some(transform) = self.transform {
            transport.transform = transform;
        }

        ResourceClient {
            transport,
            codec: self.codec,
            base_url: self.config.base_url,
            router: self.router,
            update_method: self.update_method,
            request_hook: self.request_hook,
        }
    }
}

/// Generic CRUD client for resource collections.
///
/// One client serves any number of resource types against a single base URL.
/// Every operation runs the same pipeline: route the URL, encode the body if
/// there is one, apply the request hook, send, validate, transform, decode.
/// Calls are stateless and independent; the client never retries, caches, or
/// changes its own configuration, so it can be shared freely across tasks.
///
/// Each operation accepts an optional router that overrides the client's
/// router for that one call.
///
/// ```rust,no_run
/// use restkit::{Resource, ResourceClient};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Article {
///     id: u64,
///     title: String,
/// }
///
/// impl Resource for Article {}
///
/// # async fn example() -> Result<(), restkit::RestError> {
/// let client = ResourceClient::new("https://api.example.com".to_string())?;
/// let articles: Vec<Article> = client.all(None).await?;
/// # Ok(())
/// # }
/// ```
pub struct ResourceClient<H: HttpSend = ReqwestHttp, C: BodyCodec = JsonCodec> {
    transport: Transport<H>,
    codec: C,
    base_url: String,
    router: Arc<dyn Router>,
    update_method: Method,
    request_hook: Arc<RequestHook>,
}

impl<H: HttpSend + Clone, C: BodyCodec + Clone> Clone for ResourceClient<H, C> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            codec: self.codec.clone(),
            base_url: self.base_url.clone(),
            router: Arc::clone(&self.router),
            update_method: self.update_method.clone(),
            request_hook: Arc::clone(&self.request_hook),
        }
    }
}

impl<H: HttpSend, C: BodyCodec> std::fmt::Debug for ResourceClient<H, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("base_url", &self.base_url)
            .field("update_method", &self.update_method)
            .finish_non_exhaustive()
    }
}

impl ResourceClient {
    /// Create a client with default settings against `base_url`.
    ///
    /// # Errors
    /// Returns [`RestError::Config`] when the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: String) -> Result<Self, RestError> {
        ResourceClientBuilder::new(ClientConfig::new(base_url)).build()
    }
}

impl<H: HttpSend, C: BodyCodec> ResourceClient<H, C> {
    /// Base URL every collection path resolves against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The router used when a call does not supply its own.
    pub fn router(&self) -> &dyn Router {
        self.router.as_ref()
    }

    pub(crate) fn transport(&self) -> &Transport<H> {
        &self.transport
    }

    pub(crate) fn codec(&self) -> &C {
        &self.codec
    }

    pub(crate) fn request_hook(&self) -> &RequestHook {
        self.request_hook.as_ref()
    }

    pub(crate) fn route<'a>(&'a self, per_call: Option<&'a dyn Router>) -> &'a dyn Router {
        per_call.unwrap_or_else(|| self.router.as_ref())
    }

    /// Fetch every resource in the collection.
    ///
    /// An empty collection decodes to an empty vector, not an error.
    #[instrument(skip(self, router), fields(resource = %R::path()))]
    pub async fn all<R: Resource>(&self, router: Option<&dyn Router>) -> Result<Vec<R>, RestError> {
        let url = self.route(router).url_for::<R>(&self.base_url);
        let response = self
            .transport
            .perform(url, Method::GET, None, self.request_hook.as_ref())
            .await?;
        self.codec.decode(&response.body)
    }

    /// Fetch the first resource of the collection, if any.
    ///
    /// Defined in terms of [`ResourceClient::all`]: a single collection
    /// request, then the first decoded element. No second request is made.
    pub async fn first<R: Resource>(
        &self,
        router: Option<&dyn Router>,
    ) -> Result<Option<R>, RestError> {
        Ok(self.all::<R>(router).await?.into_iter().next())
    }

    /// Fetch a single resource by identifier.
    ///
    /// A missing resource surfaces as whatever the backend answers for its
    /// item URL, usually a 404 [`RestError::Status`]; there is no dedicated
    /// not-found error.
    #[instrument(skip(self, id, router), fields(resource = %R::path(), id = %id))]
    pub async fn find<R: IdentifiedResource>(
        &self,
        id: &R::Id,
        router: Option<&dyn Router>,
    ) -> Result<R, RestError> {
        let url = self.route(router).url_for_id::<R>(&self.base_url, id);
        let response = self
            .transport
            .perform(url, Method::GET, None, self.request_hook.as_ref())
            .await?;
        self.codec.decode(&response.body)
    }

    /// Create a resource by POSTing `body` to its collection URL and decode
    /// the response as `R`.
    ///
    /// Routing follows the body type, so a dedicated creation shape (say a
    /// `NewArticle` without an id) posts to its own declared collection
    /// while the response decodes as the stored entity.
    #[instrument(skip(self, body, router), fields(resource = %B::path()))]
    pub async fn create<B, R>(&self, body: &B, router: Option<&dyn Router>) -> Result<R, RestError>
    where
        B: Resource + Serialize,
        R: DeserializeOwned,
    {
        let url = self.route(router).url_for::<B>(&self.base_url);
        let encoded = self.codec.encode(body)?;
        let response = self
            .transport
            .perform(url, Method::POST, Some(encoded), self.request_hook.as_ref())
            .await?;
        self.codec.decode(&response.body)
    }

    /// Create a resource and discard the response body.
    ///
    /// Validation still applies; a rejected status fails exactly like
    /// [`ResourceClient::create`].
    #[instrument(skip(self, body, router), fields(resource = %B::path()))]
    pub async fn create_discarding<B>(
        &self,
        body: &B,
        router: Option<&dyn Router>,
    ) -> Result<(), RestError>
    where
        B: Resource + Serialize,
    {
        let url = self.route(router).url_for::<B>(&self.base_url);
        let encoded = self.codec.encode(body)?;
        self.transport
            .perform(url, Method::POST, Some(encoded), self.request_hook.as_ref())
            .await?;
        Ok(())
    }

    /// Update a resource at its item URL using the configured update method
    /// and decode the server's version of it back.
    #[instrument(skip(self, resource, router), fields(resource = %R::path(), id = %resource.id()))]
    pub async fn update<R>(&self, resource: &R, router: Option<&dyn Router>) -> Result<R, RestError>
    where
        R: IdentifiedResource + Serialize,
    {
        let url = self.route(router).url_for_resource(&self.base_url, resource);
        let encoded = self.codec.encode(resource)?;
        let response = self
            .transport
            .perform(
                url,
                self.update_method.clone(),
                Some(encoded),
                self.request_hook.as_ref(),
            )
            .await?;
        self.codec.decode(&response.body)
    }

    /// Update a resource and discard the response body.
    #[instrument(skip(self, resource, router), fields(resource = %R::path(), id = %resource.id()))]
    pub async fn update_discarding<R>(
        &self,
        resource: &R,
        router: Option<&dyn Router>,
    ) -> Result<(), RestError>
    where
        R: IdentifiedResource + Serialize,
    {
        let url = self.route(router).url_for_resource(&self.base_url, resource);
        let encoded = self.codec.encode(resource)?;
        self.transport
            .perform(
                url,
                self.update_method.clone(),
                Some(encoded),
                self.request_hook.as_ref(),
            )
            .await?;
        Ok(())
    }

    /// Delete a resource, addressing it by its own identifier.
    pub async fn delete<R>(
        &self,
        resource: &R,
        router: Option<&dyn Router>,
    ) -> Result<(), RestError>
    where
        R: IdentifiedResource,
    {
        self.delete_by_id::<R>(resource.id(), router).await
    }

    /// Delete the resource with the given identifier. Success carries no
    /// payload; any response body is discarded.
    #[instrument(skip(self, id, router), fields(resource = %R::path(), id = %id))]
    pub async fn delete_by_id<R>(
        &self,
        id: &R::Id,
        router: Option<&dyn Router>,
    ) -> Result<(), RestError>
    where
        R: IdentifiedResource,
    {
        let url = self.route(router).url_for_id::<R>(&self.base_url, id);
        self.transport
            .perform(url, Method::DELETE, None, self.request_hook.as_ref())
            .await?;
        Ok(())
    }
}
