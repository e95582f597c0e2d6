use crate::clients::resource::ResourceClient;
use crate::core::errors::RestError;
use crate::core::kernel::codec::{BodyCodec, JsonCodec};
use crate::core::kernel::http::{HttpSend, ReqwestHttp};
use crate::core::router::{Router, RouterExt};
use crate::core::traits::Resource;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

/// One decoded page: server-declared metadata plus the resources on it.
///
/// Both fields come from the same top-level JSON object, under `"page"` and
/// `"results"`. The metadata shape is entirely the server's business; it
/// only has to be decodable.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<Meta, R> {
    /// Page metadata as the server describes it (number, size, totals).
    pub page: Meta,
    /// Resources on this page, in server order.
    pub results: Vec<R>,
}

/// Page-by-page access to resource collections.
///
/// Wraps a [`ResourceClient`] and adds the page and page-size query
/// parameters to collection URLs; routing, codec, hooks and validation are
/// whatever the wrapped client was built with.
pub struct PaginatedClient<H: HttpSend = ReqwestHttp, C: BodyCodec = JsonCodec> {
    client: ResourceClient<H, C>,
    page_key: String,
    page_size_key: String,
}

impl<H: HttpSend + Clone, C: BodyCodec + Clone> Clone for PaginatedClient<H, C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            page_key: self.page_key.clone(),
            page_size_key: self.page_size_key.clone(),
        }
    }
}

impl<H: HttpSend, C: BodyCodec> std::fmt::Debug for PaginatedClient<H, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedClient")
            .field("page_key", &self.page_key)
            .field("page_size_key", &self.page_size_key)
            .finish_non_exhaustive()
    }
}

impl<H: HttpSend, C: BodyCodec> PaginatedClient<H, C> {
    /// Wrap a resource client with the default `page` and `pageSize` query
    /// parameter names.
    pub fn new(client: ResourceClient<H, C>) -> Self {
        Self {
            client,
            page_key: "page".to_string(),
            page_size_key: "pageSize".to_string(),
        }
    }

    /// Rename the two query parameters for servers that call them something
    /// else (`offset`/`limit`, `p`/`per_page`).
    pub fn with_page_keys(mut self, page_key: String, page_size_key: String) -> Self {
        self.page_key = page_key;
        self.page_size_key = page_size_key;
        self
    }

    /// The wrapped client, for plain CRUD against the same backend.
    pub fn resources(&self) -> &ResourceClient<H, C> {
        &self.client
    }

    /// Fetch one page of the collection.
    ///
    /// The collection URL comes from the router; the page index and size
    /// are appended as query parameters, preserving any query the router
    /// already produced. A collection URL that does not parse as an
    /// absolute URL fails with [`RestError::Routing`] before anything is
    /// sent.
    #[instrument(skip(self, router), fields(resource = %R::path()))]
    pub async fn page<R, Meta>(
        &self,
        page: u32,
        page_size: u32,
        router: Option<&dyn Router>,
    ) -> Result<Paginated<Meta, R>, RestError>
    where
        R: Resource,
        Meta: DeserializeOwned,
    {
        let collection = self.client.route(router).url_for::<R>(self.client.base_url());
        let mut url = Url::parse(&collection)?;
        url.query_pairs_mut()
            .append_pair(&self.page_key, &page.to_string())
            .append_pair(&self.page_size_key, &page_size.to_string());

        let response = self
            .client
            .transport()
            .perform(url.into(), Method::GET, None, self.client.request_hook())
            .await?;
        self.client.codec().decode(&response.body)
    }
}
