//! Generic resource endpoint.
//!
//! Every ConnectWise resource is a URL path plus a record type plus the set
//! of verbs the service accepts there. [`Endpoint`] captures exactly that,
//! so one type serves tickets, companies, notes, and the rest.

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::{ConnectWiseClient, RawResponse};
use crate::error::{ConnectWiseError, Result};
use crate::models::{parse_many, parse_one};
use crate::pagination::{PageFetcher, PageRequest, PageResult, PagedSequence, DEFAULT_PAGE_SIZE};
use crate::params::{PatchOperation, RequestParams};

/// How a collection is paged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMethod {
    /// GET with `page`/`pageSize` in the query string.
    Query,
    /// POST with `page`/`pageSize` merged into the JSON body.
    Search,
}

/// The verbs an endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub get: bool,
    pub post: bool,
    pub put: bool,
    pub patch: bool,
    pub delete: bool,
    pub paginate: Option<PageMethod>,
}

impl Capabilities {
    /// A listable collection that accepts new records.
    pub const COLLECTION: Self = Self {
        get: true,
        post: true,
        put: false,
        patch: false,
        delete: false,
        paginate: Some(PageMethod::Query),
    };

    /// A single record addressed by id.
    pub const ITEM: Self = Self {
        get: true,
        post: false,
        put: true,
        patch: true,
        delete: true,
        paginate: None,
    };

    /// A search endpoint: POST a filter, get a page of records back.
    pub const SEARCH: Self = Self {
        get: false,
        post: true,
        put: false,
        patch: false,
        delete: false,
        paginate: Some(PageMethod::Search),
    };

    /// A `count` endpoint.
    pub const COUNT: Self = Self {
        get: true,
        post: false,
        put: false,
        patch: false,
        delete: false,
        paginate: None,
    };

    /// Everything allowed, GET paging.
    pub const ALL: Self = Self {
        get: true,
        post: true,
        put: true,
        patch: true,
        delete: true,
        paginate: Some(PageMethod::Query),
    };
}

/// Body of a `count` endpoint.
#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

/// A typed ConnectWise resource.
///
/// Cheap to clone: the client shares its connection pool. The same endpoint
/// may back any number of [`PagedSequence`]s at once.
///
/// # Example
///
/// ```no_run
/// use cwapi::{ConnectWiseClient, RequestParams};
///
/// # async fn example() -> cwapi::Result<()> {
/// let client = ConnectWiseClient::from_env()?;
///
/// // One page, then the rest on demand
/// let endpoint = client.service_tickets();
/// let mut seq = endpoint
///     .paginated(1, 25, &RequestParams::new().order_by("id"))
///     .await?;
/// let everything = seq.collect_all().await?;
///
/// // A single record
/// let ticket = client.service_tickets().id(everything[0].id).get_one(&RequestParams::new()).await?;
/// println!("{}", ticket.summary);
/// # Ok(())
/// # }
/// ```
pub struct Endpoint<T> {
    client: ConnectWiseClient,
    path: String,
    capabilities: Capabilities,
    parser: fn(&str) -> Result<Vec<T>>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            path: self.path.clone(),
            capabilities: self.capabilities,
            parser: self.parser,
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("path", &self.path)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

impl<T> Endpoint<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Create an endpoint for `path` (relative to the client's base URL).
    pub fn new(client: ConnectWiseClient, path: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            client,
            path: path.into().trim_matches('/').to_string(),
            capabilities,
            parser: parse_many::<T>,
            _record: PhantomData,
        }
    }

    /// Replace the function that turns a page body into records.
    #[must_use]
    pub fn with_parser(mut self, parser: fn(&str) -> Result<Vec<T>>) -> Self {
        self.parser = parser;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// The record addressed by `id` under this collection.
    pub fn id(&self, id: u64) -> Endpoint<T> {
        Endpoint::new(
            self.client.clone(),
            format!("{}/{id}", self.path),
            Capabilities::ITEM,
        )
    }

    /// A child resource, e.g. `notes` under a ticket.
    ///
    /// The segment is percent-encoded.
    pub fn child<U>(&self, segment: &str, capabilities: Capabilities) -> Endpoint<U>
    where
        U: DeserializeOwned + Send + 'static,
    {
        Endpoint::new(
            self.client.clone(),
            format!("{}/{}", self.path, urlencoding::encode(segment)),
            capabilities,
        )
    }

    /// Number of records matching `params` (`GET {path}/count`).
    #[tracing::instrument(skip(self, params), fields(path = %self.path))]
    pub async fn count(&self, params: &RequestParams) -> Result<u64> {
        let response = self
            .client
            .get(&format!("{}/count", self.path), params)
            .await?;
        let count: CountResponse = parse_one(&response.body)?;
        Ok(count.count)
    }

    /// GET a list of records.
    #[tracing::instrument(skip(self, params), fields(path = %self.path))]
    pub async fn get_many(&self, params: &RequestParams) -> Result<Vec<T>> {
        self.require(self.capabilities.get, "GET")?;
        let response = self.client.get(&self.path, params).await?;
        (self.parser)(&response.body)
    }

    /// GET a single record.
    #[tracing::instrument(skip(self, params), fields(path = %self.path))]
    pub async fn get_one(&self, params: &RequestParams) -> Result<T> {
        self.require(self.capabilities.get, "GET")?;
        let response = self.client.get(&self.path, params).await?;
        parse_one(&response.body)
    }

    /// POST a record and return what the service stored.
    #[tracing::instrument(skip(self, body, params), fields(path = %self.path))]
    pub async fn post<B>(&self, body: &B, params: &RequestParams) -> Result<T>
    where
        B: Serialize + ?Sized,
    {
        self.require(self.capabilities.post, "POST")?;
        let response = self.client.post(&self.path, params, body).await?;
        parse_one(&response.body)
    }

    /// PUT a full replacement record.
    #[tracing::instrument(skip(self, body, params), fields(path = %self.path))]
    pub async fn put<B>(&self, body: &B, params: &RequestParams) -> Result<T>
    where
        B: Serialize + ?Sized,
    {
        self.require(self.capabilities.put, "PUT")?;
        let response = self
            .client
            .request(Method::PUT, &self.path, Some(params), Some(body))
            .await?;
        parse_one(&response.body)
    }

    /// PATCH individual fields.
    #[tracing::instrument(skip(self, operations, params), fields(path = %self.path))]
    pub async fn patch(&self, operations: &[PatchOperation], params: &RequestParams) -> Result<T> {
        self.require(self.capabilities.patch, "PATCH")?;
        let response = self
            .client
            .request(Method::PATCH, &self.path, Some(params), Some(operations))
            .await?;
        parse_one(&response.body)
    }

    /// DELETE the record.
    #[tracing::instrument(skip(self, params), fields(path = %self.path))]
    pub async fn delete(&self, params: &RequestParams) -> Result<()> {
        self.require(self.capabilities.delete, "DELETE")?;
        self.client
            .request::<_, ()>(Method::DELETE, &self.path, Some(params), None)
            .await?;
        Ok(())
    }

    /// Fetch page `page` and return a sequence positioned on it.
    ///
    /// The fetched page's items come out of the first
    /// [`advance`](PagedSequence::advance); later pages are requested lazily.
    ///
    /// # Errors
    ///
    /// Fails on invalid paging input, when the endpoint is not pageable, or
    /// when the first fetch fails.
    pub async fn paginated(
        &self,
        page: u32,
        page_size: u32,
        params: &RequestParams,
    ) -> Result<PagedSequence<'_, T, Self>> {
        self.require(self.capabilities.paginate.is_some(), "pagination")?;
        let request = PageRequest::new(page, page_size, params.clone())?;
        let first = self.fetch(&request).await?;
        Ok(PagedSequence::from_page(self, first))
    }

    /// A lazy sequence over every page; nothing is fetched until the first
    /// advance.
    ///
    /// # Errors
    ///
    /// Fails on invalid paging input or when the endpoint is not pageable.
    pub fn pages(&self, page_size: u32, params: &RequestParams) -> Result<PagedSequence<'_, T, Self>> {
        self.require(self.capabilities.paginate.is_some(), "pagination")?;
        PagedSequence::new(self, page_size, params.clone())
    }

    /// Every record matching `params`, fetched [`DEFAULT_PAGE_SIZE`] at a time.
    pub async fn list_all(&self, params: &RequestParams) -> Result<Vec<T>> {
        self.pages(DEFAULT_PAGE_SIZE, params)?.collect_all().await
    }

    fn require(&self, allowed: bool, operation: &'static str) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(ConnectWiseError::UnsupportedOperation {
                operation,
                path: self.path.clone(),
            })
        }
    }

    async fn send_page(&self, method: PageMethod, request: &PageRequest) -> Result<RawResponse> {
        let wire = request.wire_params();
        match method {
            PageMethod::Query => self.client.get(&self.path, &wire).await,
            PageMethod::Search => {
                let body = wire.to_json()?;
                self.client
                    .request::<(), _>(Method::POST, &self.path, None, Some(&body))
                    .await
            }
        }
    }
}

#[async_trait]
impl<T> PageFetcher<T> for Endpoint<T>
where
    T: DeserializeOwned + Send + 'static,
{
    #[tracing::instrument(
        skip(self, request),
        fields(path = %self.path, page = request.page_index(), page_size = request.page_size())
    )]
    async fn fetch(&self, request: &PageRequest) -> Result<PageResult<T>> {
        let Some(method) = self.capabilities.paginate else {
            return Err(ConnectWiseError::UnsupportedOperation {
                operation: "pagination",
                path: self.path.clone(),
            });
        };

        let response = self.send_page(method, request).await?;
        let items = (self.parser)(&response.body)?;
        let page = PageResult::new(items, request.clone(), response);
        tracing::debug!(items = page.len(), has_next = page.has_next, "fetched page");
        Ok(page)
    }
}
