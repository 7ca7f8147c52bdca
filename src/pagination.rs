//! Page-based pagination over ConnectWise collections.
//!
//! A [`PageFetcher`] performs one round trip for one page. A
//! [`PagedSequence`] drives a fetcher forward page by page, remembering
//! where it stopped so that a failed page can be retried without losing
//! progress.
//!
//! The service does not report a total count, so whether another page
//! exists is inferred from the page itself: see [`has_next_page`].

use async_trait::async_trait;
use futures::stream::{self, Stream, TryStreamExt};

use crate::client::RawResponse;
use crate::error::{ConnectWiseError, Result};
use crate::params::RequestParams;

/// Largest page size the service accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Page size used when callers don't pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// A page is followed by another one iff it came back full.
///
/// A result set whose size is an exact multiple of `page_size` therefore
/// ends with one extra, empty page.
#[must_use]
pub fn has_next_page(items_returned: usize, page_size: u32) -> bool {
    items_returned == page_size as usize
}

/// One page to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page_index: u32,
    page_size: u32,
    extra_params: RequestParams,
}

impl PageRequest {
    /// Validate and build a page request.
    ///
    /// # Errors
    ///
    /// Fails with [`ConnectWiseError::InvalidPageRequest`] if `page_index`
    /// is zero or `page_size` is outside `1..=MAX_PAGE_SIZE`, and with
    /// [`ConnectWiseError::ReservedParameter`] if `extra_params` sets
    /// `page` or `pageSize`.
    pub fn new(page_index: u32, page_size: u32, extra_params: RequestParams) -> Result<Self> {
        if page_index == 0 {
            return Err(ConnectWiseError::InvalidPageRequest(
                "page index is 1-based".to_string(),
            ));
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ConnectWiseError::InvalidPageRequest(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }
        if let Some(key) = extra_params.reserved_key() {
            return Err(ConnectWiseError::ReservedParameter(key.to_string()));
        }

        Ok(Self {
            page_index,
            page_size,
            extra_params,
        })
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn extra_params(&self) -> &RequestParams {
        &self.extra_params
    }

    /// Full parameter set for the wire: extra params plus `page`/`pageSize`.
    pub fn wire_params(&self) -> RequestParams {
        self.extra_params.with_page(self.page_index, self.page_size)
    }

    /// The request for the page after this one.
    ///
    /// # Errors
    ///
    /// Fails if the page index would overflow.
    pub fn next(&self) -> Result<Self> {
        let page_index = self.page_index.checked_add(1).ok_or_else(|| {
            ConnectWiseError::InvalidPageRequest("page index overflow".to_string())
        })?;
        Ok(Self {
            page_index,
            ..self.clone()
        })
    }
}

/// The outcome of fetching one page.
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    /// Records in the order the service returned them.
    pub items: Vec<T>,
    /// Whether another page is expected, per [`has_next_page`].
    pub has_next: bool,
    /// The request that produced this page.
    pub request: PageRequest,
    /// The underlying response.
    pub raw_response: RawResponse,
}

impl<T> PageResult<T> {
    /// Build a result, inferring `has_next` from the item count.
    pub fn new(items: Vec<T>, request: PageRequest, raw_response: RawResponse) -> Self {
        let has_next = has_next_page(items.len(), request.page_size());
        Self {
            items,
            has_next,
            request,
            raw_response,
        }
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Fetches a single page of a collection.
///
/// Implementations perform exactly one round trip per call and keep no
/// state between calls, so one fetcher can serve many sequences at once.
#[async_trait]
pub trait PageFetcher<T: Send>: Send + Sync {
    /// Fetch the page described by `request`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectWiseError::RequestError`] for non-success statuses
    /// and [`ConnectWiseError::DeserializationError`] if the body does not
    /// parse. No items are returned alongside an error.
    async fn fetch(&self, request: &PageRequest) -> Result<PageResult<T>>;
}

/// Where a [`PagedSequence`] stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    /// More pages may be fetched.
    Active,
    /// The last page has been seen; advancing is a no-op.
    Exhausted,
}

/// A forward-only cursor over every page of a collection.
///
/// The fetcher is borrowed, not owned. The cursor only moves after a
/// successful fetch, so an error leaves it on the last good page and the
/// same page is requested again on the next [`advance`](Self::advance).
///
/// # Example
///
/// ```no_run
/// use cwapi::{ConnectWiseClient, RequestParams};
///
/// # async fn example() -> cwapi::Result<()> {
/// let client = ConnectWiseClient::from_env()?;
/// let tickets = client.service_tickets();
///
/// let mut pages = tickets.pages(50, &RequestParams::new().conditions("closedFlag = false"))?;
/// loop {
///     let batch = pages.advance().await?;
///     for ticket in &batch {
///         println!("#{} {}", ticket.id, ticket.summary);
///     }
///     if pages.is_finished() {
///         break;
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct PagedSequence<'a, T, F: ?Sized> {
    fetcher: &'a F,
    current_page_index: u32,
    page_size: u32,
    extra_params: RequestParams,
    exhausted: bool,
    buffered: Option<Vec<T>>,
}

impl<T, F: ?Sized> std::fmt::Debug for PagedSequence<'_, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedSequence")
            .field("current_page_index", &self.current_page_index)
            .field("page_size", &self.page_size)
            .field("exhausted", &self.exhausted)
            .field("buffered", &self.buffered.as_ref().map(Vec::len))
            .finish_non_exhaustive()
    }
}

impl<'a, T, F> PagedSequence<'a, T, F>
where
    T: Send,
    F: PageFetcher<T> + ?Sized,
{
    /// A sequence whose first advance fetches page 1.
    ///
    /// # Errors
    ///
    /// Fails if `page_size` or `extra_params` are invalid.
    pub fn new(fetcher: &'a F, page_size: u32, extra_params: RequestParams) -> Result<Self> {
        Ok(Self::starting_at(
            fetcher,
            PageRequest::new(1, page_size, extra_params)?,
        ))
    }

    /// A sequence whose first advance fetches `first`.
    pub fn starting_at(fetcher: &'a F, first: PageRequest) -> Self {
        Self {
            fetcher,
            current_page_index: first.page_index - 1,
            page_size: first.page_size,
            extra_params: first.extra_params,
            exhausted: false,
            buffered: None,
        }
    }

    /// Resume from a page that was already fetched.
    ///
    /// The page's items are handed out by the first advance without a new
    /// request; later advances continue after that page.
    pub fn from_page(fetcher: &'a F, page: PageResult<T>) -> Self {
        let PageResult {
            items,
            has_next,
            request,
            ..
        } = page;
        if !has_next {
            tracing::debug!(page = request.page_index, "seed page is the last page");
        }
        Self {
            fetcher,
            current_page_index: request.page_index,
            page_size: request.page_size,
            extra_params: request.extra_params,
            exhausted: !has_next,
            buffered: Some(items),
        }
    }

    /// Index of the last page fetched or seeded (0 before the first fetch).
    ///
    /// A seeded sequence reports the seed page's index even before
    /// [`advance`](Self::advance) hands that page out.
    pub fn current_page_index(&self) -> u32 {
        self.current_page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Whether the last page has been fetched.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn state(&self) -> SequenceState {
        if self.exhausted {
            SequenceState::Exhausted
        } else {
            SequenceState::Active
        }
    }

    /// Whether [`advance`](Self::advance) can still produce anything.
    pub fn is_finished(&self) -> bool {
        self.exhausted && self.buffered.is_none()
    }

    /// The request for the current page; its page index is 0 before the
    /// first fetch, so it is only ever used to step forward.
    fn cursor(&self) -> PageRequest {
        PageRequest {
            page_index: self.current_page_index,
            page_size: self.page_size,
            extra_params: self.extra_params.clone(),
        }
    }

    /// Return the next page of items.
    ///
    /// Once exhausted this returns an empty list without touching the
    /// network.
    ///
    /// # Errors
    ///
    /// Propagates the fetcher's error unchanged; the cursor is not moved.
    pub async fn advance(&mut self) -> Result<Vec<T>> {
        if let Some(items) = self.buffered.take() {
            return Ok(items);
        }
        if self.exhausted {
            return Ok(Vec::new());
        }

        let request = self.cursor().next()?;
        let page_index = request.page_index;

        let page = self.fetcher.fetch(&request).await?;

        self.current_page_index = page_index;
        self.exhausted = !page.has_next;
        tracing::debug!(
            page = page_index,
            items = page.items.len(),
            exhausted = self.exhausted,
            "advanced"
        );

        Ok(page.items)
    }

    /// Fetch every remaining page and concatenate the items in page order.
    ///
    /// # Errors
    ///
    /// Fails on the first failing page; items gathered so far are dropped.
    /// Call [`advance`](Self::advance) in a loop to keep partial results.
    pub async fn collect_all(&mut self) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        while !self.is_finished() {
            all_items.extend(self.advance().await?);
        }
        Ok(all_items)
    }

    /// Turn the sequence into a stream of individual records.
    ///
    /// Pages are fetched lazily as the stream is polled. The stream ends
    /// after the first error.
    pub fn into_items(self) -> impl Stream<Item = Result<T>> + 'a
    where
        T: 'a,
        F: 'a,
    {
        stream::try_unfold(self, |mut seq| async move {
            if seq.is_finished() {
                return Ok(None);
            }
            let items = seq.advance().await?;
            Ok::<_, ConnectWiseError>(Some((
                stream::iter(items.into_iter().map(Ok::<T, ConnectWiseError>)),
                seq,
            )))
        })
        .try_flatten()
    }
}
