//! Limit/page windowing primitives shared by Newswire list endpoints.
//!
//! List endpoints materialise the full filtered result set first and slice it
//! here, so the page contents and the reported total are always computed from
//! the same set. Pushing `LIMIT`/`OFFSET` into the query instead would let the
//! total drift from the window between two statements.
//!
//! A window is described by a validated [`PageRequest`]; applying it to a
//! materialised set yields a [`Page`] carrying the windowed items and the
//! pre-slice total. A page past the end of the set is empty, not an error,
//! and leaves the total untouched.

use serde::Serialize;
use thiserror::Error;

/// Window size applied when the caller supplies no `limit` parameter.
pub const DEFAULT_LIMIT: i64 = 10;

/// Page number applied when the caller supplies no `p` parameter.
pub const DEFAULT_PAGE: i64 = 1;

/// Rejections raised while validating window parameters.
///
/// The display strings are the exact client-facing messages; HTTP adapters
/// forward them verbatim in the error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The `limit` parameter was negative.
    #[error("bad request: limit must not be negative")]
    NegativeLimit,
    /// The `p` parameter was zero or negative.
    #[error("bad request: p must be positive")]
    NonPositivePage,
}

/// A validated limit/page pair describing one window over an ordered set.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::new(8, 2)?;
/// assert_eq!(request.offset(), 8);
/// # Ok::<(), pagination::PaginationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: i64,
    page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl PageRequest {
    /// Validate a limit/page pair.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::NegativeLimit`] when `limit < 0` and
    /// [`PaginationError::NonPositivePage`] when `page < 1`. A zero limit is
    /// legal and yields empty windows.
    pub const fn new(limit: i64, page: i64) -> Result<Self, PaginationError> {
        if limit < 0 {
            return Err(PaginationError::NegativeLimit);
        }
        if page < 1 {
            return Err(PaginationError::NonPositivePage);
        }
        Ok(Self { limit, page })
    }

    /// Validate optional parameters, falling back to [`DEFAULT_LIMIT`] and
    /// [`DEFAULT_PAGE`] where absent.
    ///
    /// # Errors
    ///
    /// Propagates the same rejections as [`PageRequest::new`].
    pub const fn from_params(
        limit: Option<i64>,
        page: Option<i64>,
    ) -> Result<Self, PaginationError> {
        let effective_limit = match limit {
            Some(value) => value,
            None => DEFAULT_LIMIT,
        };
        let effective_page = match page {
            Some(value) => value,
            None => DEFAULT_PAGE,
        };
        Self::new(effective_limit, effective_page)
    }

    /// Window size.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.limit
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> i64 {
        self.page
    }

    /// Number of leading rows skipped before the window starts.
    ///
    /// Never negative or fractional: both factors are validated on
    /// construction.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.limit * (self.page - 1)
    }

    /// Slice one window out of a fully materialised, ordered set.
    ///
    /// The returned [`Page`] reports the length of `items` *before* slicing
    /// as its total, so callers can derive the page count for any window
    /// size. A window starting past the end of the set yields no items.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let page = PageRequest::new(8, 2)?.slice((1..=11).collect::<Vec<_>>());
    /// assert_eq!(page.items, vec![9, 10, 11]);
    /// assert_eq!(page.total_count, 11);
    /// # Ok::<(), pagination::PaginationError>(())
    /// ```
    #[must_use]
    pub fn slice<T>(&self, items: Vec<T>) -> Page<T> {
        let total_count = i64::try_from(items.len()).unwrap_or(i64::MAX);
        let skip = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit).unwrap_or(usize::MAX);
        let window = items.into_iter().skip(skip).take(take).collect();
        Page {
            items: window,
            total_count,
        }
    }
}

/// One window of an ordered set plus the size of the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items inside the requested window, in set order.
    pub items: Vec<T>,
    /// Size of the full set before the window was applied.
    pub total_count: i64,
}

impl<T> Page<T> {
    /// True when the window holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
