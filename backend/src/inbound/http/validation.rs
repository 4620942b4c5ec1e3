//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper returns a domain [`Error`] carrying the exact client-facing
//! message, and all of them run before any storage access.

use pagination::PageRequest;

use crate::domain::articles::{SortColumn, SortOrder};
use crate::domain::Error;

/// Path identifier fields with integer syntax requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdField {
    /// `:article_id` path segment.
    Article,
    /// `:comment_id` path segment.
    Comment,
}

impl IdField {
    fn as_str(self) -> &'static str {
        match self {
            IdField::Article => "article id",
            IdField::Comment => "comment id",
        }
    }
}

/// Parse an integer path identifier. Anything that is not an integer —
/// non-numeric text or a fractional number — is rejected with the
/// integer-specific wording.
pub(crate) fn parse_id(raw: &str, field: IdField) -> Result<i32, Error> {
    raw.parse::<i32>().map_err(|_| {
        Error::bad_request(format!(
            "bad request: {} must be an integer",
            field.as_str()
        ))
    })
}

/// Parse the `sort_by` query parameter against the column whitelist,
/// defaulting to `created_at`.
pub(crate) fn parse_sort_param(raw: Option<&str>) -> Result<SortColumn, Error> {
    match raw {
        None => Ok(SortColumn::CreatedAt),
        Some(value) => {
            SortColumn::from_param(value).ok_or_else(|| Error::bad_request("invalid sort_by query"))
        }
    }
}

/// Parse the `order` query parameter, defaulting to descending.
pub(crate) fn parse_order_param(raw: Option<&str>) -> Result<SortOrder, Error> {
    match raw {
        None => Ok(SortOrder::Desc),
        Some(value) => {
            SortOrder::from_param(value).ok_or_else(|| Error::bad_request("invalid order query"))
        }
    }
}

fn parse_window_value(raw: Option<&str>, name: &str) -> Result<Option<i64>, Error> {
    raw.map(|value| {
        value.parse::<i64>().map_err(|_| {
            Error::bad_request(format!("bad request: {name} must be an integer"))
        })
    })
    .transpose()
}

/// Parse the `limit` and `p` query parameters into a validated window.
/// Absent values fall back to the defaults (10 per page, page 1); anything
/// non-integer or out of range is a 400.
pub(crate) fn parse_page_params(
    limit: Option<&str>,
    page: Option<&str>,
) -> Result<PageRequest, Error> {
    let limit = parse_window_value(limit, "limit")?;
    let page = parse_window_value(page, "p")?;
    PageRequest::from_params(limit, page).map_err(|err| Error::bad_request(err.to_string()))
}

/// Require a body field to be present and non-blank. The message names the
/// whole required shape for the endpoint, matching the wire contract.
pub(crate) fn require_text(value: Option<String>, message: &str) -> Result<String, Error> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(Error::bad_request(message)),
    }
}
