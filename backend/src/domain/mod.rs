//! Domain types and ports.
//!
//! Transport- and storage-agnostic: entities, list filters, the sort
//! whitelist, the error taxonomy, and the port traits the adapters
//! implement. HTTP concerns live in `inbound::http`; Diesel concerns in
//! `outbound::persistence`.

pub mod articles;
pub mod comments;
pub mod error;
pub mod fixture;
pub mod ports;
pub mod topics;
pub mod users;

pub use self::error::{Error, ErrorCode};

/// Convenient result alias for fallible domain operations.
pub type ApiResult<T> = Result<T, Error>;
