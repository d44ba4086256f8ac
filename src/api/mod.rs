//! REST API module.
//!
//! Contains the route handlers. Responses are the bare JSON payloads, no envelope.

mod blog;
mod enrollment_events;
mod news;
mod records;

pub use blog::*;
pub use enrollment_events::*;
pub use news::*;

/// Handler result: a response on success, an [`AppError`](crate::errors::AppError) otherwise.
pub type ApiResult<T> = Result<T, crate::errors::AppError>;
