//! Data models for the school-site backend.
//!
//! Records are open-shaped: a typed integer `id` plus whatever fields the client sent.

mod collection;
mod document;
mod record;

pub use collection::*;
pub use document::*;
pub use record::*;
