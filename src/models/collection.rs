//! The record collections kept in the document.

use std::fmt;

/// One of the managed record sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    EnrollmentEvents,
    News,
}

impl Collection {
    /// Top-level key of the collection in the JSON document.
    pub fn key(self) -> &'static str {
        match self {
            Collection::EnrollmentEvents => "enrollmentEvents",
            Collection::News => "news",
        }
    }

    /// Plain-text body returned when a record is missing.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Collection::EnrollmentEvents => "Event not found",
            Collection::News => "News not found",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
