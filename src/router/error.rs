use std::fmt;

use super::HandlerCategory;

/// Route registration error
///
/// Returned by [`RouteTable::register`](super::RouteTable::register) when an
/// exclusive category already holds the same raw template. Application
/// startup should fail loudly on this rather than silently shadow a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The category already has an entry for this exact raw template.
    DuplicateRoute {
        /// Category the duplicate was registered under
        category: HandlerCategory,
        /// The raw template that is already present
        raw_path: String,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::DuplicateRoute { category, raw_path } => {
                write!(
                    f,
                    "duplicate route: {} '{}' is already registered. \
                    A template may appear only once per HTTP verb; \
                    BEFORE/AFTER/WEBSOCKET handlers may repeat.",
                    category, raw_path
                )
            }
        }
    }
}

impl std::error::Error for RouteError {}
