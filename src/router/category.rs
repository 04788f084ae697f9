use std::fmt;

use http::Method;

/// Dispatch class a route belongs to.
///
/// The nine HTTP verb categories are *exclusive*: a raw template may be
/// registered at most once per verb. `Before`, `After`, and `WebSocket` are
/// non-exclusive filter/listener categories - they may legitimately overlap
/// or repeat, and every match is returned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerCategory {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Trace,
    Connect,
    Options,
    Before,
    After,
    WebSocket,
}

impl HandlerCategory {
    /// Every category, verbs first, in a stable order for summaries and
    /// route dumps.
    pub const ALL: [HandlerCategory; 12] = [
        HandlerCategory::Get,
        HandlerCategory::Post,
        HandlerCategory::Put,
        HandlerCategory::Patch,
        HandlerCategory::Delete,
        HandlerCategory::Head,
        HandlerCategory::Trace,
        HandlerCategory::Connect,
        HandlerCategory::Options,
        HandlerCategory::Before,
        HandlerCategory::After,
        HandlerCategory::WebSocket,
    ];

    /// Whether a raw template may be registered at most once in this
    /// category.
    #[must_use]
    pub const fn is_exclusive(self) -> bool {
        !matches!(
            self,
            HandlerCategory::Before | HandlerCategory::After | HandlerCategory::WebSocket
        )
    }

    /// Map an HTTP method to its verb category.
    ///
    /// Extension methods have no category and therefore route nowhere.
    #[must_use]
    pub fn from_method(method: &Method) -> Option<Self> {
        match method.as_str() {
            "GET" => Some(HandlerCategory::Get),
            "POST" => Some(HandlerCategory::Post),
            "PUT" => Some(HandlerCategory::Put),
            "PATCH" => Some(HandlerCategory::Patch),
            "DELETE" => Some(HandlerCategory::Delete),
            "HEAD" => Some(HandlerCategory::Head),
            "TRACE" => Some(HandlerCategory::Trace),
            "CONNECT" => Some(HandlerCategory::Connect),
            "OPTIONS" => Some(HandlerCategory::Options),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HandlerCategory::Get => "GET",
            HandlerCategory::Post => "POST",
            HandlerCategory::Put => "PUT",
            HandlerCategory::Patch => "PATCH",
            HandlerCategory::Delete => "DELETE",
            HandlerCategory::Head => "HEAD",
            HandlerCategory::Trace => "TRACE",
            HandlerCategory::Connect => "CONNECT",
            HandlerCategory::Options => "OPTIONS",
            HandlerCategory::Before => "BEFORE",
            HandlerCategory::After => "AFTER",
            HandlerCategory::WebSocket => "WEBSOCKET",
        }
    }
}

impl fmt::Display for HandlerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
