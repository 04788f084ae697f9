use tracing::info;

use crate::router::{HandlerCategory, RouteError, RouteTable, WILDCARD_ALL};

/// Fluent registration front-end for a [`RouteTable`].
///
/// Every call registers one route and returns the builder, so chains abort
/// at the first [`RouteError::DuplicateRoute`] instead of silently shadowing
/// a route. [`build`](Self::build) seals the table; afterwards it is
/// read-only and safe to share across request threads.
pub struct RouterBuilder<H> {
    table: RouteTable<H>,
}

impl<H> RouterBuilder<H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RouteTable::new(),
        }
    }

    /// Register one route under an explicit category.
    /// The verb and filter methods below all funnel through here.
    pub fn add(
        mut self,
        category: HandlerCategory,
        path: &str,
        handler: H,
    ) -> Result<Self, RouteError> {
        self.table.add(category, path, handler)?;
        Ok(self)
    }

    /// Add a GET request handler for the given path.
    pub fn get(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::Get, path, handler)
    }

    /// Add a POST request handler for the given path.
    pub fn post(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::Post, path, handler)
    }

    /// Add a PUT request handler for the given path.
    pub fn put(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::Put, path, handler)
    }

    /// Add a PATCH request handler for the given path.
    pub fn patch(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::Patch, path, handler)
    }

    /// Add a DELETE request handler for the given path.
    pub fn delete(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::Delete, path, handler)
    }

    /// Add a HEAD request handler for the given path.
    pub fn head(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::Head, path, handler)
    }

    /// Add a TRACE request handler for the given path.
    pub fn trace(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::Trace, path, handler)
    }

    /// Add a CONNECT request handler for the given path.
    pub fn connect(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::Connect, path, handler)
    }

    /// Add an OPTIONS request handler for the given path.
    pub fn options(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::Options, path, handler)
    }

    /// Add a BEFORE filter for the given path.
    pub fn before(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::Before, path, handler)
    }

    /// Add a BEFORE filter that runs for every request.
    pub fn before_all(self, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::Before, WILDCARD_ALL, handler)
    }

    /// Add an AFTER filter for the given path.
    pub fn after(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::After, path, handler)
    }

    /// Add an AFTER filter that runs for every request.
    pub fn after_all(self, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::After, WILDCARD_ALL, handler)
    }

    /// Add a WebSocket listener for the given path.
    pub fn ws(self, path: &str, handler: H) -> Result<Self, RouteError> {
        self.add(HandlerCategory::WebSocket, path, handler)
    }

    /// Register a group of routes under a shared path prefix.
    ///
    /// The closure receives an explicit [`RouteGroup`] handle; groups nest
    /// and carry no global state.
    pub fn group<F>(mut self, prefix: &str, routes: F) -> Result<Self, RouteError>
    where
        F: FnOnce(&mut RouteGroup<'_, H>) -> Result<(), RouteError>,
    {
        let mut group = RouteGroup {
            prefix: join_paths("", prefix),
            table: &mut self.table,
        };
        routes(&mut group)?;
        Ok(self)
    }

    /// Seal the table and hand it to the caller.
    ///
    /// Registration ends here; the result is read-only and safe to share
    /// across request threads.
    #[must_use]
    pub fn build(self) -> RouteTable<H> {
        let routes_summary: Vec<String> = HandlerCategory::ALL
            .iter()
            .flat_map(|&category| {
                self.table
                    .entries(category)
                    .iter()
                    .map(move |entry| format!("{category} {}", entry.raw_path()))
            })
            .take(10)
            .collect();
        info!(
            routes_count = self.table.entry_count(),
            routes_summary = ?routes_summary,
            "Routing table sealed"
        );
        self.table
    }
}

impl<H> Default for RouterBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for registering routes under a shared prefix.
///
/// Obtained from [`RouterBuilder::group`]. The handle is the only state a
/// grouping call has, which is what makes grouping re-entrant and safe to
/// run from any thread.
pub struct RouteGroup<'t, H> {
    table: &'t mut RouteTable<H>,
    prefix: String,
}

impl<H> RouteGroup<'_, H> {
    /// Register one route under the group prefix.
    pub fn add(
        &mut self,
        category: HandlerCategory,
        path: &str,
        handler: H,
    ) -> Result<(), RouteError> {
        self.table
            .add(category, &join_paths(&self.prefix, path), handler)
    }

    /// Add a GET request handler under the group prefix.
    pub fn get(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::Get, path, handler)
    }

    /// Add a POST request handler under the group prefix.
    pub fn post(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::Post, path, handler)
    }

    /// Add a PUT request handler under the group prefix.
    pub fn put(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::Put, path, handler)
    }

    /// Add a PATCH request handler under the group prefix.
    pub fn patch(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::Patch, path, handler)
    }

    /// Add a DELETE request handler under the group prefix.
    pub fn delete(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::Delete, path, handler)
    }

    /// Add a HEAD request handler under the group prefix.
    pub fn head(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::Head, path, handler)
    }

    /// Add a TRACE request handler under the group prefix.
    pub fn trace(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::Trace, path, handler)
    }

    /// Add a CONNECT request handler under the group prefix.
    pub fn connect(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::Connect, path, handler)
    }

    /// Add an OPTIONS request handler under the group prefix.
    pub fn options(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::Options, path, handler)
    }

    /// Add a BEFORE filter under the group prefix.
    pub fn before(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::Before, path, handler)
    }

    /// Add an AFTER filter under the group prefix.
    pub fn after(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::After, path, handler)
    }

    /// Add a WebSocket listener under the group prefix.
    pub fn ws(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.add(HandlerCategory::WebSocket, path, handler)
    }

    /// Register a nested group; prefixes concatenate.
    pub fn group<F>(&mut self, prefix: &str, routes: F) -> Result<(), RouteError>
    where
        F: FnOnce(&mut RouteGroup<'_, H>) -> Result<(), RouteError>,
    {
        let mut nested = RouteGroup {
            prefix: join_paths(&self.prefix, prefix),
            table: &mut *self.table,
        };
        routes(&mut nested)
    }
}

/// Join a group prefix and a path with exactly one separator at the seam,
/// keeping a leading separator on the result.
pub(crate) fn join_paths(prefix: &str, path: &str) -> String {
    let mut joined = format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    if !joined.starts_with('/') {
        joined.insert(0, '/');
    }
    joined
}
