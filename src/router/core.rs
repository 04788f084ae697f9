//! Route table core - hot path for request-time match lookup.

use std::collections::HashMap;
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::template::{ParamVec, PathTemplate};

use super::{HandlerCategory, RouteError};

/// Raw template that matches every path of its category unconditionally.
pub const WILDCARD_ALL: &str = "*";

/// Maximum matched entries before heap allocation. A request rarely crosses
/// more than a handful of filters plus one endpoint.
pub const MAX_INLINE_MATCHES: usize = 4;

/// Stack-allocated match list for the hot path.
pub type MatchVec<H> = SmallVec<[Arc<RouteEntry<H>>; MAX_INLINE_MATCHES]>;

/// Immutable binding of a handler reference to a compiled path template.
///
/// Created once at registration time and never mutated afterwards; entries
/// live until the router itself is torn down. The handler type is opaque to
/// the router - the surrounding framework decides what it is (a boxed
/// closure, a handler name, an enum of endpoint and listener types).
#[derive(Debug)]
pub struct RouteEntry<H> {
    category: HandlerCategory,
    raw_path: String,
    handler: H,
    template: PathTemplate,
}

impl<H> RouteEntry<H> {
    /// Compile `raw_path` and bind it to `handler` under `category`.
    #[must_use]
    pub fn new(category: HandlerCategory, raw_path: impl Into<String>, handler: H) -> Self {
        let raw_path = raw_path.into();
        let template = PathTemplate::compile(&raw_path);
        Self {
            category,
            raw_path,
            handler,
            template,
        }
    }

    #[must_use]
    pub fn category(&self) -> HandlerCategory {
        self.category
    }

    /// The template string this entry was registered with.
    #[must_use]
    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    #[must_use]
    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// Full-string test of a concrete path against this entry's compiled
    /// match pattern.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.template.matches(path)
    }

    /// Extract named, percent-decoded parameters from a path that matched
    /// this entry. A non-matching path yields an empty list; callers are
    /// expected to have confirmed [`matches`](Self::matches) first.
    #[must_use]
    pub fn extract_params(&self, path: &str) -> ParamVec {
        self.template.extract_params(path)
    }

    /// [`extract_params`](Self::extract_params) as a map.
    /// Allocates - prefer the positional list on the hot path.
    #[must_use]
    pub fn extract_params_map(&self, path: &str) -> HashMap<String, String> {
        self.extract_params(path)
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }
}

/// Per-category, insertion-ordered collection of route entries.
///
/// The table has exactly two phases: *open* (single-threaded registration,
/// strictly before serving begins) and *sealed* (read-only lookups). Nothing
/// is ever removed or mutated once registered, so [`find_matches`] needs no
/// locking and is safe from arbitrarily many concurrent request threads.
/// When registration stops is the surrounding framework's call, not this
/// type's; handing the table out of the builder by value is the usual seam.
///
/// [`find_matches`]: RouteTable::find_matches
#[derive(Debug)]
pub struct RouteTable<H> {
    entries: HashMap<HandlerCategory, Vec<Arc<RouteEntry<H>>>>,
}

impl<H> RouteTable<H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Append `entry` to its category's sequence.
    ///
    /// For exclusive categories an entry with the same raw template is
    /// rejected with [`RouteError::DuplicateRoute`] and the table is left
    /// untouched. Non-exclusive categories always append.
    pub fn register(&mut self, entry: RouteEntry<H>) -> Result<(), RouteError> {
        let category = entry.category;
        if category.is_exclusive()
            && self
                .entries
                .get(&category)
                .is_some_and(|existing| existing.iter().any(|e| e.raw_path == entry.raw_path))
        {
            warn!(
                category = %category,
                raw_path = %entry.raw_path,
                "Duplicate route rejected"
            );
            return Err(RouteError::DuplicateRoute {
                category,
                raw_path: entry.raw_path,
            });
        }
        debug!(
            category = %category,
            raw_path = %entry.raw_path,
            param_count = entry.template.param_names().len(),
            "Route registered"
        );
        self.entries
            .entry(category)
            .or_default()
            .push(Arc::new(entry));
        Ok(())
    }

    /// Compile `path` and register it in one step.
    pub fn add(
        &mut self,
        category: HandlerCategory,
        path: &str,
        handler: H,
    ) -> Result<(), RouteError> {
        self.register(RouteEntry::new(category, path, handler))
    }

    /// Every entry of `category` that matches `path`, in registration order.
    ///
    /// An empty result is a normal outcome, not an error; translating it
    /// into a 404 (or a 405 after consulting other categories) belongs to
    /// the caller.
    #[must_use]
    pub fn find_matches(&self, category: HandlerCategory, path: &str) -> MatchVec<H> {
        let mut matched = MatchVec::new();
        if let Some(entries) = self.entries.get(&category) {
            for entry in entries {
                if entry_matches(entry, path) {
                    matched.push(Arc::clone(entry));
                }
            }
        }
        debug!(
            category = %category,
            path = %path,
            matched = matched.len(),
            "Route match attempt"
        );
        matched
    }

    /// Entries registered under `category`, in registration order.
    #[must_use]
    pub fn entries(&self, category: HandlerCategory) -> &[Arc<RouteEntry<H>>] {
        self.entries.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True once any entry exists in any category.
    ///
    /// Callers use this to skip per-request work entirely when nothing was
    /// registered, e.g. filter dispatch with no filters.
    #[must_use]
    pub fn has_any_entries(&self) -> bool {
        self.entries.values().any(|entries| !entries.is_empty())
    }

    /// Total number of registered entries across all categories.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Print all registered routes to stdout, verbs first.
    ///
    /// Useful for verifying at startup that routes were registered as
    /// expected.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.entry_count());
        for category in HandlerCategory::ALL {
            for entry in self.entries(category) {
                println!("[route] {category} {}", entry.raw_path);
            }
        }
    }
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Three-tier match policy, evaluated per entry: the wildcard-all template
/// matches unconditionally, a raw template byte-identical to the path
/// short-circuits pattern evaluation for static routes, and the compiled
/// pattern decides the rest. The tiers never disagree for a correctly
/// compiled template - 1 and 2 only skip work, they never widen or narrow
/// what tier 3 would decide.
fn entry_matches<H>(entry: &RouteEntry<H>, path: &str) -> bool {
    entry.raw_path == WILDCARD_ALL || entry.raw_path == path || entry.matches(path)
}
