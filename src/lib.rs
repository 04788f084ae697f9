//! # Switchyard
//!
//! **Switchyard** is an embedded path-template request router: declare
//! templates like `/users/:id/posts/*` bound to handler references under an
//! HTTP-verb or filter category, then resolve every incoming path to the
//! matching entries and their extracted, percent-decoded parameters.
//!
//! ## Overview
//!
//! Templates compile once at registration into anchored match and extract
//! patterns; request-time lookup is a read-only scan that is safe from any
//! number of concurrent request threads. Verb categories reject duplicate
//! templates at registration so a misconfigured application fails at
//! startup instead of silently shadowing a route. Filter categories
//! (`BEFORE`, `AFTER`, `WEBSOCKET`) may overlap or repeat and return every
//! match in registration order.
//!
//! The surrounding framework owns everything else - the HTTP listener, body
//! parsing, sessions, static files, middleware. It feeds this crate a
//! concrete path (query string and context-path prefix already removed) and
//! a category, and consumes matched entries plus extracted parameters.
//!
//! ## Architecture
//!
//! The library is organized into three modules, leaves first:
//!
//! - **[`template`]** - template-to-pattern compilation and parameter
//!   extraction
//! - **[`router`]** - route entries, the category-keyed route table, and
//!   match lookup
//! - **[`builder`]** - fluent registration and route grouping
//!
//! ## Example
//!
//! ```
//! use switchyard::{HandlerCategory, RouterBuilder};
//!
//! # fn main() -> Result<(), switchyard::RouteError> {
//! let table = RouterBuilder::new()
//!     .get("/users/:id", "show_user")?
//!     .before("/users/*", "auth_filter")?
//!     .build();
//!
//! // Per request: filters first, then the verb category.
//! let filters = table.find_matches(HandlerCategory::Before, "/users/42");
//! assert_eq!(filters.len(), 1);
//!
//! let matches = table.find_matches(HandlerCategory::Get, "/users/42");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].extract_params_map("/users/42")["id"], "42");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod router;
pub mod template;

pub use builder::{RouteGroup, RouterBuilder};
pub use router::{HandlerCategory, MatchVec, RouteEntry, RouteError, RouteTable, WILDCARD_ALL};
pub use template::{ParamVec, PathTemplate, MAX_INLINE_PARAMS};
