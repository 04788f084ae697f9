//! # Router Module
//!
//! Route entries, the category-keyed route table, and request-time match
//! lookup.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Binding compiled path templates to opaque handler references
//! - Grouping entries by [`HandlerCategory`], preserving registration order
//! - Rejecting duplicate templates in exclusive (HTTP verb) categories
//! - Returning every matching entry of a category for a concrete path
//!
//! ## Architecture
//!
//! The table works in two phases:
//!
//! 1. **Registration**: templates compile once into match/extract patterns
//!    and are appended to their category's sequence. Registration is
//!    single-threaded and happens strictly before serving begins.
//!
//! 2. **Lookup**: for each incoming request the surrounding framework asks
//!    for the matches of a category - typically `Before`, then the verb
//!    category mapped from the HTTP method, then `After`. Lookup is a pure
//!    read over immutable entries and is safe from any number of concurrent
//!    request threads.
//!
//! Whether a lookup that comes back empty means 404, or 405 because another
//! category would have matched, is the caller's decision; the table only
//! reports matches.
//!
//! ## Example
//!
//! ```
//! use switchyard::router::{HandlerCategory, RouteTable};
//!
//! # fn main() -> Result<(), switchyard::router::RouteError> {
//! let mut table = RouteTable::new();
//! table.add(HandlerCategory::Get, "/users/:id", "show_user")?;
//! table.add(HandlerCategory::Before, "/users/*", "auth_filter")?;
//!
//! let matches = table.find_matches(HandlerCategory::Get, "/users/42");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].extract_params_map("/users/42")["id"], "42");
//! # Ok(())
//! # }
//! ```

mod category;
mod core;
mod error;

pub use category::HandlerCategory;
pub use core::{MatchVec, RouteEntry, RouteTable, MAX_INLINE_MATCHES, WILDCARD_ALL};
pub use error::RouteError;
