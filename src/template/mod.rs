//! # Template Module
//!
//! Path template compilation for the router. A template is a declared path
//! such as `/users/:id/posts/*`: literal segments, named-parameter segments
//! (`:id`), and wildcard segments (`*`).
//!
//! ## Overview
//!
//! [`PathTemplate::compile`] translates a template string into two anchored
//! patterns and an ordered parameter-name list:
//!
//! - the *match pattern* answers "does this concrete path belong to the
//!   template" without any capture bookkeeping, which keeps filter dispatch
//!   cheap when nobody reads the parameters;
//! - the *extract pattern* is the same pattern with each parameter segment as
//!   a capturing group, paid for only once per request, on the entry that
//!   actually handles it.
//!
//! Parameter segments match any characters except the path separator;
//! wildcard segments cross separators. A single trailing separator on the
//! concrete path is always tolerated. Both patterns are case-sensitive.
//!
//! Compilation happens once, at registration time; matching at request time
//! is a pure in-memory pattern test bounded by path length. The generated
//! patterns avoid constructs with pathological backtracking, so paths taken
//! from the wire cannot blow up match cost.
//!
//! ## Example
//!
//! ```
//! use switchyard::template::PathTemplate;
//!
//! let template = PathTemplate::compile("/users/:id");
//! assert!(template.matches("/users/42"));
//! assert!(template.matches("/users/42/"));
//!
//! let params = template.extract_params("/users/42");
//! assert_eq!(params[0].0.as_ref(), "id");
//! assert_eq!(params[0].1, "42");
//! ```

mod core;

pub use core::{ParamVec, PathTemplate, MAX_INLINE_PARAMS};
