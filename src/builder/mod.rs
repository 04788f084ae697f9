//! # Builder Module
//!
//! Fluent route registration and route grouping.
//!
//! ## Overview
//!
//! [`RouterBuilder`] is the registration front-end for a
//! [`RouteTable`](crate::router::RouteTable). Each verb or filter call
//! registers one route and hands the builder back, so an application's route
//! manifest reads top to bottom and fails loudly at the first duplicate.
//! [`RouterBuilder::build`] seals the table and hands it to the caller;
//! registration ends there.
//!
//! [`RouterBuilder::group`] registers a set of routes under a shared path
//! prefix through an explicit [`RouteGroup`] handle passed to a closure.
//! The handle carries all the state there is - no process-wide "current
//! builder" - so grouping calls are re-entrant, nest freely, and may run
//! from any thread.
//!
//! ## Example
//!
//! ```
//! use switchyard::{HandlerCategory, RouterBuilder};
//!
//! # fn main() -> Result<(), switchyard::RouteError> {
//! let table = RouterBuilder::new()
//!     .before_all("request_log")?
//!     .get("/health", "health")?
//!     .group("/users", |users| {
//!         users.get("", "list_users")?;
//!         users.get("/:id", "show_user")?;
//!         users.post("", "create_user")
//!     })?
//!     .build();
//!
//! assert_eq!(table.find_matches(HandlerCategory::Get, "/users/42").len(), 1);
//! # Ok(())
//! # }
//! ```

mod core;

pub use core::{RouteGroup, RouterBuilder};
