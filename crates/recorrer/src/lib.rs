//! Recorrer: route-table traversal for page-object test suites.
//!
//! A route is a named, ordered sequence of page-transition steps. Given a
//! declarative table of routes, a [`Navigator`] travels from an implicit
//! current position (or from the start) to a target page, executing each
//! intermediate step's action along the way and returning a freshly
//! resolved handle to the arrived-at page. How pages are constructed,
//! visited or acted on is delegated entirely to the embedding framework
//! through the [`PageDriver`] seam.
//!
//! # Example
//!
//! ```ignore
//! use recorrer::{NavigateOptions, Navigator, PageId, Route, RouteTable, Step};
//! use std::collections::HashMap;
//!
//! let mut table = RouteTable::new();
//! table.set_routes(HashMap::from([(
//!     "default".to_string(),
//!     Route::new(vec![
//!         Step::new("LoginPage", "log_in").with_arg("admin"),
//!         Step::new("DashboardPage", "open_reports"),
//!         Step::new("ReportsPage", "select_quarter"),
//!     ]),
//! )]))?;
//!
//! let mut navigator = Navigator::new(table, MyPageDriver::new());
//! let reports = navigator.navigate_to(
//!     &PageId::from("ReportsPage"),
//!     NavigateOptions::new().visit(true),
//! )?;
//! ```
//!
//! Traversal is synchronous and single-actor; one `Navigator` represents
//! one logical test actor's position in one session at a time.

#![warn(missing_docs)]

mod driver;
mod navigator;
mod result;
mod route;
mod table;

pub use driver::{DriverError, PageDriver, PageHandle};
pub use navigator::{NavigateOptions, Navigator};
pub use result::{NavigationError, NavigationResult};
pub use route::{ActionName, PageId, Route, Step};
pub use table::{RouteTable, DEFAULT_ROUTE, FIXTURE_FILE_EXT};
