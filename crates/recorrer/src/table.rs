//! Route table: named routes plus optional per-route fixture references.

use crate::result::{NavigationError, NavigationResult};
use crate::route::Route;
use std::collections::HashMap;

/// Name of the route every table must contain.
pub const DEFAULT_ROUTE: &str = "default";

/// File extension appended to fixture reference tokens when asking the
/// driver to load route data.
pub const FIXTURE_FILE_EXT: &str = "yml";

/// Mapping from route name to route, with an optional parallel mapping from
/// route name to a fixture reference token.
///
/// Typical lifecycle: configured once during suite setup, read many times
/// during traversal, and optionally replaced wholesale between test cases.
///
/// # Example
///
/// ```
/// use recorrer::{Route, RouteTable, Step};
/// use std::collections::HashMap;
///
/// let mut table = RouteTable::new();
/// table.set_routes(HashMap::from([(
///     "default".to_string(),
///     Route::new(vec![
///         Step::new("LoginPage", "log_in"),
///         Step::new("HomePage", "open_reports"),
///     ]),
/// )]))?;
/// # Ok::<(), recorrer::NavigationError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Route>,
    route_data: Option<HashMap<String, String>>,
}

impl RouteTable {
    /// Create an empty, unconfigured table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the configured routes.
    ///
    /// Fails with [`NavigationError::MissingDefaultRoute`] when `routes`
    /// lacks a [`DEFAULT_ROUTE`] entry; the previously configured routes
    /// are retained in that case.
    pub fn set_routes(&mut self, routes: HashMap<String, Route>) -> NavigationResult<()> {
        if !routes.contains_key(DEFAULT_ROUTE) {
            return Err(NavigationError::MissingDefaultRoute);
        }
        self.routes = routes;
        Ok(())
    }

    /// The currently configured routes; empty until configured
    #[must_use]
    pub fn routes(&self) -> &HashMap<String, Route> {
        &self.routes
    }

    /// Look up a route by name
    #[must_use]
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    /// True once `set_routes` has succeeded
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.routes.is_empty()
    }

    /// Replace the per-route fixture references. Stored without validation.
    pub fn set_route_data(&mut self, data: HashMap<String, String>) {
        self.route_data = Some(data);
    }

    /// The configured fixture references, if any
    #[must_use]
    pub fn route_data(&self) -> Option<&HashMap<String, String>> {
        self.route_data.as_ref()
    }

    /// Fixture reference token for the given route, if one is configured
    #[must_use]
    pub fn fixture_for(&self, route: &str) -> Option<&str> {
        self.route_data
            .as_ref()
            .and_then(|data| data.get(route))
            .map(String::as_str)
    }
}
