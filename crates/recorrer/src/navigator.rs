//! Route traversal engine.
//!
//! A [`Navigator`] owns a [`RouteTable`] and a [`PageDriver`] and walks
//! named routes on behalf of one logical test actor: it slices the relevant
//! sub-sequence of a route, invokes each intermediate step's action through
//! the driver, and returns a freshly resolved handle to the target page.

use crate::driver::{DriverError, PageDriver, PageHandle};
use crate::result::{NavigationError, NavigationResult};
use crate::route::{PageId, Route, Step};
use crate::table::{RouteTable, DEFAULT_ROUTE, FIXTURE_FILE_EXT};

/// Options for a traversal call.
///
/// `using` selects the route (defaults to [`DEFAULT_ROUTE`]), `visit`
/// requests visit-resolution for the first executed step, and `from_page`
/// overrides the start-at-beginning behavior of
/// [`Navigator::navigate_to`].
#[derive(Debug, Clone, Default)]
pub struct NavigateOptions {
    using: Option<String>,
    visit: bool,
    from: Option<PageId>,
}

impl NavigateOptions {
    /// Create options with defaults: default route, no visit, start at the
    /// beginning
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the route to traverse
    #[must_use]
    pub fn using(mut self, route: impl Into<String>) -> Self {
        self.using = Some(route.into());
        self
    }

    /// Request visit-resolution for the first executed step
    #[must_use]
    pub const fn visit(mut self, visit: bool) -> Self {
        self.visit = visit;
        self
    }

    /// Start traversal at the given page's step instead of the beginning
    #[must_use]
    pub fn from_page(mut self, page: impl Into<PageId>) -> Self {
        self.from = Some(page.into());
        self
    }

    fn route_name(&self) -> &str {
        self.using.as_deref().unwrap_or(DEFAULT_ROUTE)
    }
}

/// Stateful traversal engine for one test actor's position.
///
/// Synchronous and single-actor: each step's resolution and action complete
/// before the next step begins, and there is no cancellation — a traversal
/// runs to completion or to its first failure. Steps already executed when
/// a failure surfaces are not rolled back.
///
/// The navigator never updates [`current_page`](Self::current_page) itself;
/// the embedding framework sets it as the test moves between pages.
pub struct Navigator<D: PageDriver> {
    table: RouteTable,
    driver: D,
    current_page: Option<PageId>,
}

impl<D: PageDriver> Navigator<D> {
    /// Create a navigator over a configured route table and a driver
    #[must_use]
    pub fn new(table: RouteTable, driver: D) -> Self {
        Self {
            table,
            driver,
            current_page: None,
        }
    }

    /// The route table
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Mutable access to the route table, for reconfiguration between
    /// test cases
    pub fn table_mut(&mut self) -> &mut RouteTable {
        &mut self.table
    }

    /// The driver
    #[must_use]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// The page this actor is logically positioned on, if set
    #[must_use]
    pub fn current_page(&self) -> Option<&PageId> {
        self.current_page.as_ref()
    }

    /// Record the page this actor is positioned on
    pub fn set_current_page(&mut self, page: impl Into<PageId>) {
        self.current_page = Some(page.into());
    }

    /// Clear the recorded position
    pub fn clear_current_page(&mut self) {
        self.current_page = None;
    }

    /// Travel to `target` along a route, executing the actions of every
    /// step before the target's own entry.
    ///
    /// Returns a freshly resolved handle to the target page; the handle is
    /// never one reused from step execution. When the target is the
    /// route's first entry, no steps execute and the target is resolved
    /// directly.
    pub fn navigate_to(
        &mut self,
        target: &PageId,
        options: NavigateOptions,
    ) -> NavigationResult<D::Handle> {
        self.navigate_to_with(target, options, |_| ())
    }

    /// Same as [`navigate_to`](Self::navigate_to), additionally invoking
    /// `on_arrival` with the resolved target handle. The callback's return
    /// value is discarded.
    pub fn navigate_to_with<T>(
        &mut self,
        target: &PageId,
        options: NavigateOptions,
        on_arrival: impl FnOnce(&mut D::Handle) -> T,
    ) -> NavigationResult<D::Handle> {
        let name = options.route_name();
        let route = self.resolve_route(name)?;
        let target_pos = position_in(&route, target, name)?;

        if target_pos > 0 {
            let start = match &options.from {
                Some(page) => position_in(&route, page, name)?,
                None => 0,
            };
            // Stop before the target's own step; an empty slice means the
            // start point is at or past the target.
            let steps = route.steps().get(start..target_pos).unwrap_or(&[]);
            self.execute_steps(steps, options.visit)?;
        }

        let mut handle = self.resolve(target)?;
        let _ = on_arrival(&mut handle);
        Ok(handle)
    }

    /// Travel to `target` starting from the current page's position in the
    /// route instead of the beginning.
    ///
    /// Only the route choice in `options` is honored; continuing mid-route
    /// never re-visits. Requires [`set_current_page`](Self::set_current_page)
    /// to have been called.
    pub fn continue_navigation_to(
        &mut self,
        target: &PageId,
        options: NavigateOptions,
    ) -> NavigationResult<D::Handle> {
        self.continue_navigation_to_with(target, options, |_| ())
    }

    /// Same as [`continue_navigation_to`](Self::continue_navigation_to),
    /// additionally invoking `on_arrival` with the resolved target handle.
    /// The callback's return value is discarded.
    pub fn continue_navigation_to_with<T>(
        &mut self,
        target: &PageId,
        options: NavigateOptions,
        on_arrival: impl FnOnce(&mut D::Handle) -> T,
    ) -> NavigationResult<D::Handle> {
        let name = options.route_name();
        let route = self.resolve_route(name)?;
        let current = self
            .current_page
            .clone()
            .ok_or(NavigationError::CurrentPageUnset)?;
        let start = position_in(&route, &current, name)?;
        let target_pos = position_in(&route, target, name)?;

        let steps = route.steps().get(start..target_pos).unwrap_or(&[]);
        self.execute_steps(steps, false)?;

        let mut handle = self.resolve(target)?;
        let _ = on_arrival(&mut handle);
        Ok(handle)
    }

    /// Execute the entire route, including its final step.
    ///
    /// There is no arrival page to resolve separately: the last step's own
    /// resolution already happened as a side effect of execution.
    pub fn navigate_all(&mut self, options: NavigateOptions) -> NavigationResult<()> {
        let route = self.resolve_route(options.route_name())?;
        self.execute_steps(route.steps(), options.visit)
    }

    /// Look up a route by name, loading its fixture data if a reference is
    /// configured. The load happens on every resolution, never cached.
    fn resolve_route(&mut self, name: &str) -> NavigationResult<Route> {
        // Clone the route so step execution can borrow the driver mutably.
        let route = self
            .table
            .route(name)
            .cloned()
            .ok_or_else(|| NavigationError::RouteNotFound {
                route: name.to_string(),
            })?;

        let fixture = self
            .table
            .fixture_for(name)
            .map(|token| format!("{token}.{FIXTURE_FILE_EXT}"));
        if let Some(file) = fixture {
            self.driver
                .load_fixture(&file)
                .map_err(|err| NavigationError::FixtureLoad {
                    fixture: file.clone(),
                    message: err.to_string(),
                })?;
            tracing::debug!(route = name, fixture = %file, "fixture loaded");
        }

        tracing::debug!(route = name, steps = route.len(), "route resolved");
        Ok(route)
    }

    /// Execute `steps` in order, failing fast on the first error.
    ///
    /// `visit_first` applies at most once per call, to the first step
    /// actually executed; every later step uses plain resolution even when
    /// the route revisits the same page type.
    fn execute_steps(&mut self, steps: &[Step], visit_first: bool) -> NavigationResult<()> {
        for (index, step) in steps.iter().enumerate() {
            let mut page = if visit_first && index == 0 {
                self.resolve_and_visit(&step.page)?
            } else {
                self.resolve(&step.page)?
            };

            tracing::trace!(page = %step.page, action = %step.action, "executing step");
            page.invoke(&step.action, &step.args)
                .map_err(|err| match err {
                    DriverError::UnsupportedAction { action } => NavigationError::MissingAction {
                        action,
                        page: step.page.clone(),
                    },
                    other => NavigationError::Action {
                        action: step.action.clone(),
                        page: step.page.clone(),
                        message: other.to_string(),
                    },
                })?;
        }
        Ok(())
    }

    fn resolve(&mut self, page: &PageId) -> NavigationResult<D::Handle> {
        self.driver
            .resolve(page)
            .map_err(|err| resolution_error(page, err))
    }

    fn resolve_and_visit(&mut self, page: &PageId) -> NavigationResult<D::Handle> {
        self.driver
            .resolve_and_visit(page)
            .map_err(|err| resolution_error(page, err))
    }
}

impl<D: PageDriver + std::fmt::Debug> std::fmt::Debug for Navigator<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("table", &self.table)
            .field("driver", &self.driver)
            .field("current_page", &self.current_page)
            .finish()
    }
}

fn position_in(route: &Route, page: &PageId, route_name: &str) -> NavigationResult<usize> {
    route
        .position_of(page)
        .ok_or_else(|| NavigationError::PageNotInRoute {
            page: page.clone(),
            route: route_name.to_string(),
        })
}

fn resolution_error(page: &PageId, err: DriverError) -> NavigationError {
    match err {
        DriverError::UnsupportedAction { action } => NavigationError::MissingAction {
            action,
            page: page.clone(),
        },
        other => NavigationError::Resolution {
            page: page.clone(),
            message: other.to_string(),
        },
    }
}
