//! Result and error types for Recorrer.

use crate::route::{ActionName, PageId};
use thiserror::Error;

/// Result type for Recorrer operations
pub type NavigationResult<T> = Result<T, NavigationError>;

/// Errors that can occur while configuring or traversing routes
#[derive(Debug, Error)]
pub enum NavigationError {
    /// Route table was configured without a `default` route
    #[error("route table must contain a 'default' route")]
    MissingDefaultRoute,

    /// Requested route name is not in the table
    #[error("route not found: {route}")]
    RouteNotFound {
        /// Route name that was requested
        route: String,
    },

    /// A page was looked up in a route that does not contain it
    #[error("page '{page}' is not part of route '{route}'")]
    PageNotInRoute {
        /// Page that was looked up
        page: PageId,
        /// Route that was searched
        route: String,
    },

    /// A resolved page does not support the action a step requires
    #[error("page '{page}' does not support action '{action}'")]
    MissingAction {
        /// Action the step required
        action: ActionName,
        /// Page that lacked it
        page: PageId,
    },

    /// `continue_navigation_to` was called before a current page was set
    #[error("no current page set; call set_current_page before continuing a route")]
    CurrentPageUnset,

    /// The driver failed to resolve a page
    #[error("failed to resolve page '{page}': {message}")]
    Resolution {
        /// Page that failed to resolve
        page: PageId,
        /// Driver error message
        message: String,
    },

    /// The driver failed while performing a step's action
    #[error("action '{action}' on page '{page}' failed: {message}")]
    Action {
        /// Action that failed
        action: ActionName,
        /// Page it was invoked on
        page: PageId,
        /// Driver error message
        message: String,
    },

    /// The driver failed to load a route's fixture data
    #[error("failed to load fixture '{fixture}': {message}")]
    FixtureLoad {
        /// Fixture file name that was requested
        fixture: String,
        /// Driver error message
        message: String,
    },
}
