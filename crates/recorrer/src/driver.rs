//! Collaborator traits implemented by the embedding test framework.
//!
//! The traversal engine is deliberately ignorant of how pages are
//! constructed, visited or acted on; it drives everything through
//! [`PageDriver`] and the handles it produces.

use crate::route::{ActionName, PageId};
use serde_json::Value;

/// Errors surfaced by the embedding framework's driver and page handles.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DriverError {
    /// The page does not support the requested action
    #[error("unsupported action: {action}")]
    UnsupportedAction {
        /// Action that was requested
        action: ActionName,
    },

    /// The page could not be constructed or located
    #[error("page resolution failed: {message}")]
    ResolutionFailed {
        /// Failure detail
        message: String,
    },

    /// The action was supported but failed while executing
    #[error("action failed: {message}")]
    ActionFailed {
        /// Failure detail
        message: String,
    },

    /// Fixture data could not be loaded
    #[error("fixture load failed: {message}")]
    FixtureLoad {
        /// Failure detail
        message: String,
    },
}

/// A live handle to a resolved page.
pub trait PageHandle {
    /// Identifier of the page type this handle represents.
    fn page_id(&self) -> &PageId;

    /// Perform the named action with the given ordered argument list.
    ///
    /// Implementations must verify the action is supported before
    /// performing any part of it, and return
    /// [`DriverError::UnsupportedAction`] with no side effects when it is
    /// not. An empty `args` slice means the action takes no arguments.
    fn invoke(&mut self, action: &ActionName, args: &[Value]) -> Result<(), DriverError>;
}

/// Page resolution and fixture loading, implemented by the embedding
/// test framework.
pub trait PageDriver {
    /// Handle type produced by resolution.
    type Handle: PageHandle;

    /// Construct or locate a page handle without any entry action.
    fn resolve(&mut self, page: &PageId) -> Result<Self::Handle, DriverError>;

    /// Construct or locate a page handle, additionally performing its
    /// canonical entry action (e.g. an initial load) first.
    fn resolve_and_visit(&mut self, page: &PageId) -> Result<Self::Handle, DriverError>;

    /// Load external fixture data from `file_name` (already formatted as
    /// `"<token>.<ext>"`). Drivers without fixture data keep the default
    /// no-op.
    fn load_fixture(&mut self, file_name: &str) -> Result<(), DriverError> {
        let _ = file_name;
        Ok(())
    }
}
