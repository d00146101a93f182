//! Route data model: pages, actions, steps and ordered step sequences.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a page type, used both as a route lookup key and as the
/// argument to page resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Create a new page identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Symbolic name of an action to invoke on a resolved page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionName(String);

impl ActionName {
    /// Create a new action name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActionName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ActionName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// One page-transition step within a route: the page to act on, the action
/// to invoke, and the arguments to pass.
///
/// Arguments are always an ordered sequence; a step with no arguments
/// carries an empty sequence, and the two states behave identically at
/// invocation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Page the action is invoked on
    pub page: PageId,
    /// Action to invoke
    pub action: ActionName,
    /// Ordered arguments passed to the action (possibly empty)
    #[serde(default)]
    pub args: Vec<Value>,
}

impl Step {
    /// Create a step with no arguments
    #[must_use]
    pub fn new(page: impl Into<PageId>, action: impl Into<ActionName>) -> Self {
        Self {
            page: page.into(),
            action: action.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<Value>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Replace the argument list
    #[must_use]
    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }
}

/// An ordered sequence of steps from a start context to various target
/// pages. Immutable once stored in a table except by wholesale replacement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    steps: Vec<Step>,
}

impl Route {
    /// Create a route from a step sequence
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Index of the first step whose page matches `page`.
    ///
    /// Page ids may legitimately recur within a route; lookups always bind
    /// to the first occurrence.
    #[must_use]
    pub fn position_of(&self, page: &PageId) -> Option<usize> {
        self.steps.iter().position(|step| step.page == *page)
    }

    /// The route's steps in order
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps in the route
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the route has no steps
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<Step> for Route {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod step_tests {
        use super::*;

        #[test]
        fn test_new_has_empty_args() {
            let step = Step::new("LoginPage", "submit");
            assert_eq!(step.page, PageId::from("LoginPage"));
            assert_eq!(step.action, ActionName::from("submit"));
            assert!(step.args.is_empty());
        }

        #[test]
        fn test_with_arg_appends_in_order() {
            let step = Step::new("SearchPage", "search")
                .with_arg("rust")
                .with_arg(2);
            assert_eq!(step.args, vec![json!("rust"), json!(2)]);
        }

        #[test]
        fn test_with_args_replaces() {
            let step = Step::new("a", "m").with_arg("old").with_args(vec![json!("new")]);
            assert_eq!(step.args, vec![json!("new")]);
        }

        #[test]
        fn test_deserialize_defaults_args() {
            let step: Step =
                serde_json::from_str(r#"{"page": "HomePage", "action": "open_menu"}"#).unwrap();
            assert_eq!(step.page.as_str(), "HomePage");
            assert!(step.args.is_empty());
        }
    }

    mod route_tests {
        use super::*;

        fn sample_route() -> Route {
            Route::new(vec![
                Step::new("a", "m1"),
                Step::new("b", "m2"),
                Step::new("a", "m3"),
            ])
        }

        #[test]
        fn test_position_of_finds_first_occurrence() {
            let route = sample_route();
            assert_eq!(route.position_of(&PageId::from("a")), Some(0));
            assert_eq!(route.position_of(&PageId::from("b")), Some(1));
        }

        #[test]
        fn test_position_of_missing_page() {
            let route = sample_route();
            assert_eq!(route.position_of(&PageId::from("zzz")), None);
        }

        #[test]
        fn test_from_iterator() {
            let route: Route = (0..3).map(|i| Step::new(format!("p{i}"), "go")).collect();
            assert_eq!(route.len(), 3);
            assert!(!route.is_empty());
        }

        #[test]
        fn test_deserialize_route_as_step_list() {
            let route: Route = serde_json::from_str(
                r#"[
                    {"page": "LoginPage", "action": "log_in", "args": ["user", "pass"]},
                    {"page": "HomePage", "action": "open_settings"}
                ]"#,
            )
            .unwrap();
            assert_eq!(route.len(), 2);
            assert_eq!(route.steps()[0].args.len(), 2);
        }
    }
}
