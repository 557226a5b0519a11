//! # Permission Paths
//!
//! A permission path names a scope (resource, optionally a field) and a
//! trailing action. Paths carry an implicit `admin` root segment, so
//! `"orders.status.edit"` is matched against keys under `admin.orders.*`.
//!
//! [`PermissionPath::candidates`] defines the exact key order the matcher
//! walks: scope lengths from narrowest to broadest, exact action before the
//! wildcard at each scope. Keeping that iteration explicit (rather than
//! recursive) makes the tie-break order auditable in isolation.

use crate::action::Action;
use crate::error::{PermissionError, PermissionResult};

/// Implicit root segment prepended to every permission path.
pub const ROOT_SCOPE: &str = "admin";

/// Wildcard action segment, matching any action at its scope.
pub const WILDCARD: &str = "*";

/// A parsed permission path: scope segments plus a trailing action.
///
/// # Example
///
/// ```
/// use trellis_permissions::{Action, PermissionPath};
///
/// let path = PermissionPath::parse("orders.status.edit").unwrap();
/// assert_eq!(path.scope(), ["admin", "orders", "status"]);
/// assert_eq!(path.action(), &Action::Edit);
///
/// assert_eq!(
///     path.candidates(),
///     [
///         "admin.orders.status.edit",
///         "admin.orders.status.*",
///         "admin.orders.edit",
///         "admin.orders.*",
///         "admin.edit",
///         "admin.*",
///     ],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermissionPath {
    scope: Vec<String>,
    action: Action,
}

impl PermissionPath {
    /// Parse a dotted path of the form `resource.action` or
    /// `resource.field.action` (the `admin` root is implicit).
    pub fn parse(path: &str) -> PermissionResult<Self> {
        if path.is_empty() {
            return Err(PermissionError::EmptyPath);
        }
        let segments: Vec<&str> = path.split('.').collect();
        if !(2..=3).contains(&segments.len()) {
            return Err(PermissionError::InvalidPath(path.to_string()));
        }
        if segments.iter().any(|s| s.is_empty()) {
            return Err(PermissionError::EmptySegment(path.to_string()));
        }

        let mut scope = Vec::with_capacity(segments.len());
        scope.push(ROOT_SCOPE.to_string());
        for s in &segments[..segments.len() - 1] {
            scope.push((*s).to_string());
        }
        Ok(Self {
            scope,
            action: Action::parse(segments[segments.len() - 1]),
        })
    }

    /// Path for a resource-level action (e.g. the edit button on `orders`).
    pub fn resource_action(resource: &str, action: Action) -> Self {
        Self {
            scope: vec![ROOT_SCOPE.to_string(), resource.to_string()],
            action,
        }
    }

    /// Path for a field-level action (e.g. viewing `orders.status`).
    pub fn field_action(resource: &str, field: &str, action: Action) -> Self {
        Self {
            scope: vec![
                ROOT_SCOPE.to_string(),
                resource.to_string(),
                field.to_string(),
            ],
            action,
        }
    }

    /// The scope segments, including the implicit root.
    pub fn scope(&self) -> &[String] {
        &self.scope
    }

    /// The trailing action segment.
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Candidate permission keys in match order.
    ///
    /// Scope lengths descend (most specific first); at each length the exact
    /// action precedes the wildcard. Both the deny pass and the allow pass
    /// walk this exact sequence, so duplicate-looking keys at different
    /// scopes always resolve the same way.
    pub fn candidates(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.scope.len() * 2);
        for len in (1..=self.scope.len()).rev() {
            let prefix = self.scope[..len].join(".");
            keys.push(format!("{prefix}.{}", self.action.as_str()));
            keys.push(format!("{prefix}.{WILDCARD}"));
        }
        keys
    }
}

impl core::fmt::Display for PermissionPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.scope.join("."), self.action.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource_path() {
        let path = PermissionPath::parse("orders.view").unwrap();
        assert_eq!(path.scope(), ["admin", "orders"]);
        assert_eq!(path.action(), &Action::View);
    }

    #[test]
    fn test_parse_field_path() {
        let path = PermissionPath::parse("orders.status.edit").unwrap();
        assert_eq!(path.scope(), ["admin", "orders", "status"]);
        assert_eq!(path.action(), &Action::Edit);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert_eq!(PermissionPath::parse(""), Err(PermissionError::EmptyPath));
        assert_eq!(
            PermissionPath::parse("view"),
            Err(PermissionError::InvalidPath("view".to_string()))
        );
        assert_eq!(
            PermissionPath::parse("a.b.c.d"),
            Err(PermissionError::InvalidPath("a.b.c.d".to_string()))
        );
        assert_eq!(
            PermissionPath::parse("orders..view"),
            Err(PermissionError::EmptySegment("orders..view".to_string()))
        );
    }

    #[test]
    fn test_constructors_match_parse() {
        assert_eq!(
            PermissionPath::resource_action("orders", Action::Add),
            PermissionPath::parse("orders.add").unwrap()
        );
        assert_eq!(
            PermissionPath::field_action("orders", "status", Action::View),
            PermissionPath::parse("orders.status.view").unwrap()
        );
    }

    #[test]
    fn test_candidate_order_resource_level() {
        let path = PermissionPath::parse("orders.view").unwrap();
        assert_eq!(
            path.candidates(),
            ["admin.orders.view", "admin.orders.*", "admin.view", "admin.*"],
        );
    }

    #[test]
    fn test_candidate_order_field_level() {
        let path = PermissionPath::parse("orders.status.edit").unwrap();
        assert_eq!(
            path.candidates(),
            [
                "admin.orders.status.edit",
                "admin.orders.status.*",
                "admin.orders.edit",
                "admin.orders.*",
                "admin.edit",
                "admin.*",
            ],
        );
    }

    #[test]
    fn test_candidates_custom_action() {
        let path = PermissionPath::resource_action("orders", Action::Custom("approve".into()));
        assert_eq!(
            path.candidates(),
            ["admin.orders.approve", "admin.orders.*", "admin.approve", "admin.*"],
        );
    }

    #[test]
    fn test_display() {
        let path = PermissionPath::parse("orders.status.edit").unwrap();
        assert_eq!(path.to_string(), "admin.orders.status.edit");
    }
}
