//! # Actions
//!
//! The trailing segment of a permission path names the action being
//! performed. The four CRUD actions are closed variants; anything else the
//! backend defines (custom row actions, exports, etc.) is carried verbatim
//! as [`Action::Custom`].

use serde::{Deserialize, Serialize};

/// The action segment of a permission path.
///
/// # Example
///
/// ```
/// use trellis_permissions::Action;
///
/// assert_eq!(Action::parse("view"), Action::View);
/// assert_eq!(Action::View.as_str(), "view");
///
/// // Unknown names are server-defined custom actions, not errors.
/// assert_eq!(Action::parse("approve"), Action::Custom("approve".into()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Action {
    /// Read access: list views, show views, and field display.
    View,
    /// Update access: edit forms and per-field edits.
    Edit,
    /// Create access: create forms and the create button.
    Add,
    /// Delete access: row delete and bulk delete.
    Delete,
    /// A server-defined action name.
    Custom(String),
}

impl Action {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &str {
        match self {
            Action::View => "view",
            Action::Edit => "edit",
            Action::Add => "add",
            Action::Delete => "delete",
            Action::Custom(name) => name,
        }
    }

    /// Parse an action from its string representation.
    ///
    /// Never fails: names outside the CRUD set become [`Action::Custom`],
    /// since backends may define their own action types. The wildcard `*`
    /// is not an action; it only exists as a match candidate inside the
    /// permission set.
    pub fn parse(s: &str) -> Self {
        match s {
            "view" => Action::View,
            "edit" => Action::Edit,
            "add" => Action::Add,
            "delete" => Action::Delete,
            other => Action::Custom(other.to_string()),
        }
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        Action::parse(&s)
    }
}

impl From<Action> for String {
    fn from(a: Action) -> Self {
        a.as_str().to_string()
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
