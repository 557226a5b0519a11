//! # Trellis Permissions
//!
//! Hierarchical permission resolution for the Trellis admin core.
//! Decides, for a session's permission set and an optional record, whether a
//! named action on a named field of a named resource is allowed.
//!
//! ## Overview
//!
//! The trellis-permissions crate handles:
//! - **Paths**: scoped, dot-separated permission paths (`resource.action`
//!   or `resource.field.action`, under an implicit `admin` root)
//! - **Grants**: unconditional allows and allows conditioned on per-attribute
//!   value filters
//! - **Permission Sets**: the flat, session-scoped mapping of granted and
//!   denied paths, with wildcard (`*`) and negation (`~`) support
//!
//! ## Architecture
//!
//! ```text
//! PermissionSet = { path string -> Grant }
//!
//! Examples:
//!   "admin.orders.view": true                  - view orders, unconditionally
//!   "admin.orders.*": {"region": ["US"]}       - any action, US records only
//!   "~admin.orders.field.edit": true           - deny editing this field
//! ```
//!
//! ## Resolution order
//!
//! A check walks candidate keys from the narrowest scope to the broadest,
//! trying the exact action before the wildcard at each scope. All denies are
//! consulted before any allow: an explicit deny at any scope vetoes the
//! check, regardless of matching allows elsewhere. No match at all is a
//! deny (fail-closed).
//!
//! ## Usage
//!
//! ```rust
//! use trellis_permissions::{Action, PermissionPath, PermissionSet};
//!
//! let set: PermissionSet = serde_json::from_str(
//!     r#"{"admin.orders.view": true, "~admin.orders.cost.view": true}"#,
//! ).unwrap();
//!
//! let path = PermissionPath::field_action("orders", "status", Action::View);
//! assert!(set.allows(&path, None));
//!
//! let denied = PermissionPath::field_action("orders", "cost", Action::View);
//! assert!(!set.allows(&denied, None));
//! ```
//!
//! ## Record-level checks
//!
//! A grant whose value is an attribute -> allowed-values mapping only holds
//! for records whose attributes are all members of the allowed sets. Passing
//! a record to [`PermissionSet::allows`] re-evaluates the grant against that
//! record; a missing attribute counts as a mismatch, not an error.

pub mod action;
pub mod error;
pub mod grant;
pub mod path;
pub mod set;

// Re-export main types for convenience
pub use action::Action;
pub use error::{PermissionError, PermissionResult};
pub use grant::{Grant, Record, ValueFilters};
pub use path::{PermissionPath, ROOT_SCOPE, WILDCARD};
pub use set::{PermissionSet, DENY_PREFIX};
