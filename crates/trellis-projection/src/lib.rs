//! # Trellis Projection
//!
//! Permission-aware screen projection: turns resource descriptors plus a
//! session's permission set into the filtered, render-ready structure of an
//! admin dashboard. Output is pure data; whatever UI layer consumes it
//! decides how cells, controls, and buttons actually look.
//!
//! ## Overview
//!
//! The trellis-projection crate handles:
//! - **Field projection**: which fields of a resource render at all, and
//!   which re-check per record (hidden placeholder on denial)
//! - **Input projection**: which form inputs render, including inputs
//!   constrained to permitted values by grant filters
//! - **Resource assembly**: which list/show/edit/create screens and bulk
//!   actions a resource exposes
//!
//! ## Two-phase checks
//!
//! Visibility is decided twice. A static pass (no record) prunes fields and
//! inputs before rendering; survivors carry a gate that re-evaluates the
//! same permission against each concrete record, because a broad grant may
//! be narrowed by value filters that depend on the record's attributes.
//!
//! ## Usage
//!
//! ```rust
//! use trellis_permissions::PermissionSet;
//! use trellis_projection::AdminView;
//! use trellis_schema::AdminState;
//!
//! let state = AdminState::from_json(r#"{
//!     "resources": {
//!         "orders": {
//!             "fields": {"id": {"type": "NumberField"}},
//!             "inputs": {},
//!             "repr": "id"
//!         }
//!     }
//! }"#).unwrap();
//! let perms: PermissionSet =
//!     serde_json::from_str(r#"{"admin.orders.view": true}"#).unwrap();
//!
//! let view = AdminView::assemble(&state, &perms).unwrap();
//! let orders = &view.resources[0];
//! assert!(orders.list.is_some());
//! assert!(orders.edit.is_none());
//! ```

pub mod fields;
pub mod inputs;
pub mod resource;

// Re-export main types for convenience
pub use fields::{project_fields, FieldCell, FieldVisibility};
pub use inputs::{project_inputs, ConstrainedInput, InputControl, StandardInput};
pub use resource::{AdminView, BulkUpdate, CreateView, EditView, ListView, ResourceView, ShowView};
