//! # Trellis Schema
//!
//! Resource and field descriptors for the Trellis admin core: the static,
//! server-supplied description of what an admin dashboard contains. The
//! descriptor tree arrives as embedded page state, is parsed and validated
//! once at application start, and is never mutated afterwards.
//!
//! ## Overview
//!
//! The trellis-schema crate handles:
//! - **Components**: the closed registry of display and input component
//!   types, resolved fail-fast at load
//! - **Descriptors**: per-resource field/input descriptions, display
//!   representation, icons, and bulk-update actions
//! - **State**: the full page state (resources, endpoint URLs, view config)
//!   with whole-tree validation
//!
//! ## Usage
//!
//! ```rust
//! use trellis_schema::AdminState;
//!
//! let state = AdminState::from_json(r#"{
//!     "resources": {
//!         "orders": {
//!             "fields": {"id": {"type": "NumberField"},
//!                        "status": {"type": "TextField"}},
//!             "inputs": {"status": {"type": "TextInput", "show_create": true}},
//!             "repr": "id",
//!             "display": ["id", "status"]
//!         }
//!     },
//!     "urls": {"token": "/admin/token"},
//!     "view": {"name": "Orders Admin"}
//! }"#).unwrap();
//!
//! assert_eq!(state.resources["orders"].repr, "id");
//! ```
//!
//! An unknown component tag anywhere in the tree is a hard
//! [`SchemaError::UnknownComponent`] at load time. Silently skipping a
//! mistyped descriptor would hide a server/client mismatch.

pub mod components;
pub mod descriptor;
pub mod error;
pub mod state;

// Re-export main types for convenience
pub use components::{FieldComponent, InputComponent};
pub use descriptor::{
    Endpoint, FieldDescriptor, InputDescriptor, Props, ResourceDescriptor, ValidatorSpec,
    CHILDREN_PROP,
};
pub use error::{SchemaError, SchemaResult};
pub use state::{AdminState, ViewConfig};

// The record type evaluated against permission filters lives with the
// matcher; re-exported here because descriptors and records travel together.
pub use trellis_permissions::Record;
