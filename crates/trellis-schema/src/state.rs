//! # Admin State
//!
//! The full page state the server embeds for the dashboard: every resource
//! descriptor, the auth/endpoint URLs, and view configuration. Loaded once
//! at application start and treated as immutable. Loading validates the
//! whole tree fail-fast, so every component tag and field reference is
//! known-good before anything renders.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::descriptor::{FieldDescriptor, ResourceDescriptor};
use crate::error::{SchemaError, SchemaResult};

/// Top-level view configuration (title, favicon).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Project name, shown in the title.
    #[serde(default)]
    pub name: String,

    /// Path to a favicon.
    #[serde(default)]
    pub icon: Option<String>,
}

/// The server-supplied admin page state.
///
/// # Example
///
/// ```
/// use trellis_schema::AdminState;
///
/// let state = AdminState::from_json(r#"{
///     "resources": {
///         "orders": {
///             "fields": {"id": {"type": "NumberField"}},
///             "inputs": {},
///             "repr": "id"
///         }
///     }
/// }"#).unwrap();
///
/// assert!(state.resource("orders").is_ok());
/// assert!(state.resource("missing").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminState {
    /// All admin resources, in menu order.
    pub resources: IndexMap<String, ResourceDescriptor>,

    /// Top-level URLs (token endpoint, logout endpoint, ...), carried
    /// opaquely for the surrounding auth/data layer.
    #[serde(default)]
    pub urls: IndexMap<String, String>,

    /// View configuration.
    #[serde(default)]
    pub view: ViewConfig,
}

impl AdminState {
    /// Parse and validate state from its JSON form.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let state: Self = serde_json::from_str(json)?;
        state.validate()?;
        Ok(state)
    }

    /// Validate the whole descriptor tree.
    ///
    /// Checks that every `repr` and `display` entry names a declared field,
    /// every bulk-update assignment targets a declared input, and every
    /// nested child field map parses with registered components. Top-level
    /// component tags are already resolved during deserialization.
    pub fn validate(&self) -> SchemaResult<()> {
        for (name, resource) in &self.resources {
            if !resource.fields.is_empty() && !resource.fields.contains_key(&resource.repr) {
                return Err(SchemaError::UnknownField {
                    resource: name.clone(),
                    field: resource.repr.clone(),
                });
            }
            for field in &resource.display {
                if !resource.fields.contains_key(field) {
                    return Err(SchemaError::UnknownField {
                        resource: name.clone(),
                        field: field.clone(),
                    });
                }
            }
            for assignments in resource.bulk_update.values() {
                for field in assignments.keys() {
                    if !resource.inputs.contains_key(field) {
                        return Err(SchemaError::UnknownField {
                            resource: name.clone(),
                            field: field.clone(),
                        });
                    }
                }
            }
            for descriptor in resource.fields.values() {
                validate_children(descriptor)?;
            }
        }
        Ok(())
    }

    /// Look up a resource by name.
    pub fn resource(&self, name: &str) -> SchemaResult<&ResourceDescriptor> {
        self.resources
            .get(name)
            .ok_or_else(|| SchemaError::UnknownResource(name.to_string()))
    }
}

fn validate_children(descriptor: &FieldDescriptor) -> SchemaResult<()> {
    if let Some(children) = descriptor.child_fields()? {
        for child in children.values() {
            validate_children(child)?;
        }
    }
    Ok(())
}
