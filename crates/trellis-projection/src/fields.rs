//! # Field Projection
//!
//! Walks a resource's field descriptors and produces the permission-filtered
//! cells a list row or show layout should render. Fields failing the static
//! view check are dropped outright; surviving cells carry a record-level
//! gate that decides, row by row, whether the value or a hidden placeholder
//! renders.

use indexmap::IndexMap;
use tracing::trace;

use trellis_permissions::{Action, PermissionPath, PermissionSet, Record};
use trellis_schema::{
    FieldComponent, FieldDescriptor, Props, ResourceDescriptor, SchemaResult, CHILDREN_PROP,
};

/// Outcome of a record-level visibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisibility {
    /// Render the field's value.
    Visible,
    /// Render a hidden-field indicator instead of the value.
    Hidden,
}

/// A renderable field cell that survived the static permission pass.
#[derive(Debug, Clone)]
pub struct FieldCell {
    /// Field name in the record.
    pub source: String,
    /// Display component.
    pub component: FieldComponent,
    /// Component properties (without the nested children).
    pub props: Props,
    /// Display label.
    pub label: String,
    /// Projected nested cells, for reference-many datagrids.
    pub children: Vec<FieldCell>,
    path: PermissionPath,
}

impl FieldCell {
    /// Record-level visibility: re-checks the field's view permission with
    /// the concrete record, so grants narrowed by value filters hide the
    /// cell for records outside the allowed sets.
    pub fn resolve(&self, permissions: &PermissionSet, record: &Record) -> FieldVisibility {
        if permissions.allows(&self.path, Some(record)) {
            FieldVisibility::Visible
        } else {
            FieldVisibility::Hidden
        }
    }
}

/// Project a resource's fields for display.
///
/// Any field whose `resource.field.view` permission fails without a record
/// is skipped entirely (not even a placeholder): that decision is static
/// and happens before any record exists. Nested children project
/// recursively under the same resource scope.
pub fn project_fields(
    resource: &ResourceDescriptor,
    name: &str,
    permissions: &PermissionSet,
) -> SchemaResult<Vec<FieldCell>> {
    project_field_map(&resource.fields, name, permissions)
}

fn project_field_map(
    fields: &IndexMap<String, FieldDescriptor>,
    name: &str,
    permissions: &PermissionSet,
) -> SchemaResult<Vec<FieldCell>> {
    let mut cells = Vec::new();
    for (field, descriptor) in fields {
        let path = PermissionPath::field_action(name, field, Action::View);
        if !permissions.allows(&path, None) {
            trace!(resource = name, field, "field statically hidden");
            continue;
        }

        let children = match descriptor.child_fields()? {
            Some(child_fields) => project_field_map(&child_fields, name, permissions)?,
            None => Vec::new(),
        };
        let mut props = descriptor.props.clone();
        props.shift_remove(CHILDREN_PROP);

        cells.push(FieldCell {
            source: field.clone(),
            component: descriptor.component,
            label: descriptor.label(field),
            props,
            children,
            path,
        });
    }
    Ok(cells)
}
