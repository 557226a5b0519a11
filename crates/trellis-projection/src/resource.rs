//! # Resource Assembly
//!
//! Combines per-resource descriptors with projector output to decide which
//! top-level screens (list, show, edit, create) and which bulk actions a
//! resource exposes for the session. Screen-level gates run at the resource
//! scope with no record; row-level controls re-check per record.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use trellis_permissions::{Action, PermissionPath, PermissionSet, Record};
use trellis_schema::{AdminState, ResourceDescriptor, SchemaResult};

use crate::fields::{project_fields, FieldCell};
use crate::inputs::{project_inputs, InputControl};

/// A bulk-update action the session is allowed to offer.
#[derive(Debug, Clone)]
pub struct BulkUpdate {
    /// Button label.
    pub label: String,
    /// Field/value assignments applied to the selected records.
    pub data: IndexMap<String, Value>,
}

/// The list screen of a resource.
#[derive(Debug, Clone)]
pub struct ListView {
    /// Row cells, permission-filtered.
    pub fields: Vec<FieldCell>,
    /// Filter inputs shown above the list (projected with view permission).
    pub filters: Vec<InputControl>,
    /// Fields hidden from the default column set.
    pub list_omit: Vec<String>,
    /// Whether the create button is shown.
    pub can_create: bool,
    /// Whether bulk delete is offered for selected rows.
    pub can_bulk_delete: bool,
    /// Bulk-update actions the session may apply.
    pub bulk_updates: Vec<BulkUpdate>,
    edit_path: PermissionPath,
    delete_path: PermissionPath,
}

impl ListView {
    /// Whether the edit button renders on a concrete row.
    pub fn row_can_edit(&self, permissions: &PermissionSet, record: &Record) -> bool {
        permissions.allows(&self.edit_path, Some(record))
    }

    /// Whether a concrete row may be deleted.
    pub fn row_can_delete(&self, permissions: &PermissionSet, record: &Record) -> bool {
        permissions.allows(&self.delete_path, Some(record))
    }
}

/// The show screen of a resource.
#[derive(Debug, Clone)]
pub struct ShowView {
    /// Layout cells, permission-filtered.
    pub fields: Vec<FieldCell>,
}

/// The edit screen of a resource.
#[derive(Debug, Clone)]
pub struct EditView {
    /// Form controls, permission-filtered.
    pub inputs: Vec<InputControl>,
}

/// The create screen of a resource.
#[derive(Debug, Clone)]
pub struct CreateView {
    /// Form controls, restricted to create-visible inputs.
    pub inputs: Vec<InputControl>,
}

/// A resource with only the screens the session may open.
#[derive(Debug, Clone)]
pub struct ResourceView {
    /// Resource name.
    pub name: String,
    /// Menu label.
    pub label: String,
    /// Field used to represent records.
    pub repr: String,
    /// Optional custom icon path.
    pub icon: Option<String>,
    /// List screen, when `resource.view` is granted.
    pub list: Option<ListView>,
    /// Show screen, when `resource.view` is granted.
    pub show: Option<ShowView>,
    /// Edit screen, when `resource.edit` is granted.
    pub edit: Option<EditView>,
    /// Create screen, when `resource.add` is granted.
    pub create: Option<CreateView>,
}

impl ResourceView {
    /// Assemble the screens of one resource for a session.
    pub fn assemble(
        resource: &ResourceDescriptor,
        name: &str,
        permissions: &PermissionSet,
    ) -> SchemaResult<Self> {
        let can_view =
            permissions.allows(&PermissionPath::resource_action(name, Action::View), None);
        let can_edit =
            permissions.allows(&PermissionPath::resource_action(name, Action::Edit), None);
        let can_add =
            permissions.allows(&PermissionPath::resource_action(name, Action::Add), None);

        let list = if can_view {
            Some(assemble_list(resource, name, permissions, can_add, can_edit)?)
        } else {
            None
        };
        let show = if can_view {
            Some(ShowView {
                fields: project_fields(resource, name, permissions)?,
            })
        } else {
            None
        };
        let edit = if can_edit {
            Some(EditView {
                inputs: project_inputs(resource, name, &Action::Edit, permissions)?,
            })
        } else {
            None
        };
        let create = if can_add {
            Some(CreateView {
                inputs: project_inputs(resource, name, &Action::Add, permissions)?,
            })
        } else {
            None
        };

        debug!(
            resource = name,
            list = list.is_some(),
            edit = edit.is_some(),
            create = create.is_some(),
            "assembled resource"
        );
        Ok(Self {
            name: name.to_string(),
            label: resource.label_or(name).to_string(),
            repr: resource.repr.clone(),
            icon: resource.icon.clone(),
            list,
            show,
            edit,
            create,
        })
    }
}

fn assemble_list(
    resource: &ResourceDescriptor,
    name: &str,
    permissions: &PermissionSet,
    can_add: bool,
    can_edit: bool,
) -> SchemaResult<ListView> {
    // Bulk updates require resource edit plus edit on every touched field.
    let bulk_updates = if can_edit {
        allowed_bulk_updates(resource, name, permissions)
    } else {
        Vec::new()
    };

    Ok(ListView {
        fields: project_fields(resource, name, permissions)?,
        filters: project_inputs(resource, name, &Action::View, permissions)?,
        list_omit: resource.list_omit().iter().map(|s| s.to_string()).collect(),
        can_create: can_add,
        can_bulk_delete: permissions
            .allows(&PermissionPath::resource_action(name, Action::Delete), None),
        bulk_updates,
        edit_path: PermissionPath::resource_action(name, Action::Edit),
        delete_path: PermissionPath::resource_action(name, Action::Delete),
    })
}

fn allowed_bulk_updates(
    resource: &ResourceDescriptor,
    name: &str,
    permissions: &PermissionSet,
) -> Vec<BulkUpdate> {
    let mut actions = Vec::new();
    for (label, data) in &resource.bulk_update {
        let allowed = data.keys().all(|field| {
            permissions.allows(&PermissionPath::field_action(name, field, Action::Edit), None)
        });
        if allowed {
            actions.push(BulkUpdate {
                label: label.clone(),
                data: data.clone(),
            });
        }
    }
    actions
}

/// The whole admin surface a session may see.
#[derive(Debug, Clone)]
pub struct AdminView {
    /// Dashboard title.
    pub title: String,
    /// Resources in menu order. Resources the session cannot interact with
    /// at all still appear, with every screen `None`, mirroring the static
    /// state; callers typically hide them.
    pub resources: Vec<ResourceView>,
}

impl AdminView {
    /// Assemble every resource in the state for a session.
    pub fn assemble(state: &AdminState, permissions: &PermissionSet) -> SchemaResult<Self> {
        let mut resources = Vec::with_capacity(state.resources.len());
        for (name, resource) in &state.resources {
            resources.push(ResourceView::assemble(resource, name, permissions)?);
        }
        Ok(Self {
            title: state.view.name.clone(),
            resources,
        })
    }
}
