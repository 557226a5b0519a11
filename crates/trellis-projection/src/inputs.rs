//! # Input Projection
//!
//! Walks a resource's input descriptors and produces the permission-filtered
//! controls a form (create, edit, or list filters) should render. Grant
//! filters on the resource-level permission turn the affected inputs into
//! constrained choice lists; a single permitted value pins and disables the
//! control.

use serde_json::Value;
use tracing::trace;

use trellis_permissions::{Action, PermissionPath, PermissionSet, Record};
use trellis_schema::{InputComponent, Props, ResourceDescriptor, SchemaResult, ValidatorSpec};

/// A renderable form control that survived the static permission pass.
#[derive(Debug, Clone)]
pub enum InputControl {
    /// The descriptor's own component, rendered as declared.
    Standard(StandardInput),
    /// A choice list constrained to the values a grant filter permits.
    Constrained(ConstrainedInput),
}

impl InputControl {
    /// Field name this control edits.
    pub fn source(&self) -> &str {
        match self {
            InputControl::Standard(input) => &input.source,
            InputControl::Constrained(input) => &input.source,
        }
    }
}

/// An unconstrained input control.
#[derive(Debug, Clone)]
pub struct StandardInput {
    /// Field name in the record.
    pub source: String,
    /// Input component.
    pub component: InputComponent,
    /// Component properties.
    pub props: Props,
    /// Validators declared on the descriptor.
    pub validators: Vec<ValidatorSpec>,
    gate: Option<PermissionPath>,
}

impl StandardInput {
    /// Record-level check for edit forms: whether this input renders for
    /// the record being edited. Controls without a gate (view filters,
    /// create forms) always render once statically allowed.
    ///
    /// Unlike fields, a denied input is omitted, not replaced by a
    /// placeholder: a form must not show a control it will not submit.
    pub fn resolve(&self, permissions: &PermissionSet, record: &Record) -> bool {
        match &self.gate {
            Some(path) => permissions.allows(path, Some(record)),
            None => true,
        }
    }
}

/// An input constrained by grant value filters.
///
/// Rendered as a choice list over the permitted values. When only one value
/// remains the control is disabled with that value pre-filled; when null
/// was among the permitted values the field stays optional and nothing is
/// pre-filled.
#[derive(Debug, Clone)]
pub struct ConstrainedInput {
    /// Field name in the record.
    pub source: String,
    /// Permitted values, null sentinel removed.
    pub choices: Vec<Value>,
    /// Whether the control is rendered disabled.
    pub disabled: bool,
    /// Pre-filled value, when one is forced.
    pub default_value: Option<Value>,
    /// Whether a value is required.
    pub required: bool,
}

impl ConstrainedInput {
    /// Build the control from a filter's allowed values.
    ///
    /// Order matters and is observable: `disabled` comes from the original
    /// list length, before a null sentinel is removed; the default and the
    /// required flag then apply only if no null was present.
    fn from_allowed_values(source: &str, fvalues: &[Value]) -> Self {
        let mut fvalues = fvalues.to_vec();
        let disabled = fvalues.len() <= 1;
        let nullable = fvalues.iter().position(Value::is_null);
        if let Some(i) = nullable {
            fvalues.remove(i);
        }
        let (default_value, required) = if nullable.is_none() {
            (fvalues.first().cloned(), true)
        } else {
            (None, false)
        };
        Self {
            source: source.to_string(),
            choices: fvalues,
            disabled,
            default_value,
            required,
        }
    }
}

/// Project a resource's inputs for a form.
///
/// `action` is the form's permission type: [`Action::Add`] for create
/// forms, [`Action::Edit`] for edit forms, [`Action::View`] for list
/// filters. Inputs failing the static `resource.field.action` check are
/// skipped; create forms additionally skip inputs not flagged
/// `show_create`. Inputs named by the resource-level grant filters become
/// [`ConstrainedInput`]s; the rest render as declared, with edit-form
/// controls carrying a per-record gate.
pub fn project_inputs(
    resource: &ResourceDescriptor,
    name: &str,
    action: &Action,
    permissions: &PermissionSet,
) -> SchemaResult<Vec<InputControl>> {
    let restricted = permissions.filters(name, action);

    let mut controls = Vec::new();
    for (field, descriptor) in &resource.inputs {
        if *action == Action::Add && !descriptor.show_create {
            continue;
        }
        let path = PermissionPath::field_action(name, field, action.clone());
        if !permissions.allows(&path, None) {
            trace!(resource = name, field, %action, "input statically hidden");
            continue;
        }

        if let Some(fvalues) = restricted.get(field) {
            controls.push(InputControl::Constrained(
                ConstrainedInput::from_allowed_values(field, fvalues),
            ));
        } else {
            let gate = (*action == Action::Edit).then_some(path);
            controls.push(InputControl::Standard(StandardInput {
                source: field.clone(),
                component: descriptor.component,
                props: descriptor.props.clone(),
                validators: descriptor.validators.clone(),
                gate,
            }));
        }
    }
    Ok(controls)
}
