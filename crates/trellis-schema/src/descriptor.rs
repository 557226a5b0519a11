//! # Descriptors
//!
//! Per-resource descriptions of fields (display) and inputs (forms), plus
//! resource-level configuration: display representation, icon, bulk-update
//! actions, and default list columns. All of it is server-supplied data;
//! nothing here is mutated client-side.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::components::{FieldComponent, InputComponent};
use crate::error::{SchemaError, SchemaResult};

/// Arbitrary component properties, in declaration order.
pub type Props = IndexMap<String, Value>;

/// Key under which a field descriptor's props carry nested child fields
/// (reference-many datagrids).
pub const CHILDREN_PROP: &str = "children";

/// A displayable field of a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Display component for this field.
    #[serde(rename = "type")]
    pub component: FieldComponent,

    /// Component properties (label, reference target, formatting, ...).
    #[serde(default)]
    pub props: Props,
}

impl FieldDescriptor {
    /// Nested child field descriptors, for reference-many datagrids.
    ///
    /// Children live inside `props` on the wire; they are parsed (and their
    /// component tags resolved) on demand. State validation runs this over
    /// the whole tree, so render-time calls cannot hit a new parse failure.
    pub fn child_fields(&self) -> SchemaResult<Option<IndexMap<String, FieldDescriptor>>> {
        match self.props.get(CHILDREN_PROP) {
            None => Ok(None),
            Some(children) => {
                let fields = serde_json::from_value(children.clone())?;
                Ok(Some(fields))
            }
        }
    }

    /// Display label: the `label` prop when present, else the field name.
    pub fn label(&self, field: &str) -> String {
        self.props
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or(field)
            .to_string()
    }
}

/// A form input for a resource field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDescriptor {
    /// Input component for this field.
    #[serde(rename = "type")]
    pub component: InputComponent,

    /// Component properties.
    #[serde(default)]
    pub props: Props,

    /// Whether this input appears on the create form.
    #[serde(default)]
    pub show_create: bool,

    /// Validators to attach to the input.
    #[serde(default)]
    pub validators: Vec<ValidatorSpec>,
}

/// A validator invocation: a validator name plus its arguments.
///
/// On the wire this is a sequence whose first element is the name, e.g.
/// `["minValue", 5]`.
///
/// # Example
///
/// ```
/// use trellis_schema::ValidatorSpec;
///
/// let v: ValidatorSpec = serde_json::from_str(r#"["minValue", 5]"#).unwrap();
/// assert_eq!(v.name, "minValue");
/// assert_eq!(v.args, vec![serde_json::json!(5)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub struct ValidatorSpec {
    /// Validator function name (e.g. `required`, `minValue`).
    pub name: String,
    /// Arguments for the validator.
    pub args: Vec<Value>,
}

impl ValidatorSpec {
    /// A validator with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

impl TryFrom<Vec<Value>> for ValidatorSpec {
    type Error = SchemaError;

    fn try_from(mut seq: Vec<Value>) -> Result<Self, Self::Error> {
        if seq.is_empty() {
            return Err(SchemaError::InvalidValidator("empty sequence".to_string()));
        }
        let name = match seq.remove(0) {
            Value::String(name) => name,
            other => {
                return Err(SchemaError::InvalidValidator(format!(
                    "name must be a string, got {other}"
                )))
            }
        };
        Ok(Self { name, args: seq })
    }
}

impl From<ValidatorSpec> for Vec<Value> {
    fn from(v: ValidatorSpec) -> Self {
        let mut seq = Vec::with_capacity(v.args.len() + 1);
        seq.push(Value::String(v.name));
        seq.extend(v.args);
        seq
    }
}

/// An HTTP endpoint the surrounding data layer should call for a CRUD verb.
///
/// Carried opaquely as `(method, url)`; this crate never performs requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint(pub String, pub String);

impl Endpoint {
    /// HTTP method.
    pub fn method(&self) -> &str {
        &self.0
    }

    /// Endpoint URL.
    pub fn url(&self) -> &str {
        &self.1
    }
}

/// A backend-defined admin resource.
///
/// Field and input maps preserve server declaration order; that order is
/// the render order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Displayable fields, in render order.
    #[serde(default)]
    pub fields: IndexMap<String, FieldDescriptor>,

    /// Form inputs, in render order.
    #[serde(default)]
    pub inputs: IndexMap<String, InputDescriptor>,

    /// Field used to represent a record (e.g. in reference links).
    pub repr: String,

    /// Display label in the admin menu.
    #[serde(default)]
    pub label: Option<String>,

    /// URL path to a custom icon.
    #[serde(default)]
    pub icon: Option<String>,

    /// Fields shown by default in the list view.
    #[serde(default)]
    pub display: Vec<String>,

    /// Bulk-update actions: button label -> field/value assignments.
    #[serde(default)]
    pub bulk_update: IndexMap<String, IndexMap<String, Value>>,

    /// CRUD endpoints for the data layer, keyed by verb name.
    #[serde(default)]
    pub urls: IndexMap<String, Endpoint>,
}

impl ResourceDescriptor {
    /// Fields omitted from the default list view: the complement of
    /// [`ResourceDescriptor::display`] within the field map. Empty `display`
    /// means no defaults were configured, so nothing is omitted.
    pub fn list_omit(&self) -> Vec<&str> {
        if self.display.is_empty() {
            return Vec::new();
        }
        self.fields
            .keys()
            .filter(|f| !self.display.iter().any(|d| d == *f))
            .map(String::as_str)
            .collect()
    }

    /// Menu label: explicit `label` when set, else the resource name.
    pub fn label_or<'a>(&'a self, name: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(name)
    }
}
