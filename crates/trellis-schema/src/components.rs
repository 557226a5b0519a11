//! # Components
//!
//! The closed registry of UI component types a descriptor may name. The
//! server sends component tags as strings (`"TextField"`, `"DateInput"`);
//! resolving them through these sum types at state load replaces an open
//! string -> constructor map, so a mistyped or unsupported tag fails
//! immediately instead of rendering nothing.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Display component types, used in list rows and show layouts.
///
/// # Example
///
/// ```
/// use trellis_schema::FieldComponent;
///
/// assert_eq!(FieldComponent::parse("TextField"), Some(FieldComponent::Text));
/// assert_eq!(FieldComponent::Text.as_str(), "TextField");
/// assert_eq!(FieldComponent::parse("SparkleField"), None);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum FieldComponent {
    /// Boolean flag display.
    Boolean,
    /// Date/timestamp display.
    Date,
    /// Numeric display.
    Number,
    /// Link to a single referenced record in another resource.
    Reference,
    /// Embedded table of records referencing this one.
    ReferenceMany,
    /// Plain text display.
    Text,
}

impl FieldComponent {
    /// The wire tag for this component.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldComponent::Boolean => "BooleanField",
            FieldComponent::Date => "DateField",
            FieldComponent::Number => "NumberField",
            FieldComponent::Reference => "ReferenceField",
            FieldComponent::ReferenceMany => "ReferenceManyField",
            FieldComponent::Text => "TextField",
        }
    }

    /// Resolve a wire tag, `None` if unregistered.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "BooleanField" => Some(FieldComponent::Boolean),
            "DateField" => Some(FieldComponent::Date),
            "NumberField" => Some(FieldComponent::Number),
            "ReferenceField" => Some(FieldComponent::Reference),
            "ReferenceManyField" => Some(FieldComponent::ReferenceMany),
            "TextField" => Some(FieldComponent::Text),
            _ => None,
        }
    }
}

impl TryFrom<String> for FieldComponent {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or(SchemaError::UnknownComponent(s))
    }
}

impl From<FieldComponent> for String {
    fn from(c: FieldComponent) -> Self {
        c.as_str().to_string()
    }
}

/// Input component types, used in create/edit forms and list filters.
///
/// `Select` additionally backs value-restricted inputs: when a permission
/// grant constrains a field to specific values, the projector substitutes a
/// select control regardless of the declared component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum InputComponent {
    /// Boolean toggle.
    Boolean,
    /// Date picker.
    Date,
    /// Numeric input.
    Number,
    /// Autocomplete over a referenced resource.
    Reference,
    /// Choice list.
    Select,
    /// Plain text input.
    Text,
}

impl InputComponent {
    /// The wire tag for this component.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputComponent::Boolean => "BooleanInput",
            InputComponent::Date => "DateInput",
            InputComponent::Number => "NumberInput",
            InputComponent::Reference => "ReferenceInput",
            InputComponent::Select => "SelectInput",
            InputComponent::Text => "TextInput",
        }
    }

    /// Resolve a wire tag, `None` if unregistered.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "BooleanInput" => Some(InputComponent::Boolean),
            "DateInput" => Some(InputComponent::Date),
            "NumberInput" => Some(InputComponent::Number),
            "ReferenceInput" => Some(InputComponent::Reference),
            "SelectInput" => Some(InputComponent::Select),
            "TextInput" => Some(InputComponent::Text),
            _ => None,
        }
    }
}

impl TryFrom<String> for InputComponent {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or(SchemaError::UnknownComponent(s))
    }
}

impl From<InputComponent> for String {
    fn from(c: InputComponent) -> Self {
        c.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_component_round_trip() {
        for tag in [
            "BooleanField",
            "DateField",
            "NumberField",
            "ReferenceField",
            "ReferenceManyField",
            "TextField",
        ] {
            let c = FieldComponent::parse(tag).unwrap();
            assert_eq!(c.as_str(), tag);
        }
    }

    #[test]
    fn test_input_component_round_trip() {
        for tag in [
            "BooleanInput",
            "DateInput",
            "NumberInput",
            "ReferenceInput",
            "SelectInput",
            "TextInput",
        ] {
            let c = InputComponent::parse(tag).unwrap();
            assert_eq!(c.as_str(), tag);
        }
    }

    #[test]
    fn test_unknown_tag_is_none() {
        assert_eq!(FieldComponent::parse("JsonField"), None);
        assert_eq!(InputComponent::parse("JsonInput"), None);
        // Field/input namespaces are distinct.
        assert_eq!(FieldComponent::parse("TextInput"), None);
        assert_eq!(InputComponent::parse("TextField"), None);
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&FieldComponent::ReferenceMany).unwrap();
        assert_eq!(json, "\"ReferenceManyField\"");
        let back: InputComponent = serde_json::from_str("\"SelectInput\"").unwrap();
        assert_eq!(back, InputComponent::Select);
    }

    #[test]
    fn test_serde_unknown_tag_fails_loudly() {
        let err = serde_json::from_str::<FieldComponent>("\"SparkleField\"").unwrap_err();
        assert!(err.to_string().contains("unknown component 'SparkleField'"));
    }
}
