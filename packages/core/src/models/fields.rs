//! Editable Field Metadata
//!
//! Every component property record exposes a fixed, ordered list of editable
//! fields. The list drives the property panel (which widget to render) and the
//! property editor (which keys are accepted).
//!
//! Records are declared with [`props_struct!`], which generates the struct,
//! its schema defaults, serde wiring and the [`EditableProps`] impl from one
//! field table so the three can never drift apart. Loading a stored record is
//! tolerant (bad fields fall back to defaults); [`EditableProps::set_field`]
//! is strict.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Widget hint for an editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "options", rename_all = "camelCase")]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Multi-line text
    LongText,
    /// CSS colour value
    Color,
    /// Link or media URL
    Url,
    /// Numeric input
    Number,
    /// Boolean switch
    Toggle,
    /// One of a fixed set of string values
    Select(&'static [&'static str]),
    /// Ordered list of strings
    StringList,
    /// Ordered list of structured records (plans, slides, rows, ...)
    Items,
}

/// Description of one editable field of a component type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Key as it appears in the persisted `props.<type>` object
    pub key: &'static str,
    /// Human readable label for the property panel
    pub label: &'static str,
    /// Widget hint
    pub kind: FieldKind,
}

/// Errors raised while reading or writing a single property
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    #[error("Unknown property field: {key}")]
    UnknownField { key: String },

    #[error("Invalid value for field '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Property path targets '{found}' but node is '{expected}'")]
    KindMismatch { expected: String, found: String },

    #[error("Invalid property path: {0}")]
    InvalidPath(String),
}

impl PropertyError {
    /// Create an unknown field error
    pub fn unknown_field(key: impl Into<String>) -> Self {
        Self::UnknownField { key: key.into() }
    }

    /// Create an invalid value error from a deserialization failure
    pub fn invalid_value(key: impl Into<String>, err: serde_json::Error) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: err.to_string(),
        }
    }
}

/// Typed access to a property record by field key
pub trait EditableProps {
    /// Editable fields in panel order
    const FIELDS: &'static [FieldSpec];

    /// Read a field as JSON, `None` for unknown keys
    fn get_field(&self, key: &str) -> Option<Value>;

    /// Assign a field from JSON; the value must deserialize into the field's type
    fn set_field(&mut self, key: &str, value: Value) -> Result<(), PropertyError>;
}

/// Declare a component property record.
///
/// Each field line is `name: Type = default => "key", FieldKind, "Label"`.
/// Container records end with `; children` to carry the ordered child list,
/// which is structural and therefore not part of the editable field table.
macro_rules! props_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $field:ident : $ty:ty = $default:expr => $key:literal, $kind:expr, $label:literal
            ),* $(,)?
            $( ; $children:ident )?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        pub struct $name {
            $(
                #[serde(rename = $key)]
                pub $field: $ty,
            )*
            $(
                pub $children: Vec<$crate::models::ComponentNode>,
            )?
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                    $( $children: Vec::new(), )?
                }
            }
        }

        /// Stored records load field by field: a missing field or one of the
        /// wrong type takes its schema default. Only a malformed child list
        /// fails the record.
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                use ::serde::de::{Deserialize as _, Error as _};

                let mut map = match ::serde_json::Value::deserialize(deserializer)? {
                    ::serde_json::Value::Object(map) => map,
                    ::serde_json::Value::Null => ::serde_json::Map::new(),
                    other => {
                        return Err(D::Error::custom(format!(
                            "{} must be an object, got {}",
                            stringify!($name),
                            other
                        )))
                    }
                };

                let mut record = Self::default();
                $(
                    if let Some(raw) = map.remove($key) {
                        match ::serde_json::from_value(raw) {
                            Ok(value) => record.$field = value,
                            Err(e) => ::tracing::warn!(
                                "Stored {}.{} is invalid ({}), using default",
                                stringify!($name),
                                $key,
                                e
                            ),
                        }
                    }
                )*
                $(
                    if let Some(raw) = map.remove(stringify!($children)) {
                        record.$children = ::serde_json::from_value(raw).map_err(D::Error::custom)?;
                    }
                )?
                Ok(record)
            }
        }

        impl $crate::models::fields::EditableProps for $name {
            const FIELDS: &'static [$crate::models::fields::FieldSpec] = &[
                $(
                    $crate::models::fields::FieldSpec {
                        key: $key,
                        label: $label,
                        kind: $kind,
                    },
                )*
            ];

            fn get_field(&self, key: &str) -> Option<::serde_json::Value> {
                match key {
                    $( $key => ::serde_json::to_value(&self.$field).ok(), )*
                    _ => None,
                }
            }

            fn set_field(
                &mut self,
                key: &str,
                value: ::serde_json::Value,
            ) -> Result<(), $crate::models::fields::PropertyError> {
                match key {
                    $(
                        $key => {
                            self.$field = ::serde_json::from_value(value).map_err(|e| {
                                $crate::models::fields::PropertyError::invalid_value(key, e)
                            })?;
                            Ok(())
                        }
                    )*
                    _ => Err($crate::models::fields::PropertyError::unknown_field(key)),
                }
            }
        }
    };
}

pub(crate) use props_struct;
