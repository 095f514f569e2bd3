//! Draft Layer
//!
//! A draft is the flat set of input strings a form edits. It doubles as
//! the create/update payload.

use std::fmt::Debug;

use serde::Serialize;

use crate::validation::FieldError;

/// How a field is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    TextArea,
    /// Single-select with `(value, label)` options
    Select(&'static [(&'static str, &'static str)]),
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<F: 'static> {
    pub field: F,
    /// Input name attribute
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    /// Non-numeric edits are dropped instead of applied
    pub numeric_only: bool,
}

/// Per-field error slots for one draft type
pub trait FieldErrors<F>: Clone + Default + PartialEq + Debug + Send + Sync + 'static {
    fn slot(&self, field: F) -> &Option<FieldError>;

    fn slot_mut(&mut self, field: F) -> &mut Option<FieldError>;

    fn get(&self, field: F) -> Option<&FieldError> {
        self.slot(field).as_ref()
    }

    fn clear(&mut self, field: F) {
        *self.slot_mut(field) = None;
    }
}

/// Editable values of one record shape
pub trait Draft: Clone + Default + PartialEq + Debug + Serialize + Send + Sync + 'static {
    type Field: Copy + Eq + Debug + Send + Sync + 'static;
    type Errors: FieldErrors<Self::Field>;

    /// Fields in display and validation order
    fn fields() -> &'static [FieldSpec<Self::Field>];

    fn value(&self, field: Self::Field) -> &str;

    fn value_mut(&mut self, field: Self::Field) -> &mut String;

    /// Run every validator; no short-circuit
    fn validate(&self) -> Self::Errors;

    fn spec(field: Self::Field) -> Option<&'static FieldSpec<Self::Field>> {
        Self::fields().iter().find(|spec| spec.field == field)
    }

    fn has_errors(errors: &Self::Errors) -> bool {
        Self::fields().iter().any(|spec| errors.get(spec.field).is_some())
    }
}
