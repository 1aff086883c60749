//! Error map displayed by the wizard

use crate::quote::Field;
use crate::validation::FieldErrors;
use std::collections::BTreeMap;
use std::fmt;

/// Key of an entry in [`WizardErrors`]
///
/// Field keys sort before the reserved submission key, and field keys sort
/// in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKey {
    Field(Field),
    Submit,
}

impl ErrorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKey::Field(field) => field.as_str(),
            ErrorKey::Submit => "submit",
        }
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Messages currently shown: at most one per field plus the submission banner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardErrors {
    entries: BTreeMap<ErrorKey, String>,
}

impl WizardErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.entries.get(&ErrorKey::Field(field)).map(String::as_str)
    }

    /// The submission-error banner, if shown
    pub fn submit(&self) -> Option<&str> {
        self.entries.get(&ErrorKey::Submit).map(String::as_str)
    }

    pub fn contains(&self, key: ErrorKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// First failing field in form order
    pub fn first_field(&self) -> Option<Field> {
        self.entries.keys().find_map(|key| match key {
            ErrorKey::Field(field) => Some(*field),
            ErrorKey::Submit => None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub(crate) fn replace_with(&mut self, errors: FieldErrors) {
        self.entries = errors
            .into_iter()
            .map(|(field, message)| (ErrorKey::Field(field), message))
            .collect();
    }

    pub(crate) fn remove(&mut self, key: ErrorKey) -> Option<String> {
        self.entries.remove(&key)
    }

    pub(crate) fn set_submit(&mut self, message: String) {
        self.entries.insert(ErrorKey::Submit, message);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
