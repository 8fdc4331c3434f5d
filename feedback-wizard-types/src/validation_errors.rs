use std::collections::HashMap;

use crate::FieldName;

/// Error messages for fields that failed validation.
///
/// A field with no entry is valid (or has not been validated yet).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: HashMap<FieldName, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Record the message for a field, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<FieldName>, message: impl Into<String>) {
        self.errors.insert(name.into(), message.into());
    }

    /// Clear the message for a field.
    pub fn remove(&mut self, name: &FieldName) -> Option<String> {
        self.errors.remove(name)
    }

    /// Set or clear the message for a field.
    pub fn set(&mut self, name: &FieldName, message: Option<&str>) {
        match message {
            Some(message) => self.insert(name, message),
            None => {
                self.remove(name);
            }
        }
    }

    /// Get the message for a field.
    pub fn get(&self, name: &FieldName) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &FieldName) -> bool {
        self.errors.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &str)> {
        self.errors.iter().map(|(name, msg)| (name, msg.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<N: Into<FieldName>, M: Into<String>> FromIterator<(N, M)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (N, M)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (name, message) in iter {
            errors.insert(name, message);
        }
        errors
    }
}
