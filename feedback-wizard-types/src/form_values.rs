use std::collections::HashMap;

use serde::Serialize;

use crate::{FieldName, FieldValue, FormError};

/// Current values of a form, keyed by field name.
///
/// A field with no entry is treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormValues {
    values: HashMap<FieldName, FieldValue>,
}

impl FormValues {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert a value for the given field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<FieldName>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get the value of the given field.
    pub fn get(&self, name: &FieldName) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Check if a value exists for the given field.
    pub fn contains(&self, name: &FieldName) -> bool {
        self.values.contains_key(name)
    }

    /// Get an iterator over all name-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &FieldValue)> {
        self.values.iter()
    }

    /// Get the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a text value.
    pub fn get_text(&self, name: &FieldName) -> Result<&str, FormError> {
        match self.get(name) {
            Some(FieldValue::Text(s)) => Ok(s),
            Some(other) => Err(mismatch(name, "Text", other)),
            None => Err(FormError::UnknownField(name.clone())),
        }
    }

    /// Get an integer value.
    pub fn get_int(&self, name: &FieldName) -> Result<i64, FormError> {
        match self.get(name) {
            Some(FieldValue::Int(i)) => Ok(*i),
            Some(other) => Err(mismatch(name, "Int", other)),
            None => Err(FormError::UnknownField(name.clone())),
        }
    }

    /// Get a float value.
    pub fn get_float(&self, name: &FieldName) -> Result<f64, FormError> {
        match self.get(name) {
            Some(FieldValue::Float(f)) => Ok(*f),
            Some(other) => Err(mismatch(name, "Float", other)),
            None => Err(FormError::UnknownField(name.clone())),
        }
    }

    /// Get a boolean value.
    pub fn get_bool(&self, name: &FieldName) -> Result<bool, FormError> {
        match self.get(name) {
            Some(FieldValue::Bool(b)) => Ok(*b),
            Some(other) => Err(mismatch(name, "Bool", other)),
            None => Err(FormError::UnknownField(name.clone())),
        }
    }

    /// Get the chosen option of a toggle group.
    pub fn get_choice(&self, name: &FieldName) -> Result<&str, FormError> {
        match self.get(name) {
            Some(FieldValue::Choice(c)) => Ok(c),
            Some(other) => Err(mismatch(name, "Choice", other)),
            None => Err(FormError::UnknownField(name.clone())),
        }
    }

    /// Get the chosen options of a multi-select.
    pub fn get_selection(
        &self,
        name: &FieldName,
    ) -> Result<&std::collections::BTreeSet<String>, FormError> {
        match self.get(name) {
            Some(FieldValue::Selection(set)) => Ok(set),
            Some(other) => Err(mismatch(name, "Selection", other)),
            None => Err(FormError::UnknownField(name.clone())),
        }
    }
}

fn mismatch(name: &FieldName, expected: &'static str, actual: &FieldValue) -> FormError {
    FormError::TypeMismatch {
        field: name.clone(),
        expected,
        actual: actual.type_name(),
    }
}

impl<N: Into<FieldName>, V: Into<FieldValue>> FromIterator<(N, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a FieldName, &'a FieldValue);
    type IntoIter = std::collections::hash_map::Iter<'a, FieldName, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut values = FormValues::new();
        values.insert("productName", "Widget");
        values.insert("satisfaction", 50);

        assert_eq!(
            values.get_text(&FieldName::new("productName")).unwrap(),
            "Widget"
        );
        assert_eq!(values.get_int(&FieldName::new("satisfaction")).unwrap(), 50);
    }

    #[test]
    fn insert_overwrites() {
        let mut values = FormValues::new();
        values.insert("rating", 2.5);
        values.insert("rating", 4.5);
        assert_eq!(values.len(), 1);
        assert_eq!(values.get_float(&FieldName::new("rating")).unwrap(), 4.5);
    }

    #[test]
    fn type_mismatch_error() {
        let mut values = FormValues::new();
        values.insert("subscribe", true);

        let result = values.get_text(&FieldName::new("subscribe"));
        assert!(matches!(
            result,
            Err(FormError::TypeMismatch {
                expected: "Text",
                actual: "Bool",
                ..
            })
        ));
    }

    #[test]
    fn missing_field_error() {
        let values = FormValues::new();
        assert!(matches!(
            values.get_bool(&FieldName::new("promoOptIn")),
            Err(FormError::UnknownField(_))
        ));
    }
}
