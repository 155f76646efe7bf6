use std::collections::BTreeMap;

use super::draft::ProfileField;

/// Per-field validation messages, keyed by field.
///
/// Fields never share an entry; clearing or setting one leaves the others
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<ProfileField, String>,
}

impl FieldErrors {
    /// Set the message for `field`, replacing any earlier one
    pub fn insert(&mut self, field: ProfileField, error: impl ToString) {
        self.errors.insert(field, error.to_string());
    }

    /// Drop every message
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Message for `field`
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// True when no field has a message
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with a message
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages in field order
    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.name(), message)?;
            first = false;
        }
        Ok(())
    }
}
