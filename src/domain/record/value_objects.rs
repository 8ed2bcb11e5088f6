use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_identifier(value: &str, allow_leading_underscore: bool) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let first_ok = first.is_ascii_lowercase() || (allow_leading_underscore && first == '_');
    first_ok && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Name of the collection a record belongs to. Slug uniqueness is scoped to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionName(String);

impl CollectionName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_identifier(&value, false) {
            return Err(DomainError::Validation(format!(
                "invalid collection name: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CollectionName> for String {
    fn from(value: CollectionName) -> Self {
        value.0
    }
}

/// Attribute name on a record, e.g. `name` or `slug`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_identifier(&value, true) {
            return Err(DomainError::Validation(format!(
                "invalid field name: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FieldName> for String {
    fn from(value: FieldName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_rejects_non_positive() {
        assert!(RecordId::new(0).is_err());
        assert!(RecordId::new(-3).is_err());
        assert_eq!(i64::from(RecordId::new(7).unwrap()), 7);
    }

    #[test]
    fn field_name_accepts_snake_case() {
        assert!(FieldName::new("slug").is_ok());
        assert!(FieldName::new("display_name2").is_ok());
        assert!(FieldName::new("_internal").is_ok());
    }

    #[test]
    fn field_name_rejects_garbage() {
        for bad in ["", "Name", "two words", "a-b", "9lives", "x\"y"] {
            assert!(FieldName::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn collection_name_requires_leading_letter() {
        assert!(CollectionName::new("organizations").is_ok());
        assert!(CollectionName::new("_hidden").is_err());
        assert!(CollectionName::new("").is_err());
    }
}
