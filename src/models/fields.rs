//! Field alias tables and typed accessors used when validating raw API objects.
//!
//! Open Library names some fields differently from the public model
//! (`author_name` vs `author_names`, `number_of_pages_median` vs
//! `number_of_pages`). Each model keeps an explicit table mapping its public
//! field name to the source key. Lookups try the source key first and fall back
//! to the public name, so both raw API payloads and values serialized from the
//! model itself are accepted.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Pairs of `(public name, source alias)`
pub type AliasTable = &'static [(&'static str, &'static str)];

/// Aliases for [`Book`](crate::models::Book) fields
pub const BOOK_FIELD_ALIASES: AliasTable = &[
    ("author_names", "author_name"),
    ("publishers", "publisher"),
    ("languages", "language"),
    ("number_of_pages", "number_of_pages_median"),
];

/// Aliases for [`SearchResponse`](crate::models::SearchResponse) fields
pub const RESPONSE_FIELD_ALIASES: AliasTable = &[("num_found", "numFound")];

/// Returns the source alias registered for a public field name, if any
pub fn alias_for(table: AliasTable, field: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(public, _)| *public == field)
        .map(|(_, alias)| *alias)
}

/// Read-only view over a JSON object that resolves aliases on lookup
#[derive(Debug)]
pub(crate) struct Fields<'a> {
    object: &'a Map<String, Value>,
    aliases: AliasTable,
}

impl<'a> Fields<'a> {
    /// Wrap `value`, failing if it is not an object. `what` names the model for errors.
    pub(crate) fn new(
        value: &'a Value,
        what: &'static str,
        aliases: AliasTable,
    ) -> Result<Self, ValidationError> {
        let object = value
            .as_object()
            .ok_or(ValidationError::NotAnObject(what))?;
        Ok(Self { object, aliases })
    }

    fn get(&self, field: &'static str) -> Option<&'a Value> {
        alias_for(self.aliases, field)
            .and_then(|alias| self.object.get(alias))
            .or_else(|| self.object.get(field))
    }

    pub(crate) fn required_str(&self, field: &'static str) -> Result<String, ValidationError> {
        match self.get(field) {
            None => Err(ValidationError::MissingField(field)),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(ValidationError::InvalidType {
                field,
                expected: "string",
            }),
        }
    }

    /// A missing list is empty; `null` or a non-string element is a type error.
    pub(crate) fn string_list(&self, field: &'static str) -> Result<Vec<String>, ValidationError> {
        let invalid = || ValidationError::InvalidType {
            field,
            expected: "array of strings",
        };

        match self.get(field) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned).ok_or_else(invalid))
                .collect(),
            Some(_) => Err(invalid()),
        }
    }

    /// A missing or `null` value is `None`.
    pub(crate) fn optional_int<T>(&self, field: &'static str) -> Result<Option<T>, ValidationError>
    where
        T: TryFrom<i64>,
    {
        match self.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => integer(field, value).map(Some),
        }
    }

    pub(crate) fn required_int<T>(&self, field: &'static str) -> Result<T, ValidationError>
    where
        T: TryFrom<i64>,
    {
        match self.get(field) {
            None => Err(ValidationError::MissingField(field)),
            Some(value) => integer(field, value),
        }
    }

    pub(crate) fn required_array(
        &self,
        field: &'static str,
    ) -> Result<&'a Vec<Value>, ValidationError> {
        match self.get(field) {
            None => Err(ValidationError::MissingField(field)),
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(ValidationError::InvalidType {
                field,
                expected: "array",
            }),
        }
    }
}

fn integer<T>(field: &'static str, value: &Value) -> Result<T, ValidationError>
where
    T: TryFrom<i64>,
{
    match value {
        Value::Number(n) if !n.is_f64() => {
            let raw = n.as_i64().ok_or_else(|| ValidationError::OutOfRange {
                field,
                value: n.to_string(),
            })?;
            T::try_from(raw).map_err(|_| ValidationError::OutOfRange {
                field,
                value: raw.to_string(),
            })
        }
        _ => Err(ValidationError::InvalidType {
            field,
            expected: "integer",
        }),
    }
}
