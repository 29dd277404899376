//! Fluent builder for collection schemas.

use crate::wire::{CollectionSchema, FieldType, SchemaField};

/// Builder for constructing a [`CollectionSchema`].
///
/// Fields appear in the built schema in insertion order. Nothing is
/// validated locally: an empty schema builds an empty field list, and
/// required names are forwarded verbatim whether or not a matching field
/// was declared. The service is the authority on both.
///
/// ```
/// use resilientdb_client::{FieldType, SchemaBuilder};
///
/// let schema = SchemaBuilder::new()
///     .field("id", FieldType::Integer)
///     .field("name", FieldType::String)
///     .field("category", FieldType::String)
///     .required("id")
///     .required("category")
///     .build();
///
/// assert_eq!(schema.fields.len(), 3);
/// assert_eq!(schema.required, vec!["id", "category"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    fields: Vec<SchemaField>,
    required: Vec<String>,
}

impl SchemaBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field with its type tag.
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(SchemaField {
            name: name.into(),
            field_type,
        });
        self
    }

    /// Mark a field name as required.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Build the schema.
    pub fn build(self) -> CollectionSchema {
        CollectionSchema {
            fields: self.fields,
            required: self.required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_preserves_field_insertion_order() {
        let schema = SchemaBuilder::new()
            .field("id", FieldType::Integer)
            .field("age", FieldType::Integer)
            .field("name", FieldType::String)
            .build();

        let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "age", "name"]);
    }

    #[test]
    fn test_build_yields_one_entry_per_field() {
        let schema = SchemaBuilder::new()
            .field("id", FieldType::Integer)
            .field("active", FieldType::Boolean)
            .build();

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "fields": [{"id": "integer"}, {"active": "boolean"}],
                "required": [],
            })
        );
    }

    #[test]
    fn test_empty_builder_yields_empty_schema() {
        let schema = SchemaBuilder::new().build();
        assert!(schema.fields.is_empty());
        assert!(schema.required.is_empty());
    }

    #[test]
    fn test_required_names_forwarded_verbatim() {
        // Not cross-checked against declared fields.
        let schema = SchemaBuilder::new()
            .field("id", FieldType::Integer)
            .required("id")
            .required("missing")
            .build();
        assert_eq!(schema.required, vec!["id", "missing"]);
    }

    #[test]
    fn test_datetime_tag_passes_through() {
        let schema = SchemaBuilder::new()
            .field("created_at", FieldType::Datetime)
            .build();
        assert_eq!(
            serde_json::to_value(&schema.fields).unwrap(),
            json!([{"created_at": "datetime"}])
        );
    }
}
