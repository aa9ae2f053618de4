//! Document validation against the address book JSON Schema.
//!
//! The service treats the validator as a black box: a document either passes
//! or fails. Schema content is opaque to the rest of the crate.

use crate::error::{StoreError, StoreResult};
use jsonschema::JSONSchema;
use serde_json::Value;

/// Bundled schema the service validates incoming documents against.
const ADDRESS_BOOK_SCHEMA_JSON: &str = include_str!("../schema/address-book-v1.0.json");

/// Pass/fail gate for raw documents before they reach model conversion.
pub trait DocumentValidator: Send + Sync {
    /// Accept or reject a raw document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the document is rejected.
    fn validate(&self, doc: &Value) -> StoreResult<()>;
}

/// Validator backed by a compiled JSON Schema.
#[derive(Debug)]
pub struct SchemaValidator {
    schema: JSONSchema,
}

impl SchemaValidator {
    /// Compile a validator from an externally supplied schema document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Configuration`] when the schema itself is
    /// invalid.
    pub fn new(schema: &Value) -> StoreResult<Self> {
        let schema = JSONSchema::compile(schema)
            .map_err(|e| StoreError::Configuration(format!("invalid JSON schema: {}", e)))?;
        Ok(Self { schema })
    }

    /// Compile the bundled address book schema.
    pub fn address_book() -> StoreResult<Self> {
        let schema: Value = serde_json::from_str(ADDRESS_BOOK_SCHEMA_JSON)?;
        Self::new(&schema)
    }
}

impl DocumentValidator for SchemaValidator {
    fn validate(&self, doc: &Value) -> StoreResult<()> {
        if let Err(errors) = self.schema.validate(doc) {
            let detail = errors
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(StoreError::Validation(format!(
                "schema validation failed: {}",
                detail
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bundled_schema_compiles() {
        SchemaValidator::address_book().unwrap();
    }

    #[test]
    fn test_minimal_entry_passes() {
        let validator = SchemaValidator::address_book().unwrap();
        validator.validate(&json!({"full_name": "Ann"})).unwrap();
    }

    #[test]
    fn test_missing_full_name_rejected() {
        let validator = SchemaValidator::address_book().unwrap();
        let err = validator.validate(&json!({})).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_bad_kind_rejected() {
        let validator = SchemaValidator::address_book().unwrap();
        let doc = json!({
            "full_name": "Ann",
            "emails": [{"kind": "office", "email": "ann@example.com"}]
        });
        assert!(validator.validate(&doc).is_err());
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let err = SchemaValidator::new(&json!({"type": "not-a-type"})).unwrap_err();
        assert!(matches!(err, StoreError::Configuration(_)));
    }
}
