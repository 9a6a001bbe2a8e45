//! Main type — a top-level tumor classification.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{OncoTreeError, ValidationError};
use crate::id::MainTypeId;

/// A top-level tumor classification such as "Leukemia".
///
/// Descriptive fields beyond `id` and `name` are owned by the data source;
/// they are kept in `attributes` and serialized back inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainType {
    pub id: MainTypeId,
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl MainType {
    /// Create a builder for constructing a [`MainType`].
    #[must_use]
    pub fn builder() -> MainTypeBuilder {
        MainTypeBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`OncoTreeError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), OncoTreeError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`MainType`].
#[derive(Debug, Default)]
pub struct MainTypeBuilder {
    id: Option<MainTypeId>,
    name: Option<String>,
    attributes: Map<String, Value>,
}

impl MainTypeBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<MainTypeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Consume the builder, validate, and return a [`MainType`].
    ///
    /// A missing id defaults to `0`.
    ///
    /// # Errors
    ///
    /// Returns [`OncoTreeError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<MainType, OncoTreeError> {
        let main_type = MainType {
            id: self.id.unwrap_or_else(|| MainTypeId::from(0)),
            name: self.name.unwrap_or_default(),
            attributes: self.attributes,
        };
        main_type.validate()?;
        Ok(main_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_main_type_when_name_provided() {
        let main_type = MainType::builder().id(1).name("Leukemia").build().unwrap();
        assert_eq!(main_type.id, MainTypeId::from(1));
        assert_eq!(main_type.name, "Leukemia");
        assert!(main_type.attributes.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_name_is_missing() {
        let result = MainType::builder().id(1).build();
        assert!(matches!(
            result,
            Err(OncoTreeError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let result = MainType::builder().id(1).name("   ").build();
        assert!(matches!(
            result,
            Err(OncoTreeError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_serialize_as_flat_object() {
        let main_type = MainType::builder().id(2).name("Lymphoma").build().unwrap();
        let json = serde_json::to_value(&main_type).unwrap();
        assert_eq!(json, serde_json::json!({"id": 2, "name": "Lymphoma"}));
    }

    #[test]
    fn should_keep_extra_fields_from_source_inline() {
        let main_type: MainType =
            serde_json::from_str(r#"{"id": 3, "name": "Melanoma", "color": "Black"}"#).unwrap();
        assert_eq!(main_type.attributes.get("color"), Some(&Value::from("Black")));

        let json = serde_json::to_value(&main_type).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "Melanoma", "color": "Black"})
        );
    }

    #[test]
    fn should_serialize_builder_attributes_inline() {
        let main_type = MainType::builder()
            .id(5)
            .name("Breast Cancer")
            .attribute("color", "HotPink")
            .build()
            .unwrap();
        let json = serde_json::to_value(&main_type).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 5, "name": "Breast Cancer", "color": "HotPink"})
        );
    }

    #[test]
    fn should_reject_record_without_id() {
        let result: Result<MainType, _> = serde_json::from_str(r#"{"name": "Glioma"}"#);
        assert!(result.is_err());
    }
}
