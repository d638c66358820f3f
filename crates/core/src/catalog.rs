//! The condition catalog.
//!
//! A `Catalog` is the ordered list of conditions loaded from the data source. It is immutable
//! once loaded; selection state only ever reads from it.

use crate::{AudienceError, AudienceResult, CatalogRes, Condition};
use std::collections::HashSet;
use std::path::Path;

/// Ordered, immutable list of conditions with lookup by identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    conditions: Vec<Condition>,
}

impl Catalog {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// Build a catalog from a wire response, rejecting duplicate condition identifiers.
    ///
    /// # Errors
    /// Returns `AudienceError::DuplicateCondition` if two conditions share an ID, since the
    /// dropdown could not tell them apart.
    pub fn from_response(res: CatalogRes) -> AudienceResult<Self> {
        let mut seen = HashSet::new();
        for condition in &res.conditions {
            if !seen.insert(condition.id) {
                return Err(AudienceError::DuplicateCondition(condition.id));
            }
        }
        Ok(Self::new(res.conditions))
    }

    /// Parse a catalog from its JSON representation (`{ "conditions": [...] }`).
    pub fn from_json(json: &str) -> AudienceResult<Self> {
        let res: CatalogRes = serde_json::from_str(json).map_err(AudienceError::CatalogParse)?;
        Self::from_response(res)
    }

    /// Read and parse a catalog JSON file.
    pub fn from_file(path: &Path) -> AudienceResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(AudienceError::CatalogRead)?;
        let catalog = Self::from_json(&contents)?;
        tracing::debug!(
            "loaded {} conditions from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Find a condition by identifier.
    pub fn find(&self, id: i64) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Convert back into the wire response.
    pub fn to_response(&self) -> CatalogRes {
        CatalogRes {
            conditions: self.conditions.clone(),
        }
    }
}

impl From<Vec<Condition>> for Catalog {
    fn from(conditions: Vec<Condition>) -> Self {
        Self::new(conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "conditions": [
            {
                "id": 1,
                "name": "Diabetes",
                "subCategories": [{"id": 1, "name": "Type 1"}, {"id": 2, "name": "Type 2"}],
                "medications": [{"id": 1, "name": "Metformin"}, {"id": 2, "name": "Insulin"}]
            },
            {
                "id": 2,
                "name": "Hypertension",
                "subCategories": [{"id": 3, "name": "Primary"}],
                "medications": []
            }
        ]
    }"#;

    #[test]
    fn parses_and_finds_conditions() {
        let catalog = Catalog::from_json(SAMPLE).expect("parse catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find(2).map(|c| c.name.as_str()), Some("Hypertension"));
        assert!(catalog.find(99).is_none());
    }

    #[test]
    fn keeps_source_order() {
        let catalog = Catalog::from_json(SAMPLE).expect("parse catalog");
        let names: Vec<&str> = catalog.conditions().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Diabetes", "Hypertension"]);
    }

    #[test]
    fn rejects_duplicate_condition_ids() {
        let json = r#"{"conditions": [{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]}"#;
        let err = Catalog::from_json(json).expect_err("duplicate ids");
        assert!(matches!(err, AudienceError::DuplicateCondition(1)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{\"conditions\": [").expect_err("malformed json");
        assert!(matches!(err, AudienceError::CatalogParse(_)));
    }

    #[test]
    fn reads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write sample");

        let catalog = Catalog::from_file(file.path()).expect("read catalog");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = Catalog::from_file(&dir.path().join("missing.json")).expect_err("missing");
        assert!(matches!(err, AudienceError::CatalogRead(_)));
    }
}
