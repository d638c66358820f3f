//! Built-in mock catalog.

use api_shared::{CatalogRes, Condition, Medication, SubCategory};
use audience_core::{AudienceResult, Catalog};
use std::path::Path;

fn sub(id: i64, name: &str) -> SubCategory {
    SubCategory {
        id,
        name: name.into(),
    }
}

fn med(id: i64, name: &str) -> Medication {
    Medication {
        id,
        name: name.into(),
    }
}

/// The catalog served when no data file is configured.
pub fn default_catalog() -> CatalogRes {
    CatalogRes {
        conditions: vec![
            Condition {
                id: 1,
                name: "Diabetes".into(),
                sub_categories: vec![sub(1, "Type 1"), sub(2, "Type 2")],
                medications: vec![med(1, "Metformin"), med(2, "Insulin")],
            },
            Condition {
                id: 2,
                name: "Hypertension".into(),
                sub_categories: vec![sub(3, "Primary"), sub(4, "Secondary")],
                medications: vec![med(3, "Lisinopril"), med(4, "Amlodipine")],
            },
        ],
    }
}

/// Resolve the catalog to serve: the JSON file at `path` if given, otherwise the built-in one.
///
/// # Errors
/// Returns an `AudienceError` if the file cannot be read or is not a valid catalog.
pub fn load_catalog(path: Option<&Path>) -> AudienceResult<CatalogRes> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_file(path)?;
            tracing::info!("-- Serving {} conditions from {}", catalog.len(), path.display());
            Ok(catalog.to_response())
        }
        None => Ok(default_catalog()),
    }
}
