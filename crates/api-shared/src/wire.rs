//! JSON wire types exchanged between the catalog service and its clients.
//!
//! Field names follow the catalog's camelCase JSON shape, e.g.
//! `{ "conditions": [{ "id": 1, "name": "Diabetes", "subCategories": [...], "medications": [...] }] }`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A refinement of a condition, selectable to narrow the audience.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubCategory {
    pub id: i64,
    pub name: String,
}

/// A medication associated with a condition, excludable from the audience.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Medication {
    pub id: i64,
    pub name: String,
}

/// A medical condition and the items that can be selected for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sub_categories: Vec<SubCategory>,
    #[serde(default)]
    pub medications: Vec<Medication>,
}

/// Response body of `GET /data`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogRes {
    pub conditions: Vec<Condition>,
}

/// Response body of the `/health` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}
