//! Field metadata for a resource collection.

use serde::{Deserialize, Serialize};

/// The field names a resource collection can be filtered or sorted by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fields {
    /// Filterable/sortable field names, as reported by the server.
    #[serde(default)]
    pub fields: Vec<String>,
}
