use serde::{Deserialize, Serialize};

/// A data manifest: a named attribute template attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataManifest {
    pub id: i32,
    pub name: String,
    pub project_code: String,
    /// Ordered by ascending attribute id.
    pub attributes: Vec<DataAttribute>,
}

/// One attribute of a [`DataManifest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataAttribute {
    pub id: i32,
    pub manifest_id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub attribute_type: String,
    /// Allowed values for choice attributes, comma separated.
    pub value: Option<String>,
    pub project_code: String,
    pub optional: bool,
}
