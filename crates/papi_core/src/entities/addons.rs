//! Addon records exchanged with the host platform.
//!
//! Field names follow the host's wire schema. Open-ended records keep
//! unknown keys in `extra` so they round-trip unchanged.

use crate::entities::{is_uuid, is_version_string, require_text, EntityValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Addon manifest as published by the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Addon {
    #[serde(rename = "UUID", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,
}

/// Addon installed on a distributor, with the installed version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstalledAddon {
    pub addon: Addon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
    #[serde(rename = "UUID", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,
}

/// One published version of an addon.
///
/// Date-times are kept as the host's ISO-8601 strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddonVersion {
    #[serde(rename = "UUID", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_date_time: Option<String>,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phased: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_phased_date_time: Option<String>,
    #[serde(rename = "AddonUUID")]
    pub addon_uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phased_function: Option<String>,
}

impl AddonVersion {
    /// Checks `AddonUUID` and the dotted numeric `Version`.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        if !is_uuid(&self.addon_uuid) {
            return Err(EntityValidationError::InvalidUuid {
                field: "AddonUUID",
                value: self.addon_uuid.clone(),
            });
        }
        require_text(&self.version, "Version")?;
        if !is_version_string(self.version.trim()) {
            return Err(EntityValidationError::InvalidVersion(self.version.clone()));
        }
        Ok(())
    }
}

/// Result of an asynchronous addon API call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonApiAsyncResult {
    #[serde(rename = "ExecutionUUID", skip_serializing_if = "Option::is_none")]
    pub execution_uuid: Option<String>,
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Result of a synchronous addon API call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonApiSyncResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Generic addon data row; any extra column lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddonData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Storage class of an addon data scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeType {
    Data,
    MetaData,
    CpiMetaData,
    IndexedData,
}

/// Column type declared in a data scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemeFieldType {
    String,
    Bool,
    Integer,
    MultipleStringValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeField {
    #[serde(rename = "Type")]
    pub kind: SchemeFieldType,
}

/// Declaration of an addon data table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddonDataScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_date_time: Option<String>,
    pub name: String,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SchemeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, SchemeField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: Option<String>,
}

/// Extension point an addon relation plugs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationType {
    #[serde(rename = "AddonAPI")]
    AddonApi,
    NgComponent,
    Navigation,
}

/// Relation between an addon and a host extension point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "AddonRelativeURL", skip_serializing_if = "Option::is_none")]
    pub addon_relative_url: Option<String>,
    #[serde(rename = "Type")]
    pub kind: RelationType,
    #[serde(rename = "AddonUUID")]
    pub addon_uuid: String,
    pub name: String,
    pub relation_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Relation rendered as an Angular component block.
pub type NgComponentRelation = Relation;

impl Relation {
    /// Checks required names and the owning addon's UUID.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        require_text(&self.name, "Name")?;
        require_text(&self.relation_name, "RelationName")?;
        if !is_uuid(&self.addon_uuid) {
            return Err(EntityValidationError::InvalidUuid {
                field: "AddonUUID",
                value: self.addon_uuid.clone(),
            });
        }
        Ok(())
    }
}
