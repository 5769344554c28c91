//! Page and page-layout records.
//!
//! # Invariants
//! - Section keys are unique within one layout.
//! - Every block container points at a block declared on the same page.

use crate::entities::addons::NgComponentRelation;
use crate::entities::{require_text, EntityValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Host resource name, e.g. `accounts` or `transactions`.
pub type ResourceType = String;

/// Screen classes a data view or section can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataViewScreenSize {
    Landscape,
    Tablet,
    Phablet,
}

/// A configurable page composed of blocks laid out in sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub blocks: Vec<PageBlock>,
    pub layout: PageLayout,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Page {
    /// Checks block keys, section keys and container references.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        let mut block_keys = BTreeSet::new();
        for block in &self.blocks {
            require_text(&block.key, "Blocks.Key")?;
            if !block_keys.insert(block.key.as_str()) {
                return Err(EntityValidationError::DuplicateKey {
                    field: "Blocks.Key",
                    value: block.key.clone(),
                });
            }
        }
        self.layout.validate()?;

        for section in &self.layout.sections {
            for container in section
                .columns
                .iter()
                .filter_map(|column| column.block_container.as_ref())
            {
                if !block_keys.contains(container.block_key.as_str()) {
                    return Err(EntityValidationError::UnknownReference {
                        field: "BlockContainer.BlockKey",
                        value: container.block_key.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageBlock {
    pub key: String,
    pub relation: NgComponentRelation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ResourceDataConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_per_screen_size: Option<ScreenSizeDataConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_configuration: Option<PageConfiguration>,
}

/// Block configuration; `data` is the desktop variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceDataConfiguration {
    pub resource: String,
    #[serde(rename = "AddonUUID")]
    pub addon_uuid: String,
    pub data: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScreenSizeDataConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageConfiguration {
    pub parameters: Vec<PageConfigurationParameter>,
}

/// Fields shared by every page parameter kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageParameterBase {
    pub key: String,
    pub mandatory: bool,
    pub consume: bool,
    pub produce: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageFilterParameter {
    #[serde(flatten)]
    pub base: PageParameterBase,
    pub resource: ResourceType,
    pub fields: Vec<String>,
}

/// Page parameter, discriminated by its `Type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Type")]
pub enum PageConfigurationParameter {
    String(PageParameterBase),
    Filter(PageFilterParameter),
}

/// Spacing scale used by layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSizeType {
    Sm,
    Md,
    Lg,
}

/// Sizes are host `number`s and may be fractional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageLayout {
    pub sections: Vec<PageSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_spacing: Option<PageSizeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_spacing: Option<PageSizeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections_gap: Option<PageSizeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns_gap: Option<PageSizeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
}

impl PageLayout {
    /// Checks that section keys are present and unique.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        let mut seen = BTreeSet::new();
        for section in &self.sections {
            require_text(&section.key, "Sections.Key")?;
            if !seen.insert(section.key.as_str()) {
                return Err(EntityValidationError::DuplicateKey {
                    field: "Sections.Key",
                    value: section.key.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Column split of a section, as fractions of its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitType {
    #[serde(rename = "1/4 3/4")]
    QuarterThreeQuarters,
    #[serde(rename = "1/3 2/3")]
    ThirdTwoThirds,
    #[serde(rename = "1/2 1/2")]
    Halves,
    #[serde(rename = "2/3 1/3")]
    TwoThirdsThird,
    #[serde(rename = "3/4 1/4")]
    ThreeQuartersQuarter,
    #[serde(rename = "1/3 1/3 1/3")]
    Thirds,
    #[serde(rename = "1/2 1/4 1/4")]
    HalfQuarterQuarter,
    #[serde(rename = "1/4 1/2 1/4")]
    QuarterHalfQuarter,
    #[serde(rename = "1/4 1/4 1/2")]
    QuarterQuarterHalf,
    #[serde(rename = "1/4 1/4 1/4 1/4")]
    Quarters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageSection {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub columns: Vec<PageSectionColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<SplitType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<Vec<DataViewScreenSize>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageSectionColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_container: Option<PageBlockContainer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageBlockContainer {
    pub block_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<Vec<DataViewScreenSize>>,
}
