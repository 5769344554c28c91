//! Crawler pager records.
//!
//! A pager crawler calls `PagerRelativeURL` repeatedly. Each call receives the
//! previous `NextPageKey` as `PageKey`; the crawl stops once a response has
//! no `NextPageKey`.

use crate::entities::{require_text, EntityValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const PAGE_KEY_FIELD: &str = "PageKey";

/// Crawl kind. Only pager crawls exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrawlerType {
    #[default]
    Pager,
}

/// Declaration of one pager crawl action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PagerCrawlerInput {
    /// Crawler action name.
    pub name: String,
    /// Execution order hint in a multi-crawler.
    #[serde(rename = "BlockID", skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(rename = "PagerRelativeURL")]
    pub pager_relative_url: String,
    #[serde(rename = "Type")]
    pub kind: CrawlerType,
    /// Forwarded to the pager, spread into each `PagerInput`.
    pub pager_data: BTreeMap<String, Value>,
}

impl PagerCrawlerInput {
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        require_text(&self.name, "Name")?;
        require_text(&self.pager_relative_url, "PagerRelativeURL")?;
        Ok(())
    }

    /// Builds the request for the page after `page_key` (`None` for the first).
    ///
    /// A `PageKey` entry inside `pager_data` is dropped; `page_key` wins.
    pub fn pager_input(&self, page_key: Option<String>) -> PagerInput {
        let mut data = self.pager_data.clone();
        data.remove(PAGE_KEY_FIELD);
        PagerInput { page_key, data }
    }
}

/// Request sent to the pager handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagerInput {
    /// Always absent on the first request.
    #[serde(rename = "PageKey", skip_serializing_if = "Option::is_none")]
    pub page_key: Option<String>,
    #[serde(flatten)]
    pub data: BTreeMap<String, Value>,
}

/// Response from the pager handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerOutput {
    #[serde(rename = "NextPageKey", skip_serializing_if = "Option::is_none")]
    pub next_page_key: Option<String>,
}

impl PagerOutput {
    /// True when the crawler should stop calling the pager.
    pub fn is_last_page(&self) -> bool {
        self.next_page_key.is_none()
    }
}
