//! Request and response shapes for the thank-you-page list query.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::template::PageTemplate;
use crate::domain::types::TemplateId;
use crate::pagination::{DEFAULT_CURRENT_PAGE, DEFAULT_PAGE_SIZE, PageInfo};

/// Errors raised while turning raw request parameters into [`ListTemplatesArgs`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{key} must be an integer")]
    NotAnInteger { key: String },
}

/// Arguments accepted by the list query.
///
/// The two paging fields are typed and always present (schema-style defaults
/// apply when the caller omits them); everything else the caller sends is kept
/// verbatim in `extra` and handed to the criteria builder untouched. The
/// paging fields are signed on purpose: validating non-positive input is the
/// resolver's job, not the deserializer's.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ListTemplatesArgs {
    #[serde(rename = "currentPage", default = "default_current_page")]
    pub current_page: i64,
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: i64,
    /// Filter and sort keys the criteria builder understands; opaque here.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn default_current_page() -> i64 {
    DEFAULT_CURRENT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ListTemplatesArgs {
    fn default() -> Self {
        Self {
            current_page: DEFAULT_CURRENT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            extra: BTreeMap::new(),
        }
    }
}

impl ListTemplatesArgs {
    /// Builds args from flat key/value pairs, e.g. URL query parameters.
    ///
    /// `currentPage` and `pageSize` are parsed as integers; every other pair
    /// is passed through as a string value.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut args = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "currentPage" => args.current_page = parse_int(&key, &value)?,
                "pageSize" => args.page_size = parse_int(&key, &value)?,
                _ => {
                    args.extra.insert(key, Value::String(value));
                }
            }
        }
        Ok(args)
    }

    /// Sets both paging fields.
    pub fn paginate(mut self, current_page: i64, page_size: i64) -> Self {
        self.current_page = current_page;
        self.page_size = page_size;
        self
    }

    /// Adds a passthrough key for the criteria builder.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

fn parse_int(key: &str, value: &str) -> Result<i64, ArgsError> {
    value
        .trim()
        .parse()
        .map_err(|_| ArgsError::NotAnInteger {
            key: key.to_string(),
        })
}

/// One reshaped template in the response: the flat field map, the converted
/// display condition, and the original record under `model`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TemplateEntry {
    #[serde(flatten)]
    pub data: Map<String, Value>,
    pub condition: Map<String, Value>,
    pub model: PageTemplate,
}

impl TemplateEntry {
    /// Reshapes a fetched template into its response form.
    pub fn from_model(template: PageTemplate, condition: Map<String, Value>) -> Self {
        Self {
            data: template.data(),
            condition,
            model: template,
        }
    }
}

/// Response envelope for the list query.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TemplateListResponse {
    pub total_count: usize,
    /// Reshaped entries keyed by template id; one entry per distinct id.
    pub items: BTreeMap<TemplateId, TemplateEntry>,
    pub page_info: PageInfo,
}
