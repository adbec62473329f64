use serde_json::{Map, Value};

use crate::domain::condition::ConditionNode;
use crate::domain::template::PageTemplate;
use crate::domain::types::TemplateId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// How a [`Filter`] compares a record field against its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCondition {
    Eq,
    Like,
    In,
}

/// A single field constraint inside [`SearchCriteria`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub condition: FilterCondition,
    pub value: String,
}

impl Filter {
    pub fn new(
        field: impl Into<String>,
        condition: FilterCondition,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            condition,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A single ordering key inside [`SearchCriteria`]; earlier keys win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// A complete list query: constraints, ordering and the requested page
/// window. Repositories echo the criteria they actually executed back in
/// [`SearchResult::criteria`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub filters: Vec<Filter>,
    pub sort_orders: Vec<SortOrder>,
    pub current_page: usize,
    pub page_size: usize,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort_orders.push(order);
        self
    }

    pub fn paginate(mut self, current_page: usize, page_size: usize) -> Self {
        self.current_page = current_page;
        self.page_size = page_size;
        self
    }
}

/// One page of matching templates plus the pre-window match count.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub items: Vec<PageTemplate>,
    /// Number of records matching the filters, before the page window.
    pub total_count: usize,
    /// The criteria as executed by the repository.
    pub criteria: SearchCriteria,
}

pub trait TemplateReader {
    fn get_by_id(&self, id: TemplateId) -> RepositoryResult<Option<PageTemplate>>;
    fn get_list(&self, criteria: SearchCriteria) -> RepositoryResult<SearchResult>;

    /// Converts a display-rule tree into its plain JSON-map form; shared by
    /// every implementation.
    fn data_model_to_array(&self, condition: &ConditionNode) -> Map<String, Value> {
        condition.to_map()
    }
}
