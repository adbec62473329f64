//! In-memory repository backed by a JSON fixture file.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::domain::template::PageTemplate;
use crate::domain::types::TemplateId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    Filter, FilterCondition, SearchCriteria, SearchResult, SortDirection, SortOrder,
    TemplateReader,
};

/// Template store holding the full record set in memory.
///
/// Filters and sort orders address fields of [`PageTemplate::data`] by name,
/// so the criteria a caller builds from request arguments work here the same
/// way they would against a database-backed store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateRepository {
    templates: Arc<Vec<PageTemplate>>,
}

impl InMemoryTemplateRepository {
    pub fn new(templates: Vec<PageTemplate>) -> Self {
        Self {
            templates: Arc::new(templates),
        }
    }

    /// Loads the record set from a JSON array of templates.
    pub fn from_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let raw = fs::read_to_string(path)?;
        let templates: Vec<PageTemplate> = serde_json::from_str(&raw)?;
        Ok(Self::new(templates))
    }
}

impl TemplateReader for InMemoryTemplateRepository {
    fn get_by_id(&self, id: TemplateId) -> RepositoryResult<Option<PageTemplate>> {
        Ok(self.templates.iter().find(|t| t.id == id).cloned())
    }

    fn get_list(&self, criteria: SearchCriteria) -> RepositoryResult<SearchResult> {
        let mut rows: Vec<(Map<String, Value>, PageTemplate)> = self
            .templates
            .iter()
            .map(|template| (template.data(), template.clone()))
            .filter(|(data, _)| criteria.filters.iter().all(|filter| matches(data, filter)))
            .collect();

        if !criteria.sort_orders.is_empty() {
            rows.sort_by(|a, b| compare(&a.0, &b.0, &criteria.sort_orders));
        }

        let total_count = rows.len();
        // A saturated offset keeps huge page numbers or sizes at an empty
        // window instead of overflowing.
        let offset = criteria
            .current_page
            .saturating_sub(1)
            .saturating_mul(criteria.page_size);
        let items = rows
            .into_iter()
            .skip(offset)
            .take(criteria.page_size)
            .map(|(_, template)| template)
            .collect();

        Ok(SearchResult {
            items,
            total_count,
            criteria,
        })
    }
}

fn matches(data: &Map<String, Value>, filter: &Filter) -> bool {
    let Some(actual) = data.get(&filter.field).filter(|v| !v.is_null()) else {
        return false;
    };
    let actual = field_values(actual);
    match filter.condition {
        FilterCondition::Eq => actual.iter().any(|v| v == &filter.value),
        FilterCondition::Like => {
            let needle = filter.value.to_lowercase();
            actual.iter().any(|v| v.to_lowercase().contains(&needle))
        }
        FilterCondition::In => {
            let allowed: Vec<&str> = filter.value.split(',').map(str::trim).collect();
            actual.iter().any(|v| allowed.contains(&v.as_str()))
        }
    }
}

/// Multi-valued fields match when any element does.
fn field_values(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(value_text).collect(),
        other => vec![value_text(other)],
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn compare(a: &Map<String, Value>, b: &Map<String, Value>, orders: &[SortOrder]) -> Ordering {
    for order in orders {
        let ordering = compare_values(a.get(&order.field), b.get(&order.field));
        let ordering = match order.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .unwrap_or(0.0)
            .total_cmp(&y.as_f64().unwrap_or(0.0)),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => value_text(x).cmp(&value_text(y)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
