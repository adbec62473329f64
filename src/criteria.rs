//! Turns raw list arguments into repository search criteria.

use serde_json::Value;

use crate::dto::thank_you_page::ListTemplatesArgs;
use crate::repository::{Filter, FilterCondition, SearchCriteria, SortOrder};

/// Reserved argument key naming the ordering fields.
pub const SORT_KEY: &str = "sort";

/// Reserved argument key for free-text search across template names.
pub const SEARCH_KEY: &str = "search";

/// Builds [`SearchCriteria`] from list arguments. The resolver treats the
/// passthrough keys as opaque; implementations decide what they mean. The
/// field name identifies which query is being answered, for builders that
/// keep per-query mappings.
pub trait CriteriaBuilder {
    fn build(&self, field_name: &str, args: &ListTemplatesArgs) -> SearchCriteria;
}

/// Default builder for the template list query.
///
/// `search` becomes a `Like` filter on the template name and `sort` names the
/// ordering fields (comma-separated, prefix `-` for descending). The
/// remaining known keys filter their record field directly, with
/// comma-separated values turning into `In` constraints. Unknown keys and
/// non-scalar values are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCriteriaBuilder;

impl CriteriaBuilder for TemplateCriteriaBuilder {
    fn build(&self, _field_name: &str, args: &ListTemplatesArgs) -> SearchCriteria {
        let mut criteria = SearchCriteria::new();
        for (key, value) in &args.extra {
            let Some(value) = scalar_text(value) else {
                continue;
            };
            match key.as_str() {
                SORT_KEY => {
                    for field in value.split(',').map(str::trim).filter(|f| !f.is_empty()) {
                        criteria = criteria.sort(sort_order(field));
                    }
                }
                SEARCH_KEY => {
                    criteria = criteria.filter(Filter::new("name", FilterCondition::Like, value));
                }
                _ => {
                    if let Some(field) = filter_field(key) {
                        criteria = criteria.filter(filter_for(field, &value));
                    }
                }
            }
        }
        criteria.paginate(
            args.current_page.max(1) as usize,
            args.page_size.max(1) as usize,
        )
    }
}

fn filter_field(key: &str) -> Option<&'static str> {
    match key {
        "template_id" => Some("template_id"),
        "name" => Some("name"),
        "status" => Some("status"),
        "store_id" => Some("store_ids"),
        "customer_group" => Some("customer_group_ids"),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn sort_order(field: &str) -> SortOrder {
    match field.strip_prefix('-') {
        Some(field) => SortOrder::desc(field),
        None => SortOrder::asc(field),
    }
}

fn filter_for(field: &str, value: &str) -> Filter {
    if value.contains(',') {
        Filter::new(field, FilterCondition::In, value)
    } else {
        Filter::new(field, FilterCondition::Eq, value)
    }
}
