//! Thank-you-page template records served by the list query.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::domain::condition::ConditionNode;
use crate::domain::types::{CustomerGroupId, StoreId, TemplateId};

/// Publication state of a template.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TemplateStatus {
    #[default]
    Enabled,
    Disabled,
}

/// A thank-you-page template: the content record a storefront picks to render
/// its order-confirmation page.
///
/// Which template wins for a given order is decided elsewhere from `priority`,
/// the activity window and the `condition` rule tree; this crate only lists
/// and reshapes the records.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PageTemplate {
    pub id: TemplateId,
    pub name: String,
    pub status: TemplateStatus,
    /// Storefront views the template applies to.
    pub store_ids: Vec<StoreId>,
    /// Customer groups the template is targeted at.
    pub customer_group_ids: Vec<CustomerGroupId>,
    /// Lower values win when several templates match an order.
    pub priority: i32,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    /// Display rules evaluated against the placed order.
    pub condition: ConditionNode,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl PageTemplate {
    /// Flat map of the template's own fields, as exposed to API consumers.
    ///
    /// The `condition` tree is not part of the map; the resolver attaches its
    /// converted form under a dedicated key instead.
    pub fn data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("template_id".to_string(), json!(self.id));
        data.insert("name".to_string(), json!(self.name));
        data.insert("status".to_string(), json!(self.status));
        data.insert("store_ids".to_string(), json!(self.store_ids));
        data.insert(
            "customer_group_ids".to_string(),
            json!(self.customer_group_ids),
        );
        data.insert("priority".to_string(), json!(self.priority));
        data.insert("from_date".to_string(), json!(self.from_date));
        data.insert("to_date".to_string(), json!(self.to_date));
        data.insert("created_at".to_string(), json!(self.created_at));
        data.insert("updated_at".to_string(), json!(self.updated_at));
        data
    }
}
