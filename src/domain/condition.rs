//! Display-rule conditions attached to thank-you-page templates.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single node of a template display-rule tree.
///
/// Leaf nodes compare an order attribute against a value; `combine` nodes
/// aggregate their children with an `all`/`any` aggregator. The tree shape is
/// arbitrary and opaque to the list resolver, which only converts it to a
/// plain JSON map for the response payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ConditionNode {
    /// Rule kind, e.g. `combine` or `order_attribute`.
    #[serde(rename = "type")]
    pub condition_type: String,
    /// `all`/`any` aggregation applied to the children of a `combine` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregator: Option<String>,
    /// Comparison operator of a leaf node, e.g. `==` or `>=`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Order attribute a leaf node inspects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Comparison value of a leaf node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Child rules of a `combine` node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<ConditionNode>,
}

impl ConditionNode {
    /// Builds a `combine` node aggregating the given children.
    pub fn combine(aggregator: impl Into<String>, conditions: Vec<ConditionNode>) -> Self {
        Self {
            condition_type: "combine".to_string(),
            aggregator: Some(aggregator.into()),
            conditions,
            ..Self::default()
        }
    }

    /// Builds a leaf node comparing an order attribute against a value.
    pub fn attribute(
        attribute: impl Into<String>,
        operator: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            condition_type: "order_attribute".to_string(),
            operator: Some(operator.into()),
            attribute: Some(attribute.into()),
            value: Some(value),
            ..Self::default()
        }
    }

    /// Flattens the rule tree into a plain JSON map, recursively.
    ///
    /// Unset optional parts are omitted rather than emitted as nulls; the
    /// `conditions` key is only present on nodes that have children.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "type".to_string(),
            Value::String(self.condition_type.clone()),
        );
        if let Some(aggregator) = &self.aggregator {
            map.insert("aggregator".to_string(), Value::String(aggregator.clone()));
        }
        if let Some(operator) = &self.operator {
            map.insert("operator".to_string(), Value::String(operator.clone()));
        }
        if let Some(attribute) = &self.attribute {
            map.insert("attribute".to_string(), Value::String(attribute.clone()));
        }
        if let Some(value) = &self.value {
            map.insert("value".to_string(), value.clone());
        }
        if !self.conditions.is_empty() {
            map.insert(
                "conditions".to_string(),
                Value::Array(
                    self.conditions
                        .iter()
                        .map(|child| Value::Object(child.to_map()))
                        .collect(),
                ),
            );
        }
        map
    }
}
