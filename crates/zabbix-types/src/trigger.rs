use serde::{Deserialize, Serialize};

use crate::codes::{TriggerPriority, TriggerStatus, TriggerValue};
use crate::host::{Host, HostGroup};
use crate::item::Item;
use crate::timestamp::Timestamp;
use crate::wire::{optional, stringified};

/// Trigger definition.
///
/// The collections at the bottom are only present when the matching
/// `select*` parameter was passed to `trigger.get`.
///
/// <https://www.zabbix.com/documentation/4.0/manual/api/reference/trigger/object>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trigger {
    #[serde(
        rename = "triggerid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub trigger_id: String,

    /// Trigger name.
    pub description: String,

    pub expression: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub comments: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TriggerPriority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TriggerStatus>,

    #[serde(skip_serializing)]
    pub value: Option<TriggerValue>,

    #[serde(with = "optional", skip_serializing_if = "Option::is_none")]
    pub recovery_mode: Option<i32>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub recovery_expression: String,

    #[serde(with = "optional", skip_serializing_if = "Option::is_none")]
    pub correlation_mode: Option<i32>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub correlation_tag: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(
        rename = "lastchange",
        deserialize_with = "optional::deserialize",
        skip_serializing
    )]
    pub last_change: Option<Timestamp>,

    #[serde(skip_serializing)]
    pub groups: Vec<HostGroup>,

    #[serde(skip_serializing)]
    pub hosts: Vec<Host>,

    #[serde(skip_serializing)]
    pub items: Vec<Item>,

    #[serde(skip_serializing)]
    pub functions: Vec<TriggerFunction>,

    /// Triggers this one depends on. Writable on create and update.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<TriggerId>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Function used in a trigger expression, returned by `selectFunctions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerFunction {
    #[serde(rename = "functionid", with = "stringified")]
    pub function_id: String,

    #[serde(rename = "itemid", with = "stringified")]
    pub item_id: String,

    pub function: String,
    pub parameter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerId {
    #[serde(rename = "triggerid", with = "stringified")]
    pub trigger_id: String,
}

impl From<String> for TriggerId {
    fn from(trigger_id: String) -> Self {
        Self { trigger_id }
    }
}
