use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::codes::{DataType, DeltaType, ItemStatus, ItemType, ValueType};
use crate::host::Host;
use crate::timestamp::Timestamp;
use crate::wire::{optional, stringified};

/// Item (metric) definition.
///
/// <https://www.zabbix.com/documentation/4.0/manual/api/reference/item/object>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(
        rename = "itemid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub item_id: String,

    pub delay: String,

    #[serde(rename = "hostid", with = "stringified")]
    pub host_id: String,

    #[serde(
        rename = "interfaceid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub interface_id: String,

    #[serde(rename = "key_")]
    pub key: String,

    pub name: String,

    #[serde(rename = "type")]
    pub item_type: ItemType,

    pub value_type: ValueType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<DeltaType>,

    pub description: String,

    /// Read-only: last collection error reported by the server.
    #[serde(skip_serializing)]
    pub error: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub history: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub trends: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,

    #[serde(rename = "lastvalue", skip_serializing)]
    pub last_value: String,

    #[serde(
        rename = "lastclock",
        deserialize_with = "optional::deserialize",
        skip_serializing
    )]
    pub last_clock: Option<Timestamp>,

    /// Application ids; only used when creating items.
    #[serde(rename = "applications", skip_serializing_if = "Vec::is_empty")]
    pub application_ids: Vec<String>,

    /// Filled by `selectHosts`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<Host>,
}

/// Two items in one collection share a key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Duplicate key {0}")]
pub struct DuplicateKey(pub String);

impl Item {
    /// Index items by their key.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` for the first key seen twice.
    pub fn index_by_key(items: &[Item]) -> Result<HashMap<&str, &Item>, DuplicateKey> {
        let mut by_key = HashMap::with_capacity(items.len());
        for item in items {
            if by_key.insert(item.key.as_str(), item).is_some() {
                return Err(DuplicateKey(item.key.clone()));
            }
        }
        Ok(by_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(key: &str) -> Item {
        Item {
            key: key.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_decode_item_from_wire() {
        let item: Item = serde_json::from_value(json!({
            "itemid": "23296",
            "type": "0",
            "hostid": "10084",
            "name": "Free disk space",
            "key_": "vfs.fs.size[/,free]",
            "delay": "1m",
            "history": "90d",
            "trends": "365d",
            "status": "0",
            "value_type": "3",
            "lastvalue": "1024",
            "lastclock": "1700000000",
            "error": "",
            "description": ""
        }))
        .unwrap();

        assert_eq!(item.item_id, "23296");
        assert_eq!(item.item_type, ItemType::ZabbixAgent);
        assert_eq!(item.value_type, ValueType::Unsigned);
        assert_eq!(item.status, Some(ItemStatus::Enabled));
        assert_eq!(item.key, "vfs.fs.size[/,free]");
        assert_eq!(item.last_clock.map(|t| t.epoch_seconds()), Some(1_700_000_000));
        assert!(item.data_type.is_none());
    }

    #[test]
    fn test_create_payload_skips_read_only_and_empty() {
        let item = Item {
            host_id: "10084".to_string(),
            key: "trap.value".to_string(),
            name: "Trap value".to_string(),
            item_type: ItemType::ZabbixTrapper,
            value_type: ValueType::Text,
            error: "ignored".to_string(),
            application_ids: vec!["7".to_string()],
            ..Default::default()
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "delay": "",
                "hostid": "10084",
                "key_": "trap.value",
                "name": "Trap value",
                "type": "2",
                "value_type": "4",
                "description": "",
                "applications": ["7"]
            })
        );
    }

    #[test]
    fn test_index_by_key() {
        let items = vec![item("a"), item("b")];
        let by_key = Item::index_by_key(&items).unwrap();
        assert_eq!(by_key.len(), 2);
        assert_eq!(by_key["b"].key, "b");
    }

    #[test]
    fn test_index_by_key_rejects_duplicates() {
        let items = vec![item("a"), item("b"), item("a")];
        let err = Item::index_by_key(&items).unwrap_err();
        assert_eq!(err, DuplicateKey("a".to_string()));
        assert_eq!(err.to_string(), "Duplicate key a");
    }
}
