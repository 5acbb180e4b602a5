use serde::{Deserialize, Serialize};

use crate::codes::ProxyType;
use crate::timestamp::Timestamp;
use crate::wire::{optional, stringified};

/// <https://www.zabbix.com/documentation/3.2/manual/api/reference/proxy/object>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proxy {
    #[serde(
        rename = "proxyid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub proxy_id: String,

    pub host: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<ProxyType>,

    /// Read-only: last time the proxy contacted the server.
    #[serde(
        rename = "lastaccess",
        deserialize_with = "optional::deserialize",
        skip_serializing
    )]
    pub last_access: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyId {
    #[serde(rename = "proxyid", with = "stringified")]
    pub proxy_id: String,
}

impl From<String> for ProxyId {
    fn from(proxy_id: String) -> Self {
        Self { proxy_id }
    }
}
