//! Hosts, host groups and host interfaces.

use serde::{Deserialize, Serialize};

use crate::codes::{HostStatus, InterfaceType};
use crate::template::TemplateId;
use crate::wire::{optional, stringified};

/// Monitored host.
///
/// On create, `groups` must name at least one group by id and `interfaces`
/// must carry every interface the host's items poll through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Host {
    #[serde(
        rename = "hostid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub host_id: String,

    /// Technical name.
    pub host: String,

    /// Visible name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HostStatus>,

    #[serde(
        rename = "proxy_hostid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub proxy_host_id: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<HostGroup>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<HostInterface>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<TemplateId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostGroup {
    #[serde(rename = "groupid", with = "stringified")]
    pub group_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl HostGroup {
    /// Reference to an existing group, as `host.create` expects it.
    #[must_use]
    pub fn with_id(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            name: String::new(),
        }
    }
}

/// Interface a host is polled through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostInterface {
    #[serde(
        rename = "interfaceid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub interface_id: String,

    #[serde(
        rename = "hostid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub host_id: String,

    pub dns: String,
    pub ip: String,

    /// 1 when this is the default interface of its type.
    #[serde(with = "stringified")]
    pub main: i32,

    pub port: String,

    #[serde(rename = "type")]
    pub interface_type: InterfaceType,

    /// 1 to connect by IP, 0 by DNS name.
    #[serde(rename = "useip", with = "stringified")]
    pub use_ip: i32,

    #[serde(with = "optional", skip_serializing_if = "Option::is_none")]
    pub bulk: Option<i32>,
}

/// Identifier-only host record, as returned by `host.update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HostId {
    #[serde(rename = "hostid", with = "stringified")]
    pub host_id: String,
}

impl From<String> for HostId {
    fn from(host_id: String) -> Self {
        Self { host_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_interface_decodes_stringified_fields() {
        let iface: HostInterface = serde_json::from_value(json!({
            "interfaceid": "30",
            "hostid": "10084",
            "main": "1",
            "type": "2",
            "useip": "1",
            "ip": "127.0.0.1",
            "dns": "",
            "port": "161",
            "bulk": "1"
        }))
        .unwrap();

        assert_eq!(iface.interface_id, "30");
        assert_eq!(iface.main, 1);
        assert_eq!(iface.interface_type, InterfaceType::Snmp);
        assert_eq!(iface.use_ip, 1);
        assert_eq!(iface.bulk, Some(1));
    }

    #[test]
    fn test_interface_encoding_omits_empty_optionals() {
        let iface = HostInterface {
            ip: "10.0.0.1".to_string(),
            main: 1,
            port: "10050".to_string(),
            use_ip: 1,
            ..Default::default()
        };

        let value = serde_json::to_value(&iface).unwrap();
        assert_eq!(
            value,
            json!({
                "dns": "",
                "ip": "10.0.0.1",
                "main": "1",
                "port": "10050",
                "type": "1",
                "useip": "1"
            })
        );
    }

    #[test]
    fn test_host_create_payload() {
        let host = Host {
            host: "web-01".to_string(),
            groups: vec![HostGroup::with_id("2")],
            templates: vec![TemplateId::from("10001".to_string())],
            ..Default::default()
        };

        let value = serde_json::to_value(&host).unwrap();
        assert_eq!(
            value,
            json!({
                "host": "web-01",
                "groups": [{"groupid": "2"}],
                "templates": [{"templateid": "10001"}]
            })
        );
    }

    #[test]
    fn test_host_decodes_with_selectors() {
        let host: Host = serde_json::from_value(json!({
            "hostid": "10084",
            "host": "Zabbix server",
            "status": "0",
            "groups": [{"groupid": "4", "name": "Zabbix servers"}],
            "interfaces": [{"interfaceid": "1", "type": "1", "main": "1", "useip": "1",
                            "ip": "127.0.0.1", "dns": "", "port": "10050"}],
            "unknown_field": "ignored"
        }))
        .unwrap();

        assert_eq!(host.host_id, "10084");
        assert_eq!(host.status, Some(HostStatus::Monitored));
        assert_eq!(host.groups[0].name, "Zabbix servers");
        assert_eq!(host.interfaces.len(), 1);
        assert!(host.proxy_host_id.is_empty());
    }
}
