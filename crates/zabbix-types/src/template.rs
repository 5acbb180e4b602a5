use serde::{Deserialize, Serialize};

use crate::host::{HostGroup, HostId};
use crate::wire::stringified;

/// <https://www.zabbix.com/documentation/3.2/manual/api/reference/template/object>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    #[serde(
        rename = "templateid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub template_id: String,

    pub host: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<HostGroup>,

    /// Hosts linked to the template.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<HostId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateId {
    #[serde(rename = "templateid", with = "stringified")]
    pub template_id: String,
}

impl From<String> for TemplateId {
    fn from(template_id: String) -> Self {
        Self { template_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_round_trip_omits_empty() {
        let template = Template {
            host: "Template OS Linux".to_string(),
            groups: vec![HostGroup::with_id("1")],
            ..Default::default()
        };

        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(
            value,
            json!({"host": "Template OS Linux", "groups": [{"groupid": "1"}]})
        );

        let back: Template = serde_json::from_value(value).unwrap();
        assert_eq!(back, template);
    }

    #[test]
    fn test_linked_hosts_decode_to_ids() {
        let template: Template = serde_json::from_value(json!({
            "templateid": 10001,
            "host": "Template OS Linux",
            "hosts": [{"hostid": "10084", "host": "Zabbix server"}]
        }))
        .unwrap();

        assert_eq!(template.template_id, "10001");
        assert_eq!(template.hosts, vec![HostId::from("10084".to_string())]);
    }
}
