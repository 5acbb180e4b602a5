//! Request parameter bag for `<entity>.get` and `<entity>.update`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const OUTPUT: &str = "output";
pub const OUTPUT_EXTEND: &str = "extend";

pub const SELECT_GROUPS: &str = "selectGroups";
pub const SELECT_HOSTS: &str = "selectHosts";
pub const SELECT_ITEMS: &str = "selectItems";
pub const SELECT_FUNCTIONS: &str = "selectFunctions";
pub const SELECT_DEPENDENCIES: &str = "selectDependencies";
pub const SELECT_DISCOVERY_RULE: &str = "selectDiscoveryRule";
pub const SELECT_LAST_EVENT: &str = "selectLastEvent";
pub const SELECT_TAGS: &str = "selectTags";
pub const SELECT_INTERFACES: &str = "selectInterfaces";
pub const SELECT_TEMPLATES: &str = "selectTemplates";
pub const SELECT_APPLICATIONS: &str = "selectApplications";

pub const EXPAND_COMMENT: &str = "expandComment";
pub const EXPAND_DESCRIPTION: &str = "expandDescription";
pub const EXPAND_EXPRESSION: &str = "expandExpression";

/// String-keyed map of JSON values sent as the `params` of a call.
///
/// ```
/// use zabbix_api::params::{Params, SELECT_HOSTS};
///
/// let params = Params::new()
///     .with("hostids", vec!["10084"])
///     .select(SELECT_HOSTS);
/// assert!(params.contains_key("selectHosts"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Request the full sub-objects for `selector`, e.g. [`SELECT_GROUPS`].
    #[must_use]
    pub fn select(self, selector: &str) -> Self {
        self.with(selector, OUTPUT_EXTEND)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert `value` only if `key` is absent. Returns whether it was inserted.
    pub fn set_default(&mut self, key: &str, value: impl Into<Value>) -> bool {
        if self.0.contains_key(key) {
            return false;
        }
        self.0.insert(key.to_string(), value.into());
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Params> for Value {
    fn from(params: Params) -> Self {
        params.into_value()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_default_keeps_caller_value() {
        let mut params = Params::new().with(OUTPUT, vec!["itemid", "name"]);

        assert!(!params.set_default(OUTPUT, OUTPUT_EXTEND));
        assert!(params.set_default("limit", "100"));

        assert_eq!(params.get(OUTPUT), Some(&json!(["itemid", "name"])));
        assert_eq!(params.get("limit"), Some(&json!("100")));
    }

    #[test]
    fn test_into_value() {
        let params = Params::new()
            .with("hostids", "10084")
            .select(SELECT_TAGS)
            .with(EXPAND_DESCRIPTION, true);

        assert_eq!(
            params.into_value(),
            json!({"hostids": "10084", "selectTags": "extend", "expandDescription": true})
        );
    }

    #[test]
    fn test_from_iter() {
        let params: Params = [("groupids", json!(["2", "4"]))].into_iter().collect();
        assert_eq!(params.len(), 1);
        assert!(!params.is_empty());
        assert!(params.contains_key("groupids"));
    }
}
