use serde::{Deserialize, Serialize};

use crate::codes::{ExecuteOn, HostAccess, ScriptType};
use crate::wire::stringified;

/// `response` value of a successful `script.execute`.
pub const SCRIPT_EXEC_SUCCESS: &str = "success";
/// `response` value of a failed `script.execute`.
pub const SCRIPT_EXEC_FAILED: &str = "failed";

/// Global script.
///
/// <https://www.zabbix.com/documentation/4.0/manual/api/reference/script/object>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    #[serde(
        rename = "scriptid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub script_id: String,

    pub command: String,
    pub name: String,

    /// Confirmation prompt shown by the frontend before running.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub confirmation: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_on: Option<ExecuteOn>,

    /// Host group the script is limited to; `"0"` means all groups.
    #[serde(
        rename = "groupid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub group_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_access: Option<HostAccess>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub script_type: Option<ScriptType>,

    /// User group allowed to run the script; `"0"` means all groups.
    #[serde(
        rename = "usrgrpid",
        with = "stringified",
        skip_serializing_if = "String::is_empty"
    )]
    pub user_group_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptId {
    #[serde(rename = "scriptid", with = "stringified")]
    pub script_id: String,
}

impl From<String> for ScriptId {
    fn from(script_id: String) -> Self {
        Self { script_id }
    }
}

/// Result of running a script on a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptOutcome {
    pub response: String,
    pub value: String,
}

impl ScriptOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response == SCRIPT_EXEC_SUCCESS
    }
}
