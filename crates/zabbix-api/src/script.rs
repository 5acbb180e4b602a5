use serde::Serialize;
use zabbix_rpc::Transport;
use zabbix_types::{Script, ScriptOutcome};

use crate::error::Result;
use crate::repository::{Repository, decode};

#[derive(Serialize)]
struct ExecuteParams<'a> {
    #[serde(rename = "scriptid")]
    script_id: &'a str,
    #[serde(rename = "hostid")]
    host_id: &'a str,
}

impl<T: Transport> Repository<'_, T, Script> {
    /// Run a script on a host via `script.execute`.
    ///
    /// A script that ran but failed is not an error; check
    /// [`ScriptOutcome::is_success`].
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `Error::Decode` if the result lacks
    /// `response` or `value`.
    pub async fn execute(&self, script_id: &str, host_id: &str) -> Result<ScriptOutcome> {
        const METHOD: &str = "script.execute";

        let result = self.call(METHOD, &ExecuteParams { script_id, host_id }).await?;
        decode(METHOD, result)
    }
}
