use zabbix_rpc::Transport;
use zabbix_types::Host;

use crate::error::Result;
use crate::params::Params;
use crate::repository::Repository;

impl<T: Transport> Repository<'_, T, Host> {
    /// Hosts belonging to any of the given host groups.
    ///
    /// # Errors
    ///
    /// Same as [`Repository::get`].
    pub async fn get_by_host_group_ids(&self, ids: &[String]) -> Result<Vec<Host>> {
        self.get(Params::new().with("groupids", ids)).await
    }
}
