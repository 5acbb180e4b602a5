use zabbix_rpc::Transport;
use zabbix_types::Trigger;

use crate::error::Result;
use crate::params::Params;
use crate::repository::Repository;

impl<T: Transport> Repository<'_, T, Trigger> {
    /// Triggers defined on the host `id`.
    ///
    /// # Errors
    ///
    /// Same as [`Repository::get`].
    pub async fn get_by_host_id(&self, id: &str) -> Result<Vec<Trigger>> {
        self.get(Params::new().with("hostids", id)).await
    }
}
