use zabbix_rpc::Transport;
use zabbix_types::Item;

use crate::error::Result;
use crate::params::Params;
use crate::repository::Repository;

impl<T: Transport> Repository<'_, T, Item> {
    /// Items attached to the application `id`.
    ///
    /// # Errors
    ///
    /// Same as [`Repository::get`].
    pub async fn get_by_application_id(&self, id: &str) -> Result<Vec<Item>> {
        self.get(Params::new().with("applicationids", id)).await
    }

    /// Items of the host `id`.
    ///
    /// # Errors
    ///
    /// Same as [`Repository::get`].
    pub async fn get_by_host_id(&self, id: &str) -> Result<Vec<Item>> {
        self.get(Params::new().with("hostids", id)).await
    }
}
