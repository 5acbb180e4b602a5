use zabbix_rpc::Transport;
use zabbix_types::{HistoryItem, ValueType};

use crate::error::Result;
use crate::params::Params;
use crate::repository::Repository;

impl<T: Transport> Repository<'_, T, HistoryItem> {
    /// Up to `limit` latest values of one item, newest first, from the
    /// history table for `value_type`.
    ///
    /// # Errors
    ///
    /// Same as [`Repository::get`].
    pub async fn get_by_item_id(
        &self,
        item_id: &str,
        value_type: ValueType,
        limit: u32,
    ) -> Result<Vec<HistoryItem>> {
        let params = Params::new()
            .with("itemids", item_id)
            .with("history", value_type.code().to_string())
            .with("limit", limit.to_string())
            .with("sortfield", "clock")
            .with("sortorder", "DESC");
        self.get(params).await
    }
}
