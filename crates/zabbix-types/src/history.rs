use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;
use crate::wire::stringified;

/// One collected value of an item, from any history table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryItem {
    #[serde(rename = "itemid", with = "stringified")]
    pub item_id: String,

    pub clock: Timestamp,

    /// Raw value as stored; text for character, log and text tables.
    #[serde(with = "stringified")]
    pub value: String,

    /// Nanoseconds within `clock`.
    #[serde(with = "stringified")]
    pub ns: i64,
}

impl HistoryItem {
    /// Value of a float or unsigned row; `None` for non-numeric text.
    #[must_use]
    pub fn numeric(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }
}
