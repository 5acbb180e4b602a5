//! Binding of record types to their API method family.

use serde::Serialize;
use serde::de::DeserializeOwned;
use zabbix_types::{
    HistoryItem, Host, HostId, Item, Proxy, ProxyId, Script, ScriptId, Template, TemplateId,
    Trigger, TriggerId,
};

use crate::params::{OUTPUT, OUTPUT_EXTEND, Params};

/// A record fetched through `<METHOD_PREFIX>.get`.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    /// Method family, e.g. `"item"` for `item.get`.
    const METHOD_PREFIX: &'static str;

    /// Fill in params the caller did not set before a `get`.
    fn apply_defaults(params: &mut Params) {
        params.set_default(OUTPUT, OUTPUT_EXTEND);
    }
}

/// An entity with a server-assigned identifier.
pub trait Identified: Entity {
    /// Filter key for `get` and the id list key in create/delete results,
    /// e.g. `"itemids"`.
    const ID_KEY: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    fn clear_id(&mut self) {
        self.set_id(String::new());
    }
}

/// An entity that supports `<METHOD_PREFIX>.update`.
pub trait Updatable: Identified {
    /// Identifier-only record decoded from the update result.
    type IdRecord: From<String>;
}

macro_rules! identified {
    ($record:ty, $prefix:literal, $id_key:literal, $field:ident) => {
        impl Entity for $record {
            const METHOD_PREFIX: &'static str = $prefix;
        }

        impl Identified for $record {
            const ID_KEY: &'static str = $id_key;

            fn id(&self) -> &str {
                &self.$field
            }

            fn set_id(&mut self, id: String) {
                self.$field = id;
            }
        }
    };
    ($record:ty, $prefix:literal, $id_key:literal, $field:ident, update = $id_record:ty) => {
        identified!($record, $prefix, $id_key, $field);

        impl Updatable for $record {
            type IdRecord = $id_record;
        }
    };
}

identified!(Item, "item", "itemids", item_id);
identified!(Trigger, "trigger", "triggerids", trigger_id, update = TriggerId);
identified!(Template, "template", "templateids", template_id, update = TemplateId);
identified!(Proxy, "proxy", "proxyids", proxy_id, update = ProxyId);
identified!(Script, "script", "scriptids", script_id, update = ScriptId);
identified!(Host, "host", "hostids", host_id, update = HostId);

impl Entity for HistoryItem {
    const METHOD_PREFIX: &'static str = "history";

    fn apply_defaults(params: &mut Params) {
        params.set_default(OUTPUT, OUTPUT_EXTEND);
        params.set_default("limit", "100");
        params.set_default("history", "0");
    }
}
