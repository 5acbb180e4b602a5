//! Typed records for the Zabbix JSON-RPC API.
//!
//! This crate provides the entity records, code domains and wire coercion
//! rules shared by `zabbix-rpc`, `zabbix-api` and the `zbx` CLI. Every record
//! decodes from the loosely-typed wire format (numbers and codes sent as
//! strings) and encodes back without empty optional fields.

pub mod codes;
pub mod history;
pub mod host;
pub mod item;
pub mod proxy;
pub mod script;
pub mod template;
pub mod timestamp;
pub mod trigger;
pub mod wire;

pub use codes::{
    DataType, DeltaType, ExecuteOn, HostAccess, HostStatus, InterfaceType, ItemStatus, ItemType,
    ProxyType, ScriptType, TriggerPriority, TriggerStatus, TriggerValue, ValueType,
    item_type_to_text, trigger_priority_to_text, trigger_status_to_text,
};
pub use history::HistoryItem;
pub use host::{Host, HostGroup, HostId, HostInterface};
pub use item::{DuplicateKey, Item};
pub use proxy::{Proxy, ProxyId};
pub use script::{SCRIPT_EXEC_FAILED, SCRIPT_EXEC_SUCCESS, Script, ScriptId, ScriptOutcome};
pub use template::{Template, TemplateId};
pub use timestamp::{Timestamp, TimestampError};
pub use trigger::{Tag, Trigger, TriggerFunction, TriggerId};
pub use wire::IdList;
