//! Enumerated code domains.
//!
//! Every domain is a closed enum plus an `Unknown` variant that keeps the raw
//! code, so a newer server never makes a record undecodable. Codes go over
//! the wire as strings (`"2"`) and render as their documented text.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::wire;

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident (default $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Code not known to this client; carries the raw value.
            Unknown(i64),
        }

        impl $name {
            #[must_use]
            pub fn code(self) -> i64 {
                match self {
                    $( Self::$variant => $code, )+
                    Self::Unknown(raw) => raw,
                }
            }

            #[must_use]
            pub fn from_code(code: i64) -> Self {
                match code {
                    $( $code => Self::$variant, )+
                    other => Self::Unknown(other),
                }
            }

            #[must_use]
            pub fn is_known(self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl CodeDomain for $name {
            fn lookup(code: i64) -> Self {
                Self::from_code(code)
            }

            fn known(self) -> bool {
                self.is_known()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                Self::from_code(code)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Self::$variant => f.write_str($text), )+
                    Self::Unknown(raw) => write!(f, "Unknown ({raw})"),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(&self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                wire::stringified::deserialize::<i64, D>(deserializer).map(Self::from_code)
            }
        }
    };
}

code_enum! {
    /// Host interface type.
    pub enum InterfaceType (default Agent) {
        Agent = 1 => "Agent",
        Snmp = 2 => "SNMP",
        Ipmi = 3 => "IPMI",
        Jmx = 4 => "JMX",
    }
}

code_enum! {
    /// How the server collects an item.
    pub enum ItemType (default ZabbixAgent) {
        ZabbixAgent = 0 => "Zabbix agent",
        SnmpV1Agent = 1 => "SNMPv1 agent",
        ZabbixTrapper = 2 => "Zabbix trapper",
        SimpleCheck = 3 => "simple check",
        SnmpV2Agent = 4 => "SNMPv2 agent",
        ZabbixInternal = 5 => "Zabbix internal",
        SnmpV3Agent = 6 => "SNMPv3 agent",
        ZabbixAgentActive = 7 => "Zabbix agent (active)",
        ZabbixAggregate = 8 => "Zabbix aggregate",
        WebItem = 9 => "Web item",
        ExternalCheck = 10 => "External check",
        DatabaseMonitor = 11 => "Database monitor",
        IpmiAgent = 12 => "IPMI agent",
        SshAgent = 13 => "SSH agent",
        TelnetAgent = 14 => "TELNET agent",
        Calculated = 15 => "Calculated",
        JmxAgent = 16 => "JMX agent",
        SnmpTrap = 17 => "SNMP trap",
        DependentItem = 18 => "Dependent item",
    }
}

code_enum! {
    /// Type of information an item stores. Also selects the history table.
    pub enum ValueType (default Float) {
        Float = 0 => "Numeric (float)",
        Character = 1 => "Character",
        Log = 2 => "Log",
        Unsigned = 3 => "Numeric (unsigned)",
        Text = 4 => "Text",
    }
}

code_enum! {
    /// Numeric base of integer item values (servers before 3.4).
    pub enum DataType (default Decimal) {
        Decimal = 0 => "Decimal",
        Octal = 1 => "Octal",
        Hexadecimal = 2 => "Hexadecimal",
        Boolean = 3 => "Boolean",
    }
}

code_enum! {
    /// Value preprocessing for numeric items (servers before 3.4).
    pub enum DeltaType (default AsIs) {
        AsIs = 0 => "As is",
        Speed = 1 => "Delta (speed per second)",
        Delta = 2 => "Delta (simple change)",
    }
}

code_enum! {
    pub enum ItemStatus (default Enabled) {
        Enabled = 0 => "Enabled",
        Disabled = 1 => "Disabled",
    }
}

code_enum! {
    /// Trigger severity.
    pub enum TriggerPriority (default Default) {
        Default = 0 => "Default",
        Information = 1 => "Information",
        Warning = 2 => "Warning",
        Average = 3 => "Average",
        High = 4 => "High",
        Disaster = 5 => "Disaster",
    }
}

code_enum! {
    pub enum TriggerStatus (default Enabled) {
        Enabled = 0 => "Enabled",
        Disabled = 1 => "Disabled",
    }
}

code_enum! {
    /// Current trigger state.
    pub enum TriggerValue (default Ok) {
        Ok = 0 => "OK",
        Problem = 1 => "Problem",
    }
}

code_enum! {
    pub enum ScriptType (default Script) {
        Script = 0 => "Script",
        Ipmi = 1 => "IPMI",
    }
}

code_enum! {
    /// Where a global script runs.
    pub enum ExecuteOn (default Server) {
        Agent = 0 => "Zabbix agent",
        Server = 1 => "Zabbix server",
        Proxy = 2 => "Zabbix server (proxy)",
    }
}

code_enum! {
    /// Host permission required to run a script.
    pub enum HostAccess (default Read) {
        Read = 2 => "Read",
        Write = 3 => "Write",
    }
}

code_enum! {
    /// Proxy mode, sent in the proxy `status` field.
    pub enum ProxyType (default Active) {
        Active = 5 => "Active proxy",
        Passive = 2 => "Passive proxy",
    }
}

code_enum! {
    pub enum HostStatus (default Monitored) {
        Monitored = 0 => "Monitored",
        Unmonitored = 1 => "Unmonitored",
    }
}

/// Lookup used by the raw-string text helpers.
trait CodeDomain: fmt::Display + Copy {
    fn lookup(code: i64) -> Self;
    fn known(self) -> bool;
}

/// Render a raw code string through a domain's text table.
///
/// Unknown codes keep the raw text: `"Unknown (<raw>)"`. A value that is not
/// an integer at all renders the parse error message instead.
fn raw_code_to_text<T: CodeDomain>(raw: &str) -> String {
    match raw.parse::<i64>() {
        Ok(code) => {
            let value = T::lookup(code);
            if value.known() {
                value.to_string()
            } else {
                format!("Unknown ({raw})")
            }
        }
        Err(e) => e.to_string(),
    }
}

/// Text for an item type code as sent by the server, e.g. `"2"`.
#[must_use]
pub fn item_type_to_text(raw: &str) -> String {
    raw_code_to_text::<ItemType>(raw)
}

/// Text for a trigger priority code as sent by the server.
#[must_use]
pub fn trigger_priority_to_text(raw: &str) -> String {
    raw_code_to_text::<TriggerPriority>(raw)
}

/// Text for a trigger status code as sent by the server.
#[must_use]
pub fn trigger_status_to_text(raw: &str) -> String {
    raw_code_to_text::<TriggerStatus>(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_type_text_table() {
        let expected = [
            (0, "Zabbix agent"),
            (1, "SNMPv1 agent"),
            (2, "Zabbix trapper"),
            (3, "simple check"),
            (7, "Zabbix agent (active)"),
            (15, "Calculated"),
            (18, "Dependent item"),
        ];
        for (code, text) in expected {
            assert_eq!(ItemType::from_code(code).to_string(), text);
            assert_eq!(item_type_to_text(&code.to_string()), text);
        }
    }

    #[test]
    fn test_unknown_code_renders_raw_value() {
        assert_eq!(ItemType::from_code(999), ItemType::Unknown(999));
        assert_eq!(ItemType::from_code(999).to_string(), "Unknown (999)");
        assert_eq!(item_type_to_text("999"), "Unknown (999)");
        assert_eq!(trigger_priority_to_text("999"), "Unknown (999)");
        assert_eq!(trigger_status_to_text("999"), "Unknown (999)");
    }

    #[test]
    fn test_non_numeric_code_renders_parse_error() {
        let text = item_type_to_text("agent");
        assert_eq!(text, "agent".parse::<i64>().unwrap_err().to_string());

        let text = trigger_priority_to_text("");
        assert_eq!(text, "".parse::<i64>().unwrap_err().to_string());
    }

    #[test]
    fn test_trigger_priority_and_status_text() {
        assert_eq!(trigger_priority_to_text("0"), "Default");
        assert_eq!(trigger_priority_to_text("2"), "Warning");
        assert_eq!(trigger_priority_to_text("5"), "Disaster");
        assert_eq!(trigger_status_to_text("0"), "Enabled");
        assert_eq!(trigger_status_to_text("1"), "Disabled");
    }

    #[test]
    fn test_code_round_trip() {
        for code in 0..=18 {
            assert_eq!(ItemType::from_code(code).code(), code);
        }
        assert_eq!(i64::from(ProxyType::Passive), 2);
        assert_eq!(ProxyType::from(5), ProxyType::Active);
        assert!(!ProxyType::from(3).is_known());
    }

    #[test]
    fn test_codes_serialize_as_strings() {
        assert_eq!(serde_json::to_value(ItemType::ZabbixTrapper).unwrap(), json!("2"));
        assert_eq!(serde_json::to_value(HostAccess::Write).unwrap(), json!("3"));
        assert_eq!(serde_json::to_value(ValueType::Unknown(42)).unwrap(), json!("42"));
    }

    #[test]
    fn test_codes_deserialize_from_string_or_number() {
        let from_str: TriggerPriority = serde_json::from_value(json!("4")).unwrap();
        let from_num: TriggerPriority = serde_json::from_value(json!(4)).unwrap();
        assert_eq!(from_str, TriggerPriority::High);
        assert_eq!(from_num, TriggerPriority::High);

        let unknown: InterfaceType = serde_json::from_value(json!("9")).unwrap();
        assert_eq!(unknown, InterfaceType::Unknown(9));
    }

    #[test]
    fn test_non_numeric_code_fails_to_decode() {
        assert!(serde_json::from_value::<ItemType>(json!("trapper")).is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ItemType::default(), ItemType::ZabbixAgent);
        assert_eq!(ExecuteOn::default(), ExecuteOn::Server);
        assert_eq!(HostAccess::default(), HostAccess::Read);
        assert_eq!(InterfaceType::default(), InterfaceType::Agent);
    }
}
