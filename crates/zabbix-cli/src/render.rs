//! One-line text rendering of records for terminal output.

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use zabbix_types::{HistoryItem, Host, Item, Proxy, Script, ScriptOutcome, Template, Trigger};

pub trait Render {
    fn line(&self) -> String;
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn display_name<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.is_empty() { fallback } else { name }
}

impl Render for Host {
    fn line(&self) -> String {
        format!(
            "{}\t{}\t{}",
            self.host_id,
            display_name(&self.name, &self.host),
            or_dash(self.status)
        )
    }
}

impl Render for Item {
    fn line(&self) -> String {
        let last = if self.last_value.is_empty() {
            "-".to_string()
        } else {
            format!("{} @ {}", self.last_value, or_dash(self.last_clock))
        };
        format!(
            "{}\t{}\t{}\t{}\t{last}",
            self.item_id, self.key, self.item_type, self.value_type
        )
    }
}

impl Render for Trigger {
    fn line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.trigger_id,
            or_dash(self.priority),
            or_dash(self.status),
            self.description
        )
    }
}

impl Render for Template {
    fn line(&self) -> String {
        format!(
            "{}\t{}",
            self.template_id,
            display_name(&self.name, &self.host)
        )
    }
}

impl Render for Proxy {
    fn line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.proxy_id,
            self.host,
            or_dash(self.proxy_type),
            or_dash(self.last_access)
        )
    }
}

impl Render for Script {
    fn line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.script_id,
            self.name,
            or_dash(self.execute_on),
            self.command
        )
    }
}

impl Render for HistoryItem {
    fn line(&self) -> String {
        format!("{}\t{}", self.clock, self.value)
    }
}

impl Render for ScriptOutcome {
    fn line(&self) -> String {
        format!("{}: {}", self.response, self.value)
    }
}

/// Write `records` as pretty JSON or one line each.
pub fn write_records<W, R>(out: &mut W, records: &[R], json: bool) -> Result<()>
where
    W: Write,
    R: Render + Serialize,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, records)?;
        writeln!(out)?;
        return Ok(());
    }

    for record in records {
        writeln!(out, "{}", record.line())?;
    }
    Ok(())
}
