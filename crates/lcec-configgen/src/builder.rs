// crates/lcec-configgen/src/builder.rs

//! Serializes a [`ConfigRoot`] into the LinuxCNC-EtherCAT XML document.
//!
//! The configuration tree is first converted into a small element tree whose
//! nodes know whether they have content. Nodes without children or comment
//! are written as self-closing tags; everything else gets an explicit start
//! and end tag with two-space indentation. No XML declaration is written.

use crate::error::ConfigGenError;
use crate::model::{ConfigRoot, MasterConfig, SlaveConfig};
use crate::types::{ModParam, Pdo, PdoEntry, SyncManager};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io;

/// A document node: attributes in output order, an optional leading comment
/// and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    comment: Option<String>,
    children: Vec<Element>,
}

impl Element {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            comment: None,
            children: Vec::new(),
        }
    }

    fn attr(mut self, key: &'static str, value: impl ToString) -> Self {
        self.attributes.push((key, value.to_string()));
        self
    }

    fn opt_attr<T: ToString>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.attr(key, v),
            None => self,
        }
    }

    fn comment(mut self, text: Option<&str>) -> Self {
        self.comment = text.map(str::to_string);
        self
    }

    fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    fn is_empty(&self) -> bool {
        self.comment.is_none() && self.children.is_empty()
    }
}

impl From<&ConfigRoot> for Element {
    fn from(root: &ConfigRoot) -> Self {
        Element::new("masters").children(&root.masters)
    }
}

impl From<&MasterConfig> for Element {
    fn from(master: &MasterConfig) -> Self {
        Element::new("master")
            .attr("idx", master.index)
            .opt_attr("appTimePeriod", master.app_time_period)
            .opt_attr("refClockSyncCycles", master.ref_clock_sync_cycles)
            .children(&master.slaves)
    }
}

impl From<&SlaveConfig> for Element {
    fn from(slave: &SlaveConfig) -> Self {
        Element::new("slave")
            .attr("idx", slave.index)
            .attr("type", &slave.driver_type)
            .opt_attr("vid", slave.vendor_id.map(|v| format!("0x{:08x}", v)))
            .opt_attr("pid", slave.product_id.map(|p| format!("0x{:08x}", p)))
            .attr("name", &slave.name)
            .comment(slave.comment.as_deref())
            .children(&slave.sync_managers)
            .children(&slave.mod_params)
    }
}

impl From<&SyncManager> for Element {
    fn from(sm: &SyncManager) -> Self {
        Element::new("syncManager")
            .attr("idx", sm.index)
            .attr("dir", sm.direction)
            .children(&sm.pdos)
    }
}

impl From<&Pdo> for Element {
    fn from(pdo: &Pdo) -> Self {
        Element::new("pdo")
            .attr("idx", format!("{:04x}", pdo.index))
            .comment(pdo.label.as_deref())
            .children(&pdo.entries)
    }
}

impl From<&PdoEntry> for Element {
    fn from(entry: &PdoEntry) -> Self {
        Element::new("pdoEntry")
            .attr("idx", format!("{:04x}", entry.index))
            .attr("subIdx", format!("{:02x}", entry.sub_index))
            .attr("bitLen", entry.bit_len)
            .attr("halPin", &entry.pin_name)
            .attr("halType", &entry.pin_type)
            .comment(entry.label.as_deref())
    }
}

impl From<&ModParam> for Element {
    fn from(param: &ModParam) -> Self {
        Element::new("modParam")
            .attr("name", &param.name)
            .attr("value", &param.value)
    }
}

/// XML comments may not contain `--` or end in `-`.
fn sanitize_comment(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Writes one event, reporting failures of the underlying sink as writer errors.
fn emit<W: io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), ConfigGenError> {
    writer
        .write_event(event)
        .map_err(quick_xml::Error::from)?;
    Ok(())
}

fn write_element<W: io::Write>(
    writer: &mut Writer<W>,
    element: &Element,
) -> Result<(), ConfigGenError> {
    let mut start = BytesStart::new(element.name);
    for (key, value) in &element.attributes {
        start.push_attribute((*key, value.as_str()));
    }

    if element.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    if let Some(comment) = &element.comment {
        emit(
            writer,
            Event::Comment(BytesText::from_escaped(sanitize_comment(comment))),
        )?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    emit(writer, Event::End(BytesEnd::new(element.name)))
}

/// Serializes `config` into an XML string ending with a newline.
pub fn save_config_to_string(config: &ConfigRoot) -> Result<String, ConfigGenError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_element(&mut writer, &Element::from(config))?;

    let mut buffer = writer.into_inner();
    buffer.push(b'\n');
    String::from_utf8(buffer)
        .map_err(|e| ConfigGenError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
