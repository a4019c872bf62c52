//! Reader for Templight XML traces.
//!
//! ```text
//! <Trace>
//!   <TemplateBegin>
//!     <Kind>TemplateInstantiation</Kind>
//!     <Context context="fib&lt;5&gt;"/>
//!     <PointOfInstantiation>test.cpp|22|37</PointOfInstantiation>
//!     <TimeStamp time="421998401.188125"/>
//!     <MemoryUsage bytes="0"/>
//!   </TemplateBegin>
//!   <TemplateEnd>
//!     <Kind>TemplateInstantiation</Kind>
//!     <TimeStamp time="421998401.188202"/>
//!     <MemoryUsage bytes="0"/>
//!   </TemplateEnd>
//! </Trace>
//! ```

use std::str::FromStr;

use metashell_core::{FileLocation, InstantiationKind};
use roxmltree::{Document, Node};

use super::builder::TraceEvent;
use crate::{Error, Result};

const BEGIN: &str = "TemplateBegin";
const END: &str = "TemplateEnd";

/// Decode every event of a trace, in document order.
pub fn parse_templight(xml: &str) -> Result<Vec<TraceEvent>> {
    let doc = Document::parse(xml)?;
    let trace = doc.root_element();
    if !trace.has_tag_name("Trace") {
        return Err(Error::MissingTraceElement);
    }

    trace
        .children()
        .filter(Node::is_element)
        .map(|node| match node.tag_name().name() {
            BEGIN => parse_begin(node),
            END => parse_end(node),
            other => Err(Error::UnknownTraceNode(other.to_owned())),
        })
        .collect()
}

fn parse_begin(node: Node<'_, '_>) -> Result<TraceEvent> {
    let location = child_text(node, BEGIN, "PointOfInstantiation")?;

    Ok(TraceEvent::TemplateBegin {
        kind: parse_kind(node, BEGIN)?,
        context: child_attribute(node, BEGIN, "Context", "context")?.to_owned(),
        location: location.parse::<FileLocation>()?,
        timestamp: parse_number(node, BEGIN, "TimeStamp", "time")?,
        memory_usage: parse_number(node, BEGIN, "MemoryUsage", "bytes")?,
    })
}

fn parse_end(node: Node<'_, '_>) -> Result<TraceEvent> {
    Ok(TraceEvent::TemplateEnd {
        kind: parse_kind(node, END)?,
        timestamp: parse_number(node, END, "TimeStamp", "time")?,
        memory_usage: parse_number(node, END, "MemoryUsage", "bytes")?,
    })
}

fn parse_kind(node: Node<'_, '_>, event: &'static str) -> Result<InstantiationKind> {
    let token = child_text(node, event, "Kind")?;
    Ok(InstantiationKind::from_templight(token)?)
}

fn parse_number<T: FromStr>(
    node: Node<'_, '_>,
    event: &'static str,
    element: &'static str,
    attribute: &'static str,
) -> Result<T> {
    let value = child_attribute(node, event, element, attribute)?;
    value.trim().parse().map_err(|_| Error::InvalidNumber {
        field: element,
        value: value.to_owned(),
    })
}

fn child<'a, 'input>(
    node: Node<'a, 'input>,
    event: &'static str,
    element: &'static str,
) -> Result<Node<'a, 'input>> {
    node.children()
        .find(|c| c.has_tag_name(element))
        .ok_or(Error::MissingField {
            event,
            field: element,
        })
}

fn child_text<'a>(
    node: Node<'a, '_>,
    event: &'static str,
    element: &'static str,
) -> Result<&'a str> {
    let text = child(node, event, element)?.text().ok_or(Error::MissingField {
        event,
        field: element,
    })?;
    Ok(text.trim())
}

fn child_attribute<'a>(
    node: Node<'a, '_>,
    event: &'static str,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str> {
    child(node, event, element)?
        .attribute(attribute)
        .ok_or(Error::MissingField {
            event,
            field: attribute,
        })
}
