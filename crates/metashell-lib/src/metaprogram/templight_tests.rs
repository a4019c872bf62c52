//! Tests for the Templight XML reader.

use indoc::indoc;
use metashell_core::{FileLocation, InstantiationKind, ParseError, Type};

use super::*;
use crate::Error;

const FIB: &str = indoc! {r#"
    <?xml version="1.0" standalone="yes"?>
    <Trace>
    <TemplateBegin>
        <Kind>TemplateInstantiation</Kind>
        <Context context = "fib&lt;2&gt;"/>
        <PointOfInstantiation>./test.cpp|22|37</PointOfInstantiation>
        <TimeStamp time = "421998401.188125"/>
        <MemoryUsage bytes = "0"/>
    </TemplateBegin>
    <TemplateBegin>
        <Kind>Memoization</Kind>
        <Context context = "fib&lt;1&gt;"/>
        <PointOfInstantiation>./test.cpp|4|11</PointOfInstantiation>
        <TimeStamp time = "421998401.188201"/>
        <MemoryUsage bytes = "512"/>
    </TemplateBegin>
    <TemplateEnd>
        <Kind>Memoization</Kind>
        <TimeStamp time = "421998401.188202"/>
        <MemoryUsage bytes = "512"/>
    </TemplateEnd>
    <TemplateEnd>
        <Kind>TemplateInstantiation</Kind>
        <TimeStamp time = "421998401.188300"/>
        <MemoryUsage bytes = "0"/>
    </TemplateEnd>
    </Trace>
"#};

fn trace_with(body: &str) -> String {
    format!("<Trace>{body}</Trace>")
}

const END: &str = r#"<TemplateEnd><Kind>TemplateInstantiation</Kind><TimeStamp time="0"/><MemoryUsage bytes="0"/></TemplateEnd>"#;

fn begin_with(kind: &str, location: &str) -> String {
    format!(
        r#"<TemplateBegin><Kind>{kind}</Kind><Context context="x"/><PointOfInstantiation>{location}</PointOfInstantiation><TimeStamp time="0"/><MemoryUsage bytes="0"/></TemplateBegin>"#
    )
}

#[test]
fn events_in_document_order() {
    let events = parse_templight(FIB).unwrap();

    assert_eq!(events.len(), 4);
    assert_eq!(
        events[0],
        TraceEvent::TemplateBegin {
            kind: InstantiationKind::TemplateInstantiation,
            context: "fib<2>".to_owned(),
            location: FileLocation::new("./test.cpp", 22, 37),
            timestamp: 421998401.188125,
            memory_usage: 0,
        }
    );
    assert_eq!(
        events[2],
        TraceEvent::TemplateEnd {
            kind: InstantiationKind::Memoization,
            timestamp: 421998401.188202,
            memory_usage: 512,
        }
    );
}

#[test]
fn builds_metaprogram_from_string() {
    let mp = Metaprogram::from_templight_str(FIB, Mode::Normal, "fib<3>", Type::new("int")).unwrap();

    assert_eq!(mp.vertex_count(), 3);
    assert_eq!(mp.edge_count(), 2);
}

#[test]
fn builds_metaprogram_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templight.xml");
    std::fs::write(&path, FIB).unwrap();

    let mp = Metaprogram::from_templight_file(&path, Mode::Full, "fib<3>", Type::new("int")).unwrap();

    assert_eq!(mp.edge_count(), 2);
    assert_eq!(mp.mode(), Mode::Full);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.xml");

    let err = Metaprogram::from_templight_file(&path, Mode::Normal, "x", Type::new("int"))
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn empty_trace() {
    assert_eq!(parse_templight("<Trace/>").unwrap(), vec![]);
}

#[test]
fn wrong_root_element() {
    let err = parse_templight("<Foo/>").unwrap_err();

    assert!(matches!(err, Error::MissingTraceElement));
}

#[test]
fn malformed_xml() {
    let err = parse_templight("<Trace>").unwrap_err();

    assert!(matches!(err, Error::Xml(_)));
}

#[test]
fn unknown_node() {
    let err = parse_templight(&trace_with("<TemplateMiddle/>")).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @r#"unknown templight xml node "TemplateMiddle""#);
}

#[test]
fn unknown_kind() {
    let xml = trace_with(&format!("{}{END}", begin_with("Instantiation", "a|1|2")));

    let err = parse_templight(&xml).unwrap_err();

    assert!(matches!(
        err,
        Error::Parse(ParseError::UnknownInstantiationKind(ref k)) if k == "Instantiation"
    ));
}

#[test]
fn sentinel_kind_is_not_a_trace_event() {
    let xml = trace_with(&begin_with("NonTemplateType", "a|1|2"));

    let err = parse_templight(&xml).unwrap_err();

    assert!(matches!(
        err,
        Error::Parse(ParseError::UnknownInstantiationKind(_))
    ));
}

#[test]
fn bad_location() {
    let xml = trace_with(&begin_with("TemplateInstantiation", "a.cpp|one|2"));

    let err = parse_templight(&xml).unwrap_err();

    insta::assert_snapshot!(
        err.to_string(),
        @r#"templight xml parse failed: invalid file location: "a.cpp|one|2""#
    );
}

#[test]
fn missing_field() {
    let xml = trace_with(
        r#"<TemplateBegin><Kind>TemplateInstantiation</Kind><TimeStamp time="0"/><MemoryUsage bytes="0"/></TemplateBegin>"#,
    );

    let err = parse_templight(&xml).unwrap_err();

    insta::assert_snapshot!(
        err.to_string(),
        @"templight xml parse failed (TemplateBegin without PointOfInstantiation)"
    );
}

#[test]
fn bad_number() {
    let xml = trace_with(
        r#"<TemplateEnd><Kind>Memoization</Kind><TimeStamp time="0"/><MemoryUsage bytes="-1"/></TemplateEnd>"#,
    );

    let err = parse_templight(&xml).unwrap_err();

    assert!(matches!(err, Error::InvalidNumber { field: "MemoryUsage", .. }));
}

#[test]
fn unbalanced_trace_fails_to_build() {
    let xml = trace_with(END);

    let err = Metaprogram::from_templight_str(&xml, Mode::Normal, "x", Type::new("int")).unwrap_err();

    assert!(matches!(err, Error::MismatchedTrace));
}
