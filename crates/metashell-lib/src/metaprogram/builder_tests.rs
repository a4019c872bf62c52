//! Tests for trace replay and vertex deduplication.

use metashell_core::{FileLocation, InstantiationKind, Type};

use super::fixtures::{begin, begin_kind, build, end, end_kind, fib_events};
use super::*;
use crate::Error;

fn try_build(events: Vec<TraceEvent>) -> crate::Result<Metaprogram> {
    Metaprogram::from_events(events, Mode::Normal, "root", Type::new("int"))
}

#[test]
fn empty_trace_is_root_only() {
    let mp = try_build(vec![]).unwrap();

    assert_eq!(mp.vertex_count(), 1);
    assert_eq!(mp.edge_count(), 0);
    assert_eq!(mp.root_name(), &Type::new("root"));
    assert_eq!(mp.evaluation_result(), &Type::new("int"));
}

#[test]
fn nested_events_follow_the_open_stack() {
    let mp = try_build(vec![begin("a"), begin("b"), end(), end(), begin("c"), end()]).unwrap();

    let edges: Vec<_> = mp
        .edges()
        .map(|(_, e)| {
            (
                mp.vertex(e.source).name.to_string(),
                mp.vertex(e.target).name.to_string(),
            )
        })
        .collect();

    assert_eq!(
        edges,
        vec![
            ("root".to_owned(), "a".to_owned()),
            ("a".to_owned(), "b".to_owned()),
            ("root".to_owned(), "c".to_owned()),
        ]
    );
}

#[test]
fn same_context_shares_one_vertex() {
    let mp = try_build(vec![begin("a"), end(), begin("a"), end()]).unwrap();

    assert_eq!(mp.vertex_count(), 2);
    assert_eq!(mp.edge_count(), 2);
    assert_eq!(mp.edge(0).target, mp.edge(1).target);
    assert_eq!(mp.out_edges(mp.root()), &[0, 1]);
}

#[test]
fn shared_vertex_keeps_both_edge_kinds() {
    let mp = build(fib_events(), Mode::Normal);

    assert_eq!(mp.vertex_count(), 4);
    assert_eq!(mp.edge_count(), 4);

    let fib1: Vec<_> = mp
        .edges()
        .filter(|(_, e)| mp.vertex(e.target).name.name() == "fib<1>")
        .map(|(_, e)| e.kind)
        .collect();
    assert_eq!(
        fib1,
        vec![
            InstantiationKind::TemplateInstantiation,
            InstantiationKind::Memoization
        ]
    );
}

#[test]
fn edges_carry_location_and_profile() {
    let mut builder = MetaprogramBuilder::new(Mode::Normal, "root", Type::new("int"));
    builder.template_begin(
        InstantiationKind::DefaultTemplateArgumentInstantiation,
        "x<int>",
        FileLocation::new("x.hpp", 7, 3),
        1.5,
        4096,
    );
    builder
        .template_end(InstantiationKind::DefaultTemplateArgumentInstantiation)
        .unwrap();
    let mp = builder.finish().unwrap();

    let edge = mp.edge(0);
    assert_eq!(edge.kind, InstantiationKind::DefaultTemplateArgumentInstantiation);
    assert_eq!(edge.point_of_instantiation, FileLocation::new("x.hpp", 7, 3));
    assert_eq!(edge.timestamp, 1.5);
    assert_eq!(edge.memory_usage, 4096);
}

#[test]
fn end_without_begin_is_mismatched() {
    let err = try_build(vec![end()]).unwrap_err();

    assert!(matches!(err, Error::MismatchedTrace));
}

#[test]
fn extra_end_is_mismatched() {
    let err = try_build(vec![begin("a"), end(), end()]).unwrap_err();

    assert!(matches!(err, Error::MismatchedTrace));
}

#[test]
fn missing_end_is_unterminated() {
    let err = try_build(vec![begin("a"), begin("b"), end()]).unwrap_err();

    assert!(matches!(err, Error::UnterminatedTrace));
    insta::assert_snapshot!(err.to_string(), @"some Templight TemplateEnd events are missing");
}

#[test]
fn end_kind_mismatch_is_tolerated() {
    let mp = try_build(vec![
        begin("a"),
        end_kind(InstantiationKind::Memoization),
        begin_kind(InstantiationKind::Memoization, "b"),
        end(),
    ]);

    assert!(mp.is_ok());
}

#[test]
fn mode_is_recorded() {
    let normal = build(fib_events(), Mode::Normal);
    let full = build(fib_events(), Mode::Full);

    assert_eq!(normal.mode(), Mode::Normal);
    assert_eq!(full.mode(), Mode::Full);
    assert_eq!(normal.vertex_count(), full.vertex_count());
}
