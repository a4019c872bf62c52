//! Tests for JSON documents.

use metashell_core::{
    Backtrace, CallGraphNode, Frame, InstantiationKind, Paragraph, Text, Type,
};

use super::*;

fn emit(show: impl FnOnce(&mut JsonDisplayer<BufferConsole>)) -> String {
    let mut d = JsonDisplayer::new(BufferConsole::default());
    show(&mut d);
    d.into_console().output().to_owned()
}

#[test]
fn raw_text() {
    let out = emit(|d| d.show_raw_text("foo"));

    assert_eq!(out, "{\"type\":\"raw_text\",\"value\":\"foo\"}\n");
}

#[test]
fn error() {
    let out = emit(|d| d.show_error("foo"));

    assert_eq!(out, "{\"type\":\"error\",\"msg\":\"foo\"}\n");
}

#[test]
fn empty_items_are_skipped() {
    let out = emit(|d| {
        d.show_error("");
        d.show_type(&Type::default());
        d.show_cpp_code("");
    });

    assert_eq!(out, "");
}

#[test]
fn type_name() {
    let out = emit(|d| d.show_type(&Type::new("const fib_c<3>")));

    assert_eq!(out, "{\"type\":\"type\",\"name\":\"const fib_c<3>\"}\n");
}

#[test]
fn cpp_code() {
    let out = emit(|d| d.show_cpp_code("int main() {}"));

    assert_eq!(out, "{\"type\":\"cpp_code\",\"code\":\"int main() {}\"}\n");
}

#[test]
fn empty_comment() {
    let out = emit(|d| d.show_comment(&Text::default()));

    assert_eq!(out, "{\"type\":\"comment\",\"paragraphs\":[]}\n");
}

#[test]
fn comment_with_one_paragraph() {
    let paragraph = Paragraph::indented("foo bar", "x", "y");

    let out = emit(|d| d.show_comment(&paragraph.clone().into()));

    insta::assert_snapshot!(
        out.trim_end(),
        @r#"{"type":"comment","paragraphs":[{"first_line_indentation":"y","rest_of_lines_indentation":"x","content":"foo bar"}]}"#
    );
    assert_eq!(
        Document::from_json(&out).unwrap(),
        Document::Comment {
            paragraphs: vec![paragraph]
        }
    );
}

#[test]
fn frame_without_kind() {
    let out = emit(|d| d.show_frame(&Frame::new("fib_c<13>::type")));

    assert_eq!(out, "{\"type\":\"frame\",\"name\":\"fib_c<13>::type\"}\n");
}

#[test]
fn frame_with_every_kind() {
    for kind in InstantiationKind::ALL {
        let out = emit(|d| d.show_frame(&Frame::with_kind("fib_c<13>::type", kind)));

        assert_eq!(
            out,
            format!(
                "{{\"type\":\"frame\",\"name\":\"fib_c<13>::type\",\"kind\":\"{}\"}}\n",
                kind.as_str()
            )
        );
    }
}

#[test]
fn memoization_frame_round_trip() {
    let out = emit(|d| d.show_frame(&Frame::with_kind("fib<1>", InstantiationKind::Memoization)));

    let doc = Document::from_json(&out).unwrap();

    assert_eq!(
        doc,
        Document::Frame {
            name: Type::new("fib<1>"),
            kind: Some(InstantiationKind::Memoization),
        }
    );
}

#[test]
fn backtrace() {
    let trace: Backtrace = [
        Frame::new("fib_c<13>::type"),
        Frame::new("fib<int_<13>>::type"),
    ]
    .into_iter()
    .collect();

    let out = emit(|d| d.show_backtrace(&trace));

    insta::assert_snapshot!(
        out.trim_end(),
        @r#"{"type":"backtrace","frames":[{"name":"fib_c<13>::type"},{"name":"fib<int_<13>>::type"}]}"#
    );
}

#[test]
fn call_graph() {
    let nodes = [
        CallGraphNode::new(Frame::new("int"), 0, 1),
        CallGraphNode::new(Frame::new("int"), 1, 0),
    ];

    let out = emit(|d| d.show_call_graph(&nodes));

    insta::assert_snapshot!(
        out.trim_end(),
        @r#"{"type":"call_graph","nodes":[{"name":"int","depth":0,"children":1},{"name":"int","depth":1,"children":0}]}"#
    );
}

#[test]
fn call_graph_node_keeps_kind() {
    let node = CallGraphNode::new(Frame::with_kind("f", InstantiationKind::Memoization), 2, 0);

    let json = JsonNode::from(&node);

    assert_eq!(CallGraphNode::from(&json), node);
}

#[test]
fn one_document_per_line() {
    let out = emit(|d| {
        d.show_raw_text("a");
        d.show_error("b");
    });

    let docs: Vec<_> = out
        .lines()
        .map(|line| Document::from_json(line).unwrap())
        .collect();
    assert_eq!(
        docs,
        [
            Document::RawText {
                value: "a".to_owned()
            },
            Document::Error {
                msg: "b".to_owned()
            },
        ]
    );
}
