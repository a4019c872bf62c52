//! Small traces shared by the metaprogram and mdb tests.

use metashell_core::{FileLocation, InstantiationKind, Type};

use super::{Metaprogram, Mode, TraceEvent};

pub fn begin(context: &str) -> TraceEvent {
    begin_kind(InstantiationKind::TemplateInstantiation, context)
}

pub fn begin_kind(kind: InstantiationKind, context: &str) -> TraceEvent {
    TraceEvent::TemplateBegin {
        kind,
        context: context.to_owned(),
        location: FileLocation::new("main.cpp", 1, 1),
        timestamp: 0.0,
        memory_usage: 0,
    }
}

pub fn end() -> TraceEvent {
    end_kind(InstantiationKind::TemplateInstantiation)
}

pub fn end_kind(kind: InstantiationKind) -> TraceEvent {
    TraceEvent::TemplateEnd {
        kind,
        timestamp: 0.0,
        memory_usage: 0,
    }
}

/// ```text
/// fib<3>::value
/// + fib<2>
/// | + fib<1>
/// | ` fib<0>
/// ` fib<1> (Memoization)
/// ```
pub fn fib_events() -> Vec<TraceEvent> {
    vec![
        begin("fib<2>"),
        begin("fib<1>"),
        end(),
        begin("fib<0>"),
        end(),
        end(),
        begin_kind(InstantiationKind::Memoization, "fib<1>"),
        end_kind(InstantiationKind::Memoization),
    ]
}

/// `c` is reached from both `a` and `b`; only the first visit shows `d`.
pub fn diamond_events() -> Vec<TraceEvent> {
    vec![
        begin("a"),
        begin("c"),
        begin("d"),
        end(),
        end(),
        end(),
        begin("b"),
        begin("c"),
        end(),
        end(),
    ]
}

/// `a` instantiates `b`, which instantiates `a` again.
pub fn cycle_events() -> Vec<TraceEvent> {
    vec![begin("a"), begin("b"), begin("a"), end(), end(), end()]
}

pub fn build(events: Vec<TraceEvent>, mode: Mode) -> Metaprogram {
    Metaprogram::from_events(events, mode, "fib<3>::value", Type::new("int_<2>"))
        .expect("fixture trace is well formed")
}

pub fn fib() -> Metaprogram {
    build(fib_events(), Mode::Normal)
}
