//! Tests for call graph flattening.

use metashell_core::{CallGraphNode, Frame, InstantiationKind};

use super::fixtures::{begin, build, cycle_events, diamond_events, end, fib};
use super::*;

fn dump(nodes: &[CallGraphNode]) -> String {
    nodes
        .iter()
        .map(|n| {
            format!(
                "{}{} [{}]\n",
                "  ".repeat(n.depth),
                n.frame,
                n.number_of_children
            )
        })
        .collect()
}

fn from_root(mp: &Metaprogram, mode: Mode, max_depth: Option<usize>) -> Vec<CallGraphNode> {
    mp.call_graph(mp.root(), mp.root_frame(), mode, max_depth)
}

#[test]
fn fib_from_root() {
    let mp = fib();

    insta::assert_snapshot!(dump(&from_root(&mp, Mode::Normal, None)), @r"
    fib<3>::value [2]
      fib<2> (TemplateInstantiation) [2]
        fib<1> (TemplateInstantiation) [0]
        fib<0> (TemplateInstantiation) [0]
      fib<1> (Memoization) [0]
    ");
}

#[test]
fn normal_mode_expands_shared_vertex_once() {
    let mp = build(diamond_events(), Mode::Normal);

    insta::assert_snapshot!(dump(&from_root(&mp, Mode::Normal, None)), @r"
    fib<3>::value [2]
      a (TemplateInstantiation) [1]
        c (TemplateInstantiation) [1]
          d (TemplateInstantiation) [0]
      b (TemplateInstantiation) [1]
        c (TemplateInstantiation) [0]
    ");
}

#[test]
fn full_mode_expands_shared_vertex_every_time() {
    let mp = build(diamond_events(), Mode::Full);

    insta::assert_snapshot!(dump(&from_root(&mp, Mode::Full, None)), @r"
    fib<3>::value [2]
      a (TemplateInstantiation) [1]
        c (TemplateInstantiation) [1]
          d (TemplateInstantiation) [0]
      b (TemplateInstantiation) [1]
        c (TemplateInstantiation) [1]
          d (TemplateInstantiation) [0]
    ");
}

#[test]
fn cycle_is_not_reentered() {
    let mp = build(cycle_events(), Mode::Full);

    insta::assert_snapshot!(dump(&from_root(&mp, Mode::Full, None)), @r"
    fib<3>::value [1]
      a (TemplateInstantiation) [1]
        b (TemplateInstantiation) [1]
          a (TemplateInstantiation) [0]
    ");
}

#[test]
fn max_depth_cuts_children() {
    let mp = fib();

    insta::assert_snapshot!(dump(&from_root(&mp, Mode::Normal, Some(1))), @r"
    fib<3>::value [2]
      fib<2> (TemplateInstantiation) [0]
      fib<1> (Memoization) [0]
    ");
}

#[test]
fn max_depth_zero_is_start_only() {
    let mp = fib();

    let nodes = from_root(&mp, Mode::Normal, Some(0));

    assert_eq!(nodes, vec![CallGraphNode::new(mp.root_frame(), 0, 0)]);
}

#[test]
fn children_sum_to_vertex_count_minus_one_on_trees() {
    let mp = build(
        vec![
            begin("a"),
            begin("a1"),
            end(),
            begin("a2"),
            begin("a21"),
            end(),
            end(),
            end(),
            begin("b"),
            end(),
        ],
        Mode::Normal,
    );

    for mode in [Mode::Normal, Mode::Full] {
        let nodes = from_root(&mp, mode, None);
        let children: usize = nodes.iter().map(|n| n.number_of_children).sum();

        assert_eq!(nodes.len(), mp.vertex_count());
        assert_eq!(children, mp.vertex_count() - 1);
    }
}

#[test]
fn depths_are_relative_to_start() {
    let mp = fib();
    let (edge, _) = mp.edges().next().unwrap();

    let nodes = mp.call_graph(
        mp.edge(edge).target,
        mp.edge_frame(edge),
        Mode::Normal,
        None,
    );

    assert_eq!(
        nodes[0],
        CallGraphNode::new(
            Frame::with_kind("fib<2>", InstantiationKind::TemplateInstantiation),
            0,
            2
        )
    );
    assert_eq!(nodes.iter().map(|n| n.depth).collect::<Vec<_>>(), vec![0, 1, 1]);
}
