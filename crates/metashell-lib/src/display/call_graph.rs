//! Tree art for call graphs.
//!
//! ```text
//! fib<3>::value
//! + fib<2> (TemplateInstantiation)
//! | + fib<1> (TemplateInstantiation)
//! | ` fib<0> (TemplateInstantiation)
//! ` fib<1> (Memoization)
//! ```
//!
//! Labels wider than the console are cut into chunks; continuation lines
//! repeat the ancestors' guides but not the node's own mark.

use std::fmt::Write as _;

use metashell_core::{CallGraphNode, Colors};

/// Below this many columns for the label, wrapping is not attempted.
pub const PRETTY_PRINT_THRESHOLD: usize = 10;

/// Render a pre-order call graph as display lines, without newlines.
pub fn render_call_graph(nodes: &[CallGraphNode], width: usize, colors: Colors) -> Vec<String> {
    let mut lines = Vec::new();
    // Entries not yet rendered at each depth. The root is the only entry at
    // depth 0.
    let mut remaining: Vec<usize> = vec![1];

    for node in nodes {
        let depth = node.depth;
        if remaining.len() < depth + 2 {
            remaining.resize(depth + 2, 0);
        }
        remaining[depth] = remaining[depth].saturating_sub(1);

        render_node(node, &remaining, width, colors, &mut lines);

        remaining[depth + 1] += node.number_of_children;
    }

    lines
}

fn render_node(
    node: &CallGraphNode,
    remaining: &[usize],
    width: usize,
    colors: Colors,
    lines: &mut Vec<String>,
) {
    let label = node.frame.to_string();
    let prefix_len = 2 * node.depth;

    if width < PRETTY_PRINT_THRESHOLD || prefix_len >= width - PRETTY_PRINT_THRESHOLD {
        let mut line = tree_prefix(node.depth, remaining, true, colors);
        line.push_str(&label);
        lines.push(line);
        return;
    }

    let chars: Vec<char> = label.chars().collect();
    if chars.is_empty() {
        lines.push(tree_prefix(node.depth, remaining, true, colors));
        return;
    }

    for (i, chunk) in chars.chunks(width - prefix_len).enumerate() {
        let mut line = tree_prefix(node.depth, remaining, i == 0, colors);
        line.extend(chunk);
        lines.push(line);
    }
}

/// Guides for every ancestor depth, then the node's own mark.
///
/// An ancestor depth gets `| ` while it still has entries to come. The mark
/// is `+ ` with siblings to come and `` ` `` for the last one; continuation
/// lines draw `| ` or blank instead.
fn tree_prefix(depth: usize, remaining: &[usize], mark: bool, colors: Colors) -> String {
    let mut out = String::new();
    if depth == 0 {
        return out;
    }

    let pending = |d: usize| remaining.get(d).copied().unwrap_or(0) > 0;

    for d in 1..depth {
        let guide = if pending(d) { "| " } else { "  " };
        paint(&mut out, guide, colors.for_depth(d), colors);
    }

    let own = match (mark, pending(depth)) {
        (true, true) => "+ ",
        (true, false) => "` ",
        (false, true) => "| ",
        (false, false) => {
            out.push_str("  ");
            return out;
        }
    };
    paint(&mut out, own, colors.for_depth(depth), colors);
    out
}

fn paint(out: &mut String, text: &str, color: &str, colors: Colors) {
    write!(out, "{}{}{}", color, text, colors.reset).unwrap();
}
