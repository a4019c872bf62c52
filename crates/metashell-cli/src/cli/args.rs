//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use super::{ColorChoice, OutputFormat};

/// Templight trace file (positional).
pub fn trace_path_arg() -> Arg {
    Arg::new("trace_path")
        .value_name("TRACE")
        .value_parser(value_parser!(PathBuf))
        .help("Templight XML trace file")
}

/// Name of the evaluated expression (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .value_name("EXPR")
        .default_value("<root>")
        .help("Name of the evaluated expression, shown as the root frame")
}

/// Result type of the evaluation (--result).
pub fn result_arg() -> Arg {
    Arg::new("result")
        .long("result")
        .value_name("TYPE")
        .default_value("<unknown>")
        .help("Type the evaluation resulted in, shown when the metaprogram finishes")
}

/// Expand repeated instantiations (--full).
pub fn full_arg() -> Arg {
    Arg::new("full")
        .long("full")
        .action(ArgAction::SetTrue)
        .help("Expand every instantiation, including memoized ones")
}

/// Depth limit of the call graph (--depth).
pub fn depth_arg() -> Arg {
    Arg::new("depth")
        .long("depth")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Limit the depth of the call graph")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("console")
        .value_parser(value_parser!(OutputFormat))
        .help("Output format")
}

/// Console width (--width).
pub fn width_arg() -> Arg {
    Arg::new("width")
        .long("width")
        .value_name("COLUMNS")
        .value_parser(value_parser!(usize))
        .help("Console width (default: $COLUMNS or 80)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(value_parser!(ColorChoice))
        .help("Colorize output")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v info, -vv debug, -vvv trace)")
}

/// Metadebugger command to run instead of reading stdin (-x).
pub fn execute_arg() -> Arg {
    Arg::new("execute")
        .short('x')
        .long("execute")
        .value_name("COMMAND")
        .action(ArgAction::Append)
        .help("Run a metadebugger command (repeatable); stdin is not read")
}
