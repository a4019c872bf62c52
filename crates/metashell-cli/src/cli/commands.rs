//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("metashell")
        .about("Inspect and debug C++ template instantiations recorded by Templight")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(trace_command())
        .subcommand(mdb_command())
}

/// Validate a trace file.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a Templight trace")
        .after_help(
            r#"EXAMPLES:
  metashell check fib.trace.xml
  metashell check fib.trace.xml -v"#,
        )
        .arg(trace_path_arg().required(true))
        .arg(verbose_arg())
}

/// Print the call graph of a trace.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Print the instantiation call graph of a Templight trace")
        .after_help(
            r#"EXAMPLES:
  metashell trace fib.trace.xml --root 'fib<5>::value'
  metashell trace fib.trace.xml --full --depth 2
  metashell trace fib.trace.xml --format json"#,
        )
        .arg(trace_path_arg().required(true))
        .arg(root_arg())
        .arg(full_arg())
        .arg(depth_arg())
        .arg(format_arg())
        .arg(width_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Start the metadebugger.
pub fn mdb_command() -> Command {
    Command::new("mdb")
        .about("Debug a template metaprogram step by step")
        .override_usage(
            "\
  metashell mdb [TRACE]
  metashell mdb <TRACE> -x <COMMAND>...",
        )
        .after_help(
            r#"EXAMPLES:
  metashell mdb fib.trace.xml
  metashell mdb fib.trace.xml -x 'evaluate fib<5>::value' -x 'step 3' -x bt
  metashell mdb fib.trace.xml --full --format json"#,
        )
        .arg(trace_path_arg())
        .arg(result_arg())
        .arg(full_arg())
        .arg(execute_arg())
        .arg(format_arg())
        .arg(width_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
