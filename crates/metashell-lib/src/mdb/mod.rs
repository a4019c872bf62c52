//! The metadebugger: an interactive prompt over a `Metaprogram`.

mod command_map;
mod commands;
mod shell;

#[cfg(test)]
mod commands_tests;

pub use command_map::{CommandError, CommandMap};
pub use commands::{COMMANDS, MdbCommand, MdbCommandKind, command_map};
pub use shell::{Breakpoint, Evaluation, MdbShell, PROMPT, TraceSource};
