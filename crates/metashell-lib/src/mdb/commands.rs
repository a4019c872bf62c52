//! The metadebugger command table.

use super::command_map::CommandMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MdbCommandKind {
    Evaluate,
    Step,
    Continue,
    Forwardtrace,
    Backtrace,
    Frame,
    Rbreak,
    Help,
    Quit,
}

/// Static description of one metadebugger command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MdbCommand {
    keys: &'static [&'static str],
    kind: MdbCommandKind,
    repeatable: bool,
    usage: &'static str,
    short_description: &'static str,
    long_description: &'static str,
}

impl MdbCommand {
    pub fn keys(&self) -> &'static [&'static str] {
        self.keys
    }

    pub fn kind(&self) -> MdbCommandKind {
        self.kind
    }

    /// Whether an empty line runs this command again.
    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn usage(&self) -> &'static str {
        self.usage
    }

    pub fn short_description(&self) -> &'static str {
        self.short_description
    }

    pub fn long_description(&self) -> &'static str {
        self.long_description
    }

    /// `key|alias` followed by the usage, e.g. `forwardtrace|ft [-full] [n]`.
    pub fn synopsis(&self) -> String {
        let keys = self.keys.join("|");
        if self.usage.is_empty() {
            keys
        } else {
            format!("{} {}", keys, self.usage)
        }
    }
}

pub const COMMANDS: [MdbCommand; 9] = [
    MdbCommand {
        keys: &["evaluate"],
        kind: MdbCommandKind::Evaluate,
        repeatable: false,
        usage: "[-full] [<type>]",
        short_description: "Evaluate and start debugging a new metaprogram.",
        long_description: "Evaluating a metaprogram using the `-full` qualifier will expand all \
            Memoization events. If <type> is omitted, the previous metaprogram is evaluated \
            again.",
    },
    MdbCommand {
        keys: &["step"],
        kind: MdbCommandKind::Step,
        repeatable: true,
        usage: "[over|out] [n]",
        short_description: "Step the program.",
        long_description: "Argument n means step n times. n defaults to 1 if not specified. \
            Negative n means step the program backwards. Use of the `over` qualifier will jump \
            over sub instantiations. Use of the `out` qualifier will jump out of the current \
            instantiation frame.",
    },
    MdbCommand {
        keys: &["continue"],
        kind: MdbCommandKind::Continue,
        repeatable: true,
        usage: "[n]",
        short_description: "Continue program being debugged.",
        long_description: "The program is continued until the nth breakpoint or the end of the \
            program is reached. n defaults to 1 if not specified. Negative n means continue the \
            program backwards.",
    },
    MdbCommand {
        keys: &["forwardtrace", "ft"],
        kind: MdbCommandKind::Forwardtrace,
        repeatable: false,
        usage: "[-full] [n]",
        short_description: "Print forwardtrace from the current point.",
        long_description: "The n specifier limits the depth of the trace. If n is not \
            specified, then the trace depth is unlimited. The `-full` qualifier expands \
            repeated instantiations.",
    },
    MdbCommand {
        keys: &["backtrace", "bt"],
        kind: MdbCommandKind::Backtrace,
        repeatable: false,
        usage: "",
        short_description: "Print backtrace from the current point.",
        long_description: "",
    },
    MdbCommand {
        keys: &["frame"],
        kind: MdbCommandKind::Frame,
        repeatable: false,
        usage: "n",
        short_description: "Inspect the nth frame of the current backtrace.",
        long_description: "",
    },
    MdbCommand {
        keys: &["rbreak"],
        kind: MdbCommandKind::Rbreak,
        repeatable: false,
        usage: "<regex>",
        short_description: "Add breakpoint for all types matching `<regex>`.",
        long_description: "",
    },
    MdbCommand {
        keys: &["help"],
        kind: MdbCommandKind::Help,
        repeatable: false,
        usage: "[<command>]",
        short_description: "Show help for commands.",
        long_description: "",
    },
    MdbCommand {
        keys: &["quit"],
        kind: MdbCommandKind::Quit,
        repeatable: false,
        usage: "",
        short_description: "Quit metadebugger.",
        long_description: "",
    },
];

/// Lookup table over [`COMMANDS`].
pub fn command_map() -> CommandMap<MdbCommand> {
    CommandMap::new(COMMANDS.iter().map(|cmd| (cmd.keys.iter().copied(), *cmd)))
}
