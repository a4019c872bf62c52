//! Displayer selection shared by the commands that print traces.

use std::io;

use metashell_lib::Displayer;
use metashell_lib::display::{
    Console, ConsoleConfig, ConsoleDisplayer, DEFAULT_WIDTH, JsonDisplayer, WriteConsole,
};

use crate::cli::OutputFormat;

pub struct OutputArgs {
    pub format: OutputFormat,
    pub width: Option<usize>,
    pub color: bool,
}

/// Displayer writing to stdout.
pub fn stdout_displayer(args: &OutputArgs) -> Box<dyn Displayer> {
    let console = WriteConsole::new(io::stdout(), console_width(args.width));
    displayer_for(args, console)
}

pub fn displayer_for<C: Console + 'static>(args: &OutputArgs, console: C) -> Box<dyn Displayer> {
    match args.format {
        OutputFormat::Console => Box::new(ConsoleDisplayer::new(
            console,
            ConsoleConfig {
                colored: args.color,
            },
        )),
        // Never colored: escape codes would end up inside JSON strings.
        OutputFormat::Json => Box::new(JsonDisplayer::new(console)),
    }
}

/// Explicit width, then `$COLUMNS`, then the default.
pub fn console_width(explicit: Option<usize>) -> usize {
    explicit
        .or_else(|| parse_columns(std::env::var("COLUMNS").ok().as_deref()))
        .unwrap_or(DEFAULT_WIDTH)
}

pub(crate) fn parse_columns(value: Option<&str>) -> Option<usize> {
    value?.trim().parse().ok().filter(|&w| w > 0)
}
