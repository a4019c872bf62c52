//! Line-driven metadebugger.
//!
//! Each input line is resolved against the command table and executed
//! against the current session. All output goes to the `Displayer` passed
//! with the line, so the same shell drives a terminal, a JSON client or a
//! test.

use std::str::FromStr;

use metashell_core::{Frame, Type};
use regex::Regex;

use super::command_map::CommandMap;
use super::commands::{MdbCommand, MdbCommandKind, command_map};
use crate::Result;
use crate::display::Displayer;
use crate::metaprogram::{Cursor, Metaprogram, Mode, Navigator, StepOutcome, TraceEvent};

pub const PROMPT: &str = "(mdb) ";

const NOT_EVALUATED: &str = "Metaprogram not evaluated yet";
const BAD_ARGUMENT: &str = "Argument parsing failed";
const NO_ARGUMENTS: &str = "This command doesn't accept arguments";

/// Trace of one evaluation, as produced by a [`TraceSource`].
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub events: Vec<TraceEvent>,
    pub result: Type,
}

/// Produces instantiation traces for expressions.
pub trait TraceSource {
    fn evaluate(&mut self, expression: &str) -> Result<Evaluation>;
}

/// Stops `continue` on frames whose name matches a regex.
#[derive(Clone, Debug)]
pub struct Breakpoint {
    pattern: String,
    regex: Regex,
}

impl Breakpoint {
    pub fn new(pattern: &str) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            pattern: pattern.to_owned(),
            regex: Regex::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, frame: &Frame) -> bool {
        self.regex.is_match(frame.name().name())
    }
}

struct Session {
    expression: String,
    mp: Metaprogram,
    cursor: Cursor,
}

impl Session {
    fn navigator(&mut self) -> Navigator<'_> {
        Navigator::new(&self.mp, &mut self.cursor)
    }
}

pub struct MdbShell<S> {
    source: S,
    commands: CommandMap<MdbCommand>,
    session: Option<Session>,
    breakpoints: Vec<Breakpoint>,
    full_mode: bool,
    last_line: Option<String>,
    stopped: bool,
}

impl<S: TraceSource> MdbShell<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            commands: command_map(),
            session: None,
            breakpoints: Vec::new(),
            full_mode: false,
            last_line: None,
            stopped: false,
        }
    }

    /// Evaluate in full mode even without `-full`.
    pub fn with_full_mode(mut self, full_mode: bool) -> Self {
        self.full_mode = full_mode;
        self
    }

    pub fn prompt(&self) -> &'static str {
        PROMPT
    }

    /// True once `quit` was executed.
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn metaprogram(&self) -> Option<&Metaprogram> {
        self.session.as_ref().map(|s| &s.mp)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Execute lines until they run out or `quit` is executed.
    pub fn run_lines<'l>(
        &mut self,
        lines: impl IntoIterator<Item = &'l str>,
        displayer: &mut dyn Displayer,
    ) {
        for line in lines {
            if self.stopped {
                break;
            }
            self.line_available(line, displayer);
        }
    }

    /// Execute one line of input.
    ///
    /// An empty line repeats the previous line if its command is repeatable.
    pub fn line_available(&mut self, line: &str, displayer: &mut dyn Displayer) {
        let line = if line.trim().is_empty() {
            match &self.last_line {
                Some(previous) => previous.clone(),
                None => return,
            }
        } else {
            line.to_owned()
        };

        let (command, args) = match self.commands.resolve(&line) {
            Ok((command, args)) => (*command, args.trim_end().to_owned()),
            Err(err) => {
                self.last_line = None;
                displayer.show_error(&err.to_string());
                return;
            }
        };
        self.last_line = command.is_repeatable().then(|| line.clone());

        log::debug!("mdb: {:?} {:?}", command.kind(), args);
        match command.kind() {
            MdbCommandKind::Evaluate => self.evaluate(&args, displayer),
            MdbCommandKind::Step => self.step(&args, displayer),
            MdbCommandKind::Continue => self.continue_(&args, displayer),
            MdbCommandKind::Forwardtrace => self.forwardtrace(&args, displayer),
            MdbCommandKind::Backtrace => self.backtrace(&args, displayer),
            MdbCommandKind::Frame => self.frame(&args, displayer),
            MdbCommandKind::Rbreak => self.rbreak(&args, displayer),
            MdbCommandKind::Help => self.help(&args, displayer),
            MdbCommandKind::Quit => self.quit(&args, displayer),
        }
    }

    fn evaluate(&mut self, args: &str, d: &mut dyn Displayer) {
        let (full, expression) = strip_full(args);
        let expression = match (expression, &self.session) {
            ("", Some(session)) => session.expression.clone(),
            ("", None) => {
                d.show_error("Nothing has been evaluated yet.");
                return;
            }
            (expression, _) => expression.to_owned(),
        };
        let mode = if full || self.full_mode {
            Mode::Full
        } else {
            Mode::Normal
        };

        let built = self.source.evaluate(&expression).and_then(|eval| {
            Metaprogram::from_events(eval.events, mode, &expression, eval.result)
        });
        match built {
            Ok(mp) => {
                let cursor = Cursor::new(&mp);
                self.session = Some(Session {
                    expression,
                    mp,
                    cursor,
                });
                d.show_raw_text("Metaprogram started");
            }
            Err(err) => d.show_error(&err.to_string()),
        }
    }

    fn step(&mut self, args: &str, d: &mut dyn Displayer) {
        let Some(session) = self.session.as_mut() else {
            d.show_error(NOT_EVALUATED);
            return;
        };

        let mut words = args.split_whitespace().peekable();
        let qualifier = words.next_if(|w| matches!(*w, "over" | "out"));
        let count = match (words.next().map(str::parse::<i64>), words.next()) {
            (None, _) => 1,
            (Some(Ok(n)), None) => n,
            _ => {
                d.show_error(BAD_ARGUMENT);
                return;
            }
        };
        if qualifier.is_some() && count < 0 {
            d.show_error("Stepping backwards with over or out is not supported");
            return;
        }

        let mut nav = session.navigator();
        match qualifier {
            None if count >= 0 => {
                nav.step_into(count as usize);
            }
            None => {
                nav.step_back_by(count.unsigned_abs() as usize);
            }
            Some("over") => {
                for _ in 0..count {
                    if nav.step_over() != StepOutcome::Moved {
                        break;
                    }
                }
            }
            Some(_) => {
                for _ in 0..count {
                    match nav.step_out() {
                        StepOutcome::Moved => {}
                        StepOutcome::AtRoot => {
                            d.show_error("Already at the top level");
                            return;
                        }
                        StepOutcome::AlreadyFinished => break,
                    }
                }
            }
        }
        display_current(&nav, d);
    }

    fn continue_(&mut self, args: &str, d: &mut dyn Displayer) {
        let Some(session) = self.session.as_mut() else {
            d.show_error(NOT_EVALUATED);
            return;
        };
        let Some(count) = parse_or(args, 1i64) else {
            d.show_error(BAD_ARGUMENT);
            return;
        };

        let breakpoints = &self.breakpoints;
        let hit = |frame: &Frame| breakpoints.iter().any(|bp| bp.matches(frame));
        let mut nav = session.navigator();
        for _ in 0..count.unsigned_abs() {
            let outcome = if count > 0 {
                nav.continue_until(hit)
            } else {
                nav.continue_back_until(hit)
            };
            if outcome != StepOutcome::Moved {
                break;
            }
        }

        let reached = nav
            .current_frame()
            .filter(|_| !nav.is_at_root())
            .and_then(|frame| {
                let bp = breakpoints.iter().find(|bp| bp.matches(&frame))?;
                Some((bp, frame))
            });
        match reached {
            Some((bp, frame)) => {
                d.show_raw_text(&format!("Breakpoint \"{}\" reached", bp.pattern()));
                d.show_frame(&frame);
            }
            None => display_current(&nav, d),
        }
    }

    fn forwardtrace(&mut self, args: &str, d: &mut dyn Displayer) {
        let Some(session) = self.session.as_mut() else {
            d.show_error(NOT_EVALUATED);
            return;
        };
        let (full, rest) = strip_full(args);
        let max_depth = if rest.is_empty() {
            None
        } else if let Ok(depth) = rest.parse::<usize>() {
            Some(depth)
        } else {
            d.show_error(BAD_ARGUMENT);
            return;
        };

        let nav = session.navigator();
        if nav.is_finished() {
            display_current(&nav, d);
            return;
        }
        let mode = if full {
            Mode::Full
        } else {
            nav.metaprogram().mode()
        };
        d.show_call_graph(&nav.call_graph(mode, max_depth));
    }

    fn backtrace(&mut self, args: &str, d: &mut dyn Displayer) {
        if !args.is_empty() {
            d.show_error(NO_ARGUMENTS);
            return;
        }
        let Some(session) = self.session.as_mut() else {
            d.show_error(NOT_EVALUATED);
            return;
        };

        let nav = session.navigator();
        if nav.is_finished() {
            display_current(&nav, d);
        } else {
            d.show_backtrace(&nav.backtrace());
        }
    }

    fn frame(&mut self, args: &str, d: &mut dyn Displayer) {
        let Some(session) = self.session.as_mut() else {
            d.show_error(NOT_EVALUATED);
            return;
        };
        let Ok(index) = args.parse::<usize>() else {
            d.show_error(BAD_ARGUMENT);
            return;
        };

        let nav = session.navigator();
        if nav.is_finished() {
            display_current(&nav, d);
            return;
        }
        match nav.backtrace().get(index) {
            Some(frame) => d.show_frame(frame),
            None => d.show_error("Frame index out of range"),
        }
    }

    fn rbreak(&mut self, args: &str, d: &mut dyn Displayer) {
        if args.is_empty() {
            d.show_error("Argument expected");
            return;
        }
        let Some(session) = self.session.as_ref() else {
            d.show_error(NOT_EVALUATED);
            return;
        };
        let Ok(breakpoint) = Breakpoint::new(args) else {
            d.show_error(&format!("\"{}\" is not a valid regex", args));
            return;
        };

        let mp = &session.mp;
        let locations = mp
            .vertices()
            .filter(|&(id, vertex)| {
                id != mp.root() && breakpoint.regex.is_match(vertex.name.name())
            })
            .count();

        if locations == 0 {
            d.show_raw_text(&format!(
                "Breakpoint \"{}\" will never stop the execution",
                args
            ));
            return;
        }
        d.show_raw_text(&format!(
            "Breakpoint \"{}\" will stop the execution on {} location{}",
            args,
            locations,
            if locations == 1 { "" } else { "s" }
        ));
        self.breakpoints.push(breakpoint);
    }

    fn help(&self, args: &str, d: &mut dyn Displayer) {
        if args.is_empty() {
            d.show_raw_text("List of available commands:");
            d.show_raw_text("");
            for cmd in self.commands.commands() {
                d.show_raw_text(&format!(
                    "{} -- {}",
                    cmd.keys().join("|"),
                    cmd.short_description()
                ));
            }
            d.show_raw_text("");
            d.show_raw_text("Type \"help\" followed by a command name for more information.");
            return;
        }

        match self.commands.resolve(args) {
            Ok((cmd, "")) => {
                d.show_raw_text(&cmd.synopsis());
                d.show_raw_text("");
                d.show_raw_text(cmd.short_description());
                if !cmd.long_description().is_empty() {
                    d.show_raw_text(cmd.long_description());
                }
            }
            Ok(_) => d.show_error("Only one argument expected"),
            Err(_) => d.show_error(&format!("Command \"{}\" not found.", args)),
        }
    }

    fn quit(&mut self, args: &str, d: &mut dyn Displayer) {
        if !args.is_empty() {
            d.show_error(NO_ARGUMENTS);
            return;
        }
        self.stopped = true;
    }
}

fn display_current(nav: &Navigator<'_>, d: &mut dyn Displayer) {
    match nav.current_frame() {
        None => {
            d.show_raw_text("Metaprogram finished");
            d.show_type(nav.metaprogram().evaluation_result());
        }
        Some(_) if nav.is_at_root() => d.show_raw_text("Metaprogram started"),
        Some(frame) => d.show_frame(&frame),
    }
}

/// Split off a leading `-full` flag.
fn strip_full(args: &str) -> (bool, &str) {
    match args.strip_prefix("-full") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
            (true, rest.trim_start())
        }
        _ => (false, args),
    }
}

/// `default` for an empty argument, `None` if it does not parse.
fn parse_or<T: FromStr>(args: &str, default: T) -> Option<T> {
    if args.is_empty() {
        Some(default)
    } else {
        args.parse().ok()
    }
}
