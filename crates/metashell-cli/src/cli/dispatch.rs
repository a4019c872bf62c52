//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep the raw CLI choices
//! (color mode, output format); the `From` impls resolve them.

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, OutputFormat};
use crate::commands::check::CheckArgs;
use crate::commands::mdb::MdbArgs;
use crate::commands::output::OutputArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub trace_path: PathBuf,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            trace_path: trace_path(m).unwrap_or_default(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            trace_path: p.trace_path,
        }
    }
}

pub struct TraceParams {
    pub trace_path: PathBuf,
    pub root: String,
    pub full: bool,
    pub depth: Option<usize>,
    pub format: OutputFormat,
    pub width: Option<usize>,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            trace_path: trace_path(m).unwrap_or_default(),
            root: string_arg(m, "root"),
            full: m.get_flag("full"),
            depth: m.get_one::<usize>("depth").copied(),
            format: parse_format(m),
            width: m.get_one::<usize>("width").copied(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            trace_path: p.trace_path,
            root: p.root,
            full: p.full,
            depth: p.depth,
            output: OutputArgs {
                format: p.format,
                width: p.width,
                color: p.color.should_colorize(),
            },
        }
    }
}

pub struct MdbParams {
    pub trace_path: Option<PathBuf>,
    pub result: String,
    pub full: bool,
    pub execute: Vec<String>,
    pub format: OutputFormat,
    pub width: Option<usize>,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl MdbParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            trace_path: trace_path(m),
            result: string_arg(m, "result"),
            full: m.get_flag("full"),
            execute: m
                .get_many::<String>("execute")
                .map(|lines| lines.cloned().collect())
                .unwrap_or_default(),
            format: parse_format(m),
            width: m.get_one::<usize>("width").copied(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<MdbParams> for MdbArgs {
    fn from(p: MdbParams) -> Self {
        Self {
            trace_path: p.trace_path,
            result: p.result,
            full: p.full,
            execute: p.execute,
            output: OutputArgs {
                format: p.format,
                width: p.width,
                color: p.color.should_colorize(),
            },
        }
    }
}

fn trace_path(m: &ArgMatches) -> Option<PathBuf> {
    m.get_one::<PathBuf>("trace_path").cloned()
}

fn string_arg(m: &ArgMatches, id: &str) -> String {
    m.get_one::<String>(id).cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    m.get_one::<ColorChoice>("color").copied().unwrap_or_default()
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    m.get_one::<OutputFormat>("format").copied().unwrap_or_default()
}
