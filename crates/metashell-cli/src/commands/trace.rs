use std::path::PathBuf;

use metashell_lib::{Cursor, Metaprogram, Mode, Navigator, Type};

use super::output::{OutputArgs, stdout_displayer};

pub struct TraceArgs {
    pub trace_path: PathBuf,
    pub root: String,
    pub full: bool,
    pub depth: Option<usize>,
    pub output: OutputArgs,
}

pub fn run(args: TraceArgs) {
    let mode = if args.full { Mode::Full } else { Mode::Normal };
    let mp = match Metaprogram::from_templight_file(
        &args.trace_path,
        mode,
        &args.root,
        Type::new("<unknown>"),
    ) {
        Ok(mp) => mp,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let mut cursor = Cursor::new(&mp);
    let nav = Navigator::new(&mp, &mut cursor);
    let nodes = nav.call_graph(mode, args.depth);
    log::debug!("call graph: {} nodes", nodes.len());

    let mut displayer = stdout_displayer(&args.output);
    displayer.show_call_graph(&nodes);
}
