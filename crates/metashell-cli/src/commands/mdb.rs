use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use metashell_lib::Type;
use metashell_lib::mdb::MdbShell;

use super::output::{OutputArgs, stdout_displayer};
use super::source::FileTraceSource;

pub struct MdbArgs {
    pub trace_path: Option<PathBuf>,
    pub result: String,
    pub full: bool,
    pub execute: Vec<String>,
    pub output: OutputArgs,
}

pub fn run(args: MdbArgs) {
    let source = FileTraceSource::new(args.trace_path, Type::new(args.result));
    let mut shell = MdbShell::new(source).with_full_mode(args.full);
    let mut displayer = stdout_displayer(&args.output);

    if !args.execute.is_empty() {
        shell.run_lines(args.execute.iter().map(String::as_str), displayer.as_mut());
        return;
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    while !shell.stopped() {
        if interactive {
            print!("{}", shell.prompt());
            if let Err(e) = io::stdout().flush() {
                log::debug!("cannot flush prompt: {e}");
            }
        }
        match lines.next() {
            Some(Ok(line)) => shell.line_available(&line, displayer.as_mut()),
            Some(Err(e)) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
            None => break,
        }
    }

    if interactive && !shell.stopped() {
        println!();
    }
}
