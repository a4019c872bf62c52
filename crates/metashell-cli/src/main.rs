mod cli;
mod commands;
mod logger;

#[cfg(test)]
mod logger_tests;

use cli::{CheckParams, MdbParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            logger::init(params.verbose);
            commands::check::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            logger::init(params.verbose);
            commands::trace::run(params.into());
        }
        Some(("mdb", m)) => {
            let params = MdbParams::from_matches(m);
            logger::init(params.verbose);
            commands::mdb::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
