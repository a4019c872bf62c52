use std::path::PathBuf;

use metashell_lib::{Metaprogram, Mode, Type};

pub struct CheckArgs {
    pub trace_path: PathBuf,
}

pub fn run(args: CheckArgs) {
    let mp = match Metaprogram::from_templight_file(
        &args.trace_path,
        Mode::Normal,
        "<root>",
        Type::new("<unknown>"),
    ) {
        Ok(mp) => mp,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // The root vertex is not an instantiation.
    println!(
        "{}: {} instantiations of {} entities",
        args.trace_path.display(),
        mp.edge_count(),
        mp.vertex_count() - 1
    );
}
