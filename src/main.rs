use std::env;
use std::process::ExitCode;

use passform::{cli, exits};

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    cli::run(args)
}
