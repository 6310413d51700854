use std::env;
use std::process::ExitCode;

mod cli;
mod exits;
mod logging;

fn main() -> ExitCode {
    exits::harden_process();
    logging::init();

    let args: Vec<String> = env::args().collect();
    let result = cli::run(&args);
    exits::code(result, cli::program(&args))
}
