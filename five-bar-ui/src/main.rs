//! Five🍀bar solves a five-bar linkage pose from the command line.
mod cli;
mod io;
mod prompt;

fn main() -> std::process::ExitCode {
    cli::Entry::main()
}
