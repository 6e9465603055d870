use std::path::PathBuf;
use std::process::ExitCode;

use clap::{arg, Command};
use tracing::{debug, error};

fn cli() -> Command {
    Command::new("packer")
        .about("Resolves the best item subset for each pack in an input file")
        .arg_required_else_help(true)
        .arg(
            arg!(<FILE> "Path to the pack input file, one pack per line")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let path = matches.get_one::<PathBuf>("FILE").expect("FILE is required");

    match packer_core::pack(path) {
        Ok(output) => {
            debug!(lines = output.lines().count(), "resolved all packs");
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
