use std::process::ExitCode;

use pyjson_cli::{cli, Pipeline};

fn main() -> ExitCode {
    let args = cli::parse_args(Pipeline::Marshal);
    cli::run(Pipeline::Marshal, args)
}
