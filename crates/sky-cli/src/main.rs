// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use sky_cli::{CliError, Invocation, execute, load_dataset, parse_cli, render_json, render_plain,
              render_stat_line};
use std::env;
use std::process;

fn main() {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    match parse_cli(args)? {
        Invocation::Help => {
            print_help();
            Ok(())
        }
        Invocation::Version => {
            println!("skyline {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Invocation::Run(cli) => {
            let dataset = load_dataset(cli.dataset.as_path())?;
            let report = execute(dataset, &cli.mode)?;

            if cli.json {
                println!("{}", render_json(cli.dataset.as_path(), &report)?);
            } else {
                print!("{}", render_plain(&report));
            }
            eprintln!("{}", render_stat_line(&report));
            Ok(())
        }
    }
}

fn print_help() {
    println!(
        "skyline {}\n\nCompute the skyline (Pareto front) of a numeric dataset.\n\nUSAGE:\n  skyline <datasetfile> noisless [--json]\n  skyline <datasetfile> noisy <error_probability> <tolerance> [--seed <u64>] [--json]\n\nMODES:\n  noisless   Direct value access, deterministic output\n  noisy      Values behind a comparison oracle that errs with the given\n             probability; overall deviation from the true skyline is bounded\n             by the tolerance\n\nARGUMENTS:\n  <datasetfile>         Text file, one item per non-empty line; attributes\n                        separated by commas or whitespace\n  <error_probability>   Oracle error probability, in [0.0, 0.5)\n  <tolerance>           Overall error budget, in [0.0, 0.5)\n\nOPTIONS:\n  --seed <u64>    Deterministic oracle seed (noisy mode only)\n  --json          Emit a JSON report instead of index lines\n  -h, --help      Show help\n  -V, --version   Show version\n\nOUTPUT:\n  stdout: skyline indices, one per line, ascending (or the JSON report)\n  stderr: '<elapsed_ms> <comparison_count>' in noisy mode, '<elapsed_ms>'\n          in noisless mode",
        env!("CARGO_PKG_VERSION")
    );
}
