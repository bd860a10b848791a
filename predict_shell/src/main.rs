// SPDX-License-Identifier: MIT OR Apache-2.0
//! predict-sim entry point.

use clap::Parser;
use predict_shell::cli::Cli;
use predict_shell::Shell;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut shell = match Shell::from_cli(&cli) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    let succeeded = if let Some(ref prompt) = cli.command {
        shell.run_once(prompt, cli.output_format)
    } else if let Some(ref path) = cli.file {
        match shell.run_file(path, cli.output_format) {
            Ok(all) => all,
            Err(e) => {
                eprintln!("{e}");
                false
            },
        }
    } else {
        match shell.run() {
            Ok(()) => true,
            Err(e) => {
                eprintln!("{e}");
                false
            },
        }
    };

    if !succeeded {
        std::process::exit(1);
    }
}
