mod cli;
mod commands;
mod models;

use std::process::ExitCode;

use clap::Parser;

use crate::{
    cli::Cli,
    models::{ErrorJson, OutputMode},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let output_mode = OutputMode {
        json: cli.global.json,
        quiet: cli.global.quiet,
        verbose: cli.global.verbose,
    };

    match commands::random(&cli.language, &output_mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if output_mode.json {
                let body = ErrorJson {
                    ok: false,
                    error: err.to_string(),
                    code: err.code().to_string(),
                };
                match serde_json::to_string(&body) {
                    Ok(text) => println!("{text}"),
                    Err(_) => println!(
                        r#"{{"ok":false,"error":"Internal serialization error","code":"SERIALIZE"}}"#
                    ),
                }
            } else {
                eprintln!("Error: {err}");
            }
            ExitCode::from(1)
        }
    }
}
