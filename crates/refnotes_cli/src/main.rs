//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `refnotes_core` linkage.
//! - Register notes from arguments and print the collected list.
//!
//! Arguments are `code=message` (explicit code) or `message` (auto code).
//! `--json` prints the registry snapshot instead of the plain list.

use log::info;
use refnotes_core::{default_log_level, init_logging, NoteCode, NoteRegistry};
use std::process::ExitCode;

const LOG_LEVEL_ENV: &str = "REFNOTES_LOG_LEVEL";
const LOG_DIR_ENV: &str = "REFNOTES_LOG_DIR";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level = std::env::var(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| default_log_level().as_str().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("refnotes: {err}");
            return ExitCode::FAILURE;
        }
    }

    let mut json = false;
    let mut registry = NoteRegistry::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
            continue;
        }
        match arg.split_once('=') {
            Some((code, message)) => {
                let code = code.parse::<NoteCode>().unwrap_or_else(|never| match never {});
                registry.add(message, code)
            }
            None => registry.add(arg, None),
        };
    }
    info!(
        "event=cli_collect module=cli status=ok notes={}",
        registry.len()
    );

    println!("refnotes_core version={}", refnotes_core::core_version());
    if json {
        match serde_json::to_string_pretty(&registry.snapshot()) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("refnotes: failed to encode snapshot: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    for entry in registry.entries() {
        for message in entry.messages {
            println!("[{}] {}", entry.code, message);
        }
    }
    ExitCode::SUCCESS
}
