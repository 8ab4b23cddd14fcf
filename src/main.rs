//! Thin CLI layer: parse args, styled diagnostics, and call into fwlink-core.
//! Crash-proof: panic caught and reported; all errors return Result.

use clap::{Arg, ArgAction, Command};
use colored::Colorize;
use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use fwlink_core::Layout;

// ---- UI helpers (no-op when stderr isn't a TTY) ----

fn use_color() -> bool {
    io::stderr().is_terminal() && env::var("NO_COLOR").unwrap_or_default().is_empty()
}

fn error(msg: &str) {
    if use_color() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{}", msg);
    }
}

fn cli() -> Command {
    Command::new("fwlink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hash *.bin firmware images, write .sha256 sidecars, and link SHA256/<digest> -> ../<file>")
        .after_help(
            "Run inside a directory holding *.bin files and an existing SHA256/ directory.\n\nExamples:\n  fwlink\n  fwlink -C firmware/\n  fwlink --json -q",
        )
        .arg(
            Arg::new("dir")
                .short('C')
                .long("dir")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Firmware directory (default: current directory)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print a JSON report instead of progress lines"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("No log lines on stderr (or set FWLINK_QUIET=1)"),
        )
}

fn run() -> Result<(), String> {
    let matches = cli().get_matches();
    let json_out = matches.get_flag("json");
    if matches.get_flag("quiet") {
        fwlink_core::set_quiet(true);
    }

    let layout = match matches.get_one::<PathBuf>("dir") {
        Some(dir) => Layout::in_dir(dir.clone()),
        None => Layout::current_dir().map_err(|e| format!("Cannot read current directory: {}", e))?,
    };

    let result = if json_out {
        fwlink_core::tag_directory(&layout, &mut io::sink())
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let res = fwlink_core::tag_directory(&layout, &mut out);
        out.flush().map_err(|e| e.to_string())?;
        res
    };
    let report = result.map_err(|e| e.to_string())?;

    if json_out {
        let doc = serde_json::json!({
            "schemaVersion": "1",
            "command": "tag",
            "status": "ok",
            "files": report.files,
        });
        let s = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
        println!("{}", s);
    }
    Ok(())
}

fn main() {
    if !use_color() {
        colored::control::set_override(false);
    }

    let code = match std::panic::catch_unwind(run) {
        Ok(Ok(())) => 0,
        Ok(Err(e)) => {
            error(&e);
            1
        }
        Err(_) => {
            error("An unexpected error occurred. Please report this issue.");
            1
        }
    };
    std::process::exit(code);
}
