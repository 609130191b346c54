use std::path::Path;
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tsord_cli::{App, CheckArgs, Command, InitArgs, EXAMPLE_INPUT};
use tsord_core::report::{format_object_log, format_outcomes};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Check(args) => check(args),
        Command::Init(args) => init(args),
    }
}

fn check(args: &CheckArgs) {
    let text = fs::read_to_string(&args.input).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", args.input.display());
        eprintln!(
            "Run `tsord init {}` to create an example input file.",
            args.input.display()
        );
        process::exit(1);
    });

    let workload = tsord_parser::parse_input(&text).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {e}", args.input.display());
        process::exit(1);
    });

    let report = tsord_core::validate(&workload).unwrap_or_else(|e| {
        eprintln!("Validation aborted: {e:?}");
        process::exit(1);
    });

    if args.json {
        let json = serde_json::to_string(&report).unwrap_or_else(|e| {
            eprintln!("Failed to encode report: {e}");
            process::exit(1);
        });
        println!("{json}");
        return;
    }

    if args.verbose {
        for outcome in &report.outcomes {
            println!("{outcome}");
        }
    }

    fs::write(&args.output, format_outcomes(&report.outcomes)).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {e}", args.output.display());
        process::exit(1);
    });

    let log_dir = args
        .log_dir
        .clone()
        .unwrap_or_else(|| args.output.parent().unwrap_or(Path::new("")).to_path_buf());
    if !log_dir.as_os_str().is_empty() {
        fs::create_dir_all(&log_dir).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", log_dir.display());
            process::exit(1);
        });
    }

    // One log file per declared object, overwriting stale logs from earlier
    // runs, even when nothing touched the object this time.
    for object in &workload.objects {
        let entries = report.logs.get(object).unwrap_or_default();
        let path = log_dir.join(format!("{object}.txt"));
        fs::write(&path, format_object_log(entries)).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Validated {} schedules; verdicts in {}, object logs in {}.",
        report.outcomes.len(),
        args.output.display(),
        if log_dir.as_os_str().is_empty() {
            Path::new(".").display()
        } else {
            log_dir.display()
        },
    );
}

fn init(args: &InitArgs) {
    if args.path.exists() {
        eprintln!("{} already exists; refusing to overwrite.", args.path.display());
        process::exit(1);
    }

    fs::write(&args.path, EXAMPLE_INPUT).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {e}", args.path.display());
        process::exit(1);
    });

    println!("Wrote example input to {}.", args.path.display());
}
