//! Command-line interface for retrace
//! This binary traces patterns against subject strings and prints or replays
//! the resulting step list.
//!
//! Usage:
//!   retrace trace `<pattern>` `<subject>` [--json]  - Print the full trace
//!   retrace view `<pattern>` `<subject>`            - Replay steps in a TUI
//!   retrace patterns                              - List the pattern library
//!   retrace cheatsheet                            - Print the token cheat sheet
//!   retrace challenges                            - List practice challenges
//!   retrace check `<challenge>` `<pattern>`         - Try a pattern on a challenge
mod viewer;

use clap::{Arg, ArgAction, Command};
use retrace::{catalog, StepKind, Trace};

fn main() {
    let matches = Command::new("retrace")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A step-by-step tracer for a simplified regex matching engine")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("trace")
                .about("Trace a pattern against a subject and print every step")
                .arg(
                    Arg::new("pattern")
                        .help("The pattern to trace")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("subject")
                        .help("The subject string to match against")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the trace as JSON instead of text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("view")
                .about("Replay the trace one step at a time in a terminal UI")
                .arg(
                    Arg::new("pattern")
                        .help("The pattern to trace")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("subject")
                        .help("The subject string to match against")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(Command::new("patterns").about("List the common-pattern library"))
        .subcommand(Command::new("cheatsheet").about("Print the token cheat sheet"))
        .subcommand(Command::new("challenges").about("List the practice challenges"))
        .subcommand(
            Command::new("check")
                .about("Evaluate a pattern against a practice challenge")
                .arg(
                    Arg::new("challenge")
                        .help("Challenge number (see `retrace challenges`)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("pattern")
                        .help("The candidate pattern")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("trace", sub)) => {
            let pattern = sub.get_one::<String>("pattern").unwrap();
            let subject = sub.get_one::<String>("subject").unwrap();
            handle_trace_command(pattern, subject, sub.get_flag("json"));
        }
        Some(("view", sub)) => {
            let pattern = sub.get_one::<String>("pattern").unwrap();
            let subject = sub.get_one::<String>("subject").unwrap();
            if let Err(e) = viewer::run_viewer(pattern, subject) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(("patterns", _)) => handle_patterns_command(),
        Some(("cheatsheet", _)) => handle_cheatsheet_command(),
        Some(("challenges", _)) => handle_challenges_command(),
        Some(("check", sub)) => {
            let challenge = sub.get_one::<String>("challenge").unwrap();
            let pattern = sub.get_one::<String>("pattern").unwrap();
            handle_check_command(challenge, pattern);
        }
        _ => unreachable!(),
    }
}

/// Handle the trace command
fn handle_trace_command(pattern: &str, subject: &str, json: bool) {
    let trace = retrace::trace(pattern, subject);

    if json {
        let output = serde_json::to_string_pretty(&trace).unwrap_or_else(|e| {
            eprintln!("Serialization error: {}", e);
            std::process::exit(1);
        });
        println!("{}", output);
    } else {
        print_trace(&trace);
    }
}

/// Print a trace in the plain text format
fn print_trace(trace: &Trace) {
    for step in trace {
        let kind = match step.kind {
            StepKind::Info => "INFO ",
            StepKind::Match => "MATCH",
            StepKind::Fail => "FAIL ",
        };
        let mut positions = String::new();
        if let Some(rp) = step.pattern_index {
            positions.push_str(&format!("  [pattern {}]", rp));
        }
        if let Some(sp) = step.string_index {
            positions.push_str(&format!("  [string {}]", sp));
        }
        println!("{}  {}{}", kind, step.text, positions);
    }
}

/// Handle the patterns command
fn handle_patterns_command() {
    println!("Common patterns:\n");
    for entry in catalog::pattern_library() {
        println!("  {} ({})", entry.name, entry.category);
        println!("    {}", entry.pattern);
    }
}

/// Handle the cheatsheet command
fn handle_cheatsheet_command() {
    for group in catalog::cheat_sheet() {
        println!("{}", group.title);
        for entry in &group.entries {
            println!("  {:8} {}  (e.g. {})", entry.token, entry.description, entry.example);
        }
        println!();
    }
}

/// Handle the challenges command
fn handle_challenges_command() {
    println!("Practice challenges:\n");
    for (index, challenge) in catalog::challenges().iter().enumerate() {
        println!("  {}. {} - {}", index + 1, challenge.name, challenge.description);
    }
    println!("\nTry one with: retrace check <number> <pattern>");
}

/// Handle the check command
fn handle_check_command(challenge: &str, pattern: &str) {
    let all = catalog::challenges();
    let index: usize = challenge.parse().unwrap_or_else(|_| {
        eprintln!("Error: challenge must be a number between 1 and {}", all.len());
        std::process::exit(1);
    });
    if index == 0 || index > all.len() {
        eprintln!("Error: challenge must be a number between 1 and {}", all.len());
        std::process::exit(1);
    }
    let challenge = &all[index - 1];

    let report = challenge.check(pattern).unwrap_or_else(|e| {
        eprintln!("Invalid pattern: {}", e);
        std::process::exit(1);
    });

    println!("{}: {}\n", challenge.name, challenge.description);
    println!("Should match:");
    for case in &report.matched {
        println!("  {} {}", if case.passed { "PASS" } else { "FAIL" }, case.input);
    }
    println!("Should reject:");
    for case in &report.rejected {
        println!("  {} {}", if case.passed { "PASS" } else { "FAIL" }, case.input);
    }
    println!();
    if report.solved() {
        println!("Solved!");
    } else {
        println!("Not solved yet.");
    }
}
