use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process;

use treesync::logging::init_tracing;
use treesync::progress::{format_banner, ConsoleReporter};
use treesync::sync;
use treesync::SyncConfig;

fn cli() -> Command {
	Command::new("treesync")
		.version(env!("CARGO_PKG_VERSION"))
		.about("One-way directory sync: copies new and newer files from SOURCE to DESTINATION")
		.arg(
			Arg::new("source")
				.value_name("SOURCE")
				.required(true)
				.value_parser(value_parser!(PathBuf))
				.help("Directory to read from"),
		)
		.arg(
			Arg::new("destination")
				.value_name("DESTINATION")
				.required(true)
				.value_parser(value_parser!(PathBuf))
				.help("Directory to write to (created if missing)"),
		)
		.arg(
			Arg::new("dry-run")
				.short('n')
				.long("dry-run")
				.action(ArgAction::SetTrue)
				.help("Show what would be done without writing anything"),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.action(ArgAction::Count)
				.help("Increase log verbosity (RUST_LOG overrides)"),
		)
}

fn main() {
	let matches = cli().get_matches();
	init_tracing(matches.get_count("verbose"));

	// Both arguments are required, clap exits with usage before we get here
	let (Some(source), Some(destination)) =
		(matches.get_one::<PathBuf>("source"), matches.get_one::<PathBuf>("destination"))
	else {
		process::exit(2);
	};

	let mut config = SyncConfig::new(source.clone(), destination.clone());
	config.dry_run = matches.get_flag("dry-run");

	let config = match config.resolve() {
		Ok(c) => c,
		Err(e) => {
			eprintln!("Error: {}", e);
			process::exit(1);
		}
	};

	println!("{}", format_banner(&config));

	let reporter = ConsoleReporter::new(config.dry_run);
	match sync::run(&config, &reporter) {
		Ok(report) => reporter.print_report(&report),
		Err(e) => {
			eprintln!("Error: {}", e);
			process::exit(1);
		}
	}
}


// vim: ts=4
