//! rawprune - remove camera RAW files that have no matching JPEG
//!
//! Pairs RAW files with developed JPEGs by basename, previews the RAW files
//! left without a partner, and deletes or trashes them on request.

use clap::Parser;
use colored::Colorize;

use rawprune::cli::Cli;
use rawprune::commands::prune;
use rawprune::config;
use rawprune::ui::{self, Log};

fn main() {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);
	print_header();

	let opts = cli.prune_options(config::default_sink());

	if let Err(e) = prune::run(&opts) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── rawprune v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
