use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::Parser;
use colored::Colorize;

use crate::commands::{PruneOptions, RunMode};
use crate::core::MatchMode;
use crate::sink::SinkKind;

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "rawprune",
	author,
	version,
	about = "Remove camera RAW files that have no matching JPEG",
	styles = styles(),
	after_help = format!(
		"{title}
  {bin} {preview}   {preview_desc}
  {bin} {delete}   {delete_desc}
  {bin} {trash}   {trash_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "rawprune".bright_blue(),
		preview = "--jpg './jpg/*.jpg' --raw './raw/*.rw2'",
		preview_desc = "Preview orphaned RAW files".dimmed(),
		delete = "--jpg './*.jpg' --raw './*.cr2' --delete -y",
		delete_desc = "Delete without asking".dimmed(),
		trash = "--jpg './*.JPG' --raw './*.NEF' --delete --sink trash",
		trash_desc = "Move to trash instead".dimmed(),
	),
)]
pub struct Cli {
	/// JPEG file pattern, e.g. ./photos/*.jpg (repeatable)
	#[arg(long = "jpg", visible_alias = "jpg-dir", value_name = "PATTERN", required = true)]
	pub jpg: Vec<String>,

	/// RAW file pattern, e.g. ./raw/*.cr2 (repeatable)
	#[arg(long = "raw", visible_alias = "raw-dir", value_name = "PATTERN", required = true)]
	pub raw: Vec<String>,

	/// Actually remove files (default is preview only)
	#[arg(long = "delete")]
	pub delete: bool,

	/// Skip the confirmation prompt
	#[arg(short = 'y', long = "yes", visible_alias = "auto-confirm")]
	pub yes: bool,

	/// Removal backend (default: $RAWPRUNE_SINK or delete)
	#[arg(long = "sink", value_enum)]
	pub sink: Option<SinkKind>,

	/// Match basenames case-insensitively
	#[arg(short = 'i', long = "ignore-case")]
	pub ignore_case: bool,

	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose")]
	pub verbose: bool,
}

impl Cli {
	pub fn prune_options(&self, default_sink: SinkKind) -> PruneOptions {
		PruneOptions {
			jpg_patterns: self.jpg.clone(),
			raw_patterns: self.raw.clone(),
			mode: if self.delete { RunMode::Remove } else { RunMode::Preview },
			sink: self.sink.unwrap_or(default_sink),
			match_mode: if self.ignore_case { MatchMode::IgnoreCase } else { MatchMode::Exact },
			auto_confirm: self.yes,
		}
	}
}
