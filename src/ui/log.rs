//! Status lines for the prune workflow

use colored::*;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::SEPARATOR_WIDTH;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Info,
	Success,
	Warning,
	Error,
	Debug,
}

impl Level {
	fn icon(self) -> ColoredString {
		match self {
			Level::Info => "ℹ".bright_blue().bold(),
			Level::Success => "✓".bright_green().bold(),
			Level::Warning => "⚠".bright_yellow().bold(),
			Level::Error => "✗".bright_red().bold(),
			Level::Debug => "⚙".bright_black().bold(),
		}
	}

	/// Debug lines only show with --verbose
	fn enabled(self) -> bool {
		self != Level::Debug || Log::is_verbose()
	}
}

pub fn log(level: Level, msg: &str) {
	if !level.enabled() {
		return;
	}
	let text = match level {
		Level::Debug => msg.dimmed(),
		Level::Error => msg.bright_red(),
		_ => msg.normal(),
	};
	println!("{} {}", level.icon(), text);
}

pub fn info(msg: &str) {
	log(Level::Info, msg);
}

pub fn success(msg: &str) {
	log(Level::Success, msg);
}

pub fn warn(msg: &str) {
	log(Level::Warning, msg);
}

pub fn error(msg: &str) {
	log(Level::Error, msg);
}

pub fn debug(msg: &str) {
	log(Level::Debug, msg);
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

pub fn separator() {
	println!("{}", "─".repeat(SEPARATOR_WIDTH).dimmed());
}

/// One numbered line of the removal preview
pub fn preview_line(index: usize, path: &Path, size: &str, size_known: bool) {
	let number = format!("{:3}.", index).bright_blue();
	let size = if size_known {
		format!("({})", size).dimmed()
	} else {
		"(size unknown)".yellow()
	};
	println!("{} {} {}", number, path.display(), size);
}
