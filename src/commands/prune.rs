//! Prune command - remove RAW files that have no matching JPEG

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::format_mb;
use crate::core::{MatchMode, Pairing, Plan, PlanEntry};
use crate::scan;
use crate::sink::{Sink, SinkError, SinkKind};
use crate::ui;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Preview,
    Remove,
}

#[derive(Debug, Clone)]
pub struct PruneOptions {
    pub jpg_patterns: Vec<String>,
    pub raw_patterns: Vec<String>,
    pub mode: RunMode,
    pub sink: SinkKind,
    pub match_mode: MatchMode,
    pub auto_confirm: bool,
}

/// How a prune run ended
#[derive(Debug)]
pub enum Report {
    NothingToRemove,
    Previewed(Plan),
    Cancelled(Plan),
    Executed(Outcome),
}

#[derive(Debug, Default)]
pub struct Outcome {
    pub removed: Vec<PlanEntry>,
    pub failed: Vec<(PathBuf, SinkError)>,
}

impl Outcome {
    pub fn reclaimed(&self) -> u64 {
        self.removed.iter().map(|e| e.size).sum()
    }
}

pub fn run(opts: &PruneOptions) -> Result<Report> {
    let sink = opts.sink.build();
    let stdin = io::stdin();
    prune(opts, sink.as_ref(), stdin.lock(), io::stdout())
}

/// Full workflow against an explicit sink and prompt streams.
pub fn prune(
    opts: &PruneOptions,
    sink: &dyn Sink,
    input: impl BufRead,
    output: impl Write,
) -> Result<Report> {
    ui::info(&format!("JPEG patterns: {}", opts.jpg_patterns.join(", ")));
    ui::info(&format!("RAW patterns:  {}", opts.raw_patterns.join(", ")));
    ui::info(&format!(
        "Mode: {}",
        match opts.mode {
            RunMode::Preview => "preview",
            RunMode::Remove => "remove",
        }
    ));

    let jpg_files = scan::expand(&opts.jpg_patterns).context("Failed to expand JPEG patterns")?;
    if jpg_files.is_empty() {
        bail!("No JPEG files match: {}", opts.jpg_patterns.join(", "));
    }

    let raw_files = scan::expand(&opts.raw_patterns).context("Failed to expand RAW patterns")?;
    if raw_files.is_empty() {
        bail!("No RAW files match: {}", opts.raw_patterns.join(", "));
    }

    let pairing = Pairing::new(&jpg_files, &raw_files, opts.match_mode);
    ui::info(&format!("Found {} JPEG files", pairing.jpg_count));
    ui::info(&format!(
        "Found {} RAW files, {} without a matching JPEG",
        pairing.raw_count,
        pairing.orphans.len()
    ));
    ui::debug(&format!("{} RAW files paired", pairing.matched()));

    if pairing.orphans.is_empty() {
        ui::success("Nothing to remove");
        return Ok(Report::NothingToRemove);
    }

    let plan = Plan::build(pairing.orphans);
    preview(&plan, sink);

    if opts.mode == RunMode::Preview {
        ui::info("Preview only. Pass --delete to remove these files");
        return Ok(Report::Previewed(plan));
    }

    if !opts.auto_confirm {
        let question = format!("Remove these {} files ({})?", plan.len(), sink.name());
        if !ui::confirm(&question, input, output).context("Failed to read confirmation")? {
            ui::info("Cancelled");
            return Ok(Report::Cancelled(plan));
        }
    }

    let outcome = execute(plan, sink);
    summarize(&outcome, sink);

    Ok(Report::Executed(outcome))
}

fn preview(plan: &Plan, sink: &dyn Sink) {
    ui::header(&format!("RAW files to be {}:", sink.name()));
    ui::separator();
    for (i, entry) in plan.entries.iter().enumerate() {
        ui::preview_line(i + 1, &entry.path, &format_mb(entry.size), entry.size_known);
    }
    ui::separator();
    ui::info(&format!("Total: {} files, {}", plan.len(), format_mb(plan.total_size())));
}

/// Pushes every plan entry through the sink. A failure never stops the rest.
pub fn execute(plan: Plan, sink: &dyn Sink) -> Outcome {
    let mut outcome = Outcome::default();

    println!();
    for entry in plan.entries {
        match sink.remove(&entry.path) {
            Ok(()) => {
                ui::success(&format!("{}: {}", capitalize(sink.name()), entry.path.display()));
                outcome.removed.push(entry);
            }
            Err(e) => {
                ui::error(&format!("Failed: {} - {}", entry.path.display(), e));
                outcome.failed.push((entry.path, e));
            }
        }
    }

    outcome
}

fn summarize(outcome: &Outcome, sink: &dyn Sink) {
    println!();
    ui::success(&format!(
        "Done: {} {}, {} failed, {} reclaimed",
        outcome.removed.len(),
        sink.name(),
        outcome.failed.len(),
        format_mb(outcome.reclaimed())
    ));
    if !outcome.failed.is_empty() {
        ui::warn(&format!("{} files could not be removed", outcome.failed.len()));
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
