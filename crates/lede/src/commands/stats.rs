//! Stats command: character, word and sentence counts.

use camino::Utf8PathBuf;
use clap::Args;
use lede_core::TextStats;
use tracing::{debug, instrument};

use super::summarize::print_stats;
use super::{input_label, read_document};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// File to measure (reads stdin when omitted or `-`).
    pub file: Option<Utf8PathBuf>,
}

/// Print statistics for a file or stdin without summarizing it.
#[instrument(name = "cmd_stats", skip_all, fields(file = input_label(args.file.as_ref())))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(input = input_label(args.file.as_ref()), "executing stats command");

    let content = read_document(args.file.as_deref(), max_input_bytes)?;
    let stats = TextStats::of(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(input_label(args.file.as_ref()), &stats);
    }

    Ok(())
}
