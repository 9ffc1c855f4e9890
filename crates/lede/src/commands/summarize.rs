//! Summarize command: pick the most representative sentences of a document.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use lede_core::{Summarizer, SummaryReport, TextStats};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::{input_label, read_document};

/// Arguments for the `summarize` subcommand.
#[derive(Args, Debug, Default)]
pub struct SummarizeArgs {
    /// File to summarize (reads stdin when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Number of sentences in the summary (1-20).
    #[arg(short = 'n', long, value_name = "N")]
    pub sentences: Option<usize>,

    /// Show each selected sentence with its position and score.
    #[arg(long)]
    pub show_scores: bool,
}

/// Summarize a file or stdin.
#[instrument(name = "cmd_summarize", skip_all, fields(file = input_label(args.file.as_ref())))]
pub fn cmd_summarize(
    args: SummarizeArgs,
    global_json: bool,
    summarizer: &Summarizer,
    config_length: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let label = input_label(args.file.as_ref());
    let length = args.sentences.unwrap_or(config_length);
    debug!(input = label, length, "executing summarize command");

    let content = read_document(args.file.as_deref(), max_input_bytes)?;
    let report = summarizer
        .summarize(&content, length)
        .with_context(|| format!("failed to summarize {label}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.show_scores);
    }

    Ok(())
}

fn print_report(report: &SummaryReport, show_scores: bool) {
    if show_scores {
        for sentence in &report.sentences {
            println!(
                "{} {}",
                format!("[{} {:.3}]", sentence.ordinal, sentence.score).dimmed(),
                sentence.text
            );
        }
    } else {
        println!("{}", report.summary);
    }

    println!();
    print_stats("Input", &report.input_stats);
    print_stats("Summary", &report.summary_stats);
    println!(
        "{}: {:.2}x",
        "Compression".dimmed(),
        report.compression_ratio
    );
    if report.sentences.len() < report.requested_length {
        println!(
            "{}",
            format!(
                "only {} of {} requested sentences qualified",
                report.sentences.len(),
                report.requested_length
            )
            .yellow()
        );
    }
}

/// Print one statistics line.
pub(crate) fn print_stats(label: &str, stats: &TextStats) {
    println!(
        "{}: {} chars, {} words, {} sentences",
        label.dimmed(),
        stats.chars,
        stats.words,
        stats.sentences
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let args = SummarizeArgs {
            file: Some(Utf8PathBuf::from("/nonexistent/article.txt")),
            ..SummarizeArgs::default()
        };
        let err = cmd_summarize(args, false, &Summarizer::english(), 5, None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn short_text_fails_with_context() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("short.txt")).unwrap();
        std::fs::write(&path, "Too short. Far too short.").unwrap();

        let args = SummarizeArgs {
            file: Some(path),
            ..SummarizeArgs::default()
        };
        let err = cmd_summarize(args, true, &Summarizer::english(), 5, None).unwrap_err();
        assert!(err.to_string().contains("failed to summarize"));
        assert!(format!("{err:#}").contains("30 words"));
    }
}
