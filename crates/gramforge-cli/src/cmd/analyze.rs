use crate::reports;
use clap::{Args, ValueEnum};
use gramforge_core::compute;
use gramforge_core::config::Config;
use gramforge_core::corpus::Corpus;
use gramforge_core::error::GfResult;
use gramforge_core::report::NgramReport;
use gramforge_core::table::TableKind;
use gramforge_core::util::short_fingerprint;
use gramforge_core::view::{filter_report, TableView};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Files or directories to analyze; `-` (or nothing) reads stdin
    pub inputs: Vec<String>,

    /// Show all five tables instead of only the selected one
    #[arg(long, default_value_t = false)]
    pub all: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    corpus: &'a Corpus,
    report: NgramReport,
}

pub fn run(args: AnalyzeArgs, config: &Config) -> GfResult<()> {
    let corpora = super::load_inputs(&args.inputs)?;
    let start = Instant::now();

    let results: Vec<(Corpus, NgramReport)> = corpora
        .into_par_iter()
        .map(|corpus| {
            let report = compute(&corpus.text, &config.filters);
            (corpus, report)
        })
        .collect();

    info!(
        "🔎 Analyzed {} corpus file(s) in {:.2?}",
        results.len(),
        start.elapsed()
    );

    for (corpus, report) in &results {
        match args.format {
            OutputFormat::Table => {
                println!(
                    "\n📄 {} ({} chars, sha256 {})",
                    corpus.name,
                    corpus.char_count(),
                    short_fingerprint(&corpus.fingerprint)
                );
                let kinds: Vec<TableKind> = if args.all {
                    TableKind::all().collect()
                } else {
                    vec![config.view.table]
                };
                for kind in kinds {
                    let view = TableView::build(
                        report.table(kind),
                        &config.view.query,
                        config.view.limit,
                        config.filters.case_sensitive,
                    )?;
                    reports::print_frequency_table(kind, &view, report.totals.get(kind));
                }
            }
            OutputFormat::Json => {
                let output = JsonOutput {
                    corpus,
                    report: filter_report(report, &config.view, &config.filters)?,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
    }

    Ok(())
}
