use clap::Args;
use gramforge_core::compute;
use gramforge_core::config::Config;
use gramforge_core::error::{GfResult, GramForgeError};
use gramforge_core::export::export_csv;
use gramforge_core::view::TableView;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: Config,

    /// File or directory to analyze; `-` reads stdin
    pub input: String,

    /// Destination CSV file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, config: &Config) -> GfResult<()> {
    let mut corpora = super::load_inputs(std::slice::from_ref(&args.input))?;
    if corpora.len() != 1 {
        return Err(GramForgeError::Validation(format!(
            "Export needs exactly one corpus file, '{}' expands to {}",
            args.input,
            corpora.len()
        )));
    }
    let corpus = corpora.remove(0);

    let kind = config.view.table;
    let report = compute(&corpus.text, &config.filters);
    let total = report.totals.get(kind);
    let view = TableView::build(
        report.table(kind),
        &config.view.query,
        config.view.limit,
        config.filters.case_sensitive,
    )?;

    match &args.output {
        Some(path) => {
            export_csv(BufWriter::new(File::create(path)?), &view.entries, kind, total)?;
            info!(
                "💾 Exported {} {} rows to {:?}",
                view.entries.len(),
                kind,
                path
            );
        }
        None => export_csv(io::stdout().lock(), &view.entries, kind, total)?,
    }

    Ok(())
}
