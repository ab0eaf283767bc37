pub mod analyze;
pub mod export;
pub mod link;

use gramforge_core::corpus::{collect_paths, Corpus};
use gramforge_core::error::GfResult;
use std::io;

const STDIN_MARKER: &str = "-";

/// Loads every input as its own corpus. No inputs, or `-`, reads stdin.
pub fn load_inputs(inputs: &[String]) -> GfResult<Vec<Corpus>> {
    if inputs.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    let mut corpora = Vec::new();
    let (stdin, paths): (Vec<&String>, Vec<&String>) =
        inputs.iter().partition(|s| s.as_str() == STDIN_MARKER);

    if !stdin.is_empty() {
        corpora.push(read_stdin()?);
    }
    if !paths.is_empty() {
        for path in collect_paths(&paths)? {
            corpora.push(Corpus::from_path(&path)?);
        }
    }
    Ok(corpora)
}

fn read_stdin() -> GfResult<Corpus> {
    Corpus::from_reader("<stdin>", io::stdin().lock())
}
