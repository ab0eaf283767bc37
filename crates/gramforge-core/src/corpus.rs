use crate::error::{GfResult, GramForgeError};
use crate::util::fingerprint;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Corpus text loaded into memory, checked to be UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Corpus {
    pub name: String,
    #[serde(skip)]
    pub text: String,
    /// SHA-256 of the UTF-8 bytes.
    pub fingerprint: String,
}

impl Corpus {
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            name: name.into(),
            fingerprint: fingerprint(text.as_bytes()),
            text,
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> GfResult<Self> {
        let name = name.into();
        let text = String::from_utf8(bytes).map_err(|e| {
            GramForgeError::Validation(format!(
                "Corpus '{}' is not valid UTF-8 (first bad byte at offset {})",
                name,
                e.utf8_error().valid_up_to()
            ))
        })?;
        Ok(Self::from_text(name, text))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> GfResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        debug!("Read {} bytes from {:?}", bytes.len(), path);
        Self::from_bytes(path.display().to_string(), bytes)
    }

    pub fn from_reader<R: Read>(name: impl Into<String>, mut reader: R) -> GfResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(name, bytes)
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Expands inputs into a list of files. Directories are walked recursively and
/// their files sorted by path.
pub fn collect_paths<P: AsRef<Path>>(inputs: &[P]) -> GfResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = input.as_ref();
        if !path.exists() {
            return Err(GramForgeError::Validation(format!(
                "Corpus not found: {:?}",
                path
            )));
        }

        if path.is_dir() {
            let mut found: Vec<PathBuf> = Vec::new();
            for entry in WalkDir::new(path) {
                let entry = entry.map_err(|e| GramForgeError::Io(e.into()))?;
                if entry.file_type().is_file() {
                    found.push(entry.into_path());
                }
            }
            found.sort();
            files.extend(found);
        } else {
            files.push(path.to_path_buf());
        }
    }

    if files.is_empty() {
        return Err(GramForgeError::Validation(
            "No corpus files found in the given inputs".to_string(),
        ));
    }

    info!("📚 Discovered {} corpus file(s)", files.len());
    Ok(files)
}
