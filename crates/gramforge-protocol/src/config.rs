use crate::table::TableKind;
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub filters: FilterSettings,
    #[command(flatten)]
    pub view: ViewParams,
}

/// Predicates and normalization applied by the aggregator.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSettings {
    /// Drop sequences containing any whitespace character
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub filter_whitespace: bool,
    /// Drop sequences containing characters that are neither alphanumeric nor whitespace
    #[arg(long, default_value_t = false)]
    pub filter_punctuation: bool,
    /// Keep case distinctions instead of folding keys to lowercase
    #[arg(long, default_value_t = false)]
    pub case_sensitive: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            filter_whitespace: true,
            filter_punctuation: false,
            case_sensitive: false,
        }
    }
}

/// Presentation-side selection: which table, which search, how many rows.
#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewParams {
    #[arg(short = 't', long, value_enum, default_value_t = TableKind::Monograms)]
    pub table: TableKind,
    /// Regex (or literal text, if it is not a valid regex) matched against sequences
    #[arg(short = 'q', long, default_value = "")]
    pub query: String,
    /// Maximum rows to show; 0 means unlimited
    #[arg(short = 'l', long, default_value_t = 0)]
    pub limit: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            table: TableKind::Monograms,
            query: String::new(),
            limit: 0,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        serde_json::from_str(&content).map_err(|e| format!("Failed to parse config JSON: {}", e))
    }

    /// Overwrites fields that were given explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(filters, filter_whitespace);
        update_if_present!(filters, filter_punctuation);
        update_if_present!(filters, case_sensitive);

        update_if_present!(view, table);
        update_if_present!(view, query);
        update_if_present!(view, limit);
    }
}
