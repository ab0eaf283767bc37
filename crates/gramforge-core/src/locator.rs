//! Flat `key=value&...` encoding of the user's filter and view selection.
//!
//! Defaults are left out so a fresh state encodes to an empty string, and keys are
//! always written in the same order so equal states produce equal strings.

use crate::config::{Config, FilterSettings, ViewParams};
use crate::error::{GfResult, GramForgeError};
use crate::table::TableKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const KEY_TABLE: &str = "type";
const KEY_QUERY: &str = "q";
const KEY_LIMIT: &str = "limit";
const KEY_WHITESPACE: &str = "ws";
const KEY_PUNCTUATION: &str = "punct";
const KEY_CASE: &str = "case";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorState {
    pub filters: FilterSettings,
    pub table: TableKind,
    pub query: String,
    /// 0 means unlimited.
    pub limit: usize,
}

impl LocatorState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            filters: config.filters,
            table: config.view.table,
            query: config.view.query.clone(),
            limit: config.view.limit,
        }
    }

    pub fn into_config(self) -> Config {
        Config {
            filters: self.filters,
            view: ViewParams {
                table: self.table,
                query: self.query,
                limit: self.limit,
            },
        }
    }

    pub fn encode(&self) -> String {
        let defaults = Self::default();
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if self.table != defaults.table {
            pairs.push((KEY_TABLE, self.table.to_string()));
        }
        if !self.query.is_empty() {
            pairs.push((KEY_QUERY, percent_encode(&self.query)));
        }
        if self.limit != defaults.limit {
            pairs.push((KEY_LIMIT, self.limit.to_string()));
        }

        let (ours, base) = (&self.filters, &defaults.filters);
        let flags = [
            (KEY_WHITESPACE, ours.filter_whitespace, base.filter_whitespace),
            (KEY_PUNCTUATION, ours.filter_punctuation, base.filter_punctuation),
            (KEY_CASE, ours.case_sensitive, base.case_sensitive),
        ];
        for (key, value, default) in flags {
            if value != default {
                pairs.push((key, if value { "1" } else { "0" }.to_string()));
            }
        }

        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Absent keys keep their defaults; unknown keys are ignored.
    pub fn decode(input: &str) -> GfResult<Self> {
        let input = input.trim();
        let input = input
            .strip_prefix('?')
            .or_else(|| input.strip_prefix('#'))
            .unwrap_or(input);

        let mut state = Self::default();

        for segment in input.split('&').filter(|s| !s.is_empty()) {
            let (key, raw) = segment.split_once('=').unwrap_or((segment, ""));
            let value = percent_decode(raw)?;

            match key {
                KEY_TABLE => {
                    state.table = TableKind::from_str(&value).map_err(|_| {
                        GramForgeError::Locator(format!("Unknown table type '{}'", value))
                    })?;
                }
                KEY_QUERY => state.query = value,
                KEY_LIMIT => {
                    state.limit = value.parse().map_err(|_| {
                        GramForgeError::Locator(format!("Invalid limit '{}'", value))
                    })?;
                }
                KEY_WHITESPACE => state.filters.filter_whitespace = parse_flag(key, &value)?,
                KEY_PUNCTUATION => state.filters.filter_punctuation = parse_flag(key, &value)?,
                KEY_CASE => state.filters.case_sensitive = parse_flag(key, &value)?,
                other => debug!("Locator: ignoring unknown key '{}'", other),
            }
        }

        Ok(state)
    }
}

impl fmt::Display for LocatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for LocatorState {
    type Err = GramForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

fn parse_flag(key: &str, value: &str) -> GfResult<bool> {
    match value {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(GramForgeError::Locator(format!(
            "Invalid value '{}' for '{}' (expected 1/0/true/false)",
            value, key
        ))),
    }
}

/// RFC 3986 unreserved characters pass through; everything else becomes `%XX` per UTF-8 byte.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for &b in value.as_bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(b as char);
        } else {
            out.push('%');
            out.push_str(&hex::encode_upper([b]));
        }
    }
    out
}

fn percent_decode(value: &str) -> GfResult<String> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let decoded = bytes
                    .get(i + 1..i + 3)
                    .and_then(|pair| hex::decode(pair).ok())
                    .ok_or_else(|| {
                        GramForgeError::Locator(format!("Broken percent escape in '{}'", value))
                    })?;
                out.extend(decoded);
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out)
        .map_err(|_| GramForgeError::Locator(format!("Value '{}' is not valid UTF-8", value)))
}
