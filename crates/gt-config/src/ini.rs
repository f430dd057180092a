//! Minimal reader for the bracketed section / `key = value` text format.
//!
//! Only the subset the map format needs is supported:
//!
//! - `[name]` section headers (duplicates are an error);
//! - `key = value` or `key: value` entries, keys folded to lower case;
//! - full-line comments starting with `#` or `;`, and inline comments where
//!   `#`/`;` follows whitespace;
//! - indented lines continue the previous value.

use crate::{ConfigError, ConfigResult};

/// One `[name]` block and its entries, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name:    String,
    /// 1-based line of the header.
    pub line:    usize,
    entries:     Vec<(String, String)>,
}

impl Section {
    /// Value for `key` (case-insensitive).  A repeated key yields the last value.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`get`][Self::get] but a missing key is an error.
    pub fn require(&self, key: &'static str) -> ConfigResult<&str> {
        self.get(key).ok_or_else(|| ConfigError::MissingKey {
            section: self.name.clone(),
            key,
        })
    }
}

fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if (b == b'#' || b == b';') && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return &s[..i];
        }
    }
    s
}

/// Split `text` into sections.
pub fn parse_sections(text: &str) -> ConfigResult<Vec<Section>> {
    let mut sections: Vec<Section> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        // Continuation of the previous value.
        if raw.starts_with([' ', '\t']) {
            if let Some((_, value)) = sections.last_mut().and_then(|s| s.entries.last_mut()) {
                let more = strip_inline_comment(trimmed).trim();
                if !more.is_empty() {
                    value.push(' ');
                    value.push_str(more);
                }
                continue;
            }
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            let Some(name) = rest.strip_suffix(']') else {
                return Err(ConfigError::Syntax {
                    line:    line_no,
                    message: format!("unterminated section header {trimmed:?}"),
                });
            };
            let name = name.trim().to_owned();
            if sections.iter().any(|s| s.name == name) {
                return Err(ConfigError::Syntax {
                    line:    line_no,
                    message: format!("duplicate section [{name}]"),
                });
            }
            sections.push(Section { name, line: line_no, entries: Vec::new() });
            continue;
        }

        let Some(split) = trimmed.find(['=', ':']) else {
            return Err(ConfigError::Syntax {
                line:    line_no,
                message: format!("expected `key = value`, got {trimmed:?}"),
            });
        };
        let key = trimmed[..split].trim().to_ascii_lowercase();
        let value = strip_inline_comment(&trimmed[split + 1..]).trim().to_owned();
        if key.is_empty() {
            return Err(ConfigError::Syntax { line: line_no, message: "empty key".to_owned() });
        }

        let Some(section) = sections.last_mut() else {
            return Err(ConfigError::Syntax {
                line:    line_no,
                message: format!("entry {key:?} appears before any section header"),
            });
        };
        section.entries.push((key, value));
    }

    Ok(sections)
}
