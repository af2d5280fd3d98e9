//! Plain-text barcode tables

use crate::config::TrieConfig;
use crate::model::Sequence;
use crate::trie::BarcodeTrie;
use crate::{Error, Result};
use std::io::BufRead;
use std::path::Path;

/// One record of a barcode table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRecord {
    /// 1-based line number in the source
    pub line: usize,
    pub sequence: Sequence,
    pub label: String,
}

impl TableRecord {
    /// Parse a single non-comment line
    fn parse(line_no: usize, line: &str) -> Result<Self> {
        let mut fields = line.split_whitespace();
        let raw_seq = fields.next().ok_or_else(|| Error::InvalidRecord {
            line: line_no,
            reason: "missing sequence".into(),
        })?;
        let label = fields.next().ok_or_else(|| Error::InvalidRecord {
            line: line_no,
            reason: "missing label".into(),
        })?;
        if fields.next().is_some() {
            return Err(Error::InvalidRecord {
                line: line_no,
                reason: "expected two fields".into(),
            });
        }

        let sequence = raw_seq.parse::<Sequence>().map_err(|e| Error::InvalidRecord {
            line: line_no,
            reason: format!("{}", e),
        })?;

        Ok(TableRecord {
            line: line_no,
            sequence,
            label: label.to_string(),
        })
    }
}

/// Parse every record of a table, skipping blank lines and `#` comments
pub fn parse_table(reader: impl BufRead) -> Result<Vec<TableRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        records.push(TableRecord::parse(idx + 1, trimmed)?);
    }
    Ok(records)
}

/// Load a table file into a new trie
///
/// A sequence listed twice keeps the later label.
pub fn load_table(path: impl AsRef<Path>, config: TrieConfig) -> Result<BarcodeTrie<String>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let records = parse_table(std::io::BufReader::new(file))?;

    let mut trie = BarcodeTrie::with_config(config);
    for record in records {
        let previous = trie.insert(&record.sequence, record.label).map_err(|e| match e {
            Error::KeyTooLong { len, max } => Error::InvalidRecord {
                line: record.line,
                reason: format!("sequence has {} symbols, maximum is {}", len, max),
            },
            other => other,
        })?;
        if let Some(previous) = previous {
            log::warn!(
                "{}:{}: duplicate sequence {} replaces label {}",
                path.display(),
                record.line,
                record.sequence,
                previous
            );
        }
    }

    log::info!("Loaded {} barcodes from {}", trie.len(), path.display());
    Ok(trie)
}
