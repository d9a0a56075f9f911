use super::columns::Columns;
use super::row::Row;
use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Every well-formed row of a deck file.
///
/// A row that fails to parse is logged with its line number and skipped;
/// only an unreadable file or header fails the whole table.
pub fn read<T: Row, R: Read>(reader: R) -> anyhow::Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let ref columns = Columns::try_from(reader.headers().context("read header line")?)?;
    let mut failed = 0;
    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let line = i + 2;
        match result
            .map_err(|e| crate::Error::MalformedRow {
                line,
                reason: e.to_string(),
            })
            .and_then(|ref record| T::parse(columns, record).map_err(|e| e.at(line)))
        {
            Ok(row) => rows.push(row),
            Err(e) => {
                failed += 1;
                log::warn!("skipping deck: {}", e);
            }
        }
    }
    if failed > 0 {
        log::warn!("skipped {} malformed deck rows", failed);
    }
    Ok(rows)
}

pub fn load<T: Row>(path: &Path) -> anyhow::Result<Vec<T>> {
    let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rows = read(file).with_context(|| format!("parse {}", path.display()))?;
    log::info!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
