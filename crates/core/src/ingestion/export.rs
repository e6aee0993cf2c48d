//! CSV export of discovered ticker symbols.

use std::path::Path;

use crate::errors::{Error, Result};
use crate::tickers::Ticker;

/// Writes the discovered symbols to `path` as a single-column CSV.
///
/// The file is rewritten wholesale on every run; partial files from a
/// failed write are overwritten by the next attempt.
pub fn write_codes_csv(path: &Path, tickers: &[Ticker]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| Error::Export(e.to_string()))?;
    writer
        .write_record(["Stock Code"])
        .map_err(|e| Error::Export(e.to_string()))?;
    for ticker in tickers {
        writer
            .write_record([ticker.symbol.as_str()])
            .map_err(|e| Error::Export(e.to_string()))?;
    }
    writer.flush().map_err(|e| Error::Export(e.to_string()))?;
    Ok(tickers.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_header_and_one_row_per_symbol() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("valid_stock_codes.csv");

        let tickers = vec![Ticker::new("2330.TW"), Ticker::new("2317.TW")];
        let written = write_codes_csv(&path, &tickers).unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["Stock Code", "2330.TW", "2317.TW"]);
    }

    #[test]
    fn an_empty_run_still_writes_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("valid_stock_codes.csv");

        write_codes_csv(&path, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), "Stock Code");
    }

    #[test]
    fn an_unwritable_path_surfaces_an_export_error() {
        let result = write_codes_csv(Path::new("/nonexistent-dir/out.csv"), &[]);
        assert!(matches!(result, Err(Error::Export(_))));
    }
}
