use std::{io, path::Path};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::AppResult,
    models::{Dataset, OutfitRow, OUTFIT_COLUMNS},
};

/// First quoted http(s) URL inside a spreadsheet `=HYPERLINK(...)` formula
static HYPERLINK_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""(https?://[^"]+)""#).expect("hyperlink pattern is valid"));

const HYPERLINK_PREFIX: &str = "=HYPERLINK";

/// Which columns survive loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnFilter {
    /// Only the known outfit columns
    #[default]
    Outfit,
    /// Every column in the file
    All,
}

impl ColumnFilter {
    fn keeps(&self, column: &str) -> bool {
        match self {
            ColumnFilter::Outfit => OUTFIT_COLUMNS.contains(&column),
            ColumnFilter::All => true,
        }
    }
}

/// Loads the outfit dataset, falling back to an empty one on any failure
///
/// The service must come up even without its data file, so errors are
/// logged here and never propagated.
pub fn load_dataset(path: impl AsRef<Path>, columns: ColumnFilter) -> Dataset {
    let path = path.as_ref();

    match read_dataset(path, columns) {
        Ok(dataset) => {
            tracing::info!(
                path = %path.display(),
                rows = dataset.len(),
                "Loaded outfit dataset"
            );
            dataset
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "Failed to load outfit dataset, continuing with no outfits"
            );
            Dataset::default()
        }
    }
}

/// Reads a comma-delimited outfit file with a header row
pub fn read_dataset(path: impl AsRef<Path>, columns: ColumnFilter) -> AppResult<Dataset> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;
    parse_rows(reader, columns)
}

/// Same as [`read_dataset`] but from any byte source
pub fn dataset_from_reader<R: io::Read>(source: R, columns: ColumnFilter) -> AppResult<Dataset> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);
    parse_rows(reader, columns)
}

fn parse_rows<R: io::Read>(mut reader: csv::Reader<R>, columns: ColumnFilter) -> AppResult<Dataset> {
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let mut row = OutfitRow::new();

        for (column, cell) in headers.iter().zip(record.iter()) {
            let value = cell.trim();
            if value.is_empty() || !columns.keeps(column) {
                continue;
            }
            row.insert(column.clone(), unwrap_hyperlink(value).to_string());
        }

        rows.push(row);
    }

    Ok(Dataset::new(rows))
}

/// Turns `=HYPERLINK("https://x","label")` into `https://x`
///
/// Values that are not hyperlink formulas, or formulas without a quoted
/// http(s) URL, come back unchanged.
pub fn unwrap_hyperlink(value: &str) -> &str {
    // Spreadsheet exports do not agree on the function's case
    let is_formula = value
        .get(..HYPERLINK_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(HYPERLINK_PREFIX));
    if !is_formula {
        return value;
    }

    HYPERLINK_URL
        .captures(value)
        .and_then(|captures| captures.get(1))
        .map(|url| url.as_str())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Event,Season,Topwear,Bottomwear,Footwear,Accessories,Gender,Notes
Office,Summer,\"=HYPERLINK(\"\"https://shop.example/shirt\"\",\"\"Linen shirt\"\")\",Chinos,Loafers,,Male,internal
Party ,Winter, Sequin top ,Skirt,Boots,Clutch,Female,
Trip,Rainy,Raincoat,Jeans,Sneakers,Umbrella,Unisex,
";

    #[test]
    fn test_row_count_matches_file() {
        let dataset = dataset_from_reader(SAMPLE.as_bytes(), ColumnFilter::Outfit).unwrap();
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_keys_lowercased_and_values_trimmed() {
        let dataset = dataset_from_reader(SAMPLE.as_bytes(), ColumnFilter::Outfit).unwrap();
        let party = &dataset.rows()[1];

        assert_eq!(party.event(), "Party");
        assert_eq!(party.get("topwear"), "Sequin top");
        assert_eq!(party.get("accessories"), "Clutch");
    }

    #[test]
    fn test_hyperlink_unwrapped_on_load() {
        let dataset = dataset_from_reader(SAMPLE.as_bytes(), ColumnFilter::Outfit).unwrap();
        assert_eq!(dataset.rows()[0].get("topwear"), "https://shop.example/shirt");
    }

    #[test]
    fn test_empty_cells_and_unknown_columns_dropped() {
        let dataset = dataset_from_reader(SAMPLE.as_bytes(), ColumnFilter::Outfit).unwrap();
        let office = &dataset.rows()[0];

        assert_eq!(office.get("notes"), "");
        assert_eq!(office.get("accessories"), "");
        assert_eq!(office.len(), 6);
    }

    #[test]
    fn test_all_columns_filter_keeps_extras() {
        let dataset = dataset_from_reader(SAMPLE.as_bytes(), ColumnFilter::All).unwrap();
        assert_eq!(dataset.rows()[0].get("notes"), "internal");
    }

    #[test]
    fn test_ragged_rows_tolerated() {
        let csv = "event,season,topwear\noffice,summer\nparty,winter,Dress\n";
        let dataset = dataset_from_reader(csv.as_bytes(), ColumnFilter::Outfit).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[0].get("topwear"), "");
        assert_eq!(dataset.rows()[1].get("topwear"), "Dress");
    }

    #[test]
    fn test_blank_row_kept_as_empty_record() {
        let csv = "event,season\n,\noffice,summer\n";
        let dataset = dataset_from_reader(csv.as_bytes(), ColumnFilter::Outfit).unwrap();

        assert_eq!(dataset.len(), 2);
        assert!(dataset.rows()[0].is_empty());
        assert_eq!(dataset.rows()[1].event(), "office");
    }

    #[test]
    fn test_unwrap_hyperlink() {
        assert_eq!(
            unwrap_hyperlink(r#"=HYPERLINK("https://x","label")"#),
            "https://x"
        );
        assert_eq!(
            unwrap_hyperlink(r#"=hyperlink("http://example.com/a?b=1")"#),
            "http://example.com/a?b=1"
        );
        assert_eq!(unwrap_hyperlink(r#"=HYPERLINK("label only")"#), r#"=HYPERLINK("label only")"#);
        assert_eq!(unwrap_hyperlink("Blazer"), "Blazer");
        assert_eq!(unwrap_hyperlink(r#"see "https://x""#), r#"see "https://x""#);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = load_dataset(file.path(), ColumnFilter::Outfit);
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_missing_file_yields_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = load_dataset(dir.path().join("missing.csv"), ColumnFilter::Outfit);
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error_when_read_directly() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_dataset(dir.path().join("missing.csv"), ColumnFilter::Outfit).is_err());
    }
}
